//! Folio Scanner
//!
//! Discovers audiobook chapters under a directory tree and assembles them into
//! a [`Library`](folio_core::Library).
//!
//! This crate provides:
//! - Directory walking with filter and error callbacks
//! - Tag reading via lofty
//! - Composable chapter ordering (disc/track numbering, file names)
//! - A multi-threaded scan pipeline (configurable)
//!
//! # Architecture
//!
//! - `walk`: recursive traversal
//! - `audio_file`: supported file detection
//! - `reader`: lofty-backed `MetadataReader`
//! - `extractor`: file to `RawChapter`
//! - `sort`: ordering strategies and their composition
//! - `staging`: grouping chapters into books
//! - `scanner`: the concurrent pipeline tying it together
//!
//! # Example
//!
//! ```rust,no_run
//! use folio_scanner::sort::default_sorter;
//! use folio_scanner::scan_to_new_library;
//! use std::path::Path;
//!
//! let (library, errors) = scan_to_new_library(Path::new("/audiobooks"), &default_sorter());
//! for error in &errors {
//!     eprintln!("{}", error);
//! }
//! println!("{} books", library.len());
//! ```

mod error;

pub mod audio_file;
pub mod config;
pub mod extractor;
pub mod reader;
pub mod scanner;
pub mod sort;
pub mod staging;
pub mod walk;

pub use config::ScanConfig;
pub use error::{ScanError, SortError, WalkError};
pub use reader::LoftyMetadataReader;
pub use scanner::{scan, scan_to_new_library, ScanStats, Scanner};
pub use sort::{Compose, SortByDiscNumber, SortByFilename, SortResult, Sorter};
pub use staging::{StagingBook, StagingLibrary};
pub use walk::Walker;

/// Re-export commonly used types
pub type Result<T> = std::result::Result<T, ScanError>;
