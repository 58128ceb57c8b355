//! Folio Core
//!
//! Domain types, capability traits, and error handling shared by the Folio
//! audiobook scanner.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `RawChapter`, `AudioBook`, `AudioBookChapter`, `Library`
//! - **Capability Traits**: `HasDiscNumber`, `HasTrackNumber`, `HasFilePath`
//! - **Boundary Traits**: `MetadataReader`, implemented by tag decoders
//! - **Error Handling**: `MetadataError` and `Result`
//!
//! # Example
//!
//! ```rust
//! use folio_core::{AudioBook, AudioBookChapter, Library};
//! use std::path::PathBuf;
//!
//! let mut library = Library::new();
//! library.add(AudioBook {
//!     title: "Frankenstein".to_string(),
//!     author: "Mary W. Shelley".to_string(),
//!     description: AudioBook::DEFAULT_DESCRIPTION.to_string(),
//!     chapters: vec![AudioBookChapter {
//!         title: "00 - Letters".to_string(),
//!         index: 0,
//!         path: PathBuf::from("/books/frankenstein/00.mp3"),
//!     }],
//! });
//!
//! assert_eq!(library.len(), 1);
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub mod traits;
pub mod types;

pub use error::{MetadataError, Result};
pub use traits::{
    HasDiscAndTrackNumber, HasDiscNumber, HasFilePath, HasTrackNumber, MetadataReader,
};
pub use types::{
    AudioBook, AudioBookChapter, BookTitle, DiscNumber, Library, RawChapter, TagMetadata,
    TrackNumber,
};
