//! Error types for the scanner

use folio_core::{DiscNumber, MetadataError, TrackNumber};
use std::path::PathBuf;
use thiserror::Error;

/// A non-fatal problem met while scanning
///
/// Scans collect these instead of stopping; one bad file or book never keeps
/// the others out of the library.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Failed to enumerate {}: {message}", path.display())]
    Traversal { path: PathBuf, message: String },

    #[error("Failed to scan {}: {source}", path.display())]
    Extraction {
        path: PathBuf,
        #[source]
        source: MetadataError,
    },

    #[error("Failed to sort chapters of '{book}': {source}")]
    Sort {
        book: String,
        #[source]
        source: SortError,
    },

    #[error("Book '{book}' has no chapters")]
    EmptyBook { book: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Scan worker panicked: {0}")]
    WorkerPanicked(String),
}

/// Why a sorting strategy could not order a set of chapters
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SortError {
    #[error("cannot sort chapters: {0}")]
    CannotSort(String),

    /// Two items claim the same disc and track
    #[error("duplicate disc {disc} track {track}")]
    DuplicateKey {
        disc: DiscNumber,
        track: TrackNumber,
    },
}

/// Error returned by `Walker::walk` when an error handler asks to stop
#[derive(Debug, Error)]
pub enum WalkError {
    #[error("Walk aborted at {}: {source}", path.display())]
    Aborted {
        path: PathBuf,
        #[source]
        source: ScanError,
    },
}
