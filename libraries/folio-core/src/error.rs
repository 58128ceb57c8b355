/// Core error types for Folio
use thiserror::Error;

/// Result type alias using `MetadataError`
pub type Result<T> = std::result::Result<T, MetadataError>;

/// Errors a `MetadataReader` can report for a single file
#[derive(Error, Debug)]
pub enum MetadataError {
    /// File not found
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// The container or its tags could not be decoded
    #[error("Tag decoding error: {0}")]
    Decode(String),

    /// I/O error while reading the file
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl MetadataError {
    /// Create a decode error
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }
}
