//! Tag metadata returned by a `MetadataReader`

use serde::{Deserialize, Serialize};

/// The subset of an audio file's tags the scanner cares about
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagMetadata {
    /// Track title
    pub title: Option<String>,

    /// Album title, used as the book title
    pub album: Option<String>,

    /// Artist name, used as the book author
    pub artist: Option<String>,

    /// Disc number
    pub disc_number: Option<i64>,

    /// Track number
    pub track_number: Option<i64>,
}

impl TagMetadata {
    /// Create empty metadata
    pub fn new() -> Self {
        Self::default()
    }
}
