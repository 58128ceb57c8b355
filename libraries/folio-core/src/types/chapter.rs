//! Chapter records produced by metadata extraction

use crate::traits::{HasDiscNumber, HasFilePath, HasTrackNumber};
use crate::types::TagMetadata;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub type DiscNumber = i64;
pub type TrackNumber = i64;
pub type BookTitle = String;

/// One audio file's metadata before its book has been ordered
///
/// Disc and track numbers are kept only until the book is sorted; after that
/// a chapter is identified by its index within the book.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RawChapter {
    title: String,
    book_title: BookTitle,
    book_author: String,
    disc_number: DiscNumber,
    track_number: TrackNumber,
    file_path: PathBuf,
}

impl RawChapter {
    /// Create a chapter record
    pub fn new(
        title: impl Into<String>,
        book_title: impl Into<BookTitle>,
        book_author: impl Into<String>,
        disc_number: DiscNumber,
        track_number: TrackNumber,
        file_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            title: title.into(),
            book_title: book_title.into(),
            book_author: book_author.into(),
            disc_number,
            track_number,
            file_path: file_path.into(),
        }
    }

    /// Build a chapter from decoded tags
    ///
    /// Missing text fields become empty strings and missing disc/track numbers
    /// become 0. Many untagged files in one book therefore collide on (0, 0).
    pub fn from_metadata(metadata: TagMetadata, file_path: impl Into<PathBuf>) -> Self {
        Self {
            title: metadata.title.unwrap_or_default(),
            book_title: metadata.album.unwrap_or_default(),
            book_author: metadata.artist.unwrap_or_default(),
            disc_number: metadata.disc_number.unwrap_or(0),
            track_number: metadata.track_number.unwrap_or(0),
            file_path: file_path.into(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn book_title(&self) -> &str {
        &self.book_title
    }

    pub fn book_author(&self) -> &str {
        &self.book_author
    }
}

impl HasDiscNumber for RawChapter {
    fn disc_number(&self) -> DiscNumber {
        self.disc_number
    }
}

impl HasTrackNumber for RawChapter {
    fn track_number(&self) -> TrackNumber {
        self.track_number
    }
}

impl HasFilePath for RawChapter {
    fn file_path(&self) -> &Path {
        &self.file_path
    }
}
