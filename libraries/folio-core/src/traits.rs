/// Core traits for Folio
use crate::error::Result;
use crate::types::{DiscNumber, TagMetadata, TrackNumber};
use std::path::Path;

/// Items that know which disc they belong to
pub trait HasDiscNumber {
    /// Disc number; any signed value is valid, including zero and negatives
    fn disc_number(&self) -> DiscNumber;
}

/// Items that know their position on a disc
pub trait HasTrackNumber {
    /// Track number; any signed value is valid, including zero and negatives
    fn track_number(&self) -> TrackNumber;
}

/// Items backed by a file on disk
pub trait HasFilePath {
    fn file_path(&self) -> &Path;
}

/// Items that can be placed by disc and track
pub trait HasDiscAndTrackNumber: HasDiscNumber + HasTrackNumber {}

impl<T: HasDiscNumber + HasTrackNumber + ?Sized> HasDiscAndTrackNumber for T {}

/// Metadata reader trait
///
/// Implementers decode the tags of a single audio file. The scanner calls
/// `read` from several worker threads at once, so implementations must be
/// shareable across threads.
pub trait MetadataReader: Send + Sync {
    /// Read tag metadata from an audio file
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened or its container cannot
    /// be parsed
    fn read(&self, path: &Path) -> Result<TagMetadata>;
}

impl<R: MetadataReader + ?Sized> MetadataReader for &R {
    fn read(&self, path: &Path) -> Result<TagMetadata> {
        (**self).read(path)
    }
}

impl<R: MetadataReader + ?Sized> MetadataReader for Box<R> {
    fn read(&self, path: &Path) -> Result<TagMetadata> {
        (**self).read(path)
    }
}
