//! Maps a single audio file to a `RawChapter`

use crate::error::ScanError;
use folio_core::{MetadataReader, RawChapter};
use std::path::Path;

/// Read one file's tags and turn them into a chapter record
///
/// Album becomes the book title and artist the book author. Absent disc and
/// track numbers default to 0. Failures are per file and carry the path.
pub fn extract_chapter<R>(reader: &R, path: &Path) -> Result<RawChapter, ScanError>
where
    R: MetadataReader + ?Sized,
{
    let metadata = reader.read(path).map_err(|source| ScanError::Extraction {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(
        "extracted {}: album={:?}, disc={:?}, track={:?}",
        path.display(),
        metadata.album,
        metadata.disc_number,
        metadata.track_number
    );

    Ok(RawChapter::from_metadata(metadata, path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::{HasDiscNumber, HasFilePath, HasTrackNumber, MetadataError, TagMetadata};

    struct FixedReader(Option<TagMetadata>);

    impl MetadataReader for FixedReader {
        fn read(&self, _path: &Path) -> folio_core::Result<TagMetadata> {
            self.0
                .clone()
                .ok_or_else(|| MetadataError::decode("unsupported container"))
        }
    }

    #[test]
    fn test_extract_maps_album_and_artist() {
        let reader = FixedReader(Some(TagMetadata {
            title: Some("01 - Chapter 1".to_string()),
            album: Some("Frankenstein".to_string()),
            artist: Some("Mary W. Shelley".to_string()),
            disc_number: None,
            track_number: Some(2),
        }));

        let chapter = extract_chapter(&reader, Path::new("/books/f/01.mp3")).unwrap();
        assert_eq!(chapter.title(), "01 - Chapter 1");
        assert_eq!(chapter.book_title(), "Frankenstein");
        assert_eq!(chapter.book_author(), "Mary W. Shelley");
        assert_eq!(chapter.disc_number(), 0);
        assert_eq!(chapter.track_number(), 2);
        assert_eq!(chapter.file_path(), Path::new("/books/f/01.mp3"));
    }

    #[test]
    fn test_extract_failure_carries_path() {
        let reader = FixedReader(None);
        let err = extract_chapter(&reader, Path::new("/books/broken.flac")).unwrap_err();

        match err {
            ScanError::Extraction { path, source } => {
                assert_eq!(path, Path::new("/books/broken.flac"));
                assert!(matches!(source, MetadataError::Decode(_)));
            }
            other => panic!("unexpected error {:?}", other),
        }
    }
}
