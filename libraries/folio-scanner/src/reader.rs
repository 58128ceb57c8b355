/// Metadata reader implementation using lofty
use folio_core::{MetadataError, MetadataReader, TagMetadata};
use lofty::{Accessor, Probe, TaggedFileExt};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Metadata reader using the lofty library
///
/// The container is detected from the file's content rather than its
/// extension.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoftyMetadataReader;

impl LoftyMetadataReader {
    /// Create a new metadata reader
    pub fn new() -> Self {
        Self
    }

    /// Extract metadata from lofty tag
    fn extract_from_tag(tag: &lofty::Tag) -> TagMetadata {
        TagMetadata {
            title: tag.title().map(|s| s.to_string()),
            album: tag.album().map(|s| s.to_string()),
            artist: tag.artist().map(|s| s.to_string()),
            disc_number: tag.disk().map(i64::from),
            track_number: tag.track().map(i64::from),
        }
    }
}

impl MetadataReader for LoftyMetadataReader {
    fn read(&self, path: &Path) -> folio_core::Result<TagMetadata> {
        // Check if file exists
        if !path.exists() {
            return Err(MetadataError::FileNotFound(path.display().to_string()));
        }

        let reader = BufReader::new(File::open(path)?);
        let tagged_file = Probe::new(reader)
            .guess_file_type()?
            .read()
            .map_err(|e| MetadataError::decode(e.to_string()))?;

        // Prefer the format's primary tag (ID3v2 for MP3, Vorbis comments for FLAC)
        let metadata = tagged_file
            .primary_tag()
            .or(tagged_file.first_tag())
            .map(Self::extract_from_tag)
            .unwrap_or_default();

        Ok(metadata)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn read_nonexistent_file_returns_error() {
        let reader = LoftyMetadataReader::new();
        let result = reader.read(Path::new("/nonexistent/file.mp3"));
        assert!(matches!(result, Err(MetadataError::FileNotFound(_))));
    }

    #[test]
    fn read_garbage_returns_decode_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("noise.mp3");
        fs::write(&path, b"this is not an audio container").unwrap();

        let result = LoftyMetadataReader::new().read(&path);
        assert!(result.is_err());
    }
}
