//! Supported audio file detection

use crate::config::SUPPORTED_EXTENSIONS;
use std::path::Path;
use walkdir::DirEntry;

/// Check whether a file name ends with one of the given suffixes
///
/// Matching is a case-sensitive suffix match on the whole name, so
/// `"chapter.png.mp3"` qualifies and `"chapter.mp3.png"` does not.
pub fn has_supported_extension<S: AsRef<str>>(file_name: &str, extensions: &[S]) -> bool {
    extensions
        .iter()
        .any(|ext| file_name.ends_with(ext.as_ref()))
}

/// Check a file name against the default suffix set (`.mp3`, `.flac`)
pub fn has_default_extension(file_name: &str) -> bool {
    has_supported_extension(file_name, SUPPORTED_EXTENSIONS)
}

/// Check if a path names a supported audio file
///
/// Paths without a UTF-8 file name never qualify.
pub fn is_audio_path<S: AsRef<str>>(path: &Path, extensions: &[S]) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(|name| has_supported_extension(name, extensions))
        .unwrap_or(false)
}

/// Check if a walked entry is a supported audio file
///
/// Directories never qualify, whatever their name.
pub fn is_supported_audio_file<S: AsRef<str>>(entry: &DirEntry, extensions: &[S]) -> bool {
    !entry.file_type().is_dir() && is_audio_path(entry.path(), extensions)
}
