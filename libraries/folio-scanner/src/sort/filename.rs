//! Ordering by file name

use super::{SortResult, Sorter};
use folio_core::HasFilePath;
use std::ffi::OsStr;
use std::path::Path;

/// Orders items by the last component of their path
///
/// Directory components are ignored, so `/z/01.mp3` sorts before `/a/02.mp3`.
/// Items with equal names keep their input order. This strategy never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct SortByFilename;

impl<T> Sorter<T> for SortByFilename
where
    T: HasFilePath + Clone,
{
    fn sort(&self, items: &[T]) -> SortResult<T> {
        let mut sorted = items.to_vec();
        sorted.sort_by(|a, b| base_name(a.file_path()).cmp(base_name(b.file_path())));
        Ok(sorted)
    }
}

fn base_name(path: &Path) -> &OsStr {
    path.file_name().unwrap_or(path.as_os_str())
}
