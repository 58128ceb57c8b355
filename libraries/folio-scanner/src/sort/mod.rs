//! Chapter ordering strategies
//!
//! A [`Sorter`] turns an unordered collection into a sequence, or reports why
//! it cannot. Strategies only ask for the capabilities they use
//! ([`HasDiscAndTrackNumber`](folio_core::HasDiscAndTrackNumber),
//! [`HasFilePath`](folio_core::HasFilePath)), so they work for any item type
//! that provides them.
//!
//! [`Compose`] chains strategies: the first one that succeeds wins.
//!
//! ```rust
//! use folio_core::RawChapter;
//! use folio_scanner::sort::{Compose, SortByDiscNumber, SortByFilename, Sorter};
//!
//! let sorter = Compose::new().then(SortByDiscNumber).then(SortByFilename);
//! let chapters = vec![
//!     RawChapter::new("Two", "Book", "Author", 0, 2, "/b/02.mp3"),
//!     RawChapter::new("One", "Book", "Author", 0, 1, "/b/01.mp3"),
//! ];
//!
//! let sorted = sorter.sort(&chapters).unwrap();
//! assert_eq!(sorted[0].title(), "One");
//! ```

mod disc_number;
mod filename;

pub use disc_number::{DiscTrackIndex, SortByDiscNumber};
pub use filename::SortByFilename;

use crate::error::SortError;

/// Outcome of a sort: the full ordered sequence, or every reason it failed
pub type SortResult<T> = Result<Vec<T>, Vec<SortError>>;

/// An ordering strategy over items of type `T`
///
/// Implementations must not keep references to `items` past the call. A
/// failing strategy returns at least one error.
pub trait Sorter<T> {
    fn sort(&self, items: &[T]) -> SortResult<T>;
}

impl<T, F> Sorter<T> for F
where
    F: Fn(&[T]) -> SortResult<T>,
{
    fn sort(&self, items: &[T]) -> SortResult<T> {
        self(items)
    }
}

/// Tries strategies in order and keeps the first success
///
/// Output of a failed strategy is discarded. When every strategy fails, the
/// errors of all of them are returned together. An empty chain has nothing
/// to try and therefore fails.
pub struct Compose<T> {
    sorters: Vec<Box<dyn Sorter<T> + Send + Sync>>,
}

impl<T> Compose<T> {
    /// Create an empty chain
    pub fn new() -> Self {
        Self {
            sorters: Vec::new(),
        }
    }

    /// Append a fallback strategy
    pub fn then<S>(mut self, sorter: S) -> Self
    where
        S: Sorter<T> + Send + Sync + 'static,
    {
        self.sorters.push(Box::new(sorter));
        self
    }

    pub fn len(&self) -> usize {
        self.sorters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sorters.is_empty()
    }
}

impl<T> Default for Compose<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Debug for Compose<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Compose")
            .field("sorters", &self.sorters.len())
            .finish()
    }
}

impl<T> Sorter<T> for Compose<T> {
    fn sort(&self, items: &[T]) -> SortResult<T> {
        if self.sorters.is_empty() {
            return Err(vec![SortError::CannotSort(
                "no sorting strategies configured".to_string(),
            )]);
        }

        let mut all_errors = Vec::new();

        for (position, sorter) in self.sorters.iter().enumerate() {
            match sorter.sort(items) {
                Ok(sorted) => return Ok(sorted),
                Err(errors) => {
                    tracing::trace!(
                        "sorting strategy {} failed with {} error(s)",
                        position,
                        errors.len()
                    );
                    all_errors.extend(errors);
                }
            }
        }

        Err(all_errors)
    }
}

/// The default chain for chapters: disc/track numbering, then file names
pub fn default_sorter<T>() -> Compose<T>
where
    T: folio_core::HasDiscAndTrackNumber + folio_core::HasFilePath + Clone + 'static,
{
    Compose::new().then(SortByDiscNumber).then(SortByFilename)
}
