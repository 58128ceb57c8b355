//! Ordering by disc and track number

use super::{SortResult, Sorter};
use folio_core::{DiscNumber, HasDiscAndTrackNumber, TrackNumber};
use std::collections::BTreeMap;

/// Orders items disc by disc, track by track, ascending
///
/// Numbering may be sparse, zero or negative: gaps are skipped without
/// placeholders. When two items share a (disc, track) pair the later one
/// replaces the earlier one. This strategy never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct SortByDiscNumber;

impl<T> Sorter<T> for SortByDiscNumber
where
    T: HasDiscAndTrackNumber + Clone,
{
    fn sort(&self, items: &[T]) -> SortResult<T> {
        let index = DiscTrackIndex::build(items);

        let dropped = items.len() - index.len();
        if dropped > 0 {
            tracing::debug!(
                "{} item(s) shared a disc/track pair and were replaced",
                dropped
            );
        }
        if let Some((min, max)) = index.disc_range() {
            tracing::trace!(
                "ordering {} item(s) across discs {}..={}",
                index.len(),
                min,
                max
            );
        }

        Ok(index.into_sorted())
    }
}

/// Items bucketed by disc, then by track
#[derive(Debug, Clone)]
pub struct DiscTrackIndex<T> {
    discs: BTreeMap<DiscNumber, BTreeMap<TrackNumber, T>>,
}

impl<T> DiscTrackIndex<T>
where
    T: HasDiscAndTrackNumber + Clone,
{
    /// Bucket every item by its (disc, track) pair; later items win collisions
    pub fn build(items: &[T]) -> Self {
        let mut discs: BTreeMap<DiscNumber, BTreeMap<TrackNumber, T>> = BTreeMap::new();

        for item in items {
            discs
                .entry(item.disc_number())
                .or_default()
                .insert(item.track_number(), item.clone());
        }

        Self { discs }
    }
}

impl<T> DiscTrackIndex<T> {
    /// Number of distinct (disc, track) pairs
    pub fn len(&self) -> usize {
        self.discs.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.discs.is_empty()
    }

    /// Lowest and highest disc seen
    pub fn disc_range(&self) -> Option<(DiscNumber, DiscNumber)> {
        let min = self.discs.keys().next()?;
        let max = self.discs.keys().next_back()?;
        Some((*min, *max))
    }

    /// Lowest and highest track seen on a disc
    pub fn track_range(&self, disc: DiscNumber) -> Option<(TrackNumber, TrackNumber)> {
        let tracks = self.discs.get(&disc)?;
        let min = tracks.keys().next()?;
        let max = tracks.keys().next_back()?;
        Some((*min, *max))
    }

    /// Items from the lowest disc to the highest, each disc from its lowest
    /// track to its highest
    pub fn into_sorted(self) -> Vec<T> {
        self.discs
            .into_values()
            .flat_map(BTreeMap::into_values)
            .collect()
    }
}
