//! Assembled audiobooks

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A chapter in its final position within a book
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioBookChapter {
    pub title: String,
    /// Zero-based position in the book
    pub index: usize,
    pub path: PathBuf,
}

/// A fully ordered audiobook
///
/// Chapter indices are contiguous and start at 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioBook {
    pub title: String,
    pub author: String,
    pub description: String,
    pub chapters: Vec<AudioBookChapter>,
}

impl AudioBook {
    /// Placeholder used until descriptions are sourced from somewhere
    pub const DEFAULT_DESCRIPTION: &'static str = "Description not available";

    pub fn chapter_count(&self) -> usize {
        self.chapters.len()
    }
}
