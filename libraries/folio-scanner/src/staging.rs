//! Grouping of extracted chapters into books before ordering
//!
//! Staging is owned by a single consumer, so none of it is synchronised.

use crate::error::ScanError;
use crate::sort::Sorter;
use folio_core::{AudioBook, AudioBookChapter, BookTitle, HasFilePath, Library, RawChapter};
use std::collections::HashMap;

/// Unordered chapters that share a book title
#[derive(Debug, Clone)]
pub struct StagingBook {
    title: BookTitle,
    chapters: Vec<RawChapter>,
}

impl StagingBook {
    /// Create an empty staging book
    pub fn new(title: impl Into<BookTitle>) -> Self {
        Self {
            title: title.into(),
            chapters: Vec::with_capacity(10),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn chapters(&self) -> &[RawChapter] {
        &self.chapters
    }

    pub fn add_chapter(&mut self, chapter: RawChapter) {
        self.chapters.push(chapter);
    }

    /// Order the chapters and build the final book
    ///
    /// Title and author come from the first chapter staged, not the first
    /// chapter in sorted order. Chapters are indexed 0..n in sorted order.
    pub fn into_audio_book<S>(self, sorter: &S) -> Result<AudioBook, Vec<ScanError>>
    where
        S: Sorter<RawChapter> + ?Sized,
    {
        let sorted = sorter.sort(&self.chapters).map_err(|errors| {
            errors
                .into_iter()
                .map(|source| ScanError::Sort {
                    book: self.title.clone(),
                    source,
                })
                .collect::<Vec<_>>()
        })?;

        let Some(first) = self.chapters.first() else {
            return Err(vec![ScanError::EmptyBook { book: self.title }]);
        };
        if sorted.is_empty() {
            return Err(vec![ScanError::EmptyBook { book: self.title }]);
        }

        let title = first.book_title().to_string();
        let author = first.book_author().to_string();

        let chapters = sorted
            .into_iter()
            .enumerate()
            .map(|(index, chapter)| AudioBookChapter {
                title: chapter.title().to_string(),
                index,
                path: chapter.file_path().to_path_buf(),
            })
            .collect();

        Ok(AudioBook {
            title,
            author,
            description: AudioBook::DEFAULT_DESCRIPTION.to_string(),
            chapters,
        })
    }
}

/// Staging books keyed by title, created on first sight of a title
#[derive(Debug, Clone, Default)]
pub struct StagingLibrary {
    books: HashMap<BookTitle, StagingBook>,
}

impl StagingLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// File a chapter under its book title
    pub fn add_chapter(&mut self, chapter: RawChapter) {
        self.books
            .entry(chapter.book_title().to_string())
            .or_insert_with_key(|title| StagingBook::new(title.clone()))
            .add_chapter(chapter);
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn get(&self, title: &str) -> Option<&StagingBook> {
        self.books.get(title)
    }

    /// Order every staged book and add the successes to `library`
    ///
    /// Books that fail to sort or end up empty are left out; their errors are
    /// returned. Returns the number of books added alongside the errors.
    pub fn assemble_into<S>(self, library: &mut Library, sorter: &S) -> (usize, Vec<ScanError>)
    where
        S: Sorter<RawChapter> + ?Sized,
    {
        let mut added = 0;
        let mut errors = Vec::new();

        for (title, staged) in self.books {
            match staged.into_audio_book(sorter) {
                Ok(book) => {
                    tracing::debug!(
                        "assembled '{}' with {} chapter(s)",
                        title,
                        book.chapter_count()
                    );
                    if library.add(book).is_some() {
                        tracing::debug!("replaced existing book '{}'", title);
                    }
                    added += 1;
                }
                Err(book_errors) => {
                    tracing::warn!("dropping book '{}': {} error(s)", title, book_errors.len());
                    errors.extend(book_errors);
                }
            }
        }

        (added, errors)
    }
}
