//! In-memory audiobook library keyed by title

use crate::types::AudioBook;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Audiobooks keyed by title
///
/// Titles are the only identity: adding a book whose title is already present
/// replaces the earlier book, even if the authors differ.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Library {
    books: HashMap<String, AudioBook>,
}

impl Library {
    /// Create an empty library
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a book, returning the book it replaced (if any)
    pub fn add(&mut self, book: AudioBook) -> Option<AudioBook> {
        self.books.insert(book.title.clone(), book)
    }

    /// Remove every book
    pub fn reset(&mut self) {
        self.books.clear();
    }

    pub fn get(&self, title: &str) -> Option<&AudioBook> {
        self.books.get(title)
    }

    pub fn contains(&self, title: &str) -> bool {
        self.books.contains_key(title)
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Iterate books in no particular order
    pub fn iter(&self) -> impl Iterator<Item = &AudioBook> {
        self.books.values()
    }

    /// Book titles, sorted
    pub fn titles(&self) -> Vec<&str> {
        let mut titles: Vec<&str> = self.books.keys().map(String::as_str).collect();
        titles.sort_unstable();
        titles
    }

    pub fn into_books(self) -> HashMap<String, AudioBook> {
        self.books
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AudioBookChapter;
    use std::path::PathBuf;

    fn book(title: &str, author: &str, chapters: usize) -> AudioBook {
        AudioBook {
            title: title.to_string(),
            author: author.to_string(),
            description: AudioBook::DEFAULT_DESCRIPTION.to_string(),
            chapters: (0..chapters)
                .map(|index| AudioBookChapter {
                    title: format!("Chapter {}", index),
                    index,
                    path: PathBuf::from(format!("/books/{}/{:02}.mp3", title, index)),
                })
                .collect(),
        }
    }

    #[test]
    fn test_add_and_get() {
        let mut library = Library::new();
        assert!(library.is_empty());

        let previous = library.add(book("Frankenstein", "Mary W. Shelley", 3));
        assert!(previous.is_none());

        assert_eq!(library.len(), 1);
        assert!(library.contains("Frankenstein"));
        assert_eq!(
            library.get("Frankenstein").map(AudioBook::chapter_count),
            Some(3)
        );
    }

    #[test]
    fn test_same_title_last_write_wins() {
        let mut library = Library::new();
        library.add(book("Dracula", "Bram Stoker", 2));
        let replaced = library.add(book("Dracula", "Someone Else", 5));

        assert_eq!(replaced.map(|b| b.author), Some("Bram Stoker".to_string()));
        assert_eq!(library.len(), 1);
        let stored = library.get("Dracula").unwrap();
        assert_eq!(stored.author, "Someone Else");
        assert_eq!(stored.chapter_count(), 5);
    }

    #[test]
    fn test_reset_clears_books() {
        let mut library = Library::new();
        library.add(book("A", "x", 1));
        library.add(book("B", "y", 1));
        assert_eq!(library.titles(), vec!["A", "B"]);

        library.reset();
        assert!(library.is_empty());
        assert!(library.titles().is_empty());
    }

    #[test]
    fn test_serialization_roundtrip() {
        let mut library = Library::new();
        library.add(book("Frankenstein", "Mary W. Shelley", 2));

        let json = serde_json::to_string(&library).unwrap();
        let decoded: Library = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, library);
    }
}
