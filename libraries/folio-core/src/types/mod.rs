mod book;
mod chapter;
mod library;
mod metadata;

pub use book::{AudioBook, AudioBookChapter};
pub use chapter::{BookTitle, DiscNumber, RawChapter, TrackNumber};
pub use library::Library;
pub use metadata::TagMetadata;
