//! Concurrent scan pipeline
//!
//! ```text
//! walker thread ──paths (bounded)──> N extraction workers ──events (unbounded)──> consumer
//!                                                                                   │
//!                                                     staging by book title <───────┘
//!                                                              │ (after every worker exits)
//!                                                              v
//!                                                     sort, index, add to Library
//! ```
//!
//! The consumer is the calling thread. It alone touches the staging books, and
//! it only sorts once the event queue has closed, i.e. once every file has been
//! seen. Disc/track ordering needs the full set of a book's chapters.

use crate::audio_file::is_supported_audio_file;
use crate::config::ScanConfig;
use crate::error::ScanError;
use crate::extractor::extract_chapter;
use crate::reader::LoftyMetadataReader;
use crate::sort::Sorter;
use crate::staging::StagingLibrary;
use crate::walk::Walker;
use crossbeam_channel::{Receiver, Sender};
use folio_core::{Library, MetadataReader, RawChapter};
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Instant;

/// Counters gathered during a scan
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanStats {
    /// Supported files found by the walker
    pub files_discovered: usize,

    /// Files whose metadata was extracted
    pub chapters_extracted: usize,

    /// Files whose metadata could not be extracted
    pub extraction_failures: usize,

    /// Entries the walker could not read
    pub traversal_errors: usize,

    /// Books added to the library
    pub books_assembled: usize,

    /// Books left out because they failed to sort or were empty
    pub books_rejected: usize,
}

/// What workers and the walker report to the consumer
enum ScanEvent {
    Chapter(RawChapter),
    Failed(ScanError),
}

/// Library scanner
///
/// Generic over the tag reader so the pipeline can run against any
/// `MetadataReader`; [`Scanner::new`] uses lofty.
#[derive(Debug, Clone)]
pub struct Scanner<R = LoftyMetadataReader> {
    reader: R,
    config: ScanConfig,
}

impl Scanner<LoftyMetadataReader> {
    /// Create a scanner with the lofty reader and default configuration
    pub fn new() -> Self {
        Self::with_reader(LoftyMetadataReader::new())
    }
}

impl Default for Scanner<LoftyMetadataReader> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: MetadataReader> Scanner<R> {
    /// Create a scanner with a custom reader and default configuration
    pub fn with_reader(reader: R) -> Self {
        Self {
            reader,
            config: ScanConfig::default(),
        }
    }

    /// Replace the configuration
    ///
    /// Zero workers or a zero queue capacity are treated as 1.
    pub fn with_config(mut self, config: ScanConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Scan `root` and add the books found to `library`
    ///
    /// Never stops early: every supported file is attempted exactly once and
    /// every problem is returned.
    pub fn scan<S>(&self, root: &Path, library: &mut Library, sorter: &S) -> Vec<ScanError>
    where
        S: Sorter<RawChapter> + ?Sized,
    {
        self.scan_with_stats(root, library, sorter).1
    }

    /// Scan `root` into a fresh library
    pub fn scan_to_new_library<S>(&self, root: &Path, sorter: &S) -> (Library, Vec<ScanError>)
    where
        S: Sorter<RawChapter> + ?Sized,
    {
        let mut library = Library::new();
        let errors = self.scan(root, &mut library, sorter);
        (library, errors)
    }

    /// Scan `root` into `library`, also returning counters
    pub fn scan_with_stats<S>(
        &self,
        root: &Path,
        library: &mut Library,
        sorter: &S,
    ) -> (ScanStats, Vec<ScanError>)
    where
        S: Sorter<RawChapter> + ?Sized,
    {
        let start_time = Instant::now();
        let mut stats = ScanStats::default();
        let mut errors = Vec::new();
        let mut staging = StagingLibrary::new();

        let worker_count = self.config.workers.max(1);
        let (path_tx, path_rx) =
            crossbeam_channel::bounded::<PathBuf>(self.config.path_queue_capacity.max(1));
        let (event_tx, event_rx) = crossbeam_channel::unbounded::<ScanEvent>();

        thread::scope(|scope| {
            let mut workers = Vec::with_capacity(worker_count);
            for worker_idx in 0..worker_count {
                let paths = path_rx.clone();
                let events = event_tx.clone();
                let reader = &self.reader;

                match thread::Builder::new()
                    .name(format!("folio-worker-{worker_idx}"))
                    .spawn_scoped(scope, move || run_worker(reader, paths, events))
                {
                    Ok(handle) => workers.push(handle),
                    Err(e) => {
                        tracing::error!("Failed to spawn scan worker {}: {}", worker_idx, e);
                        errors.push(ScanError::Io(e));
                    }
                }
            }
            // Workers own the only receivers now; if none started, the walker's
            // sends fail instead of blocking.
            drop(path_rx);

            let walker = Walker::from_config(&self.config);
            let extensions = self.config.extensions.as_slice();
            let walk_events = event_tx.clone();
            let traversal = thread::Builder::new()
                .name("folio-walker".to_string())
                .spawn_scoped(scope, move || {
                    run_traversal(&walker, root, extensions, path_tx, walk_events)
                });
            let traversal = match traversal {
                Ok(handle) => Some(handle),
                Err(e) => {
                    tracing::error!("Failed to spawn directory walker: {}", e);
                    errors.push(ScanError::Io(e));
                    None
                }
            };

            // The queue closes once the walker and every worker have dropped
            // their senders.
            drop(event_tx);

            for event in event_rx.iter() {
                match event {
                    ScanEvent::Chapter(chapter) => {
                        stats.chapters_extracted += 1;
                        staging.add_chapter(chapter);
                    }
                    ScanEvent::Failed(err) => {
                        match err {
                            ScanError::Traversal { .. } => stats.traversal_errors += 1,
                            _ => stats.extraction_failures += 1,
                        }
                        errors.push(err);
                    }
                }
            }

            if let Some(handle) = traversal {
                match handle.join() {
                    Ok(discovered) => stats.files_discovered = discovered,
                    Err(payload) => {
                        errors.push(ScanError::WorkerPanicked(panic_message(&*payload)))
                    }
                }
            }
            for handle in workers {
                if let Err(payload) = handle.join() {
                    errors.push(ScanError::WorkerPanicked(panic_message(&*payload)));
                }
            }
        });

        let staged_books = staging.len();
        let (added, book_errors) = staging.assemble_into(library, sorter);
        stats.books_assembled = added;
        stats.books_rejected = staged_books - added;
        errors.extend(book_errors);

        tracing::info!(
            "Scan of {} completed in {:?}: {} files, {} chapters, {} books, {} errors",
            root.display(),
            start_time.elapsed(),
            stats.files_discovered,
            stats.chapters_extracted,
            stats.books_assembled,
            errors.len()
        );

        (stats, errors)
    }
}

/// Scan `root` with the lofty reader and default configuration
pub fn scan<S>(root: &Path, library: &mut Library, sorter: &S) -> Vec<ScanError>
where
    S: Sorter<RawChapter> + ?Sized,
{
    Scanner::new().scan(root, library, sorter)
}

/// Scan `root` into a new library with the lofty reader and default configuration
pub fn scan_to_new_library<S>(root: &Path, sorter: &S) -> (Library, Vec<ScanError>)
where
    S: Sorter<RawChapter> + ?Sized,
{
    Scanner::new().scan_to_new_library(root, sorter)
}

/// Walk `root` and queue every supported file; returns how many were queued
fn run_traversal(
    walker: &Walker,
    root: &Path,
    extensions: &[String],
    paths: Sender<PathBuf>,
    events: Sender<ScanEvent>,
) -> usize {
    let mut discovered = 0;

    // The error handler never aborts, so the walk always runs to completion
    let _ = walker.walk(
        root,
        |_, entry| Ok(is_supported_audio_file(entry, extensions)),
        |path, _| {
            // Blocks while the queue is full
            if paths.send(path).is_ok() {
                discovered += 1;
            }
        },
        |path, err| {
            tracing::warn!("Failed to enumerate {}: {}", path.display(), err);
            // Enumeration errors are non-fatal
            let _ = events.send(ScanEvent::Failed(err));
            Ok(())
        },
    );

    tracing::debug!(
        "walker queued {} file(s) under {}",
        discovered,
        root.display()
    );
    discovered
}

/// Extract chapters until the path queue is closed and drained
///
/// A reader panic is caught per file and reported; the worker carries on with
/// the next path.
fn run_worker<R>(reader: &R, paths: Receiver<PathBuf>, events: Sender<ScanEvent>)
where
    R: MetadataReader + ?Sized,
{
    for path in paths.iter() {
        let extracted = panic::catch_unwind(AssertUnwindSafe(|| extract_chapter(reader, &path)));
        let event = match extracted {
            Ok(Ok(chapter)) => ScanEvent::Chapter(chapter),
            Ok(Err(err)) => {
                tracing::warn!("{}", err);
                ScanEvent::Failed(err)
            }
            Err(payload) => {
                let message = format!("{}: {}", path.display(), panic_message(&*payload));
                tracing::error!("Reader panicked on {}", message);
                ScanEvent::Failed(ScanError::WorkerPanicked(message))
            }
        };

        if events.send(event).is_err() {
            break;
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|s| (*s).to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic".to_string())
}
