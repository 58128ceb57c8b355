//! Recursive directory traversal with filter and error callbacks

use crate::config::ScanConfig;
use crate::error::{ScanError, WalkError};
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Depth-first directory walker
///
/// Sibling order is whatever the filesystem yields. Nothing downstream may
/// rely on it; chapter order is decided by the sorters.
#[derive(Debug, Clone, Default)]
pub struct Walker {
    /// Whether to follow symbolic links
    follow_links: bool,

    /// Maximum depth to traverse (unlimited when `None`)
    max_depth: Option<usize>,
}

impl Walker {
    /// Create a new walker
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a walker using the traversal settings of a scan configuration
    pub fn from_config(config: &ScanConfig) -> Self {
        Self {
            follow_links: config.follow_links,
            max_depth: config.max_depth,
        }
    }

    /// Set whether to follow symbolic links
    pub fn follow_links(mut self, follow: bool) -> Self {
        self.follow_links = follow;
        self
    }

    /// Set maximum directory depth to traverse
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// Walk `root`, visiting files and directories alike
    ///
    /// For every readable entry `filter` is called with the path relative to
    /// `root` (`"."` for the root itself). When it returns `Ok(true)`,
    /// `on_file` receives the full path, i.e. `root` joined with the relative
    /// path.
    ///
    /// Unreadable entries, and filter failures, go to `on_error`. Returning
    /// `Ok(())` from it skips the entry and keeps walking; returning an error
    /// stops the walk and hands that error back to the caller.
    ///
    /// `on_error` gets the failing path but no `DirEntry`: an unreadable entry
    /// yields only a `walkdir::Error`, which carries no entry. The path is the
    /// one reported by walkdir, or `root` when it reports none.
    pub fn walk<F, H, E>(
        &self,
        root: &Path,
        mut filter: F,
        mut on_file: H,
        mut on_error: E,
    ) -> Result<(), WalkError>
    where
        F: FnMut(&Path, &DirEntry) -> Result<bool, ScanError>,
        H: FnMut(PathBuf, &DirEntry),
        E: FnMut(&Path, ScanError) -> Result<(), ScanError>,
    {
        let mut walker = WalkDir::new(root).follow_links(self.follow_links);
        if let Some(depth) = self.max_depth {
            walker = walker.max_depth(depth);
        }

        for item in walker {
            match item {
                Ok(entry) => {
                    let relative = relative_path(root, entry.path());
                    match filter(relative, &entry) {
                        Ok(true) => on_file(entry.path().to_path_buf(), &entry),
                        Ok(false) => {}
                        Err(err) => forward(&mut on_error, entry.path(), err)?,
                    }
                }
                Err(err) => {
                    let path = err
                        .path()
                        .map(Path::to_path_buf)
                        .unwrap_or_else(|| root.to_path_buf());
                    let scan_err = ScanError::Traversal {
                        path: path.clone(),
                        message: err.to_string(),
                    };
                    forward(&mut on_error, &path, scan_err)?;
                }
            }
        }

        Ok(())
    }
}

fn forward<E>(on_error: &mut E, path: &Path, err: ScanError) -> Result<(), WalkError>
where
    E: FnMut(&Path, ScanError) -> Result<(), ScanError>,
{
    on_error(path, err).map_err(|source| WalkError::Aborted {
        path: path.to_path_buf(),
        source,
    })
}

fn relative_path<'a>(root: &Path, path: &'a Path) -> &'a Path {
    match path.strip_prefix(root) {
        Ok(rel) if rel.as_os_str().is_empty() => Path::new("."),
        Ok(rel) => rel,
        Err(_) => path,
    }
}
