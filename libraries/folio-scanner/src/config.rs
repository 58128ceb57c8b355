//! Scan configuration

use crate::error::ScanError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable prefix for configuration overrides
pub const ENV_PREFIX: &str = "FOLIO";

/// Supported audio container suffixes
pub const SUPPORTED_EXTENSIONS: &[&str] = &[".mp3", ".flac"];

/// Scan configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ScanConfig {
    /// Number of metadata extraction workers (default: 7)
    #[serde(default = "default_workers")]
    pub workers: usize,

    /// Paths the walker may queue ahead of the workers (default: 100)
    #[serde(default = "default_path_queue_capacity")]
    pub path_queue_capacity: usize,

    /// Case-sensitive file name suffixes that qualify for scanning
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Whether to follow symbolic links
    #[serde(default)]
    pub follow_links: bool,

    /// Maximum directory depth to traverse (unlimited when unset)
    #[serde(default)]
    pub max_depth: Option<usize>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            workers: default_workers(),
            path_queue_capacity: default_path_queue_capacity(),
            extensions: default_extensions(),
            follow_links: false,
            max_depth: None,
        }
    }
}

impl ScanConfig {
    /// Load configuration from an optional file and the environment
    ///
    /// Environment variables use the `FOLIO_` prefix, e.g. `FOLIO_WORKERS=4`.
    pub fn load(path: Option<&Path>) -> Result<Self, ScanError> {
        let mut settings = config::Config::builder();

        if let Some(path) = path {
            settings = settings.add_source(config::File::from(path).required(false));
        }

        settings = settings.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .try_parsing(true)
                .list_separator(",")
                .with_list_parse_key("extensions"),
        );

        let config = settings
            .build()
            .map_err(|e| ScanError::Config(e.to_string()))?;

        let loaded: Self = config
            .try_deserialize()
            .map_err(|e| ScanError::Config(e.to_string()))?;
        loaded.validate()?;
        Ok(loaded)
    }

    /// Set the number of extraction workers
    pub fn workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    /// Set the path queue capacity
    pub fn path_queue_capacity(mut self, capacity: usize) -> Self {
        self.path_queue_capacity = capacity;
        self
    }

    /// Replace the supported extensions
    pub fn extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extensions = extensions.into_iter().map(Into::into).collect();
        self
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ScanError> {
        if self.workers == 0 {
            return Err(ScanError::Config("workers must be at least 1".to_string()));
        }

        if self.path_queue_capacity == 0 {
            return Err(ScanError::Config(
                "path_queue_capacity must be at least 1".to_string(),
            ));
        }

        if self.extensions.iter().any(String::is_empty) {
            return Err(ScanError::Config(
                "extensions must not contain empty suffixes".to_string(),
            ));
        }

        Ok(())
    }
}

// Default values
fn default_workers() -> usize {
    7
}

fn default_path_queue_capacity() -> usize {
    100
}

fn default_extensions() -> Vec<String> {
    SUPPORTED_EXTENSIONS
        .iter()
        .map(|e| (*e).to_string())
        .collect()
}
