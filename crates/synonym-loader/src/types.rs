//! Loader-specific types for synonym file processing.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while discovering, reading or writing synonym files.
///
/// Malformed line content is not represented here: every line parses.
#[derive(Error, Debug)]
pub enum SynonymError {
    /// I/O error reading or writing a synonym file.
    #[error("IO error on synonym file: {0}")]
    Io(#[from] std::io::Error),

    /// Input directory does not exist.
    #[error("Directory '{path}' does not exist.")]
    DirectoryNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Input path exists but is not a directory.
    #[error("Directory '{path}' does not exist.")]
    NotADirectory {
        /// The path that was given.
        path: String,
    },

    /// File not found.
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found.
        path: String,
    },
}

impl SynonymError {
    /// Returns true for errors about the input directory argument itself.
    pub fn is_usage_error(&self) -> bool {
        matches!(
            self,
            Self::DirectoryNotFound { .. } | Self::NotADirectory { .. }
        )
    }
}

/// Result type for synonym operations.
pub type SynonymResult<T> = Result<T, SynonymError>;

/// Default extension of synonym files picked up from the input directory.
pub const DEFAULT_EXTENSION: &str = ".txt";

/// Configuration for discovering and loading synonym files.
#[derive(Debug, Clone)]
pub struct LoaderConfig {
    /// File name suffix that marks a synonym file.
    pub extension: String,
    /// Whether to read files concurrently (requires the `parallel` feature).
    pub parallel: bool,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            extension: DEFAULT_EXTENSION.to_string(),
            parallel: true,
        }
    }
}

impl LoaderConfig {
    /// Creates a config matching files with the given suffix.
    pub fn with_extension<S: Into<String>>(extension: S) -> Self {
        Self {
            extension: extension.into(),
            ..Self::default()
        }
    }

    /// Creates a config that reads files one after another.
    pub fn sequential() -> Self {
        Self {
            parallel: false,
            ..Self::default()
        }
    }
}

/// Statistics from loading a set of synonym files.
#[derive(Debug, Clone, Default)]
pub struct LoadStats {
    /// Number of files read.
    pub files_read: usize,
    /// Total physical lines read.
    pub lines_read: usize,
    /// Blank and comment lines skipped.
    pub lines_skipped: usize,
    /// Lines parsed and ingested.
    pub records: usize,
    /// Ingested lines that were directed rules.
    pub directed_records: usize,
    /// Time taken to load in milliseconds.
    pub load_time_ms: u64,
}

impl LoadStats {
    /// Returns the percentage of read lines that were skipped.
    pub fn skip_rate(&self) -> f64 {
        if self.lines_read == 0 {
            0.0
        } else {
            (self.lines_skipped as f64 / self.lines_read as f64) * 100.0
        }
    }
}

/// Synonym files discovered in an input directory.
#[derive(Debug, Clone, Default)]
pub struct SynonymFiles {
    /// The directory that was scanned.
    pub directory: PathBuf,
    /// Matching files, sorted by file name.
    pub paths: Vec<PathBuf>,
}

impl SynonymFiles {
    /// Creates an empty file list for a directory.
    pub fn new<P: Into<PathBuf>>(directory: P) -> Self {
        Self {
            directory: directory.into(),
            paths: Vec::new(),
        }
    }

    /// Returns the number of discovered files.
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Returns true if no file matched.
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}
