//! # synonym-loader
//!
//! Parser and merger for search-engine synonym files.
//!
//! Reads every synonym file in a directory, merges undirected groups that
//! share a term, tracks each term's full synonym set and derives a
//! self-inclusive one-way rule per term.
//!
//! ```no_run
//! use synonym_loader::{
//!     discover_synonym_files, load_synonym_files, write_combined_file, LoaderConfig,
//!     RunMetadata,
//! };
//!
//! let config = LoaderConfig::default();
//! let files = discover_synonym_files("synonyms/", &config)?;
//! let (aggregator, stats) = load_synonym_files(&files, &config)?;
//!
//! let combined = aggregator.finalize();
//! write_combined_file("combined.txt", &combined, &files, Some(&RunMetadata::capture()))?;
//! println!("{} records merged into {} groups", stats.records, combined.combined_lines.len());
//! # Ok::<(), synonym_loader::SynonymError>(())
//! ```
//!
//! ## Features
//!
//! - `parallel` (default): read input files concurrently with rayon.

#![warn(missing_docs)]

pub mod aggregator;
pub mod loader;
pub mod parser;
pub mod types;
pub mod writer;

pub use aggregator::SynonymAggregator;
pub use loader::{discover_synonym_files, load_synonym_files};
pub use parser::{is_ignorable, parse_line, SynonymFileReader};
pub use types::{LoadStats, LoaderConfig, SynonymError, SynonymFiles, SynonymResult, DEFAULT_EXTENSION};
pub use writer::{write_combined, write_combined_file, RunMetadata};

// Re-export synonym-types for convenience
pub use synonym_types;
