//! # synonym-combine
//!
//! Command line front end that merges a directory of synonym files into a
//! single combined file, using the `synonym-loader` crate.
//!
//! The binary is a thin wrapper around [`run`], which is exposed here so
//! the whole pipeline can be driven from tests.

#![warn(missing_docs)]

mod cli;
mod summary;

pub use cli::Cli;
pub use summary::CombineSummary;

use synonym_loader::{
    discover_synonym_files, load_synonym_files, write_combined_file, RunMetadata, SynonymError,
    SynonymResult,
};
use tracing::info;

/// Exit status for a missing or invalid input directory, same as clap
/// uses for a wrong argument count.
pub const EXIT_USAGE: u8 = 2;
/// Exit status for any other failure.
pub const EXIT_FAILURE: u8 = 1;

/// Maps a failed run to its exit status and the single line reported on stderr.
pub fn failure_report(err: &SynonymError) -> (u8, String) {
    let status = if err.is_usage_error() {
        EXIT_USAGE
    } else {
        EXIT_FAILURE
    };
    (status, format!("Error: {err}"))
}

/// Runs one combine: discover, load, merge and write.
///
/// Returns a summary of what was combined.
pub fn run(cli: &Cli) -> SynonymResult<CombineSummary> {
    let config = cli.loader_config();

    let files = discover_synonym_files(&cli.input_directory, &config)?;
    if files.is_empty() {
        tracing::warn!(
            "No files ending in '{}' found in {}",
            config.extension,
            cli.input_directory.display()
        );
    }

    let (aggregator, stats) = load_synonym_files(&files, &config)?;
    let combined = aggregator.finalize();

    let metadata = (!cli.no_metadata).then(RunMetadata::capture);
    write_combined_file(&cli.output_file, &combined, &files, metadata.as_ref())?;
    info!("Combined synonyms written to {}", cli.output_file.display());

    Ok(CombineSummary::new(&cli.output_file, &files, &stats, &combined))
}
