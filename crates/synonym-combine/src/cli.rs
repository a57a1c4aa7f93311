//! Command line arguments.

use std::path::PathBuf;

use clap::{ArgAction, Parser};
use synonym_loader::{LoaderConfig, DEFAULT_EXTENSION};

/// Combine a directory of synonym files into one deduplicated file
#[derive(Parser, Debug, Clone)]
#[command(name = "combine-synonyms")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct Cli {
    /// Directory containing the synonym files to combine
    pub input_directory: PathBuf,

    /// Path of the combined synonym file to write
    pub output_file: PathBuf,

    /// File name suffix of synonym files
    #[arg(long, env = "SYNONYM_EXTENSION", default_value = DEFAULT_EXTENSION)]
    pub extension: String,

    /// Leave out the timestamp, user and host lines
    #[arg(long)]
    pub no_metadata: bool,

    /// Read input files one after another
    #[arg(long)]
    pub sequential: bool,

    /// Print a JSON summary of the run to stdout
    #[arg(long)]
    pub summary: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Cli {
    /// Builds the loader configuration from the flags.
    pub fn loader_config(&self) -> LoaderConfig {
        LoaderConfig {
            extension: self.extension.clone(),
            parallel: !self.sequential,
        }
    }

    /// Returns the default log filter implied by `-v` and `-q`.
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }
}
