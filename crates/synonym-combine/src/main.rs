//! Synonym file combiner binary.

use std::process::ExitCode;

use clap::Parser;
use synonym_combine::{failure_report, run, Cli, EXIT_FAILURE};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    // Wrong argument counts exit through clap with status 2
    let cli = Cli::parse();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| cli.log_level().into()),
        )
        .init();

    let summary = match run(&cli) {
        Ok(summary) => summary,
        Err(e) => {
            let (status, message) = failure_report(&e);
            eprintln!("{message}");
            return ExitCode::from(status);
        }
    };

    if cli.summary {
        match summary.to_json() {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Error: {e}");
                return ExitCode::from(EXIT_FAILURE);
            }
        }
    }

    ExitCode::SUCCESS
}
