//! Combined synonym file writer.
//!
//! Writes the merged result as a plain synonym file: a fixed header, the
//! list of combined input files, run metadata, the one-way rules and the
//! standard synonym groups. Every non-rule line is a `#` comment, so the
//! output can be fed straight back into the loader.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use synonym_types::CombinedSynonyms;

use crate::types::{SynonymFiles, SynonymResult};

const HEADER: &[&str] = &[
    "# This file contains combined synonym sets generated by merging multiple synonym files.",
    "# Synonym sets with overlapping terms are merged into a single set, and duplicate entries are removed.",
    "# Each line contains synonyms, separated by commas, which can be used in Elasticsearch or other search systems.",
    "# The lines are automatically deduplicated and sorted for clarity and performance.",
    "# Example:",
    "# power plant => power plant, power station, generating station, generation facility",
];

const REVIEW_NOTICE: &[&str] = &[
    "# IMPORTANT: This combined synonym file should be reviewed by a human to ensure accuracy.",
    "# One-way synonyms are written on separate lines to ensure correct handling in Elasticsearch.",
];

const UNKNOWN: &str = "unknown";

/// Where and when a combined file was generated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunMetadata {
    /// Local time formatted as `YYYY-MM-DD HH:MM:SS`.
    pub timestamp: String,
    /// Invoking user.
    pub user: String,
    /// Host name.
    pub hostname: String,
}

impl RunMetadata {
    /// Captures the current time, user and host.
    ///
    /// Missing values are reported as `unknown` rather than failing.
    pub fn capture() -> Self {
        Self {
            timestamp: chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            user: current_user().unwrap_or_else(|| UNKNOWN.to_string()),
            hostname: current_hostname().unwrap_or_else(|| UNKNOWN.to_string()),
        }
    }
}

/// Login name from the environment, then from the password database.
fn current_user() -> Option<String> {
    first_env(&["LOGNAME", "USER", "LNAME", "USERNAME"]).or_else(system_user)
}

/// Host name from the system, then from the environment.
fn current_hostname() -> Option<String> {
    system_hostname().or_else(|| first_env(&["HOSTNAME", "COMPUTERNAME"]))
}

fn first_env(keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|key| std::env::var(key).ok())
        .find(|value| !value.trim().is_empty())
}

#[cfg(unix)]
fn system_user() -> Option<String> {
    use nix::unistd::{Uid, User};

    User::from_uid(Uid::current())
        .ok()
        .flatten()
        .map(|user| user.name)
        .filter(|name| !name.is_empty())
}

#[cfg(not(unix))]
fn system_user() -> Option<String> {
    None
}

#[cfg(unix)]
fn system_hostname() -> Option<String> {
    nix::unistd::gethostname()
        .ok()
        .map(|name| name.to_string_lossy().into_owned())
        .filter(|name| !name.is_empty())
}

#[cfg(not(unix))]
fn system_hostname() -> Option<String> {
    None
}

/// Writes the combined synonym file format to any writer.
///
/// Metadata lines are left out when `metadata` is `None`.
pub fn write_combined<W: Write>(
    out: &mut W,
    combined: &CombinedSynonyms,
    files: &SynonymFiles,
    metadata: Option<&RunMetadata>,
) -> SynonymResult<()> {
    for line in HEADER {
        writeln!(out, "{line}")?;
    }
    writeln!(out)?;

    for line in REVIEW_NOTICE {
        writeln!(out, "{line}")?;
    }
    writeln!(out)?;

    writeln!(out, "# Files combined:")?;
    for path in &files.paths {
        writeln!(out, "# - {}", path.display())?;
    }

    if let Some(metadata) = metadata {
        writeln!(out)?;
        writeln!(out, "# Timestamp: {}", metadata.timestamp)?;
        writeln!(out, "# User: {}", metadata.user)?;
        writeln!(out, "# Hostname: {}", metadata.hostname)?;
    }
    writeln!(out)?;

    if !combined.directed_rules.is_empty() {
        writeln!(out, "# One-way synonym rules detected:")?;
        for rule in &combined.directed_rules {
            writeln!(out, "{rule}")?;
        }
        writeln!(out)?;
    }

    writeln!(out, "# Standard synonyms:")?;
    for line in &combined.combined_lines {
        writeln!(out, "{line}")?;
    }

    Ok(())
}

/// Writes the combined synonym file to `path`, replacing any existing file.
pub fn write_combined_file<P: AsRef<Path>>(
    path: P,
    combined: &CombinedSynonyms,
    files: &SynonymFiles,
    metadata: Option<&RunMetadata>,
) -> SynonymResult<()> {
    let mut out = BufWriter::new(File::create(path.as_ref())?);
    write_combined(&mut out, combined, files, metadata)?;
    out.flush()?;
    Ok(())
}
