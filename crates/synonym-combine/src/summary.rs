//! JSON run summary.

use std::path::{Path, PathBuf};

use serde::Serialize;
use synonym_loader::{LoadStats, SynonymFiles};
use synonym_types::CombinedSynonyms;

/// What a combine run read and wrote.
#[derive(Debug, Clone, Serialize)]
pub struct CombineSummary {
    /// Combined output file.
    pub output_file: PathBuf,
    /// Input files, in the order they were combined.
    pub files: Vec<PathBuf>,
    /// Physical lines read.
    pub lines_read: usize,
    /// Blank and comment lines skipped.
    pub lines_skipped: usize,
    /// Parsed lines ingested.
    pub records: usize,
    /// Ingested directed lines.
    pub directed_records: usize,
    /// Merged undirected groups written.
    pub groups: usize,
    /// One-way rules written.
    pub directed_rules: usize,
    /// Load time in milliseconds.
    pub load_time_ms: u64,
}

impl CombineSummary {
    pub(crate) fn new(
        output_file: &Path,
        files: &SynonymFiles,
        stats: &LoadStats,
        combined: &CombinedSynonyms,
    ) -> Self {
        Self {
            output_file: output_file.to_path_buf(),
            files: files.paths.clone(),
            lines_read: stats.lines_read,
            lines_skipped: stats.lines_skipped,
            records: stats.records,
            directed_records: stats.directed_records,
            groups: combined.combined_lines.len(),
            directed_rules: combined.directed_rules.len(),
            load_time_ms: stats.load_time_ms,
        }
    }

    /// Serializes the summary as pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use synonym_types::DirectedRule;

    #[test]
    fn test_summary_json() {
        let files = SynonymFiles {
            directory: PathBuf::from("in"),
            paths: vec![PathBuf::from("in/a.txt")],
        };
        let stats = LoadStats {
            files_read: 1,
            lines_read: 3,
            lines_skipped: 1,
            records: 2,
            directed_records: 1,
            load_time_ms: 0,
        };
        let combined = CombinedSynonyms {
            combined_lines: vec!["a, b".to_string()],
            directed_rules: vec![DirectedRule::new("a", ["b"]), DirectedRule::new("b", ["a"])],
        };

        let summary = CombineSummary::new(Path::new("out.txt"), &files, &stats, &combined);
        let value: serde_json::Value = serde_json::from_str(&summary.to_json().unwrap()).unwrap();

        assert_eq!(value["output_file"], "out.txt");
        assert_eq!(value["files"][0], "in/a.txt");
        assert_eq!(value["records"], 2);
        assert_eq!(value["groups"], 1);
        assert_eq!(value["directed_rules"], 2);
    }
}
