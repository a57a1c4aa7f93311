//! Synonym file discovery and loading utilities.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use synonym_types::SynonymLine;
use tracing::{debug, info};

use crate::aggregator::SynonymAggregator;
use crate::parser::SynonymFileReader;
use crate::types::{LoadStats, LoaderConfig, SynonymError, SynonymFiles, SynonymResult};

/// Discovers synonym files in a directory.
///
/// Every regular file whose name ends with `config.extension` is picked
/// up. Subdirectories are not searched. The result is sorted by path so
/// repeated runs combine files in the same order.
pub fn discover_synonym_files<P: AsRef<Path>>(
    path: P,
    config: &LoaderConfig,
) -> SynonymResult<SynonymFiles> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(SynonymError::DirectoryNotFound {
            path: path.display().to_string(),
        });
    }
    if !path.is_dir() {
        return Err(SynonymError::NotADirectory {
            path: path.display().to_string(),
        });
    }

    let mut files = SynonymFiles::new(path);

    for entry in fs::read_dir(path)? {
        let entry = entry?;
        let filename = entry.file_name();
        let filename_str = filename.to_string_lossy();

        if !filename_str.ends_with(config.extension.as_str()) {
            continue;
        }
        if !entry.file_type()?.is_file() {
            continue;
        }

        files.paths.push(entry.path());
    }

    files.paths.sort();
    debug!("Discovered {} synonym files in {}", files.len(), path.display());

    Ok(files)
}

/// Parsed contents of one synonym file.
struct ParsedFile {
    path: PathBuf,
    lines: Vec<SynonymLine>,
    lines_read: usize,
    lines_skipped: usize,
}

fn read_file(path: &Path) -> SynonymResult<ParsedFile> {
    let mut reader = SynonymFileReader::from_path(path)?;
    let lines = reader.by_ref().collect::<SynonymResult<Vec<_>>>()?;

    Ok(ParsedFile {
        path: path.to_path_buf(),
        lines,
        lines_read: reader.lines_read(),
        lines_skipped: reader.lines_skipped(),
    })
}

fn read_files(paths: &[PathBuf], config: &LoaderConfig) -> SynonymResult<Vec<ParsedFile>> {
    #[cfg(feature = "parallel")]
    if config.parallel {
        return paths.par_iter().map(|path| read_file(path)).collect();
    }

    #[cfg(not(feature = "parallel"))]
    let _ = config;

    paths.iter().map(|path| read_file(path)).collect()
}

/// Loads every discovered file into a fresh aggregator.
///
/// Files may be read concurrently, but records are always ingested in
/// file order then line order. The first read error aborts the load.
pub fn load_synonym_files(
    files: &SynonymFiles,
    config: &LoaderConfig,
) -> SynonymResult<(SynonymAggregator, LoadStats)> {
    let start = Instant::now();
    let parsed = read_files(&files.paths, config)?;

    let mut aggregator = SynonymAggregator::new();
    let mut stats = LoadStats::default();

    for file in parsed {
        info!("Processing file: {}", file.path.display());

        stats.files_read += 1;
        stats.lines_read += file.lines_read;
        stats.lines_skipped += file.lines_skipped;
        stats.records += file.lines.len();
        stats.directed_records += file.lines.iter().filter(|l| l.is_directed()).count();

        aggregator.ingest_all(file.lines);
    }

    stats.load_time_ms = start.elapsed().as_millis() as u64;
    debug!(
        "Ingested {} records into {} groups ({} mapped terms)",
        stats.records,
        aggregator.group_count(),
        aggregator.term_count()
    );

    Ok((aggregator, stats))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_discover_filters_by_extension() {
        let dir = TempDir::new().unwrap();
        write(&dir, "b.txt", "b, c\n");
        write(&dir, "a.txt", "a, b\n");
        write(&dir, "notes.md", "x, y\n");
        fs::create_dir(dir.path().join("nested.txt")).unwrap();

        let files = discover_synonym_files(dir.path(), &LoaderConfig::default()).unwrap();
        let names: Vec<_> = files
            .paths
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.txt", "b.txt"]);
        assert_eq!(files.directory, dir.path());
    }

    #[test]
    fn test_discover_custom_extension() {
        let dir = TempDir::new().unwrap();
        write(&dir, "a.txt", "a, b\n");
        write(&dir, "b.syn", "b, c\n");

        let files = discover_synonym_files(dir.path(), &LoaderConfig::with_extension(".syn")).unwrap();
        assert_eq!(files.len(), 1);
        assert!(files.paths[0].ends_with("b.syn"));
    }

    #[test]
    fn test_discover_missing_directory() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing");

        let result = discover_synonym_files(&missing, &LoaderConfig::default());
        assert!(matches!(result, Err(SynonymError::DirectoryNotFound { .. })));
    }

    #[test]
    fn test_discover_file_instead_of_directory() {
        let dir = TempDir::new().unwrap();
        let file = write(&dir, "a.txt", "a, b\n");

        let result = discover_synonym_files(&file, &LoaderConfig::default());
        assert!(matches!(result, Err(SynonymError::NotADirectory { .. })));
    }

    #[test]
    fn test_load_merges_across_files() {
        let dir = TempDir::new().unwrap();
        write(&dir, "1.txt", "# first file\na, b\n\nx => y, z\n");
        write(&dir, "2.txt", "b, c\n");

        for config in [LoaderConfig::default(), LoaderConfig::sequential()] {
            let files = discover_synonym_files(dir.path(), &config).unwrap();
            let (aggregator, stats) = load_synonym_files(&files, &config).unwrap();

            let combined = aggregator.finalize();
            assert_eq!(combined.combined_lines, vec!["a, b, c", "y, z"]);
            assert!(combined
                .directed_rule_lines()
                .contains(&"x => x, y, z".to_string()));

            assert_eq!(stats.files_read, 2);
            assert_eq!(stats.lines_read, 5);
            assert_eq!(stats.lines_skipped, 2);
            assert_eq!(stats.records, 3);
            assert_eq!(stats.directed_records, 1);
        }
    }

    #[test]
    fn test_load_ingests_in_file_order() {
        let dir = TempDir::new().unwrap();
        write(&dir, "1.txt", "x => y\n");
        write(&dir, "2.txt", "b, a\n");

        let config = LoaderConfig::default();
        let files = discover_synonym_files(dir.path(), &config).unwrap();
        let (aggregator, _) = load_synonym_files(&files, &config).unwrap();

        let terms: Vec<_> = aggregator.terms().collect();
        assert_eq!(terms, vec!["x", "a", "b"]);
    }

    #[test]
    fn test_comment_only_file_contributes_nothing() {
        let dir = TempDir::new().unwrap();
        write(&dir, "empty.txt", "# only comments\n\n   \n  # more\n");

        let config = LoaderConfig::default();
        let files = discover_synonym_files(dir.path(), &config).unwrap();
        let (aggregator, stats) = load_synonym_files(&files, &config).unwrap();

        assert!(aggregator.is_empty());
        assert_eq!(aggregator.group_count(), 0);
        assert_eq!(stats.records, 0);
        assert_eq!(stats.lines_skipped, 4);
    }

    #[test]
    fn test_load_invalid_utf8_fails() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("bad.txt"), [b'a', b',', 0xff, b'\n']).unwrap();

        let config = LoaderConfig::default();
        let files = discover_synonym_files(dir.path(), &config).unwrap();
        assert!(matches!(
            load_synonym_files(&files, &config),
            Err(SynonymError::Io(_))
        ));
    }
}
