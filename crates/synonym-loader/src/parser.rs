//! Synonym line parser.
//!
//! Provides [`parse_line`] for a single line and a streaming
//! [`SynonymFileReader`] that skips blank and comment lines.
//!
//! Parsing never fails: a line without commas is a one-term group, empty
//! fields become empty terms, and only the first `=>` splits a directed
//! rule (any later `=>` stays in the right-hand text).

use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use synonym_types::{SynonymLine, DIRECTED_SEPARATOR, TERM_SEPARATOR};

use crate::types::{SynonymError, SynonymResult};

/// Marks a comment line when it is the first non-whitespace character.
pub const COMMENT_PREFIX: char = '#';

/// Parses one raw synonym line.
///
/// # Examples
///
/// ```
/// use synonym_loader::parse_line;
/// use synonym_types::SynonymLine;
///
/// assert_eq!(parse_line("a, b"), SynonymLine::undirected(["a", "b"]));
/// assert_eq!(parse_line("x => y, z"), SynonymLine::directed("x", ["y", "z"]));
/// ```
pub fn parse_line(line: &str) -> SynonymLine {
    match line.split_once(DIRECTED_SEPARATOR) {
        Some((left, right)) => SynonymLine::Directed {
            left: left.trim().to_string(),
            right: split_terms(right),
        },
        None => SynonymLine::Undirected {
            terms: split_terms(line),
        },
    }
}

/// Returns true for lines that never reach the parser.
pub fn is_ignorable(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty() || trimmed.starts_with(COMMENT_PREFIX)
}

fn split_terms(text: &str) -> BTreeSet<String> {
    text.split(TERM_SEPARATOR)
        .map(|term| term.trim().to_string())
        .collect()
}

/// A streaming reader for synonym files.
///
/// Reads a source line by line, skipping blank and comment lines, and
/// yields one parsed [`SynonymLine`] per remaining line.
pub struct SynonymFileReader<R: BufRead> {
    reader: R,
    buffer: String,
    lines_read: usize,
    lines_skipped: usize,
}

impl SynonymFileReader<BufReader<File>> {
    /// Opens a synonym file.
    ///
    /// # Errors
    /// Returns an error if the file does not exist or cannot be opened.
    pub fn from_path<P: AsRef<Path>>(path: P) -> SynonymResult<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(SynonymError::FileNotFound {
                path: path.display().to_string(),
            });
        }

        let file = File::open(path)?;
        Ok(Self::from_reader(BufReader::new(file)))
    }
}

impl<R: BufRead> SynonymFileReader<R> {
    /// Wraps any buffered reader.
    pub fn from_reader(reader: R) -> Self {
        Self {
            reader,
            buffer: String::new(),
            lines_read: 0,
            lines_skipped: 0,
        }
    }

    /// Returns the number of physical lines read so far.
    pub fn lines_read(&self) -> usize {
        self.lines_read
    }

    /// Returns the number of blank and comment lines skipped so far.
    pub fn lines_skipped(&self) -> usize {
        self.lines_skipped
    }

    /// Parses all remaining lines into a Vec.
    pub fn parse_all(mut self) -> SynonymResult<Vec<SynonymLine>> {
        self.by_ref().collect()
    }
}

impl<R: BufRead> Iterator for SynonymFileReader<R> {
    type Item = SynonymResult<SynonymLine>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            self.buffer.clear();
            match self.reader.read_line(&mut self.buffer) {
                Ok(0) => return None, // End of file
                Ok(_) => {
                    self.lines_read += 1;

                    if is_ignorable(&self.buffer) {
                        self.lines_skipped += 1;
                        continue;
                    }

                    return Some(Ok(parse_line(self.buffer.trim())));
                }
                Err(e) => return Some(Err(e.into())),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn terms(line: &SynonymLine) -> Vec<&str> {
        line.terms().iter().map(String::as_str).collect()
    }

    #[test]
    fn test_parse_undirected() {
        let line = parse_line(" tv ,television,  telly ");
        assert!(!line.is_directed());
        assert_eq!(terms(&line), vec!["television", "telly", "tv"]);
    }

    #[test]
    fn test_parse_directed() {
        let line = parse_line("ipod => i-pod, i pod");
        assert_eq!(line.left(), Some("ipod"));
        assert_eq!(terms(&line), vec!["i pod", "i-pod"]);
    }

    #[test]
    fn test_parse_single_term() {
        let line = parse_line("lonely");
        assert_eq!(line, SynonymLine::undirected(["lonely"]));
    }

    #[test]
    fn test_parse_keeps_empty_terms() {
        let line = parse_line("a,,b,");
        assert_eq!(terms(&line), vec!["", "a", "b"]);

        let line = parse_line("x =>");
        assert_eq!(line, SynonymLine::directed("x", [""]));
    }

    #[test]
    fn test_parse_splits_on_first_separator_only() {
        let line = parse_line("a => b => c, d");
        assert_eq!(line.left(), Some("a"));
        assert_eq!(terms(&line), vec!["b => c", "d"]);
    }

    #[test]
    fn test_is_ignorable() {
        assert!(is_ignorable(""));
        assert!(is_ignorable("   \t"));
        assert!(is_ignorable("# comment"));
        assert!(is_ignorable("   # indented comment"));
        assert!(!is_ignorable("a, b # not a comment"));
    }

    #[test]
    fn test_reader_skips_comments_and_blanks() {
        let input = "# header\n\na, b\r\n   \n  # note\nx => y\n";
        let mut reader = SynonymFileReader::from_reader(Cursor::new(input));

        let lines: Vec<_> = reader.by_ref().map(|r| r.unwrap()).collect();
        assert_eq!(
            lines,
            vec![
                SynonymLine::undirected(["a", "b"]),
                SynonymLine::directed("x", ["y"]),
            ]
        );
        assert_eq!(reader.lines_read(), 6);
        assert_eq!(reader.lines_skipped(), 4);
    }

    #[test]
    fn test_reader_last_line_without_newline() {
        let reader = SynonymFileReader::from_reader(Cursor::new("a, b\nc, d"));
        let lines = reader.parse_all().unwrap();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1], SynonymLine::undirected(["c", "d"]));
    }

    #[test]
    fn test_reader_only_comments() {
        let reader = SynonymFileReader::from_reader(Cursor::new("# a\n\n#b\n"));
        assert!(reader.parse_all().unwrap().is_empty());
    }

    #[test]
    fn test_reader_invalid_utf8_is_error() {
        let bytes: &[u8] = &[b'a', b',', 0xff, 0xfe, b'\n'];
        let mut reader = SynonymFileReader::from_reader(Cursor::new(bytes));
        assert!(matches!(reader.next(), Some(Err(SynonymError::Io(_)))));
    }

    #[test]
    fn test_from_path_missing_file() {
        let result = SynonymFileReader::from_path("/nonexistent/synonyms.txt");
        assert!(matches!(result, Err(SynonymError::FileNotFound { .. })));
    }
}
