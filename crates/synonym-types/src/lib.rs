//! # synonym-types
//!
//! Type definitions for search-engine synonym files.
//!
//! This crate provides Rust type definitions for the two kinds of lines
//! found in synonym filter files (as used by Elasticsearch, OpenSearch and
//! Solr) and for the merged output produced by `synonym-loader`.
//!
//! ## Features
//!
//! - `serde` (default): Enables serialization/deserialization support via serde.
//!   Disable this feature for zero-dependency usage.
//!
//! ## Usage
//!
//! ```rust
//! use synonym_types::{DirectedRule, SynonymLine};
//!
//! // An undirected group: every term is interchangeable
//! let line = SynonymLine::undirected(["tv", "television"]);
//! assert!(!line.is_directed());
//!
//! // A directed expansion: "ipod" expands to "i-pod" and "i pod"
//! let line = SynonymLine::directed("ipod", ["i-pod", "i pod"]);
//! assert_eq!(line.left(), Some("ipod"));
//!
//! // A derived rule always lists its own term first
//! let rule = DirectedRule::new("ipod", ["i pod", "i-pod", "ipod"]);
//! assert_eq!(rule.to_string(), "ipod => ipod, i pod, i-pod");
//! ```

#![warn(missing_docs)]

mod combined;
mod line;
mod rule;

// Re-export all public types at crate root
pub use combined::CombinedSynonyms;
pub use line::SynonymLine;
pub use rule::DirectedRule;

/// Separator between the left and right side of a directed rule.
pub const DIRECTED_SEPARATOR: &str = "=>";

/// Separator between terms on either side of a line.
pub const TERM_SEPARATOR: char = ',';

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_types_are_exported() {
        let _line = SynonymLine::undirected(["a", "b"]);
        let _rule = DirectedRule::new("a", ["b"]);
        let _combined = CombinedSynonyms::default();
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_roundtrip() {
        let line = SynonymLine::directed("x", ["y", "z"]);

        let json = serde_json::to_string(&line).unwrap();
        let parsed: SynonymLine = serde_json::from_str(&json).unwrap();
        assert_eq!(line, parsed);

        let combined = CombinedSynonyms {
            combined_lines: vec!["a, b, c".to_string()],
            directed_rules: vec![DirectedRule::new("x", ["y", "z"])],
        };
        let json = serde_json::to_string(&combined).unwrap();
        let parsed: CombinedSynonyms = serde_json::from_str(&json).unwrap();
        assert_eq!(combined, parsed);
    }
}
