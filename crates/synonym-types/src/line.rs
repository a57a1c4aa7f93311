//! Parsed synonym line.
//!
//! This module provides the `SynonymLine` enum representing one
//! non-comment line of a synonym file after parsing.

use std::collections::BTreeSet;

/// One parsed line of a synonym file.
///
/// Terms are stored trimmed. Empty terms are kept as they appear in the
/// input, so `"a,,b"` yields the three terms `""`, `"a"` and `"b"`.
///
/// # Examples
///
/// ```
/// use synonym_types::SynonymLine;
///
/// let line = SynonymLine::directed("x", ["y", "z"]);
/// assert!(line.is_directed());
/// assert_eq!(line.left(), Some("x"));
/// assert_eq!(line.terms().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum SynonymLine {
    /// A comma-separated group, all members mutually interchangeable.
    Undirected {
        /// Members of the group.
        terms: BTreeSet<String>,
    },
    /// A one-way expansion `left => right, ...`.
    Directed {
        /// The expanding term.
        left: String,
        /// Terms the left side expands to.
        right: BTreeSet<String>,
    },
}

impl SynonymLine {
    /// Creates an undirected line from any iterator of terms.
    pub fn undirected<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Undirected {
            terms: terms.into_iter().map(Into::into).collect(),
        }
    }

    /// Creates a directed line.
    pub fn directed<L, I, S>(left: L, right: I) -> Self
    where
        L: Into<String>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Directed {
            left: left.into(),
            right: right.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns true if this is a directed rule.
    pub fn is_directed(&self) -> bool {
        matches!(self, Self::Directed { .. })
    }

    /// Returns the left-hand term of a directed rule.
    pub fn left(&self) -> Option<&str> {
        match self {
            Self::Undirected { .. } => None,
            Self::Directed { left, .. } => Some(left),
        }
    }

    /// Returns the set that takes part in group merging: the whole group
    /// for an undirected line, the right-hand side for a directed one.
    pub fn terms(&self) -> &BTreeSet<String> {
        match self {
            Self::Undirected { terms } => terms,
            Self::Directed { right, .. } => right,
        }
    }
}
