//! Final output of a synonym merge.

use crate::DirectedRule;

/// Result of merging a set of synonym files.
///
/// Both lists are ready to be written out: `combined_lines` holds one
/// sorted, comma-separated group per entry (the list itself sorted), and
/// `directed_rules` holds one rule per term in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombinedSynonyms {
    /// Merged undirected groups rendered as `a, b, c`.
    pub combined_lines: Vec<String>,
    /// Self-inclusive directed rules.
    pub directed_rules: Vec<DirectedRule>,
}

impl CombinedSynonyms {
    /// Renders every directed rule as a line.
    pub fn directed_rule_lines(&self) -> Vec<String> {
        self.directed_rules.iter().map(ToString::to_string).collect()
    }

    /// Returns true if nothing was merged.
    pub fn is_empty(&self) -> bool {
        self.combined_lines.is_empty() && self.directed_rules.is_empty()
    }
}
