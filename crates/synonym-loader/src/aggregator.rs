//! Synonym aggregation.
//!
//! Merges parsed synonym lines into disjoint undirected groups and keeps a
//! per-term synonym map from which self-inclusive directed rules are derived.
//!
//! ## Group merging
//!
//! Every ingested set (an undirected group, or the right-hand side of a
//! directed rule) absorbs all existing groups it shares a term with, and the
//! merged set is appended as a new group. Groups are therefore always
//! disjoint, and the order of live groups is the order in which their
//! current merged set was inserted.
//!
//! Overlap lookup goes through a term -> group index instead of scanning all
//! groups, so a merge costs one lookup per incoming term.
//!
//! ```
//! use synonym_loader::{parse_line, SynonymAggregator};
//!
//! let mut aggregator = SynonymAggregator::new();
//! for line in ["a, b", "b, c", "x => y, z"] {
//!     aggregator.ingest(parse_line(line));
//! }
//!
//! let combined = aggregator.finalize();
//! assert_eq!(combined.combined_lines, vec!["a, b, c", "y, z"]);
//! assert!(combined.directed_rule_lines().contains(&"x => x, y, z".to_string()));
//! assert!(!aggregator.synonyms_of("y").contains("x"));
//! ```

use std::collections::{BTreeSet, HashMap};

use synonym_types::{CombinedSynonyms, DirectedRule, SynonymLine};

static NO_SYNONYMS: BTreeSet<String> = BTreeSet::new();

/// Dead slots tolerated before the slot list is compacted.
const COMPACT_MIN_DEAD_SLOTS: usize = 32;

/// Accumulates synonym lines and produces the merged output.
#[derive(Default)]
pub struct SynonymAggregator {
    /// Group slots in insertion order; absorbed groups leave a `None`.
    slots: Vec<Option<BTreeSet<String>>>,
    /// Number of `Some` entries in `slots`.
    live_groups: usize,
    /// Slot of the live group containing each term.
    group_index: HashMap<String, usize>,
    /// Every synonym observed per term.
    synonym_map: HashMap<String, BTreeSet<String>>,
    /// Keys of `synonym_map` in order of first appearance.
    term_order: Vec<String>,
}

impl std::fmt::Debug for SynonymAggregator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SynonymAggregator")
            .field("groups", &self.group_count())
            .field("grouped_terms", &self.group_index.len())
            .field("mapped_terms", &self.term_order.len())
            .finish()
    }
}

impl SynonymAggregator {
    /// Creates a new empty aggregator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Ingests one parsed line.
    ///
    /// A directed line with an empty left side (`=> a, b`) is ingested as
    /// the undirected group `a, b`.
    pub fn ingest(&mut self, line: SynonymLine) {
        match line {
            SynonymLine::Directed { left, right } if left.is_empty() => {
                self.ingest(SynonymLine::Undirected { terms: right });
            }
            SynonymLine::Undirected { terms } => {
                let Some(slot) = self.merge_group(terms) else {
                    return;
                };
                if let Some(group) = &self.slots[slot] {
                    for term in group {
                        record_synonyms(&mut self.synonym_map, &mut self.term_order, term, group);
                    }
                }
            }
            SynonymLine::Directed { left, right } => {
                // The right-hand side joins the undirected groups as well,
                // but only `left` gains map entries.
                self.merge_group(right.clone());
                record_synonyms(&mut self.synonym_map, &mut self.term_order, &left, &right);
            }
        }
    }

    /// Ingests every line of an iterator, in order.
    pub fn ingest_all<I>(&mut self, lines: I)
    where
        I: IntoIterator<Item = SynonymLine>,
    {
        for line in lines {
            self.ingest(line);
        }
    }

    /// Merges `terms` with every overlapping group and appends the result.
    ///
    /// Returns the slot of the new group, or `None` for an empty set.
    fn merge_group(&mut self, mut terms: BTreeSet<String>) -> Option<usize> {
        if terms.is_empty() {
            return None;
        }

        let mut overlapping: Vec<usize> = terms
            .iter()
            .filter_map(|term| self.group_index.get(term).copied())
            .collect();
        overlapping.sort_unstable();
        overlapping.dedup();

        for slot in overlapping {
            if let Some(group) = self.slots[slot].take() {
                terms.extend(group);
                self.live_groups -= 1;
            }
        }

        let dead = self.slots.len() - self.live_groups;
        if dead >= COMPACT_MIN_DEAD_SLOTS && dead > self.live_groups {
            self.compact();
        }

        let slot = self.slots.len();
        for term in &terms {
            self.group_index.insert(term.clone(), slot);
        }
        self.slots.push(Some(terms));
        self.live_groups += 1;
        Some(slot)
    }

    /// Drops absorbed slots, keeping live groups in order.
    fn compact(&mut self) {
        self.slots.retain(Option::is_some);
        for (slot, group) in self.slots.iter().enumerate() {
            for term in group.iter().flatten() {
                if let Some(index) = self.group_index.get_mut(term) {
                    *index = slot;
                }
            }
        }
    }

    /// Returns the live groups in insertion order.
    pub fn groups(&self) -> impl Iterator<Item = &BTreeSet<String>> {
        self.slots.iter().flatten()
    }

    /// Returns the number of live groups.
    pub fn group_count(&self) -> usize {
        self.live_groups
    }

    /// Returns the group containing `term`, if any.
    pub fn group_of(&self, term: &str) -> Option<&BTreeSet<String>> {
        let slot = *self.group_index.get(term)?;
        self.slots.get(slot)?.as_ref()
    }

    /// Returns every synonym recorded for `term`.
    ///
    /// Terms never recorded yield an empty set.
    pub fn synonyms_of(&self, term: &str) -> &BTreeSet<String> {
        self.synonym_map.get(term).unwrap_or(&NO_SYNONYMS)
    }

    /// Returns true if `term` is a key of the synonym map.
    pub fn contains_term(&self, term: &str) -> bool {
        self.synonym_map.contains_key(term)
    }

    /// Returns the synonym map keys in order of first appearance.
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.term_order.iter().map(String::as_str)
    }

    /// Returns the number of synonym map keys.
    pub fn term_count(&self) -> usize {
        self.term_order.len()
    }

    /// Returns true if nothing has been ingested.
    pub fn is_empty(&self) -> bool {
        self.group_index.is_empty() && self.term_order.is_empty()
    }

    /// Renders the merged groups and derives one directed rule per term.
    pub fn finalize(&self) -> CombinedSynonyms {
        let mut combined_lines: Vec<String> = self
            .groups()
            .map(|group| {
                group
                    .iter()
                    .map(String::as_str)
                    .collect::<Vec<_>>()
                    .join(", ")
            })
            .collect();
        combined_lines.sort();

        let directed_rules = self
            .term_order
            .iter()
            .map(|term| DirectedRule::new(term.as_str(), self.synonyms_of(term).iter().cloned()))
            .collect();

        CombinedSynonyms {
            combined_lines,
            directed_rules,
        }
    }
}

fn record_synonyms(
    synonym_map: &mut HashMap<String, BTreeSet<String>>,
    term_order: &mut Vec<String>,
    term: &str,
    synonyms: &BTreeSet<String>,
) {
    if let Some(entry) = synonym_map.get_mut(term) {
        entry.extend(synonyms.iter().cloned());
        return;
    }
    term_order.push(term.to_string());
    synonym_map.insert(term.to_string(), synonyms.clone());
}
