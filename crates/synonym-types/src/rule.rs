//! Derived one-way synonym rule.

use std::fmt;

use crate::{DIRECTED_SEPARATOR, TERM_SEPARATOR};

/// A self-inclusive directed rule derived from a term's synonym set.
///
/// Renders as `term => term, s1, s2` so that the term keeps matching
/// itself after expansion. A term with no other synonyms renders as
/// `term => term`.
///
/// # Examples
///
/// ```
/// use synonym_types::DirectedRule;
///
/// let rule = DirectedRule::new("power plant", ["power station", "generating station"]);
/// assert_eq!(
///     rule.to_string(),
///     "power plant => power plant, generating station, power station"
/// );
///
/// let lonely = DirectedRule::new("x", ["x"]);
/// assert!(lonely.is_self_only());
/// assert_eq!(lonely.to_string(), "x => x");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DirectedRule {
    /// The term being expanded.
    pub term: String,
    /// Sorted synonyms, never containing `term`.
    pub synonyms: Vec<String>,
}

impl DirectedRule {
    /// Creates a rule, dropping `term` from `synonyms` and sorting the rest.
    pub fn new<T, I, S>(term: T, synonyms: I) -> Self
    where
        T: Into<String>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let term = term.into();
        let mut synonyms: Vec<String> = synonyms
            .into_iter()
            .map(Into::into)
            .filter(|s| *s != term)
            .collect();
        synonyms.sort();
        synonyms.dedup();
        Self { term, synonyms }
    }

    /// Returns true if the rule only maps the term to itself.
    pub fn is_self_only(&self) -> bool {
        self.synonyms.is_empty()
    }
}

impl fmt::Display for DirectedRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.term, DIRECTED_SEPARATOR, self.term)?;
        for synonym in &self.synonyms {
            write!(f, "{} {}", TERM_SEPARATOR, synonym)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_excludes_own_term() {
        let rule = DirectedRule::new("x", ["z", "x", "y"]);
        assert_eq!(rule.synonyms, vec!["y", "z"]);
        assert_eq!(rule.to_string(), "x => x, y, z");
    }

    #[test]
    fn test_self_only_rule() {
        let rule = DirectedRule::new("x", Vec::<String>::new());
        assert!(rule.is_self_only());
        assert_eq!(rule.to_string(), "x => x");
    }

    #[test]
    fn test_empty_term_rule() {
        let rule = DirectedRule::new("", ["a"]);
        assert_eq!(rule.to_string(), " => , a");
    }
}
