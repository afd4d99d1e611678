//! Hyphen prefix, suffix and whole-word tables

use std::collections::HashSet;

/// Hyphen compound tables, lower-cased
#[derive(Debug, Clone, Default)]
pub struct HyphenTable {
    prefixes: HashSet<String>,
    /// Suffixes with one hyphen (`-esque`)
    suffixes: HashSet<String>,
    /// Suffixes with two hyphens (`-o-torium`)
    double_suffixes: HashSet<String>,
    words: HashSet<String>,
}

impl HyphenTable {
    /// Build the table; suffixes are sorted by their hyphen count
    pub fn new(prefixes: &[String], suffixes: &[String], words: &[String]) -> Self {
        let (double, single): (Vec<String>, Vec<String>) = suffixes
            .iter()
            .map(|s| s.to_lowercase())
            .partition(|s| s.matches('-').count() == 2);

        Self {
            prefixes: prefixes.iter().map(|p| p.to_lowercase()).collect(),
            suffixes: single.into_iter().collect(),
            double_suffixes: double.into_iter().collect(),
            words: words.iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    /// Prefix including its hyphen (`pre-`)
    #[inline]
    pub fn is_prefix(&self, s: &str) -> bool {
        self.prefixes.contains(s)
    }

    /// One-hyphen suffix including its hyphen (`-esque`)
    #[inline]
    pub fn is_suffix(&self, s: &str) -> bool {
        self.suffixes.contains(s)
    }

    /// Two-hyphen suffix (`-o-torium`)
    #[inline]
    pub fn is_double_suffix(&self, s: &str) -> bool {
        self.double_suffixes.contains(s)
    }

    /// Whole hyphenated word (`uh-oh`)
    #[inline]
    pub fn is_word(&self, s: &str) -> bool {
        self.words.contains(s)
    }
}
