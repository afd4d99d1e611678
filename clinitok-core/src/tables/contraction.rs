//! Apostrophe tables: clitic endings, names and exceptions

use std::collections::HashSet;

/// One clitic ending such as `'s` or `n't`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractionEnding {
    /// Lower-cased ending text
    pub text: String,
    /// Length in characters
    pub len: usize,
    /// Index of the apostrophe inside the ending; the word boundary sits
    /// this many characters to the left of the apostrophe (1 for `n't`)
    pub apostrophe_index: usize,
}

impl ContractionEnding {
    fn new(text: &str) -> Self {
        let text = text.to_lowercase();
        let apostrophe_index = text.chars().position(|c| c == '\'').unwrap_or(0);
        Self {
            len: text.chars().count(),
            apostrophe_index,
            text,
        }
    }
}

/// Apostrophe handling tables
#[derive(Debug, Clone, Default)]
pub struct ContractionTable {
    /// Endings in priority order
    endings: Vec<ContractionEnding>,
    /// Letters that may follow an apostrophe at a clitic boundary
    initials: HashSet<char>,
    names: Vec<String>,
    apostrophe_starting: Vec<String>,
    apostrophe_starting_split: usize,
    do_not_break: HashSet<String>,
}

impl ContractionTable {
    /// Build the table
    pub fn new(
        endings: &[String],
        names: &[String],
        apostrophe_starting: &[String],
        apostrophe_starting_split: usize,
        do_not_break: &[String],
    ) -> Self {
        let endings: Vec<ContractionEnding> =
            endings.iter().map(|e| ContractionEnding::new(e)).collect();
        let initials = endings
            .iter()
            .filter_map(|e| e.text.chars().nth(e.apostrophe_index + 1))
            .collect();

        Self {
            endings,
            initials,
            names: lowered(names),
            apostrophe_starting: lowered(apostrophe_starting),
            apostrophe_starting_split,
            do_not_break: lowered(do_not_break).into_iter().collect(),
        }
    }

    /// Endings in priority order
    pub fn endings(&self) -> &[ContractionEnding] {
        &self.endings
    }

    /// True if `ch` (lower-cased) can follow the apostrophe of some ending
    #[inline]
    pub fn is_clitic_initial(&self, ch: char) -> bool {
        self.initials.contains(&ch)
    }

    /// Names that keep their leading apostrophe (`'assad`)
    pub fn names_starting_with_apostrophe(&self) -> &[String] {
        &self.names
    }

    /// Apostrophe-initial contractions (`'tis`, `'twas`)
    pub fn apostrophe_starting(&self) -> &[String] {
        &self.apostrophe_starting
    }

    /// Length of the contraction split off an apostrophe-initial word
    pub fn apostrophe_starting_split(&self) -> usize {
        self.apostrophe_starting_split
    }

    /// True if `word` (lower-cased) must never be split at its apostrophe
    pub fn is_do_not_break(&self, word: &str) -> bool {
        self.do_not_break.contains(word)
    }
}

fn lowered(words: &[String]) -> Vec<String> {
    words.iter().map(|w| w.to_lowercase()).collect()
}
