//! Words written as one run but split into several tokens

use smallvec::SmallVec;
use std::collections::HashMap;

/// Part lengths of one multi-token word
pub type PartLengths = SmallVec<[usize; 3]>;

/// Lookup from lower-cased word to its part lengths
#[derive(Debug, Clone, Default)]
pub struct MultiTokenTable {
    words: HashMap<String, PartLengths>,
    /// Longest word in characters, to skip lookups for longer runs
    max_len: usize,
}

impl MultiTokenTable {
    /// Build from `(word, lengths)` pairs
    pub fn new(entries: impl IntoIterator<Item = (String, Vec<usize>)>) -> Self {
        let mut table = Self::default();
        for (word, lengths) in entries {
            let word = word.to_lowercase();
            table.max_len = table.max_len.max(word.chars().count());
            table.words.insert(word, lengths.into_iter().collect());
        }
        table
    }

    /// Longest word in characters
    #[inline]
    pub fn max_len(&self) -> usize {
        self.max_len
    }

    /// Part lengths for `word`, which must already be lower-cased
    pub fn parts(&self, word: &str) -> Option<&[usize]> {
        self.words.get(word).map(|parts| parts.as_slice())
    }
}
