//! Punctuation character lookup with O(1) ASCII fast path

use std::collections::HashSet;

/// Fast punctuation lookup table
#[derive(Debug, Clone)]
pub struct PunctTable {
    /// ASCII lookup table for chars 0-127
    ascii_table: [bool; 128],
    /// Non-ASCII punctuation (rare)
    non_ascii: HashSet<char>,
}

impl PunctTable {
    /// Create from a list of punctuation characters
    pub fn new(chars: impl IntoIterator<Item = char>) -> Self {
        let mut ascii_table = [false; 128];
        let mut non_ascii = HashSet::new();

        for ch in chars {
            if ch.is_ascii() {
                ascii_table[ch as usize] = true;
            } else {
                non_ascii.insert(ch);
            }
        }

        Self {
            ascii_table,
            non_ascii,
        }
    }

    /// Check if character is punctuation - hot path
    #[inline]
    pub fn contains(&self, ch: char) -> bool {
        if ch.is_ascii() {
            self.ascii_table[ch as usize]
        } else {
            self.non_ascii.contains(&ch)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_punctuation_lookup() {
        let table = PunctTable::new(";:,.(){}[]<>'\"/\\-".chars().chain(['«']));

        assert!(table.contains('.'));
        assert!(table.contains('\\'));
        assert!(table.contains('-'));
        assert!(table.contains('«'));
        assert!(!table.contains('?'));
        assert!(!table.contains('@'));
        assert!(!table.contains('»'));
    }
}
