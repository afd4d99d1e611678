//! Character view of the input shared by the scanner and its rules
//!
//! Offsets everywhere in this crate are character indices. The view keeps
//! the original characters (for token text and case attributes) next to a
//! lower-cased copy of the same length (for table matching).

/// Coarse character classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Class {
    /// Alphabetic character
    Letter,
    /// Numeric character
    Digit,
    /// `\n` or `\r`
    Newline,
    /// Whitespace other than a newline
    Space,
    /// Anything else
    Other,
}

impl Class {
    /// Classify a character
    #[inline]
    pub fn from_char(ch: char) -> Self {
        match ch {
            '\n' | '\r' => Class::Newline,
            c if c.is_alphabetic() => Class::Letter,
            c if c.is_numeric() => Class::Digit,
            c if c.is_whitespace() => Class::Space,
            _ => Class::Other,
        }
    }
}

/// Lower-case a single character without changing the character count
#[inline]
fn fold(ch: char) -> char {
    if ch.is_ascii() {
        ch.to_ascii_lowercase()
    } else {
        ch.to_lowercase().next().unwrap_or(ch)
    }
}

/// Original and case-folded characters of one input
#[derive(Debug, Clone)]
pub struct ScanText {
    chars: Vec<char>,
    lower: Vec<char>,
}

impl ScanText {
    /// Decode `text` into characters
    pub fn new(text: &str) -> Self {
        let chars: Vec<char> = text.chars().collect();
        let lower = chars.iter().copied().map(fold).collect();
        Self { chars, lower }
    }

    /// Number of characters
    #[inline]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// True for empty input
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Original characters
    #[inline]
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Original character at `i`
    #[inline]
    pub fn at(&self, i: usize) -> Option<char> {
        self.chars.get(i).copied()
    }

    /// Lower-cased character at `i`
    #[inline]
    pub fn lower_at(&self, i: usize) -> Option<char> {
        self.lower.get(i).copied()
    }

    /// True if the character at `i` is a letter or digit
    #[inline]
    pub fn is_alnum(&self, i: usize) -> bool {
        self.at(i).is_some_and(|c| c.is_alphanumeric())
    }

    /// True if the character at `i` is a letter
    #[inline]
    pub fn is_letter(&self, i: usize) -> bool {
        self.at(i).is_some_and(|c| c.is_alphabetic())
    }

    /// True if the character at `i` is an ASCII digit
    #[inline]
    pub fn is_digit(&self, i: usize) -> bool {
        self.at(i).is_some_and(|c| c.is_ascii_digit())
    }

    /// True if `i` is past the end or holds something other than a letter or digit
    #[inline]
    pub fn is_boundary(&self, i: usize) -> bool {
        !self.is_alnum(i)
    }

    /// True if the character at `i` is any whitespace, newlines included
    #[inline]
    pub fn is_whitespace(&self, i: usize) -> bool {
        self.at(i).is_some_and(char::is_whitespace)
    }

    /// First index at or after `from` that is not a letter or digit
    pub fn next_non_alnum(&self, from: usize) -> usize {
        (from..self.len())
            .find(|&i| !self.is_alnum(i))
            .unwrap_or(self.len())
    }

    /// First index at or after `from` holding whitespace
    pub fn next_whitespace(&self, from: usize) -> usize {
        (from..self.len())
            .find(|&i| self.is_whitespace(i))
            .unwrap_or(self.len())
    }

    /// First index at or after `from` that is not inline whitespace
    pub fn skip_inline_space(&self, from: usize) -> usize {
        (from..self.len())
            .find(|&i| Class::from_char(self.chars[i]) != Class::Space)
            .unwrap_or(self.len())
    }

    /// True if the lower-cased text at `at` starts with `pattern`
    pub fn lower_starts_with(&self, at: usize, pattern: &str) -> bool {
        let mut i = at;
        for expected in pattern.chars() {
            if self.lower_at(i) != Some(expected) {
                return false;
            }
            i += 1;
        }
        true
    }

    /// True if the lower-cased span `[start, end)` equals `pattern`
    pub fn lower_eq(&self, start: usize, end: usize, pattern: &str) -> bool {
        start <= end
            && end <= self.len()
            && pattern.chars().count() == end - start
            && self.lower_starts_with(start, pattern)
    }

    /// Lower-cased span `[start, end)` as an owned string, for table lookups
    pub fn lower_key(&self, start: usize, end: usize) -> String {
        let end = end.min(self.len());
        let start = start.min(end);
        self.lower[start..end].iter().collect()
    }

    /// Number of consecutive letters starting at `from`
    pub fn letter_run(&self, from: usize) -> usize {
        (from..self.len())
            .take_while(|&i| self.is_letter(i))
            .count()
    }

    /// Number of consecutive ASCII digits starting at `from`
    pub fn digit_run(&self, from: usize) -> usize {
        (from..self.len()).take_while(|&i| self.is_digit(i)).count()
    }

    /// True if any character in `[start, end)` is a letter
    pub fn has_letter(&self, start: usize, end: usize) -> bool {
        (start..end.min(self.len())).any(|i| self.is_letter(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_from_char() {
        assert_eq!(Class::from_char('a'), Class::Letter);
        assert_eq!(Class::from_char('É'), Class::Letter);
        assert_eq!(Class::from_char('7'), Class::Digit);
        assert_eq!(Class::from_char('\n'), Class::Newline);
        assert_eq!(Class::from_char('\r'), Class::Newline);
        assert_eq!(Class::from_char('\t'), Class::Space);
        assert_eq!(Class::from_char('\u{a0}'), Class::Space);
        assert_eq!(Class::from_char('@'), Class::Other);
    }

    #[test]
    fn test_lower_copy_keeps_offsets() {
        let text = ScanText::new("İstanbul CAN'T");
        assert_eq!(text.len(), 14);
        assert!(text.lower_eq(9, 14, "can't"));
        assert_eq!(text.at(9), Some('C'));
        assert_eq!(text.lower_key(9, 12), "can");
    }

    #[test]
    fn test_runs_and_scans() {
        let text = ScanText::new("abc12 def\n");
        assert_eq!(text.next_non_alnum(0), 5);
        assert_eq!(text.letter_run(0), 3);
        assert_eq!(text.digit_run(3), 2);
        assert_eq!(text.next_whitespace(0), 5);
        assert_eq!(text.skip_inline_space(5), 6);
        assert_eq!(text.skip_inline_space(9), 9);
        assert!(text.is_boundary(10));
        assert!(text.has_letter(0, 3));
        assert!(!text.has_letter(3, 5));
    }

    #[test]
    fn test_lower_eq_bounds() {
        let text = ScanText::new("ab");
        assert!(text.lower_eq(0, 2, "ab"));
        assert!(!text.lower_eq(0, 3, "abc"));
        assert!(!text.lower_eq(1, 2, "ab"));
    }
}
