//! Single-pass token scanner
//!
//! The scanner walks the input once. At each cursor position it picks the
//! first matching rule, which yields one to three [`Segment`]s; each is
//! checked and turned into a [`Token`] before the cursor moves past it.
//! Inline whitespace between tokens is skipped and produces nothing.

use crate::{
    error::ScanError,
    rules::{contraction, hyphen, shapes, Segment, Segments},
    tables::ShapeTables,
    text::{Class, ScanText},
    types::{Shape, Token, TokenKind},
};
use smallvec::smallvec;

/// Scanner over one input string
pub struct Scanner<'t> {
    text: ScanText,
    tables: &'t ShapeTables,
    materialize_text: bool,
    cursor: usize,
}

impl<'t> Scanner<'t> {
    /// Create a scanner positioned at the start of `text`
    pub fn new(text: &str, tables: &'t ShapeTables, materialize_text: bool) -> Self {
        Self {
            text: ScanText::new(text),
            tables,
            materialize_text,
            cursor: 0,
        }
    }

    /// Scan the whole input
    pub fn run(mut self) -> Result<Vec<Token>, ScanError> {
        let mut tokens = Vec::with_capacity(self.text.len() / 4 + 1);

        loop {
            self.cursor = self.text.skip_inline_space(self.cursor);
            if self.cursor >= self.text.len() {
                break;
            }

            for segment in self.next_step() {
                tokens.push(self.emit(segment)?);
            }
        }

        Ok(tokens)
    }

    /// Validate a segment at the cursor, build its token and advance
    fn emit(&mut self, segment: Segment) -> Result<Token, ScanError> {
        let start = self.cursor;
        let end = start.saturating_add(segment.len);
        if segment.len == 0 || end > self.text.len() {
            return Err(ScanError::InvalidLength {
                position: start,
                length: segment.len,
                input_len: self.text.len(),
            });
        }

        log::trace!(
            "token {:?} [{start}, {end}) shape={:?}",
            segment.kind,
            segment.shape
        );

        let token = Token::from_chars(
            start,
            &self.text.chars()[start..end],
            segment.kind,
            segment.shape,
            self.materialize_text,
        );
        self.cursor = end;
        Ok(token)
    }

    /// Decide the segments starting at the cursor
    fn next_step(&self) -> Segments {
        let p = self.cursor;
        let text = &self.text;
        let Some(c) = text.at(p) else {
            return Segments::new();
        };

        match c {
            '\n' => return single(1, TokenKind::Newline),
            '\r' => {
                let len = if text.at(p + 1) == Some('\n') { 2 } else { 1 };
                return single(len, TokenKind::Newline);
            }
            _ => {}
        }

        if p + 1 == text.len() || text.is_whitespace(p + 1) {
            return single(1, self.char_kind(c));
        }

        match c {
            '.' => {
                if let Some(len) = shapes::number::period_number_len(text, p) {
                    smallvec![Segment::shaped(
                        len,
                        TokenKind::Number,
                        Shape::FormattedNumber
                    )]
                } else if text.at(p + 1) == Some('.') && text.at(p + 2) == Some('.') {
                    smallvec![Segment::shaped(3, TokenKind::Punctuation, Shape::Ellipsis)]
                } else {
                    single(1, TokenKind::Punctuation)
                }
            }
            '-' => single(1, TokenKind::Punctuation),
            '\'' => {
                if let Some(len) = contraction::apostrophe_name_len(text, self.tables, p) {
                    single(len, TokenKind::Word)
                } else if let Some(len) =
                    contraction::apostrophe_contraction_len(text, self.tables, p)
                {
                    single(len, TokenKind::Contraction)
                } else {
                    single(1, TokenKind::Punctuation)
                }
            }
            c if self.tables.punctuation().contains(c) => single(1, TokenKind::Punctuation),
            c if c.is_alphanumeric() => self.scan_alphanumeric(p),
            _ => single(1, TokenKind::Symbol),
        }
    }

    /// Kind of a token made of the single character `c`
    fn char_kind(&self, c: char) -> TokenKind {
        match Class::from_char(c) {
            Class::Letter => TokenKind::Word,
            Class::Digit => TokenKind::Number,
            _ if self.tables.punctuation().contains(c) => TokenKind::Punctuation,
            _ => TokenKind::Symbol,
        }
    }

    /// Segments for a letter/digit run starting at `p`
    fn scan_alphanumeric(&self, p: usize) -> Segments {
        let text = &self.text;
        let tables = self.tables;
        let run_end = text.next_non_alnum(p);

        if let Some(segments) = contraction::multi_token_split(text, tables, p, run_end) {
            return segments;
        }

        if let Some(segment) = shapes::recognize(text, tables, p) {
            return smallvec![segment];
        }

        match text.at(run_end) {
            Some('\'') => {
                if let Some(end) = contraction::keep_together_end(text, tables, p, run_end) {
                    return self.kept_run(p, end);
                }
                if let Some(split) = contraction::clitic_boundary(text, tables, p, run_end) {
                    return split.segments(None);
                }
            }
            Some('-') => {
                let end = hyphen::compound_end(text, tables, p, run_end);
                if end > run_end {
                    match contraction::clitic_boundary(text, tables, p, end) {
                        // host must keep at least one character past the hyphen
                        Some(split) if p + split.word_len > run_end + 1 => {
                            return split.segments(Some(Shape::HyphenCompound));
                        }
                        Some(_) => {}
                        None => {
                            return smallvec![Segment::shaped(
                                end - p,
                                TokenKind::Word,
                                Shape::HyphenCompound
                            )];
                        }
                    }
                }
            }
            _ => {}
        }

        single(run_end - p, self.run_kind(p, run_end))
    }

    /// A run that keeps its apostrophe, extended through a hyphen suffix if one follows
    fn kept_run(&self, p: usize, end: usize) -> Segments {
        let text = &self.text;
        let kind = self.run_kind(p, end);

        if text.at(end) == Some('-') {
            let compound_end = hyphen::compound_end(text, self.tables, p, end);
            if compound_end > end {
                return smallvec![Segment::shaped(
                    compound_end - p,
                    TokenKind::Word,
                    Shape::HyphenCompound
                )];
            }
        }

        single(end - p, kind)
    }

    fn run_kind(&self, start: usize, end: usize) -> TokenKind {
        if self.text.has_letter(start, end) {
            TokenKind::Word
        } else {
            TokenKind::Number
        }
    }
}

#[inline]
fn single(len: usize, kind: TokenKind) -> Segments {
    smallvec![Segment::new(len, kind)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::builtin;

    fn scan(input: &str) -> Vec<(String, TokenKind)> {
        let tables = builtin().unwrap();
        Scanner::new(input, &tables, true)
            .run()
            .unwrap()
            .into_iter()
            .map(|t| (t.text.unwrap(), t.kind))
            .collect()
    }

    fn texts(input: &str) -> Vec<String> {
        scan(input).into_iter().map(|(text, _)| text).collect()
    }

    #[test]
    fn test_empty_and_whitespace() {
        assert!(scan("").is_empty());
        assert!(scan("   \t ").is_empty());
    }

    #[test]
    fn test_single_characters() {
        assert_eq!(
            scan("a 7 ; ?"),
            vec![
                ("a".to_string(), TokenKind::Word),
                ("7".to_string(), TokenKind::Number),
                (";".to_string(), TokenKind::Punctuation),
                ("?".to_string(), TokenKind::Symbol),
            ]
        );
    }

    #[test]
    fn test_newlines() {
        assert_eq!(
            scan("a\r\nb\rc\n"),
            vec![
                ("a".to_string(), TokenKind::Word),
                ("\r\n".to_string(), TokenKind::Newline),
                ("b".to_string(), TokenKind::Word),
                ("\r".to_string(), TokenKind::Newline),
                ("c".to_string(), TokenKind::Word),
                ("\n".to_string(), TokenKind::Newline),
            ]
        );
        // CRLF right before a space or at the end of input stays one token
        assert_eq!(texts("\r\n x"), vec!["\r\n", "x"]);
        assert_eq!(texts("x\r\n"), vec!["x", "\r\n"]);
    }

    #[test]
    fn test_periods() {
        assert_eq!(texts("wait...what"), vec!["wait", "...", "what"]);
        assert_eq!(texts("take .5mg"), vec!["take", ".5", "mg"]);
        assert_eq!(texts("(end)."), vec!["(", "end", ")", "."]);
    }

    #[test]
    fn test_clitics_and_multi_token_words() {
        assert_eq!(texts("He can't go."), vec!["He", "ca", "n't", "go", "."]);
        assert_eq!(scan("9n't")[0], ("9n".to_string(), TokenKind::Word));
        assert_eq!(texts("gonna"), vec!["gon", "na"]);
        assert_eq!(texts("James' car"), vec!["James", "'", "car"]);
        assert_eq!(texts("'Twas here"), vec!["'T", "was", "here"]);
        assert_eq!(texts("'Assad said"), vec!["'Assad", "said"]);
    }

    #[test]
    fn test_kept_apostrophes() {
        assert_eq!(texts("the 80's."), vec!["the", "80's", "."]);
        assert_eq!(texts("80's-esque"), vec!["80's-esque"]);
        assert_eq!(texts("P'yongyang"), vec!["P'yongyang"]);
        assert_eq!(texts("80's've"), vec!["80's", "'", "ve"]);
    }

    #[test]
    fn test_hyphens() {
        assert_eq!(texts("uh-oh-fest"), vec!["uh-oh-fest"]);
        assert_eq!(texts("well-known"), vec!["well", "-", "known"]);
        assert_eq!(texts("co-author's"), vec!["co-author", "'s"]);
        assert_eq!(texts("pre- and"), vec!["pre", "-", "and"]);
        assert_eq!(texts("co-don't"), vec!["co-do", "n't"]);
    }

    #[test]
    fn test_hyphen_compound_never_ends_on_hyphen() {
        assert_eq!(texts("A-n't"), vec!["A-n", "'", "t"]);
        assert_eq!(texts("'A-n't,r11N"), vec!["'", "A-n", "'", "t", ",", "r11N"]);
        for input in ["A-n't", "e-n't.", "co-n't", "x-n'll"] {
            assert!(
                texts(input).iter().all(|t| t == "-" || !t.ends_with('-')),
                "Failed for text: '{input}'"
            );
        }
    }

    #[test]
    fn test_kinds_and_shapes() {
        let tables = builtin().unwrap();
        let tokens = Scanner::new("Call 507-555-1212 x 2,345.50 B12", &tables, false)
            .run()
            .unwrap();

        assert!(tokens.iter().all(|t| t.text.is_none()));
        assert_eq!(tokens[1].shape, Some(Shape::Telephone));
        assert_eq!(tokens[1].kind, TokenKind::Word);
        assert_eq!(tokens[3].kind, TokenKind::Number);
        assert_eq!(tokens[3].shape, Some(Shape::FormattedNumber));
        assert_eq!(tokens[4].kind, TokenKind::Word);
        assert_eq!((tokens[4].start, tokens[4].end), (29, 32));
    }

    #[test]
    fn test_symbols_and_unicode() {
        assert_eq!(texts("5% @home"), vec!["5", "%", "@", "home"]);
        assert_eq!(texts("café\u{a0}naïve"), vec!["café", "naïve"]);
    }
}
