//! Token model

use crate::attributes;
use core::fmt;
use serde::{Deserialize, Serialize};

/// Syntactic category of a token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    /// Run containing at least one letter
    Word,
    /// Run of digits, optionally with separators
    Number,
    /// One of the fixed punctuation characters, or an ellipsis
    Punctuation,
    /// Any other single character
    Symbol,
    /// `\n`, `\r` or `\r\n`
    Newline,
    /// Clitic split off a preceding word (`'s`, `n't`, `not` in `cannot`)
    Contraction,
}

/// Letter-case pattern of a word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CapsClass {
    /// Not computed (non-word tokens)
    #[default]
    Unknown,
    /// No uppercase letters
    None,
    /// Every letter uppercase
    All,
    /// Only the first character uppercase
    FirstOnly,
    /// Any other mix
    Mixed,
}

/// Where digits occur in a token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum NumPosition {
    /// No digits
    #[default]
    None,
    /// Digit at the first character
    First,
    /// Digit inside the token only
    Middle,
    /// Digit at the last character
    Last,
}

/// Recognizer that produced a token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Shape {
    /// Dash-separated telephone number
    Telephone,
    /// `DDDDD-DDDD` postal code
    PostalCode,
    /// Scheme-prefixed URL
    Url,
    /// E-mail address
    EmailAddress,
    /// Letters interspersed with periods (`e.g.`, `Dr.`)
    Abbreviation,
    /// Number with thousands separators or a decimal point
    FormattedNumber,
    /// `...`
    Ellipsis,
    /// Hyphenated run kept together
    HyphenCompound,
    /// Part of a word split by the multi-token table (`can` + `not`)
    MultiTokenWord,
}

/// A token over the half-open character span `[start, end)`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Character offset of the first character
    pub start: usize,
    /// Character offset one past the last character
    pub end: usize,
    /// Token category
    pub kind: TokenKind,
    /// Covered text, when materialized
    pub text: Option<String>,
    /// Capitalization class (words only)
    pub caps: CapsClass,
    /// Digit position class
    pub num_position: NumPosition,
    /// True for numbers made only of digits
    pub is_integer: bool,
    /// Recognizer that produced this token, if any
    pub shape: Option<Shape>,
}

impl Token {
    /// Build a token over `chars`, which must be exactly the covered characters,
    /// computing its attributes.
    pub fn from_chars(
        start: usize,
        chars: &[char],
        kind: TokenKind,
        shape: Option<Shape>,
        materialize_text: bool,
    ) -> Self {
        let caps = match kind {
            TokenKind::Word => attributes::caps_class(chars),
            _ => CapsClass::Unknown,
        };

        Self {
            start,
            end: start + chars.len(),
            kind,
            text: materialize_text.then(|| chars.iter().collect()),
            caps,
            num_position: attributes::num_position(chars),
            is_integer: kind == TokenKind::Number && attributes::is_integer(chars),
            shape,
        }
    }

    /// Number of characters covered
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Tokens are never empty; provided for API symmetry with `len`
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.end == self.start
    }

    /// Covered text, if it was materialized
    pub fn as_str(&self) -> Option<&str> {
        self.text.as_deref()
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Word => write!(f, "word"),
            TokenKind::Number => write!(f, "number"),
            TokenKind::Punctuation => write!(f, "punctuation"),
            TokenKind::Symbol => write!(f, "symbol"),
            TokenKind::Newline => write!(f, "newline"),
            TokenKind::Contraction => write!(f, "contraction"),
        }
    }
}

impl fmt::Display for CapsClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CapsClass::Unknown => write!(f, "unknown"),
            CapsClass::None => write!(f, "none"),
            CapsClass::All => write!(f, "all"),
            CapsClass::FirstOnly => write!(f, "first_only"),
            CapsClass::Mixed => write!(f, "mixed"),
        }
    }
}

impl fmt::Display for NumPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumPosition::None => write!(f, "none"),
            NumPosition::First => write!(f, "first"),
            NumPosition::Middle => write!(f, "middle"),
            NumPosition::Last => write!(f, "last"),
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Shape::Telephone => "telephone",
            Shape::PostalCode => "postal_code",
            Shape::Url => "url",
            Shape::EmailAddress => "email_address",
            Shape::Abbreviation => "abbreviation",
            Shape::FormattedNumber => "formatted_number",
            Shape::Ellipsis => "ellipsis",
            Shape::HyphenCompound => "hyphen_compound",
            Shape::MultiTokenWord => "multi_token_word",
        };
        f.write_str(name)
    }
}
