//! Domain shape recognizers
//!
//! Tried in a fixed order once the multi-token check has failed; the first
//! match wins. Each recognizer returns the consumed length or `None`.

pub mod abbreviation;
pub mod email;
pub mod number;
pub mod phone;
pub mod url;

use crate::rules::Segment;
use crate::tables::ShapeTables;
use crate::text::ScanText;
use crate::types::{Shape, TokenKind};

/// Run every recognizer at `p` in priority order
pub fn recognize(text: &ScanText, tables: &ShapeTables, p: usize) -> Option<Segment> {
    if let Some(len) = url::url_len(text, tables.url_schemes(), p) {
        return Some(Segment::shaped(len, TokenKind::Word, Shape::Url));
    }
    if let Some(len) = email::email_len(text, p) {
        return Some(Segment::shaped(len, TokenKind::Word, Shape::EmailAddress));
    }
    if let Some(len) = phone::telephone_len(text, p) {
        return Some(Segment::shaped(len, TokenKind::Word, Shape::Telephone));
    }
    if let Some(len) = phone::postal_code_len(text, p) {
        return Some(Segment::shaped(len, TokenKind::Word, Shape::PostalCode));
    }
    if let Some(len) = number::formatted_number_len(text, p) {
        return Some(Segment::shaped(
            len,
            TokenKind::Number,
            Shape::FormattedNumber,
        ));
    }
    if let Some(len) = abbreviation::abbreviation_len(text, p) {
        return Some(Segment::shaped(len, TokenKind::Word, Shape::Abbreviation));
    }
    None
}
