//! Contraction boundary detection
//!
//! Decides whether an apostrophe splits a clitic off its host word
//! (`it` + `'s`, `ca` + `n't`), stays inside the word (`80's`,
//! `p'yongyang`), or is left for the next step as punctuation (`James'`).
//! Also splits the fixed multi-token words (`can` + `not`).

use crate::rules::{Segment, Segments};
use crate::tables::ShapeTables;
use crate::text::ScanText;
use crate::types::{Shape, TokenKind};

/// Host word and clitic lengths at an accepted boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CliticSplit {
    /// Length of the host word fragment (`ca` in `can't`)
    pub word_len: usize,
    /// Length of the clitic (`n't`)
    pub contraction_len: usize,
}

impl CliticSplit {
    /// Word segment followed by the contraction segment
    pub fn segments(&self, word_shape: Option<Shape>) -> Segments {
        let mut segments = Segments::new();
        segments.push(Segment {
            len: self.word_len,
            kind: TokenKind::Word,
            shape: word_shape,
        });
        segments.push(Segment::new(self.contraction_len, TokenKind::Contraction));
        segments
    }
}

/// Split a run that is exactly one of the multi-token words
///
/// `run_end` is the first non-alphanumeric index after `start`. The first
/// part becomes a `Word`, the remaining parts `Contraction`s.
pub fn multi_token_split(
    text: &ScanText,
    tables: &ShapeTables,
    start: usize,
    run_end: usize,
) -> Option<Segments> {
    let table = tables.multi_token();
    let len = run_end.checked_sub(start)?;
    if len < 2 || len > table.max_len() {
        return None;
    }

    let parts = table.parts(&text.lower_key(start, run_end))?;
    let segments = parts
        .iter()
        .enumerate()
        .map(|(i, &part)| {
            let kind = if i == 0 {
                TokenKind::Word
            } else {
                TokenKind::Contraction
            };
            Segment::shaped(part, kind, Shape::MultiTokenWord)
        })
        .collect();
    Some(segments)
}

/// Decide whether the apostrophe at `ap` marks a clitic boundary
///
/// `start` is where the host run begins. Endings are tried in table order;
/// the first whose text sits at the apostrophe and is followed by a
/// non-alphanumeric character (or the end of input) wins. The host fragment
/// must be non-empty and end in a letter, so neither a bare `n't` nor `9n't`
/// splits.
pub fn clitic_boundary(
    text: &ScanText,
    tables: &ShapeTables,
    start: usize,
    ap: usize,
) -> Option<CliticSplit> {
    let contractions = tables.contractions();

    if ap <= start || ap + 1 >= text.len() || text.at(ap) != Some('\'') {
        return None;
    }
    if !contractions.is_clitic_initial(text.lower_at(ap + 1)?) || !text.is_letter(ap - 1) {
        return None;
    }

    contractions.endings().iter().find_map(|ending| {
        let ending_start = ap.checked_sub(ending.apostrophe_index)?;
        let ending_end = ending_start + ending.len;
        let matched = ending_start > start
            && text.is_letter(ending_start - 1)
            && text.lower_eq(ending_start, ending_end, &ending.text)
            && text.is_boundary(ending_end);

        matched.then(|| CliticSplit {
            word_len: ending_start - start,
            contraction_len: ending.len,
        })
    })
}

/// End index when the apostrophe at `ap` stays inside the token
///
/// Two cases keep the apostrophe: a digit run followed by exactly `'s`
/// (`80's`), and a word on the do-not-break list (`p'yongyang`). Checked
/// before [`clitic_boundary`] so `80's` is never read as `80` + `'s`.
pub fn keep_together_end(
    text: &ScanText,
    tables: &ShapeTables,
    start: usize,
    ap: usize,
) -> Option<usize> {
    if ap <= start || text.at(ap) != Some('\'') {
        return None;
    }

    let all_digits = (start..ap).all(|i| text.is_digit(i));
    if all_digits && text.lower_at(ap + 1) == Some('s') && text.is_boundary(ap + 2) {
        return Some(ap + 2);
    }

    let word_end = text.next_non_alnum(ap + 1);
    if word_end > ap + 1
        && tables
            .contractions()
            .is_do_not_break(&text.lower_key(start, word_end))
    {
        return Some(word_end);
    }

    None
}

/// Length of a name that keeps its leading apostrophe (`'Assad`)
pub fn apostrophe_name_len(text: &ScanText, tables: &ShapeTables, p: usize) -> Option<usize> {
    tables
        .contractions()
        .names_starting_with_apostrophe()
        .iter()
        .map(|name| (name, name.chars().count()))
        .find(|(name, len)| text.lower_starts_with(p, name) && text.is_boundary(p + len))
        .map(|(_, len)| len)
}

/// Length of the contraction split off `'tis` / `'twas`
///
/// Only the leading `'t` is consumed; the rest of the word is scanned as a
/// new token on the next step.
pub fn apostrophe_contraction_len(
    text: &ScanText,
    tables: &ShapeTables,
    p: usize,
) -> Option<usize> {
    let contractions = tables.contractions();
    contractions
        .apostrophe_starting()
        .iter()
        .any(|word| {
            text.lower_starts_with(p, word) && text.is_boundary(p + word.chars().count())
        })
        .then(|| contractions.apostrophe_starting_split())
}
