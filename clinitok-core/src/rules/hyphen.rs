//! Hyphen compound detection
//!
//! Greedy, priority-ordered and non-backtracking: suffixes before prefixes,
//! longer matches before shorter ones.

use crate::tables::ShapeTables;
use crate::text::ScanText;

/// End index of the token that starts at `start` and meets its first hyphen at `h`
///
/// Returns `h` when nothing after the hyphen stays attached; the hyphen is
/// then scanned as punctuation on the next step.
pub fn compound_end(text: &ScanText, tables: &ShapeTables, start: usize, h: usize) -> usize {
    if h <= start || text.at(h) != Some('-') || !text.is_alnum(h + 1) {
        return h;
    }

    let hyphens = tables.hyphens();
    let key = |from: usize, to: usize| text.lower_key(from, to);

    let second = text.next_non_alnum(h + 1);
    let third = if text.at(second) == Some('-') && text.is_alnum(second + 1) {
        text.next_non_alnum(second + 1)
    } else {
        second
    };
    let has_third = third > second;

    // -o-torium
    if has_third && hyphens.is_double_suffix(&key(h, third)) {
        return third;
    }

    // -esque, possibly followed by a second suffix
    if hyphens.is_suffix(&key(h, second)) {
        if has_third && hyphens.is_suffix(&key(second, third)) {
            return third;
        }
        return second;
    }

    // uh-oh-fest
    if has_third && hyphens.is_word(&key(start, second)) && hyphens.is_suffix(&key(second, third))
    {
        return third;
    }

    // pre-op, pre-uh-oh, co-author-less
    if hyphens.is_prefix(&key(start, h + 1)) {
        if has_third
            && (hyphens.is_word(&key(h + 1, third)) || hyphens.is_suffix(&key(second, third)))
        {
            return third;
        }
        return second;
    }

    // uh-oh
    if hyphens.is_word(&key(start, second)) {
        return second;
    }

    h
}
