//! Letter-and-period abbreviations (`e.g.`, `Dr.`, `U.S.`)

use crate::text::ScanText;

/// Length of an abbreviation starting at `p`
///
/// Consumes letter runs each closed by a period. A period that is the last
/// character of the input is never absorbed, nor is one that opens an
/// ellipsis. Once a period has been taken, a final letter run standing on a
/// word boundary belongs to the token too (`U.S.A` in `U.S.A.`). Runs
/// starting with `www.` are left for word handling.
pub fn abbreviation_len(text: &ScanText, p: usize) -> Option<usize> {
    if text.lower_starts_with(p, "www.") {
        return None;
    }

    let mut end = p;
    loop {
        let letters = text.letter_run(end);
        let period = end + letters;
        if letters == 0
            || text.at(period) != Some('.')
            || period + 1 >= text.len()
            || text.at(period + 1) == Some('.')
        {
            break;
        }
        end = period + 1;
    }

    if end > p {
        let tail = text.letter_run(end);
        if tail > 0 && text.is_boundary(end + tail) {
            end += tail;
        }
    }

    (end > p).then(|| end - p)
}
