//! Numbers with thousands separators or a decimal point

use crate::text::ScanText;

/// Length of a comma/decimal number starting at `p`
///
/// Every comma must be followed by exactly three digits, at most one
/// decimal point is allowed and no comma may follow it. A separator that
/// is not followed by a digit ends the number and is left for
/// punctuation. Plain digit runs are not matched here.
pub fn formatted_number_len(text: &ScanText, p: usize) -> Option<usize> {
    let mut end = p + text.digit_run(p);
    if end == p {
        return None;
    }

    let mut separators = 0;
    let mut seen_decimal = false;
    loop {
        let sep = match text.at(end) {
            Some(c @ (',' | '.')) => c,
            _ => break,
        };
        let digits = text.digit_run(end + 1);
        if digits == 0 {
            break;
        }
        match sep {
            ',' if seen_decimal || digits != 3 => return None,
            '.' if seen_decimal => return None,
            '.' => seen_decimal = true,
            _ => {}
        }
        separators += 1;
        end += 1 + digits;
    }

    (separators > 0).then(|| end - p)
}

/// Length of a number written with a leading decimal point (`.5`)
pub fn period_number_len(text: &ScanText, p: usize) -> Option<usize> {
    if text.at(p) != Some('.') {
        return None;
    }
    let digits = text.digit_run(p + 1);
    (digits > 0).then(|| 1 + digits)
}
