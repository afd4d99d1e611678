//! E-mail addresses

use crate::text::ScanText;

const MAX_LOCAL_LEN: usize = 64;
const MAX_TOTAL_LEN: usize = 320;

fn is_local_char(ch: char) -> bool {
    ch.is_alphanumeric() || "!#$%&'*+-/=?^_`{|}~.".contains(ch)
}

fn is_domain_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '-' || ch == '.'
}

/// Length of an e-mail address starting at `p`
///
/// Trailing characters that cannot end a domain (`.`, `-`) are left out,
/// so `a@b.org.` ends before the final period.
pub fn email_len(text: &ScanText, p: usize) -> Option<usize> {
    if !text.is_alnum(p) {
        return None;
    }

    let at = (p..text.len())
        .take_while(|&i| text.at(i).is_some_and(is_local_char))
        .take(MAX_LOCAL_LEN + 1)
        .last()
        .map_or(p, |last| last + 1);
    let local_len = at - p;
    if local_len == 0 || local_len > MAX_LOCAL_LEN || text.at(at) != Some('@') {
        return None;
    }
    if text.at(at - 1) == Some('.') {
        return None;
    }

    let domain_start = at + 1;
    let mut end = (domain_start..text.len())
        .find(|&i| !text.at(i).is_some_and(is_domain_char))
        .unwrap_or(text.len());
    while end > domain_start && !text.is_alnum(end - 1) {
        end -= 1;
    }
    if end == domain_start || !text.is_alnum(domain_start) {
        return None;
    }

    let domain: String = text.chars()[domain_start..end].iter().collect();
    let labels_ok = domain
        .split('.')
        .all(|label| !label.is_empty() && !label.starts_with('-') && !label.ends_with('-'));

    let total = end - p;
    (labels_ok && total <= MAX_TOTAL_LEN).then_some(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn len(input: &str) -> Option<usize> {
        email_len(&ScanText::new(input), 0)
    }

    #[test]
    fn test_addresses() {
        assert_eq!(len("jane.doe@mayo.edu wrote"), Some(17));
        assert_eq!(len("a+b_c@lab-1.example.org"), Some(23));
        assert_eq!(len("x@host"), Some(6));
    }

    #[test]
    fn test_trailing_punctuation_left_out() {
        assert_eq!(len("jane@mayo.edu."), Some(13));
        assert_eq!(len("jane@mayo.edu-, next"), Some(13));
        assert_eq!(len("jane@mayo.edu)"), Some(13));
    }

    #[test]
    fn test_invalid_local_part() {
        assert_eq!(len("jane.@mayo.edu"), None);
        assert_eq!(len("jane mayo.edu"), None);
        let long = format!("{}@x.org", "a".repeat(65));
        assert_eq!(len(&long), None);
        let ok = format!("{}@x.org", "a".repeat(64));
        assert_eq!(len(&ok), Some(70));
    }

    #[test]
    fn test_invalid_domain() {
        assert_eq!(len("jane@"), None);
        assert_eq!(len("jane@.org"), None);
        assert_eq!(len("jane@mayo..edu"), None);
        assert_eq!(len("jane@-mayo.edu"), None);
        assert_eq!(len("jane@mayo-.edu"), None);
    }

    #[test]
    fn test_total_length_cap() {
        let domain = vec!["a".repeat(60); 5].join(".");
        let input = format!("jane@{domain}");
        assert_eq!(input.chars().count(), 309);
        assert_eq!(len(&input), Some(309));

        let domain = vec!["a".repeat(60); 6].join(".");
        assert_eq!(len(&format!("jane@{domain}")), None);
    }
}
