//! Scheme-prefixed URLs

use crate::text::ScanText;

/// Length of a URL starting at `p`
///
/// The URL runs to the next whitespace. It must start with one of `schemes`
/// (lower-cased) and hold at least one character after the scheme. A
/// period that would be the last character of the input is left out.
pub fn url_len(text: &ScanText, schemes: &[String], p: usize) -> Option<usize> {
    let scheme_len = schemes
        .iter()
        .find(|scheme| text.lower_starts_with(p, scheme))?
        .chars()
        .count();

    let mut end = text.next_whitespace(p);
    if end == text.len() && end > p && text.at(end - 1) == Some('.') {
        end -= 1;
    }

    (end > p + scheme_len).then(|| end - p)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schemes() -> Vec<String> {
        ["http://", "https://", "ftp://", "mailto:"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    fn len(input: &str) -> Option<usize> {
        url_len(&ScanText::new(input), &schemes(), 0)
    }

    #[test]
    fn test_urls() {
        assert_eq!(len("https://example.org/a?b=c more"), Some(25));
        assert_eq!(len("HTTP://EXAMPLE.ORG"), Some(18));
        assert_eq!(len("mailto:someone@example.org"), Some(26));
        assert_eq!(len("ftp://host/file.txt\nnext"), Some(19));
    }

    #[test]
    fn test_sentence_final_period_left_out() {
        assert_eq!(len("http://example.org."), Some(18));
        assert_eq!(len("http://example.org. Next"), Some(19));
    }

    #[test]
    fn test_scheme_alone_or_missing() {
        assert_eq!(len("http://"), None);
        assert_eq!(len("http:// x"), None);
        assert_eq!(len("www.example.org"), None);
        assert_eq!(len("httpx://a"), None);
    }
}
