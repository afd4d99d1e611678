//! Fixed digit templates: telephone numbers and ZIP+4 postal codes
//!
//! `D` stands for one ASCII digit; any other template character must match
//! literally. A template only matches when the next character is not a
//! letter or digit.

use crate::text::ScanText;

/// Telephone templates, longest first
const TELEPHONE: [&str; 5] = [
    "D-DDD-DDD-DDDD",
    "DDD-DDD-DDDD",
    "DD-DDDD-DDDD",
    "DDD-DDDD",
    "D-DDDD",
];

const POSTAL_CODE: &str = "DDDDD-DDDD";

fn template_len(text: &ScanText, p: usize, template: &str) -> Option<usize> {
    let mut i = p;
    for expected in template.chars() {
        let ok = match expected {
            'D' => text.is_digit(i),
            literal => text.at(i) == Some(literal),
        };
        if !ok {
            return None;
        }
        i += 1;
    }
    text.is_boundary(i).then(|| i - p)
}

/// Length of a telephone number at `p`
pub fn telephone_len(text: &ScanText, p: usize) -> Option<usize> {
    TELEPHONE
        .iter()
        .find_map(|template| template_len(text, p, template))
}

/// Length of a ZIP+4 postal code at `p`
pub fn postal_code_len(text: &ScanText, p: usize) -> Option<usize> {
    template_len(text, p, POSTAL_CODE)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn phone(input: &str) -> Option<usize> {
        telephone_len(&ScanText::new(input), 0)
    }

    #[test]
    fn test_each_template() {
        assert_eq!(phone("1-800-555-1212"), Some(14));
        assert_eq!(phone("507-555-1212 now"), Some(12));
        assert_eq!(phone("44-1234-5678"), Some(12));
        assert_eq!(phone("555-1212."), Some(8));
        assert_eq!(phone("5-1212,"), Some(6));
    }

    #[test]
    fn test_longest_template_wins() {
        // "507-555" would also fit DDD-DDDD's prefix, but the full number is taken
        assert_eq!(phone("507-555-1212"), Some(12));
    }

    #[test]
    fn test_must_end_at_boundary() {
        assert_eq!(phone("507-555-12123"), None);
        assert_eq!(phone("555-1212x"), None);
        assert_eq!(phone("5551212"), None);
        assert_eq!(phone("55-12"), None);
    }

    #[test]
    fn test_postal_code() {
        let text = ScanText::new("MN 55905-0001.");
        assert_eq!(postal_code_len(&text, 3), Some(10));
        assert_eq!(postal_code_len(&ScanText::new("55905"), 0), None);
        assert_eq!(postal_code_len(&ScanText::new("55905-00012"), 0), None);
    }
}
