//! Capitalization and digit-position classification
//!
//! Pure functions over the exact characters of a finalized token.

use crate::types::{CapsClass, NumPosition};

/// Classify the letter-case pattern of a word
///
/// - no uppercase letter: [`CapsClass::None`]
/// - a single uppercase character: [`CapsClass::FirstOnly`]
/// - every letter uppercase: [`CapsClass::All`]
/// - first character uppercase, no later uppercase: [`CapsClass::FirstOnly`]
/// - anything else: [`CapsClass::Mixed`]
pub fn caps_class(chars: &[char]) -> CapsClass {
    let has_upper = chars.iter().any(|c| c.is_uppercase());
    if !has_upper {
        return CapsClass::None;
    }
    if chars.len() == 1 {
        return CapsClass::FirstOnly;
    }
    if !chars.iter().any(|c| c.is_lowercase()) {
        return CapsClass::All;
    }
    if chars[0].is_uppercase() && !chars[1..].iter().any(|c| c.is_uppercase()) {
        return CapsClass::FirstOnly;
    }
    CapsClass::Mixed
}

/// Classify where digits occur
///
/// Index 0 wins over the last index, which wins over any other position.
pub fn num_position(chars: &[char]) -> NumPosition {
    // Zero-length tokens are never emitted; guard anyway so this never indexes
    // into an empty slice.
    let (Some(first), Some(last)) = (chars.first(), chars.last()) else {
        return NumPosition::None;
    };

    if first.is_numeric() {
        NumPosition::First
    } else if last.is_numeric() {
        NumPosition::Last
    } else if chars.iter().any(|c| c.is_numeric()) {
        NumPosition::Middle
    } else {
        NumPosition::None
    }
}

/// True when every character is a decimal digit
pub fn is_integer(chars: &[char]) -> bool {
    !chars.is_empty() && chars.iter().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn caps(s: &str) -> CapsClass {
        caps_class(&s.chars().collect::<Vec<_>>())
    }

    fn num(s: &str) -> NumPosition {
        num_position(&s.chars().collect::<Vec<_>>())
    }

    #[test]
    fn test_caps_classes() {
        assert_eq!(caps("hello"), CapsClass::None);
        assert_eq!(caps("e.g."), CapsClass::None);
        assert_eq!(caps("507-555-1212"), CapsClass::None);
        assert_eq!(caps("NASA"), CapsClass::All);
        assert_eq!(caps("B12"), CapsClass::All);
        assert_eq!(caps("Smith"), CapsClass::FirstOnly);
        assert_eq!(caps("Dr."), CapsClass::FirstOnly);
        assert_eq!(caps("A"), CapsClass::FirstOnly);
        assert_eq!(caps("McDonald"), CapsClass::Mixed);
        assert_eq!(caps("iPhone"), CapsClass::Mixed);
    }

    #[test]
    fn test_num_positions() {
        assert_eq!(num("1st"), NumPosition::First);
        assert_eq!(num("A1"), NumPosition::Last);
        assert_eq!(num("B12c"), NumPosition::Middle);
        assert_eq!(num("word"), NumPosition::None);
        assert_eq!(num("7"), NumPosition::First);
    }

    #[test]
    fn test_empty_text_is_guarded() {
        assert_eq!(num_position(&[]), NumPosition::None);
        assert_eq!(caps_class(&[]), CapsClass::None);
        assert!(!is_integer(&[]));
    }

    #[test]
    fn test_is_integer() {
        assert!(is_integer(&['4', '2']));
        assert!(!is_integer(&['4', '.', '2']));
        assert!(!is_integer(&['1', ',', '0', '0', '0']));
    }
}
