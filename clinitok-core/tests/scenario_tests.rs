//! End-to-end scenarios covering each boundary rule family
//!
//! Each case lists the expected token texts and kinds in emission order.

use clinitok_core::{tokenize, Shape, Token, TokenKind};

use TokenKind::{Contraction, Newline, Number, Punctuation, Word};

fn summary(tokens: &[Token]) -> Vec<(&str, TokenKind)> {
    tokens
        .iter()
        .map(|t| (t.as_str().unwrap_or_default(), t.kind))
        .collect()
}

#[test]
fn test_documented_scenarios() {
    let cases: Vec<(&str, Vec<(&str, TokenKind)>)> = vec![
        (
            "He can't go.",
            vec![
                ("He", Word),
                ("ca", Word),
                ("n't", Contraction),
                ("go", Word),
                (".", Punctuation),
            ],
        ),
        (
            "It's 80's-esque.",
            vec![
                ("It", Word),
                ("'s", Contraction),
                ("80's-esque", Word),
                (".", Punctuation),
            ],
        ),
        (
            "Call 507-555-1212 now.",
            vec![
                ("Call", Word),
                ("507-555-1212", Word),
                ("now", Word),
                (".", Punctuation),
            ],
        ),
        (
            "e.g. see Dr. Smith",
            vec![("e.g.", Word), ("see", Word), ("Dr.", Word), ("Smith", Word)],
        ),
        ("2,345.50 mg", vec![("2,345.50", Number), ("mg", Word)]),
        (
            "cannot uh-oh-fest",
            vec![("can", Word), ("not", Contraction), ("uh-oh-fest", Word)],
        ),
    ];

    for (text, expected) in cases {
        let tokens = tokenize(text).unwrap();
        assert_eq!(summary(&tokens), expected, "Failed for text: '{text}'");
    }
}

#[test]
fn test_scenario_shapes() {
    let tokens = tokenize("Call 507-555-1212 now.").unwrap();
    assert_eq!(tokens[1].shape, Some(Shape::Telephone));
    assert_eq!((tokens[1].start, tokens[1].end), (5, 17));

    let tokens = tokenize("e.g. see Dr. Smith").unwrap();
    assert_eq!(tokens[0].shape, Some(Shape::Abbreviation));
    assert_eq!(tokens[2].shape, Some(Shape::Abbreviation));
    assert_eq!(tokens[1].shape, None);

    let tokens = tokenize("2,345.50 mg").unwrap();
    assert_eq!(tokens[0].shape, Some(Shape::FormattedNumber));
    assert!(!tokens[0].is_integer);

    let tokens = tokenize("cannot uh-oh-fest").unwrap();
    assert_eq!(tokens[0].shape, Some(Shape::MultiTokenWord));
    assert_eq!(tokens[1].shape, Some(Shape::MultiTokenWord));
    assert_eq!(tokens[2].shape, Some(Shape::HyphenCompound));
}

#[test]
fn test_clinical_note() {
    let text = "Pt's BP 120/80.\r\nDenies N/V; f/u w/ Dr. Lee at 55905-0001.";
    let tokens = tokenize(text).unwrap();
    let texts: Vec<_> = tokens.iter().filter_map(Token::as_str).collect();

    assert_eq!(
        texts,
        vec![
            "Pt", "'s", "BP", "120", "/", "80", ".", "\r\n", "Denies", "N", "/", "V", ";", "f",
            "/", "u", "w", "/", "Dr.", "Lee", "at", "55905-0001", "."
        ]
    );

    let newline = tokens.iter().find(|t| t.kind == Newline).unwrap();
    assert_eq!((newline.start, newline.end), (15, 17));

    let zip = tokens.iter().find(|t| t.as_str() == Some("55905-0001")).unwrap();
    assert_eq!(zip.shape, Some(Shape::PostalCode));
}

#[test]
fn test_every_contraction_follows_its_word() {
    let text = "I'd've said they're gonna, but whaddya know? She'll, won't, can't.";
    let tokens = tokenize(text).unwrap();

    for (i, token) in tokens.iter().enumerate() {
        if token.kind == Contraction {
            let prev = &tokens[i - 1];
            assert!(
                matches!(prev.kind, Word | Contraction),
                "contraction {:?} not preceded by its word: {:?}",
                token.as_str(),
                prev.as_str()
            );
            assert_eq!(prev.end, token.start);
        }
    }
}
