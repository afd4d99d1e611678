//! Rule-based Penn-Treebank-style tokenizer for clinical text
//!
//! The tokenizer segments raw text into words, numbers, punctuation,
//! symbols, newlines and contraction fragments, with exact character
//! offsets. Clitics are split the PTB way (`can't` -> `ca` + `n't`), hyphen
//! compounds from a fixed vocabulary stay joined (`uh-oh-fest`), and
//! domain shapes such as telephone numbers, postal codes, URLs, e-mail
//! addresses, abbreviations and formatted numbers are kept whole.
//!
//! # Architecture
//!
//! - **Tables**: immutable shape tables compiled once from TOML
//! - **Rules**: contraction and hyphen boundary detectors, shape recognizers
//! - **Scanner**: single-pass loop choosing a rule at each position
//! - **Tokenizer**: reusable, thread-safe entry point
//!
//! # Example
//!
//! ```rust
//! use clinitok_core::{Tokenizer, TokenKind};
//!
//! let tokenizer = Tokenizer::new().unwrap();
//! let tokens = tokenizer.tokenize("He can't go.").unwrap();
//!
//! let texts: Vec<_> = tokens.iter().filter_map(|t| t.as_str()).collect();
//! assert_eq!(texts, ["He", "ca", "n't", "go", "."]);
//! assert_eq!(tokens[2].kind, TokenKind::Contraction);
//! ```

pub mod attributes;
pub mod error;
pub mod rules;
pub mod scanner;
pub mod tables;
pub mod text;
pub mod tokenizer;
pub mod types;

pub use error::{Error, Result, ScanError, TablesError};
pub use tables::{ShapeTables, TablesConfig};
pub use tokenizer::{Tokenizer, TokenizerBuilder, TokenizerOptions};
pub use types::{CapsClass, NumPosition, Shape, Token, TokenKind};

/// Tokenize `text` with the built-in tables
pub fn tokenize(text: &str) -> Result<Vec<Token>> {
    let tables = tables::builtin()?;
    Ok(scanner::Scanner::new(text, &tables, true).run()?)
}
