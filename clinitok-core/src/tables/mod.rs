//! Shape tables for the scanner
//!
//! Tables are declared in TOML, validated, and compiled into lookup
//! structures once. A compiled [`ShapeTables`] is immutable and is shared
//! read-only (usually behind an `Arc`) by every tokenizer that uses it.

pub(crate) mod config;
pub(crate) mod loader;

pub mod contraction;
pub mod hyphen;
pub mod multi_token;
pub mod punctuation;

pub use config::TablesConfig;
pub use contraction::{ContractionEnding, ContractionTable};
pub use hyphen::HyphenTable;
pub use loader::builtin;
pub use multi_token::MultiTokenTable;
pub use punctuation::PunctTable;

use crate::error::TablesError;

/// Compiled, case-folded shape tables
#[derive(Debug, Clone)]
pub struct ShapeTables {
    code: String,
    name: String,
    punctuation: PunctTable,
    multi_token: MultiTokenTable,
    contractions: ContractionTable,
    hyphens: HyphenTable,
    url_schemes: Vec<String>,
}

impl ShapeTables {
    /// Compile validated configuration into lookup tables
    pub fn from_config(config: &TablesConfig) -> Result<Self, TablesError> {
        config.validate()?;

        let multi_token = MultiTokenTable::new(
            config
                .multi_token_words
                .iter()
                .map(|entry| (entry.word.clone(), entry.lengths.clone())),
        );

        let contractions = ContractionTable::new(
            &config.contractions.endings,
            &config.contractions.names_starting_with_apostrophe,
            &config.contractions.apostrophe_starting,
            config.contractions.apostrophe_starting_split,
            &config.contractions.do_not_break,
        );

        let hyphens = HyphenTable::new(
            &config.hyphens.prefixes,
            &config.hyphens.suffixes,
            &config.hyphens.words,
        );

        Ok(Self {
            code: config.metadata.code.clone(),
            name: config.metadata.name.clone(),
            punctuation: PunctTable::new(config.punctuation.chars.iter().copied()),
            multi_token,
            contractions,
            hyphens,
            url_schemes: config.urls.schemes.iter().map(|s| s.to_lowercase()).collect(),
        })
    }

    /// Table set code (`en`)
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Human-readable table set name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Punctuation characters
    #[inline]
    pub fn punctuation(&self) -> &PunctTable {
        &self.punctuation
    }

    /// Multi-token words
    #[inline]
    pub fn multi_token(&self) -> &MultiTokenTable {
        &self.multi_token
    }

    /// Apostrophe tables
    #[inline]
    pub fn contractions(&self) -> &ContractionTable {
        &self.contractions
    }

    /// Hyphen tables
    #[inline]
    pub fn hyphens(&self) -> &HyphenTable {
        &self.hyphens
    }

    /// URL schemes, lower-cased
    #[inline]
    pub fn url_schemes(&self) -> &[String] {
        &self.url_schemes
    }
}
