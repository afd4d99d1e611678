//! Reusable tokenizer over a set of shape tables

use crate::{
    error::{Result, ScanError},
    scanner::Scanner,
    tables::{self, ShapeTables},
    types::Token,
};
use std::sync::Arc;

/// Tokenizer options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenizerOptions {
    /// Copy the covered text into each token
    pub materialize_text: bool,
}

impl Default for TokenizerOptions {
    fn default() -> Self {
        Self {
            materialize_text: true,
        }
    }
}

/// Tokenizer holding shared, read-only shape tables
///
/// Cheap to clone and safe to share between threads; every call scans its
/// input independently.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    tables: Arc<ShapeTables>,
    options: TokenizerOptions,
}

impl Tokenizer {
    /// Tokenizer over the built-in English tables with default options
    pub fn new() -> Result<Self> {
        Self::builder().build()
    }

    /// Create a tokenizer builder
    pub fn builder() -> TokenizerBuilder {
        TokenizerBuilder::default()
    }

    /// Shape tables in use
    pub fn tables(&self) -> &ShapeTables {
        &self.tables
    }

    /// Options in use
    pub fn options(&self) -> TokenizerOptions {
        self.options
    }

    /// Tokenize `text`
    ///
    /// Offsets are character indices into `text`. Empty and whitespace-only
    /// input yields an empty vector.
    pub fn tokenize(&self, text: &str) -> Result<Vec<Token>> {
        let tokens = Scanner::new(text, &self.tables, self.options.materialize_text).run()?;
        log::debug!(
            "tokenized {} chars into {} tokens",
            text.chars().count(),
            tokens.len()
        );
        Ok(tokens)
    }

    /// Tokenize a segment that starts at character `offset` of a larger document
    ///
    /// Every emitted offset is shifted by `offset`.
    pub fn tokenize_segment(&self, text: &str, offset: usize) -> Result<Vec<Token>> {
        let mut tokens = self.tokenize(text)?;
        for token in &mut tokens {
            let (Some(start), Some(end)) =
                (token.start.checked_add(offset), token.end.checked_add(offset))
            else {
                return Err(ScanError::OffsetOverflow {
                    offset,
                    end: token.end,
                }
                .into());
            };
            token.start = start;
            token.end = end;
        }
        Ok(tokens)
    }
}

/// Builder for [`Tokenizer`]
#[derive(Debug, Default)]
pub struct TokenizerBuilder {
    tables: Option<Arc<ShapeTables>>,
    options: TokenizerOptions,
}

impl TokenizerBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Use custom shape tables instead of the built-in ones
    pub fn tables(mut self, tables: impl Into<Arc<ShapeTables>>) -> Self {
        self.tables = Some(tables.into());
        self
    }

    /// Whether tokens carry a copy of their text
    pub fn materialize_text(mut self, enabled: bool) -> Self {
        self.options.materialize_text = enabled;
        self
    }

    /// Replace all options at once
    pub fn options(mut self, options: TokenizerOptions) -> Self {
        self.options = options;
        self
    }

    /// Build the tokenizer
    pub fn build(self) -> Result<Tokenizer> {
        let tables = match self.tables {
            Some(tables) => tables,
            None => tables::builtin()?,
        };
        log::debug!(
            "tokenizer ready: tables={} materialize_text={}",
            tables.code(),
            self.options.materialize_text
        );
        Ok(Tokenizer {
            tables,
            options: self.options,
        })
    }
}
