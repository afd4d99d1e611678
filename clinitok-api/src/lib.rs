//! Public API for the clinitok clinical text tokenizer
//!
//! This crate wraps `clinitok-core` with a configuration layer, input
//! decoding and serializable output.

#![warn(missing_docs)]

pub mod config;
pub mod dto;
pub mod error;

use error::Result;
use std::time::Instant;

// Re-export key types
pub use config::{Config, ConfigBuilder, TablesSource};
pub use dto::{Input, Metadata, Output, TokenDTO};
pub use error::ApiError;

/// Main entry point for tokenization
pub struct TokenizerProcessor {
    inner: clinitok_core::Tokenizer,
    config: Config,
}

impl TokenizerProcessor {
    /// Create a processor with the built-in tables
    pub fn new() -> Result<Self> {
        Self::with_config(Config::default())
    }

    /// Create a processor with custom configuration
    pub fn with_config(config: Config) -> Result<Self> {
        let inner = config.build_tokenizer()?;
        log::debug!("processor ready with tables '{}'", inner.tables().name());
        Ok(Self { inner, config })
    }

    /// Tokenize the input
    pub fn process(&self, input: Input) -> Result<Output> {
        let start = Instant::now();

        let (text, offset) = input.into_parts()?;
        let total_chars = text.chars().count();

        let tokens: Vec<TokenDTO> = self
            .inner
            .tokenize_segment(&text, offset)?
            .into_iter()
            .map(TokenDTO::from)
            .collect();

        let elapsed = start.elapsed();
        let metadata = Metadata::new(
            total_chars,
            &tokens,
            u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX),
            self.inner.tables().code(),
        );

        Ok(Output { tokens, metadata })
    }

    /// Tokenize text directly (convenience method)
    pub fn process_text(&self, text: &str) -> Result<Output> {
        self.process(Input::from_text(text))
    }

    /// Get the current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}

// Convenience functions

/// Tokenize text with the built-in tables
pub fn tokenize_text(text: &str) -> Result<Output> {
    TokenizerProcessor::new()?.process_text(text)
}

/// Tokenize a document segment starting at character `offset`
pub fn tokenize_segment(text: &str, offset: usize) -> Result<Output> {
    TokenizerProcessor::new()?.process(Input::from_segment(text, offset))
}
