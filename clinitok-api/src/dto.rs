//! Data Transfer Objects for API

use crate::error::{ApiError, Result};
use clinitok_core::Token;
use std::collections::BTreeMap;

/// Input source for processing
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Input {
    /// Raw text string
    Text(String),
    /// Raw bytes (UTF-8)
    Bytes(Vec<u8>),
    /// Part of a larger document starting at character `offset`
    Segment {
        /// Segment text
        text: String,
        /// Character offset of the segment in its document
        offset: usize,
    },
}

impl Input {
    /// Create input from text
    pub fn from_text(text: impl Into<String>) -> Self {
        Input::Text(text.into())
    }

    /// Create input from bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Input::Bytes(bytes)
    }

    /// Create input for a document segment
    pub fn from_segment(text: impl Into<String>, offset: usize) -> Self {
        Input::Segment {
            text: text.into(),
            offset,
        }
    }

    /// Read the text content from the input
    pub fn read_text(self) -> Result<String> {
        self.into_parts().map(|(text, _)| text)
    }

    /// Text content and the offset to add to every token
    pub(crate) fn into_parts(self) -> Result<(String, usize)> {
        match self {
            Input::Text(text) => Ok((text, 0)),
            Input::Bytes(bytes) => Ok((String::from_utf8(bytes).map_err(ApiError::Utf8)?, 0)),
            Input::Segment { text, offset } => Ok((text, offset)),
        }
    }
}

/// Token information for serialization
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TokenDTO {
    /// Character offset of the first character
    pub start: usize,
    /// Character offset one past the last character
    pub end: usize,
    /// Token kind (`word`, `number`, ...)
    pub kind: String,
    /// Covered text, if materialized
    pub text: Option<String>,
    /// Capitalization class
    pub caps: String,
    /// Digit position class
    pub num_position: String,
    /// True for digit-only numbers
    pub is_integer: bool,
    /// Recognized shape, if any
    pub shape: Option<String>,
}

impl From<Token> for TokenDTO {
    fn from(token: Token) -> Self {
        Self {
            start: token.start,
            end: token.end,
            kind: token.kind.to_string(),
            text: token.text,
            caps: token.caps.to_string(),
            num_position: token.num_position.to_string(),
            is_integer: token.is_integer,
            shape: token.shape.map(|s| s.to_string()),
        }
    }
}

/// Processing metadata
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Metadata {
    /// Total characters processed
    pub total_chars: usize,
    /// Number of tokens emitted
    pub token_count: usize,
    /// Token count per kind
    pub kind_counts: BTreeMap<String, usize>,
    /// Processing time in microseconds
    pub processing_time_us: u64,
    /// Code of the shape tables used
    pub tables: String,
}

impl Metadata {
    /// Summarize `tokens`
    pub fn new(
        total_chars: usize,
        tokens: &[TokenDTO],
        processing_time_us: u64,
        tables: impl Into<String>,
    ) -> Self {
        let mut kind_counts = BTreeMap::new();
        for token in tokens {
            *kind_counts.entry(token.kind.clone()).or_insert(0) += 1;
        }

        Self {
            total_chars,
            token_count: tokens.len(),
            kind_counts,
            processing_time_us,
            tables: tables.into(),
        }
    }
}

/// Complete output with tokens and metadata
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Output {
    /// Emitted tokens in order
    pub tokens: Vec<TokenDTO>,
    /// Processing metadata
    pub metadata: Metadata,
}

impl Output {
    /// Token texts in order; empty strings when text was not materialized
    pub fn texts(&self) -> Vec<&str> {
        self.tokens
            .iter()
            .map(|t| t.text.as_deref().unwrap_or_default())
            .collect()
    }

    /// Serialize as pretty-printed JSON
    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
