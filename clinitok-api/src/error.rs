//! API error types

use std::string::FromUtf8Error;
use thiserror::Error;

/// API-level errors
#[derive(Error, Debug)]
pub enum ApiError {
    /// Tokenizer or table error
    #[error(transparent)]
    Core(#[from] clinitok_core::Error),

    /// UTF-8 conversion error
    #[error("UTF-8 error: {0}")]
    Utf8(#[from] FromUtf8Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Serialization error
    #[cfg(feature = "serde")]
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

impl From<clinitok_core::TablesError> for ApiError {
    fn from(err: clinitok_core::TablesError) -> Self {
        ApiError::Core(err.into())
    }
}

/// Result type for API operations
pub type Result<T> = std::result::Result<T, ApiError>;
