//! Error types for scanning and table loading
//!
//! Input anomalies (empty text, whitespace-only text, text that ends in the
//! middle of what looks like a longer token) are never errors. The errors
//! below are either internal-consistency failures of the scanner or problems
//! with user-supplied shape tables.

use std::path::PathBuf;
use thiserror::Error;

/// Internal-consistency failures raised while scanning
///
/// These indicate a bug in a boundary detector or recognizer, never bad
/// input. They carry the offsets needed to reproduce the failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScanError {
    /// A sub-algorithm produced an empty or out-of-range token length
    #[error("invalid token length {length} at position {position} (input has {input_len} chars)")]
    InvalidLength {
        /// Cursor position where the token would start
        position: usize,
        /// Length that was computed
        length: usize,
        /// Number of characters in the scanned input
        input_len: usize,
    },

    /// Adding the segment offset to a token end overflowed
    #[error("segment offset {offset} overflows token end {end}")]
    OffsetOverflow {
        /// Offset of the segment in its containing document
        offset: usize,
        /// Token end relative to the segment
        end: usize,
    },
}

/// Errors raised while loading or validating shape tables
#[derive(Debug, Error)]
pub enum TablesError {
    /// The TOML document could not be parsed
    #[error("failed to parse shape tables: {0}")]
    Parse(#[from] toml::de::Error),

    /// A table file could not be read
    #[error("failed to read shape tables from {path:?}: {source}")]
    Io {
        /// Path that was being read
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The tables parsed but are inconsistent
    #[error("invalid shape tables: {0}")]
    Invalid(String),
}

/// Any error produced by this crate
#[derive(Debug, Error)]
pub enum Error {
    /// Scanner failure
    #[error(transparent)]
    Scan(#[from] ScanError),

    /// Table loading failure
    #[error(transparent)]
    Tables(#[from] TablesError),
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, Error>;
