//! Configuration structures and validation
//!
//! This module defines the TOML schema for shape tables.

use crate::error::TablesError;
use serde::{Deserialize, Serialize};

/// Root shape table configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TablesConfig {
    pub metadata: Metadata,
    pub punctuation: Punctuation,
    #[serde(default)]
    pub multi_token_words: Vec<MultiTokenWord>,
    pub contractions: Contractions,
    pub hyphens: Hyphens,
    pub urls: Urls,
}

/// Table set metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    pub code: String,
    pub name: String,
}

/// Characters that always form a one-character punctuation token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Punctuation {
    pub chars: Vec<char>,
}

/// A word split into fixed-length parts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MultiTokenWord {
    pub word: String,
    pub lengths: Vec<usize>,
}

/// Apostrophe handling
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contractions {
    /// Clitic endings in priority order; each holds exactly one apostrophe
    pub endings: Vec<String>,
    #[serde(default)]
    pub names_starting_with_apostrophe: Vec<String>,
    #[serde(default)]
    pub apostrophe_starting: Vec<String>,
    #[serde(default = "default_apostrophe_split")]
    pub apostrophe_starting_split: usize,
    #[serde(default)]
    pub do_not_break: Vec<String>,
}

/// Hyphen compound tables
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hyphens {
    /// Prefixes including their trailing hyphen (`pre-`)
    #[serde(default)]
    pub prefixes: Vec<String>,
    /// Suffixes including their leading hyphen (`-esque`, `-o-torium`)
    #[serde(default)]
    pub suffixes: Vec<String>,
    /// Whole hyphenated words (`uh-oh`)
    #[serde(default)]
    pub words: Vec<String>,
}

/// URL recognition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Urls {
    pub schemes: Vec<String>,
}

fn default_apostrophe_split() -> usize {
    2
}

impl TablesConfig {
    /// Validate configuration
    pub(crate) fn validate(&self) -> Result<(), TablesError> {
        if self.punctuation.chars.is_empty() {
            return Err(invalid("no punctuation characters defined"));
        }

        for entry in &self.multi_token_words {
            let word_len = entry.word.chars().count();
            if !(2..=3).contains(&entry.lengths.len()) {
                return Err(invalid(format!(
                    "multi-token word '{}' must have 2 or 3 parts",
                    entry.word
                )));
            }
            if entry.lengths.contains(&0) || entry.lengths.iter().sum::<usize>() != word_len {
                return Err(invalid(format!(
                    "part lengths of multi-token word '{}' must be positive and sum to {word_len}",
                    entry.word
                )));
            }
        }

        if self.contractions.endings.is_empty() {
            return Err(invalid("no contraction endings defined"));
        }
        for ending in &self.contractions.endings {
            let apostrophes = ending.chars().filter(|&c| c == '\'').count();
            if apostrophes != 1 || ending.ends_with('\'') {
                return Err(invalid(format!(
                    "contraction ending '{ending}' must contain one apostrophe followed by letters"
                )));
            }
        }
        for name in &self.contractions.names_starting_with_apostrophe {
            if !name.starts_with('\'') || name.chars().count() < 2 {
                return Err(invalid(format!(
                    "name '{name}' must start with an apostrophe"
                )));
            }
        }
        let split = self.contractions.apostrophe_starting_split;
        for word in &self.contractions.apostrophe_starting {
            if !word.starts_with('\'') || split == 0 || split >= word.chars().count() {
                return Err(invalid(format!(
                    "apostrophe-initial contraction '{word}' cannot be split after {split} chars"
                )));
            }
        }

        for prefix in &self.hyphens.prefixes {
            if !prefix.ends_with('-') || prefix.len() < 2 {
                return Err(invalid(format!("hyphen prefix '{prefix}' must end in '-'")));
            }
        }
        for suffix in &self.hyphens.suffixes {
            let hyphens = suffix.chars().filter(|&c| c == '-').count();
            if !suffix.starts_with('-') || suffix.ends_with('-') || hyphens > 2 {
                return Err(invalid(format!(
                    "hyphen suffix '{suffix}' must start with '-' and hold at most two hyphens"
                )));
            }
        }
        for word in &self.hyphens.words {
            if !word.contains('-') || word.starts_with('-') || word.ends_with('-') {
                return Err(invalid(format!(
                    "hyphenated word '{word}' must contain an inner hyphen"
                )));
            }
        }

        if self.urls.schemes.iter().any(String::is_empty) {
            return Err(invalid("URL schemes must not be empty"));
        }

        Ok(())
    }
}

fn invalid(message: impl Into<String>) -> TablesError {
    TablesError::Invalid(message.into())
}
