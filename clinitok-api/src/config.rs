//! High-level configuration API

use crate::error::{ApiError, Result};
use clinitok_core::{ShapeTables, Tokenizer};
use std::path::PathBuf;

/// Where the shape tables come from
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TablesSource {
    /// Embedded English tables
    #[default]
    Builtin,
    /// TOML document held in memory
    Toml(String),
    /// TOML file on disk
    File(PathBuf),
}

/// High-level configuration for tokenization
#[derive(Debug, Clone)]
pub struct Config {
    pub(crate) tables: TablesSource,
    pub(crate) materialize_text: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tables: TablesSource::Builtin,
            materialize_text: true,
        }
    }
}

impl Config {
    /// Create a builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Table source in use
    pub fn tables(&self) -> &TablesSource {
        &self.tables
    }

    /// Whether tokens carry their text
    pub fn materialize_text(&self) -> bool {
        self.materialize_text
    }

    /// Load the tables and build a tokenizer
    pub(crate) fn build_tokenizer(&self) -> Result<Tokenizer> {
        let mut builder = Tokenizer::builder().materialize_text(self.materialize_text);

        match &self.tables {
            TablesSource::Builtin => {}
            TablesSource::Toml(toml) => {
                builder = builder.tables(ShapeTables::from_toml_str(toml)?);
            }
            TablesSource::File(path) => {
                builder = builder.tables(ShapeTables::from_path(path)?);
            }
        }

        Ok(builder.build()?)
    }
}

/// Configuration builder
#[derive(Debug)]
pub struct ConfigBuilder {
    tables_toml: Option<String>,
    tables_file: Option<PathBuf>,
    materialize_text: bool,
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self {
            tables_toml: None,
            tables_file: None,
            materialize_text: true,
        }
    }
}

impl ConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Use shape tables from a TOML string
    pub fn tables_toml(mut self, toml: impl Into<String>) -> Self {
        self.tables_toml = Some(toml.into());
        self
    }

    /// Use shape tables from a TOML file
    pub fn tables_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.tables_file = Some(path.into());
        self
    }

    /// Whether tokens carry their text
    pub fn materialize_text(mut self, enabled: bool) -> Self {
        self.materialize_text = enabled;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config> {
        let tables = match (self.tables_toml, self.tables_file) {
            (Some(_), Some(_)) => {
                return Err(ApiError::Config(
                    "set either tables_toml or tables_file, not both".to_string(),
                ))
            }
            (Some(toml), None) => TablesSource::Toml(toml),
            (None, Some(path)) => TablesSource::File(path),
            (None, None) => TablesSource::Builtin,
        };

        Ok(Config {
            tables,
            materialize_text: self.materialize_text,
        })
    }
}
