//! Shape table loader
//!
//! The built-in English tables are embedded at compile time and compiled
//! once on first use.

use std::path::Path;
use std::sync::{Arc, OnceLock};

use crate::error::TablesError;
use crate::tables::{config::TablesConfig, ShapeTables};

const ENGLISH: &str = include_str!("../../configs/tables/english.toml");

/// Embedded tables, compiled on first access
static BUILTIN: OnceLock<Result<Arc<ShapeTables>, String>> = OnceLock::new();

/// Built-in English shape tables
pub fn builtin() -> Result<Arc<ShapeTables>, TablesError> {
    BUILTIN
        .get_or_init(|| match ShapeTables::from_toml_str(ENGLISH) {
            Ok(tables) => {
                log::debug!("Loaded built-in shape tables '{}'", tables.code());
                Ok(Arc::new(tables))
            }
            Err(e) => {
                log::warn!("Failed to load built-in shape tables: {e}");
                Err(e.to_string())
            }
        })
        .clone()
        .map_err(TablesError::Invalid)
}

impl ShapeTables {
    /// Parse, validate and compile tables from a TOML document
    pub fn from_toml_str(toml_str: &str) -> Result<Self, TablesError> {
        let config: TablesConfig = toml::from_str(toml_str)?;
        Self::from_config(&config)
    }

    /// Load tables from a TOML file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, TablesError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| TablesError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let tables = Self::from_toml_str(&contents)?;
        log::debug!("Loaded shape tables '{}' from {path:?}", tables.code());
        Ok(tables)
    }
}
