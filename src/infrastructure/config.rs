//! Configuration management

use crate::domain::SymbolStyle;
use crate::error::{Result, TagsmithError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Name of the per-workspace metadata directory
pub const WORKSPACE_DIR: &str = ".tagsmith";

/// Environment variable overriding the configured symbol style
pub const SYMBOL_ENV: &str = "TAGSMITH_SYMBOL";

/// Default catalog directory, relative to the workspace root
pub const DEFAULT_CATALOG_DIR: &str = "categories";

fn default_catalog_dir() -> PathBuf {
    PathBuf::from(DEFAULT_CATALOG_DIR)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub symbol: SymbolStyle,
    #[serde(default = "default_catalog_dir")]
    pub catalog_dir: PathBuf,
    pub created: DateTime<Utc>,
}

impl Config {
    /// Create a new config with default values
    pub fn new(symbol: SymbolStyle) -> Self {
        Config {
            symbol,
            catalog_dir: default_catalog_dir(),
            created: Utc::now(),
        }
    }

    /// Load config from .tagsmith/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(WORKSPACE_DIR).join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                TagsmithError::NotWorkspace(path.to_path_buf())
            } else {
                TagsmithError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| TagsmithError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .tagsmith/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let workspace_dir = path.join(WORKSPACE_DIR);
        let config_path = workspace_dir.join("config.toml");

        if !workspace_dir.exists() {
            fs::create_dir(&workspace_dir)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| TagsmithError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, contents)?;

        Ok(())
    }

    /// Symbol style for a new session, checking TAGSMITH_SYMBOL first
    pub fn get_symbol(&self) -> Result<SymbolStyle> {
        Ok(symbol_override()?.unwrap_or(self.symbol))
    }
}

/// Symbol style set through TAGSMITH_SYMBOL, if any
pub fn symbol_override() -> Result<Option<SymbolStyle>> {
    match std::env::var(SYMBOL_ENV) {
        Ok(value) => SymbolStyle::from_str(&value)
            .map(Some)
            .map_err(|e| TagsmithError::Config(format!("{} (from {})", e, SYMBOL_ENV))),
        Err(_) => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_new_config() {
        let config = Config::new(SymbolStyle::Round);
        assert_eq!(config.symbol, SymbolStyle::Round);
        assert_eq!(config.catalog_dir, PathBuf::from("categories"));
    }

    #[test]
    fn test_save_and_load_config() {
        let temp = TempDir::new().unwrap();
        let config = Config::new(SymbolStyle::Round);

        config.save_to_dir(temp.path()).unwrap();
        assert!(temp.path().join(".tagsmith/config.toml").exists());

        let loaded = Config::load_from_dir(temp.path()).unwrap();
        assert_eq!(loaded.symbol, config.symbol);
        assert_eq!(loaded.catalog_dir, config.catalog_dir);
        assert_eq!(loaded.created, config.created);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".tagsmith")).unwrap();
        fs::write(
            temp.path().join(".tagsmith/config.toml"),
            "created = \"2025-01-17T10:00:00Z\"\n",
        )
        .unwrap();

        let loaded = Config::load_from_dir(temp.path()).unwrap();
        assert_eq!(loaded.symbol, SymbolStyle::Curly);
        assert_eq!(loaded.catalog_dir, PathBuf::from("categories"));
    }

    #[test]
    fn test_load_missing_config() {
        let temp = TempDir::new().unwrap();
        let result = Config::load_from_dir(temp.path());
        match result.unwrap_err() {
            TagsmithError::NotWorkspace(_) => {}
            _ => panic!("Expected NotWorkspace error"),
        }
    }

    #[test]
    fn test_invalid_symbol_in_file() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".tagsmith")).unwrap();
        fs::write(
            temp.path().join(".tagsmith/config.toml"),
            "symbol = \"square\"\ncreated = \"2025-01-17T10:00:00Z\"\n",
        )
        .unwrap();

        let err = Config::load_from_dir(temp.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config.toml"));
    }
}
