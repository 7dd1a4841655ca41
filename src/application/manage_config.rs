//! Config management use case

use crate::domain::SymbolStyle;
use crate::error::{Result, TagsmithError};
use crate::infrastructure::{Config, FileSystemWorkspace, WorkspaceRepository};
use std::path::PathBuf;
use std::str::FromStr;

/// Service for managing workspace configuration
pub struct ConfigService {
    repository: FileSystemWorkspace,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(repository: FileSystemWorkspace) -> Self {
        ConfigService { repository }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.repository.load_config()?;

        match key {
            "symbol" => Ok(config.symbol.to_string()),
            "catalog_dir" => Ok(config.catalog_dir.display().to_string()),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(TagsmithError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: symbol, catalog_dir, created",
                key
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;

        match key {
            "symbol" => {
                config.symbol = SymbolStyle::from_str(value).map_err(TagsmithError::Config)?;
            }
            "catalog_dir" => {
                if value.trim().is_empty() {
                    return Err(TagsmithError::Config(
                        "catalog_dir cannot be empty".to_string(),
                    ));
                }
                config.catalog_dir = PathBuf::from(value);
            }
            "created" => {
                return Err(TagsmithError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(TagsmithError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: symbol, catalog_dir",
                    key
                )));
            }
        }

        self.repository.save_config(&config)?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.repository.load_config()
    }
}
