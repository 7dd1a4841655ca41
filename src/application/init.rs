//! Workspace initialization use case

use crate::domain::SymbolStyle;
use crate::error::Result;
use crate::infrastructure::{Config, FileSystemWorkspace, WorkspaceRepository};
use std::fs;
use std::path::Path;
use tracing::info;

pub struct InitService;

impl InitService {
    /// Create `.tagsmith/config.toml` and an empty catalog directory under `path`
    pub fn execute(path: &Path, symbol: SymbolStyle) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path)?;
        }

        let workspace = FileSystemWorkspace::new(path.to_path_buf());
        workspace.initialize()?;

        let config = Config::new(symbol);
        workspace.save_config(&config)?;
        fs::create_dir_all(workspace.catalog_path(&config))?;

        info!(root = %path.display(), %symbol, "initialized workspace");
        Ok(())
    }
}
