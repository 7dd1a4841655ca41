//! File system workspace

use crate::domain::Category;
use crate::error::{Result, TagsmithError};
use crate::infrastructure::config::{Config, WORKSPACE_DIR};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use walkdir::WalkDir;

/// Abstract repository for workspace operations
pub trait WorkspaceRepository {
    /// Get the root directory of this workspace
    fn root(&self) -> &Path;

    /// Load configuration from .tagsmith/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .tagsmith/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if .tagsmith directory exists
    fn is_initialized(&self) -> bool;

    /// Create .tagsmith directory structure
    fn initialize(&self) -> Result<()>;
}

/// File system implementation of WorkspaceRepository
#[derive(Debug, Clone)]
pub struct FileSystemWorkspace {
    pub root: PathBuf,
}

impl FileSystemWorkspace {
    /// Create a new workspace handle with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemWorkspace { root }
    }

    /// Discover workspace root by walking up from current directory
    /// First checks TAGSMITH_ROOT environment variable, then falls back to discovery
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("TAGSMITH_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_workspace_dir(&path) {
                return Ok(FileSystemWorkspace::new(path));
            } else {
                return Err(TagsmithError::Config(format!(
                    "TAGSMITH_ROOT is set to '{}' but no .tagsmith directory found. \
                    Run 'tagsmith init' in that directory or unset TAGSMITH_ROOT.",
                    path.display()
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover workspace root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_workspace_dir(&current) {
                return Ok(FileSystemWorkspace::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => return Err(TagsmithError::NotWorkspace(start.to_path_buf())),
            }
        }
    }

    fn has_workspace_dir(path: &Path) -> bool {
        path.join(WORKSPACE_DIR).is_dir()
    }
}

impl WorkspaceRepository for FileSystemWorkspace {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_workspace_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        let workspace_dir = self.root.join(WORKSPACE_DIR);

        if workspace_dir.exists() {
            return Err(TagsmithError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir_all(&workspace_dir)?;
        Ok(())
    }
}

// Catalog operations (not part of trait - filesystem-specific)
impl FileSystemWorkspace {
    /// Absolute path of the catalog directory
    pub fn catalog_path(&self, config: &Config) -> PathBuf {
        if config.catalog_dir.is_absolute() {
            config.catalog_dir.clone()
        } else {
            self.root.join(&config.catalog_dir)
        }
    }

    /// Category names (JSON file stems), sorted
    pub fn list_categories(&self, config: &Config) -> Result<Vec<String>> {
        let dir = self.catalog_path(config);
        if !dir.is_dir() {
            return Err(TagsmithError::Catalog(format!(
                "Catalog directory not found: {}",
                dir.display()
            )));
        }

        let mut names = Vec::new();
        for entry in WalkDir::new(&dir).min_depth(1).max_depth(1) {
            let entry = entry.map_err(|e| TagsmithError::Catalog(e.to_string()))?;
            let path = entry.path();
            if !entry.file_type().is_file() {
                continue;
            }
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                names.push(stem.to_string());
            }
        }

        names.sort();
        debug!(count = names.len(), dir = %dir.display(), "list categories");
        Ok(names)
    }

    /// Load one category by name
    pub fn load_category(&self, config: &Config, name: &str) -> Result<Category> {
        if name.is_empty() || name.contains(['/', '\\']) || name.starts_with('.') {
            return Err(TagsmithError::Catalog(format!("Invalid category name: {}", name)));
        }

        let path = self.catalog_path(config).join(format!("{}.json", name));
        let contents = fs::read_to_string(&path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                TagsmithError::Catalog(format!("Category not found: {}", name))
            } else {
                TagsmithError::Io(e)
            }
        })?;

        let category = Category::from_json(name, &contents)?;
        info!(
            category = name,
            groups = category.groups.len(),
            entries = category.entry_count(),
            "loaded category"
        );
        Ok(category)
    }

    /// Load every category in name order
    pub fn load_catalog(&self, config: &Config) -> Result<Vec<Category>> {
        self.list_categories(config)?
            .iter()
            .map(|name| self.load_category(config, name))
            .collect()
    }
}
