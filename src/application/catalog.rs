//! Category browsing and search use cases

use crate::domain::catalog::{search, Category, CategoryGroup, SearchQuery};
use crate::domain::Candidate;
use crate::error::{Result, TagsmithError};
use crate::infrastructure::{Config, FileSystemWorkspace, WorkspaceRepository};
use tracing::debug;

/// Read access to a workspace's category catalog
pub struct CatalogService {
    repository: FileSystemWorkspace,
    config: Config,
}

impl CatalogService {
    /// Create a catalog service, loading the workspace config
    pub fn new(repository: FileSystemWorkspace) -> Result<Self> {
        let config = repository.load_config()?;
        Ok(CatalogService { repository, config })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn categories(&self) -> Result<Vec<String>> {
        self.repository.list_categories(&self.config)
    }

    pub fn category(&self, name: &str) -> Result<Category> {
        self.repository.load_category(&self.config, name)
    }

    /// Load a category, failing when `group` is given but not present in it
    pub fn browse(&self, name: &str, group: Option<&str>) -> Result<Category> {
        let category = self.category(name)?;
        if let Some(group_name) = group {
            require_group(&category, group_name)?;
        }
        Ok(category)
    }

    /// Candidates from a category, or from one of its groups
    pub fn candidates(&self, name: &str, group: Option<&str>) -> Result<Vec<Candidate>> {
        let category = self.category(name)?;
        match group {
            None => Ok(category.candidates()),
            Some(group_name) => {
                require_group(&category, group_name).map(|g| g.candidates(&category.name))
            }
        }
    }

    /// Search the whole catalog
    pub fn search(&self, query: &SearchQuery) -> Result<Vec<Candidate>> {
        let catalog = self.repository.load_catalog(&self.config)?;
        let results = search(&catalog, query)?;
        debug!(mode = %query.mode, query = %query.text, hits = results.len(), "catalog search");
        Ok(results)
    }
}

fn require_group<'a>(category: &'a Category, group: &str) -> Result<&'a CategoryGroup> {
    category.group(group).ok_or_else(|| {
        TagsmithError::Catalog(format!(
            "Group not found: '{}' in category '{}'",
            group, category.name
        ))
    })
}
