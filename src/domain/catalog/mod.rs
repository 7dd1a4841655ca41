//! Category catalog and local search

pub mod category;
pub mod search;

pub use category::{CatalogEntry, Category, CategoryGroup};
pub use search::{search, SearchMode, SearchQuery};
