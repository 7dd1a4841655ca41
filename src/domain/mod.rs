//! Domain layer - Tag model, weight encoding and catalog search

pub mod catalog;
pub mod tags;

pub use catalog::{Category, SearchMode, SearchQuery};
pub use tags::{Candidate, SymbolStyle, Tag, TagId, TagStore};
