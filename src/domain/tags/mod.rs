//! Tag system

pub mod splitter;
pub mod store;
pub mod tag;
pub mod weight;

// Re-export main types
pub use splitter::split_custom_input;
pub use store::{SharedTagStore, TagStore};
pub use tag::{Candidate, Emphasis, Tag, TagId};
pub use weight::{render_sequence, render_tag, SymbolStyle, EXPORT_SEPARATOR};
