//! tagsmith - Weighted prompt tag composer
//!
//! Collects tags from a local category catalog, free-text paste and search,
//! lets them be weighted and reordered, and exports them as one
//! comma-separated string with bracket emphasis.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::TagsmithError;
