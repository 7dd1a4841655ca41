//! Infrastructure layer - Configuration and workspace files

pub mod config;
pub mod repository;

pub use config::Config;
pub use repository::{FileSystemWorkspace, WorkspaceRepository};
