//! Application layer - Use cases and orchestration

pub mod catalog;
pub mod command;
pub mod init;
pub mod manage_config;
pub mod session;

pub use catalog::CatalogService;
pub use command::SessionCommand;
pub use session::{EditSession, Reply};
