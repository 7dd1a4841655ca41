//! CLI layer - Command-line interface

pub mod commands;
pub mod output;
pub mod repl;

pub use commands::{Cli, Commands};
pub use output::{format_candidate_list, format_category, format_category_list, format_tag_list};
pub use repl::run_session;
