//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "tagsmith")]
#[command(about = "Compose weighted prompt tag strings", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new workspace
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Default strengthen symbol (curly, round)
        #[arg(short, long, default_value = "curly")]
        symbol: String,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },

    /// List categories in the workspace catalog
    Categories,

    /// Show the groups and labels of a category
    Browse {
        /// Category name (JSON file stem)
        category: String,

        /// Only show this group
        #[arg(short, long)]
        group: Option<String>,
    },

    /// Search the workspace catalog
    Search {
        /// Text or pattern to search for
        query: String,

        /// Search mode (exact, fuzzy, regex)
        #[arg(short, long, default_value = "fuzzy")]
        mode: String,

        /// Maximum number of results (default: all)
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Normalize a comma-separated tag list into an export string
    Render {
        /// Tags separated by commas
        text: String,
    },

    /// Run an editing session reading commands from stdin or a script
    Session {
        /// Read commands from this file instead of stdin
        #[arg(short, long)]
        script: Option<PathBuf>,

        /// Start with round brackets for strengthened tags
        #[arg(short, long)]
        round: bool,
    },
}
