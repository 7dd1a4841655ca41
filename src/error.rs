//! Error types for tagsmith

use crate::domain::tags::TagId;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for tagsmith
#[derive(Debug, Error)]
pub enum TagsmithError {
    #[error("Not a tagsmith workspace: {0}")]
    NotWorkspace(PathBuf),

    #[error("Invalid command: {0}")]
    InvalidCommand(String),

    #[error("Tag not found: {0}")]
    TagNotFound(TagId),

    #[error("No tag at position {0}")]
    NoTagAtPosition(usize),

    #[error("Invalid permutation: {0}")]
    InvalidPermutation(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("Search error: {0}")]
    Search(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl TagsmithError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            TagsmithError::NotWorkspace(_) => 2,
            TagsmithError::InvalidCommand(_) => 3,
            TagsmithError::TagNotFound(_) | TagsmithError::NoTagAtPosition(_) => 4,
            TagsmithError::InvalidPermutation(_) => 5,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            TagsmithError::NotWorkspace(path) => {
                format!(
                    "Not a tagsmith workspace: {}\n\n\
                    Suggestions:\n\
                    • Run 'tagsmith init' in this directory to create a workspace\n\
                    • Navigate to an existing tagsmith workspace\n\
                    • Set TAGSMITH_ROOT environment variable to your workspace path",
                    path.display()
                )
            }
            TagsmithError::InvalidCommand(msg) if msg.starts_with("Invalid search mode") => {
                format!(
                    "{}\n\n\
                    Example: tagsmith search hair --mode exact",
                    msg
                )
            }
            TagsmithError::InvalidCommand(cmd) => {
                format!(
                    "Invalid command: {}\n\n\
                    Session commands:\n\
                    • add <text> [| <display>], paste <a, b, c>\n\
                    • plus <pos>, minus <pos>, del <pos>\n\
                    • move <from> <to>, order <p1> <p2> ...\n\
                    • browse <category> [group], search <mode> <query> [limit], pick <n|all>\n\
                    • clear, symbol [curly|round|toggle], list, export, json, quit",
                    cmd
                )
            }
            TagsmithError::NoTagAtPosition(pos) => {
                format!(
                    "No tag at position {}\n\n\
                    Suggestions:\n\
                    • Use 'list' to see current positions (they start at 1)",
                    pos
                )
            }
            TagsmithError::Config(msg) => {
                if msg.contains("Invalid symbol") {
                    format!(
                        "{}\n\n\
                        Valid symbols: curly, round\n\
                        Example: tagsmith config symbol round",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using TagsmithError
pub type Result<T> = std::result::Result<T, TagsmithError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_workspace_suggestion() {
        let err = TagsmithError::NotWorkspace(PathBuf::from("/tmp/test"));
        let msg = err.display_with_suggestions();
        assert!(msg.contains("tagsmith init"));
        assert!(msg.contains("TAGSMITH_ROOT"));
        assert!(msg.contains("Suggestions"));
    }

    #[test]
    fn test_invalid_command_lists_commands() {
        let err = TagsmithError::InvalidCommand("frobnicate".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("frobnicate"));
        assert!(msg.contains("paste <a, b, c>"));
        assert!(msg.contains("symbol [curly|round|toggle]"));
    }

    #[test]
    fn test_invalid_search_mode_is_a_usage_error() {
        let err = TagsmithError::InvalidCommand(
            "Invalid search mode: 'wild'. Valid modes are: exact, fuzzy, regex".to_string(),
        );
        assert_eq!(err.exit_code(), 3);
        let msg = err.display_with_suggestions();
        assert!(msg.contains("tagsmith search hair --mode exact"));
        assert!(!msg.contains("Session commands"));
    }

    #[test]
    fn test_config_invalid_symbol_suggestions() {
        let err = TagsmithError::Config("Invalid symbol: square".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("curly, round"));
        assert!(msg.contains("tagsmith config symbol round"));
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(TagsmithError::NotWorkspace(PathBuf::from(".")).exit_code(), 2);
        assert_eq!(TagsmithError::InvalidCommand("x".into()).exit_code(), 3);
        assert_eq!(TagsmithError::NoTagAtPosition(9).exit_code(), 4);
        assert_eq!(TagsmithError::InvalidPermutation("x".into()).exit_code(), 5);
        assert_eq!(TagsmithError::Catalog("x".into()).exit_code(), 1);
    }

    #[test]
    fn test_other_errors_fallback() {
        let err = TagsmithError::Search("bad pattern".to_string());
        let msg = err.display_with_suggestions();
        assert_eq!(msg, "Search error: bad pattern");
    }
}
