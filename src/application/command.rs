//! Editing session command parsing
//!
//! # Examples
//!
//! ```
//! use tagsmith::application::command::SessionCommand;
//!
//! let cmd = SessionCommand::parse("plus 2").unwrap();
//! assert_eq!(cmd, Some(SessionCommand::Strengthen(2)));
//! assert_eq!(SessionCommand::parse("# comment").unwrap(), None);
//! ```

use crate::domain::{Candidate, SearchMode, SymbolStyle};
use crate::error::{Result, TagsmithError};
use std::str::FromStr;

/// Which pool entries a `pick` adds
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickSelection {
    All,
    /// 1-based pool positions, in the order given
    Positions(Vec<usize>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolChange {
    Toggle,
    Set(SymbolStyle),
}

/// One line of an editing session. Positions are 1-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Add(Candidate),
    Paste(String),
    Browse {
        category: String,
        group: Option<String>,
    },
    Search {
        mode: SearchMode,
        text: String,
        limit: Option<usize>,
    },
    Candidates,
    Pick(PickSelection),
    Strengthen(usize),
    Weaken(usize),
    Delete(usize),
    Move {
        from: usize,
        to: usize,
    },
    Order(Vec<usize>),
    Clear,
    Symbol(SymbolChange),
    List,
    Export,
    Json,
    Quit,
}

impl SessionCommand {
    /// Parse one input line. Blank lines and `#` comments yield `None`.
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let command = match word.to_lowercase().as_str() {
            "add" => Self::parse_add(rest)?,
            "paste" => SessionCommand::Paste(rest.to_string()),
            "browse" => {
                let mut args = rest.split_whitespace();
                let category = args
                    .next()
                    .ok_or_else(|| usage("browse <category> [group]"))?
                    .to_string();
                let group = args.next().map(str::to_string);
                if args.next().is_some() {
                    return Err(usage("browse <category> [group]"));
                }
                SessionCommand::Browse { category, group }
            }
            "search" => Self::parse_search(rest)?,
            "candidates" => SessionCommand::Candidates,
            "pick" => {
                if rest.eq_ignore_ascii_case("all") {
                    SessionCommand::Pick(PickSelection::All)
                } else {
                    let positions = parse_positions(rest)?;
                    if positions.is_empty() {
                        return Err(usage("pick <n...|all>"));
                    }
                    SessionCommand::Pick(PickSelection::Positions(positions))
                }
            }
            "plus" | "+" => SessionCommand::Strengthen(single_position(rest, "plus <pos>")?),
            "minus" | "-" => SessionCommand::Weaken(single_position(rest, "minus <pos>")?),
            "del" | "delete" | "rm" => SessionCommand::Delete(single_position(rest, "del <pos>")?),
            "move" | "mv" => match parse_positions(rest)?.as_slice() {
                [from, to] => SessionCommand::Move {
                    from: *from,
                    to: *to,
                },
                _ => return Err(usage("move <from> <to>")),
            },
            "order" => {
                let positions = parse_positions(rest)?;
                SessionCommand::Order(positions)
            }
            "clear" => SessionCommand::Clear,
            "symbol" => match rest.to_lowercase().as_str() {
                "" | "toggle" => SessionCommand::Symbol(SymbolChange::Toggle),
                other => SessionCommand::Symbol(SymbolChange::Set(
                    SymbolStyle::from_str(other).map_err(TagsmithError::InvalidCommand)?,
                )),
            },
            "list" | "ls" => SessionCommand::List,
            "export" | "copy" => SessionCommand::Export,
            "json" => SessionCommand::Json,
            "quit" | "exit" => SessionCommand::Quit,
            _ => return Err(TagsmithError::InvalidCommand(line.to_string())),
        };

        Ok(Some(command))
    }

    fn parse_add(rest: &str) -> Result<Self> {
        let (original, display) = match rest.split_once('|') {
            Some((original, display)) => (original.trim(), display.trim()),
            None => (rest, ""),
        };
        if original.is_empty() {
            return Err(usage("add <original> [| <display>]"));
        }
        Ok(SessionCommand::Add(Candidate::new(original, display)))
    }

    fn parse_search(rest: &str) -> Result<Self> {
        const USAGE: &str = "search <exact|fuzzy|regex> <query> [limit]";

        let (mode, query) = rest.split_once(char::is_whitespace).ok_or_else(|| usage(USAGE))?;
        let mode = SearchMode::from_str(mode).map_err(TagsmithError::InvalidCommand)?;
        let query = query.trim();

        // A trailing number is the result limit, unless it is the whole query.
        let (text, limit) = match query.rsplit_once(char::is_whitespace) {
            Some((text, last)) => match last.parse::<usize>() {
                Ok(limit) => (text.trim(), Some(limit)),
                Err(_) => (query, None),
            },
            None => (query, None),
        };

        if text.is_empty() {
            return Err(usage(USAGE));
        }

        Ok(SessionCommand::Search {
            mode,
            text: text.to_string(),
            limit,
        })
    }
}

fn usage(form: &str) -> TagsmithError {
    TagsmithError::InvalidCommand(format!("usage: {}", form))
}

fn parse_positions(input: &str) -> Result<Vec<usize>> {
    input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|piece| !piece.is_empty())
        .map(|piece| match piece.parse::<usize>() {
            Ok(pos) if pos > 0 => Ok(pos),
            _ => Err(TagsmithError::InvalidCommand(format!(
                "Invalid position: '{}' (positions start at 1)",
                piece
            ))),
        })
        .collect()
}

fn single_position(input: &str, form: &str) -> Result<usize> {
    match parse_positions(input)?.as_slice() {
        [pos] => Ok(*pos),
        _ => Err(usage(form)),
    }
}
