//! Local tag search over a loaded catalog
//!
//! Three modes, matched against both labels of every entry:
//! - `exact`: label equals the query (ASCII case-insensitive)
//! - `fuzzy`: label contains the query (case-insensitive)
//! - `regex`: label matches the pattern

use super::category::Category;
use crate::domain::tags::Candidate;
use crate::error::{Result, TagsmithError};
use regex::Regex;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchMode {
    Exact,
    #[default]
    Fuzzy,
    Regex,
}

impl FromStr for SearchMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "exact" => Ok(SearchMode::Exact),
            "fuzzy" => Ok(SearchMode::Fuzzy),
            "regex" | "regular_expression" => Ok(SearchMode::Regex),
            _ => Err(format!(
                "Invalid search mode: '{}'. Valid modes are: exact, fuzzy, regex",
                s
            )),
        }
    }
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchMode::Exact => write!(f, "exact"),
            SearchMode::Fuzzy => write!(f, "fuzzy"),
            SearchMode::Regex => write!(f, "regex"),
        }
    }
}

/// A search request; `limit: None` returns every match
#[derive(Debug, Clone)]
pub struct SearchQuery {
    pub mode: SearchMode,
    pub text: String,
    pub limit: Option<usize>,
}

enum Matcher {
    Exact(String),
    Fuzzy(String),
    Pattern(Regex),
}

impl Matcher {
    fn build(mode: SearchMode, text: &str) -> Result<Self> {
        Ok(match mode {
            SearchMode::Exact => Matcher::Exact(text.to_string()),
            SearchMode::Fuzzy => Matcher::Fuzzy(text.to_lowercase()),
            SearchMode::Regex => Matcher::Pattern(
                Regex::new(text)
                    .map_err(|e| TagsmithError::Search(format!("Invalid pattern: {}", e)))?,
            ),
        })
    }

    fn matches(&self, label: &str) -> bool {
        match self {
            Matcher::Exact(query) => label.eq_ignore_ascii_case(query),
            Matcher::Fuzzy(query) => label.to_lowercase().contains(query.as_str()),
            Matcher::Pattern(regex) => regex.is_match(label),
        }
    }
}

/// Search every entry of every category, in catalog order
pub fn search(categories: &[Category], query: &SearchQuery) -> Result<Vec<Candidate>> {
    let text = query.text.trim();
    if text.is_empty() || query.limit == Some(0) {
        return Ok(Vec::new());
    }

    let matcher = Matcher::build(query.mode, text)?;
    let limit = query.limit.unwrap_or(usize::MAX);

    let results = categories
        .iter()
        .flat_map(|category| {
            category.groups.iter().flat_map(move |group| {
                group
                    .entries
                    .iter()
                    .map(move |entry| (category.name.as_str(), group.name.as_str(), entry))
            })
        })
        .filter(|(_, _, entry)| {
            matcher.matches(&entry.original_text) || matcher.matches(&entry.display_text)
        })
        .take(limit)
        .map(|(category, group, entry)| entry.to_candidate(category, group))
        .collect();

    Ok(results)
}
