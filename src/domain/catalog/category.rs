//! Category file model
//!
//! A category file is a JSON object of groups, each group an object mapping
//! original labels to display labels:
//!
//! ```
//! use tagsmith::domain::catalog::Category;
//!
//! let json = r#"{ "hair": { "long_hair": "长发", "twintails": "双马尾" } }"#;
//! let category = Category::from_json("character", json).unwrap();
//! assert_eq!(category.groups[0].entries[1].original_text, "twintails");
//! ```

use crate::domain::tags::Candidate;
use crate::error::{Result, TagsmithError};
use serde_json::Value;

/// One label pair in a category group
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub original_text: String,
    pub display_text: String,
}

/// A named group of entries, in file order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryGroup {
    pub name: String,
    pub entries: Vec<CatalogEntry>,
}

/// A category (one JSON file), named after its file stem
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub name: String,
    pub groups: Vec<CategoryGroup>,
}

impl Category {
    /// Parse a category from its JSON text
    pub fn from_json(name: &str, json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)
            .map_err(|e| TagsmithError::Catalog(format!("{}: invalid JSON: {}", name, e)))?;

        let Value::Object(groups) = value else {
            return Err(TagsmithError::Catalog(format!(
                "{}: top level must be an object of groups",
                name
            )));
        };

        let mut parsed = Vec::with_capacity(groups.len());
        for (group_name, group_value) in groups {
            let Value::Object(labels) = group_value else {
                return Err(TagsmithError::Catalog(format!(
                    "{}: group '{}' must be an object of labels",
                    name, group_name
                )));
            };

            let mut entries = Vec::with_capacity(labels.len());
            for (original, display) in labels {
                let Value::String(display) = display else {
                    return Err(TagsmithError::Catalog(format!(
                        "{}: label '{}' in group '{}' must be a string",
                        name, original, group_name
                    )));
                };
                let display_text = if display.trim().is_empty() {
                    original.clone()
                } else {
                    display
                };
                entries.push(CatalogEntry {
                    original_text: original,
                    display_text,
                });
            }

            parsed.push(CategoryGroup {
                name: group_name,
                entries,
            });
        }

        Ok(Category {
            name: name.to_string(),
            groups: parsed,
        })
    }

    pub fn group(&self, name: &str) -> Option<&CategoryGroup> {
        self.groups.iter().find(|g| g.name == name)
    }

    pub fn entry_count(&self) -> usize {
        self.groups.iter().map(|g| g.entries.len()).sum()
    }

    /// All entries as candidates tagged with their category and group
    pub fn candidates(&self) -> Vec<Candidate> {
        self.groups
            .iter()
            .flat_map(|group| group.candidates(&self.name))
            .collect()
    }
}

impl CategoryGroup {
    pub fn candidates(&self, category: &str) -> Vec<Candidate> {
        self.entries
            .iter()
            .map(|entry| entry.to_candidate(category, &self.name))
            .collect()
    }
}

impl CatalogEntry {
    pub fn to_candidate(&self, category: &str, group: &str) -> Candidate {
        Candidate::new(self.original_text.clone(), self.display_text.clone())
            .with_metadata("category", category)
            .with_metadata("group", group)
    }
}
