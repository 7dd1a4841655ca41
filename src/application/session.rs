//! Editing session use case
//!
//! An [`EditSession`] owns one [`TagStore`], the current symbol style and the
//! candidate pool filled by the latest browse or search. Positions arriving
//! from the outside are 1-based and resolved to tag ids before the store is
//! touched, so a stale position never mutates anything.

use crate::application::catalog::CatalogService;
use crate::application::command::{PickSelection, SessionCommand, SymbolChange};
use crate::domain::tags::{
    render_tag, split_custom_input, Candidate, SymbolStyle, Tag, TagId, TagStore,
};
use crate::domain::SearchQuery;
use crate::error::{Result, TagsmithError};
use serde::Serialize;
use tracing::debug;

/// Outcome of one session command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Added(usize),
    Emphasis { position: usize, rendered: String },
    Removed { position: usize, tag: Tag },
    Reordered(usize),
    Cleared(usize),
    Symbol(SymbolStyle),
    Candidates(Vec<Candidate>),
    Sequence { tags: Vec<Tag>, style: SymbolStyle },
    Export(String),
    Json(String),
    Quit,
}

#[derive(Serialize)]
struct Snapshot<'a> {
    symbol: SymbolStyle,
    export: String,
    tags: &'a [Tag],
}

pub struct EditSession {
    store: TagStore,
    style: SymbolStyle,
    pool: Vec<Candidate>,
    catalog: Option<CatalogService>,
}

impl EditSession {
    pub fn new(style: SymbolStyle) -> Self {
        EditSession {
            store: TagStore::new(),
            style,
            pool: Vec::new(),
            catalog: None,
        }
    }

    /// Enable `browse` and `search` against a workspace catalog
    pub fn with_catalog(mut self, catalog: CatalogService) -> Self {
        self.catalog = Some(catalog);
        self
    }

    pub fn store(&self) -> &TagStore {
        &self.store
    }

    pub fn style(&self) -> SymbolStyle {
        self.style
    }

    pub fn pool(&self) -> &[Candidate] {
        &self.pool
    }

    /// Current export string
    pub fn export(&self) -> String {
        self.store.render(self.style)
    }

    pub fn execute(&mut self, command: SessionCommand) -> Result<Reply> {
        debug!(?command, "session command");
        match command {
            SessionCommand::Add(candidate) => {
                self.store.add(candidate);
                Ok(Reply::Added(1))
            }
            SessionCommand::Paste(text) => {
                let ids = self.store.extend(split_custom_input(&text));
                Ok(Reply::Added(ids.len()))
            }
            SessionCommand::Browse { category, group } => {
                let candidates = self.catalog()?.candidates(&category, group.as_deref())?;
                Ok(self.fill_pool(candidates))
            }
            SessionCommand::Search { mode, text, limit } => {
                let query = SearchQuery { mode, text, limit };
                let candidates = self.catalog()?.search(&query)?;
                Ok(self.fill_pool(candidates))
            }
            SessionCommand::Candidates => Ok(Reply::Candidates(self.pool.clone())),
            SessionCommand::Pick(selection) => self.pick(selection),
            SessionCommand::Strengthen(position) => {
                let id = self.resolve(position)?;
                self.store.strengthen(id)?;
                Ok(self.emphasis_reply(position, id))
            }
            SessionCommand::Weaken(position) => {
                let id = self.resolve(position)?;
                self.store.weaken(id)?;
                Ok(self.emphasis_reply(position, id))
            }
            SessionCommand::Delete(position) => {
                let id = self.resolve(position)?;
                let tag = self.store.remove(id)?;
                Ok(Reply::Removed { position, tag })
            }
            SessionCommand::Move { from, to } => {
                let id = self.resolve(from)?;
                self.store.move_tag(id, to.saturating_sub(1))?;
                Ok(Reply::Reordered(self.store.len()))
            }
            SessionCommand::Order(positions) => {
                let order = positions
                    .iter()
                    .map(|&pos| {
                        pos.checked_sub(1).and_then(|i| self.store.id_at(i)).ok_or_else(|| {
                            TagsmithError::InvalidPermutation(format!(
                                "position {} is out of range (1-{})",
                                pos,
                                self.store.len()
                            ))
                        })
                    })
                    .collect::<Result<Vec<TagId>>>()?;
                self.store.reorder(&order)?;
                Ok(Reply::Reordered(order.len()))
            }
            SessionCommand::Clear => Ok(Reply::Cleared(self.store.clear())),
            SessionCommand::Symbol(change) => {
                self.style = match change {
                    SymbolChange::Toggle => self.style.toggled(),
                    SymbolChange::Set(style) => style,
                };
                Ok(Reply::Symbol(self.style))
            }
            SessionCommand::List => Ok(Reply::Sequence {
                tags: self.store.tags().to_vec(),
                style: self.style,
            }),
            SessionCommand::Export => Ok(Reply::Export(self.export())),
            SessionCommand::Json => {
                let snapshot = Snapshot {
                    symbol: self.style,
                    export: self.export(),
                    tags: self.store.tags(),
                };
                Ok(Reply::Json(serde_json::to_string_pretty(&snapshot)?))
            }
            SessionCommand::Quit => Ok(Reply::Quit),
        }
    }

    fn catalog(&self) -> Result<&CatalogService> {
        self.catalog.as_ref().ok_or_else(|| {
            TagsmithError::Catalog(
                "No workspace catalog available; run inside a tagsmith workspace".to_string(),
            )
        })
    }

    fn fill_pool(&mut self, candidates: Vec<Candidate>) -> Reply {
        self.pool = candidates;
        Reply::Candidates(self.pool.clone())
    }

    fn pick(&mut self, selection: PickSelection) -> Result<Reply> {
        let chosen: Vec<Candidate> = match selection {
            PickSelection::All => self.pool.clone(),
            PickSelection::Positions(positions) => positions
                .iter()
                .map(|&pos| {
                    pos.checked_sub(1).and_then(|i| self.pool.get(i)).cloned().ok_or_else(|| {
                        TagsmithError::InvalidCommand(format!(
                            "No candidate at position {} ({} available)",
                            pos,
                            self.pool.len()
                        ))
                    })
                })
                .collect::<Result<_>>()?,
        };
        let ids = self.store.extend(chosen);
        Ok(Reply::Added(ids.len()))
    }

    fn resolve(&self, position: usize) -> Result<TagId> {
        position
            .checked_sub(1)
            .and_then(|index| self.store.id_at(index))
            .ok_or(TagsmithError::NoTagAtPosition(position))
    }

    fn emphasis_reply(&self, position: usize, id: TagId) -> Reply {
        let rendered = self
            .store
            .get(id)
            .map(|tag| render_tag(tag, self.style))
            .unwrap_or_default();
        Reply::Emphasis { position, rendered }
    }
}
