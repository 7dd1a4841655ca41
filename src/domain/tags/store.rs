//! Ordered tag sequence and its mutation operations

use super::tag::{Candidate, Emphasis, Tag, TagId};
use super::weight::{render_sequence, SymbolStyle};
use crate::error::{Result, TagsmithError};
use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::debug;

/// Owns the tag sequence of one editing session
#[derive(Debug, Clone, Default)]
pub struct TagStore {
    tags: Vec<Tag>,
}

impl TagStore {
    pub fn new() -> Self {
        TagStore::default()
    }

    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn ids(&self) -> Vec<TagId> {
        self.tags.iter().map(Tag::id).collect()
    }

    pub fn get(&self, id: TagId) -> Option<&Tag> {
        self.tags.iter().find(|tag| tag.id() == id)
    }

    pub fn position(&self, id: TagId) -> Option<usize> {
        self.tags.iter().position(|tag| tag.id() == id)
    }

    /// Id of the tag at a zero-based index
    pub fn id_at(&self, index: usize) -> Option<TagId> {
        self.tags.get(index).map(Tag::id)
    }

    /// Append a new neutral tag. Duplicate texts get distinct ids.
    pub fn add(&mut self, candidate: Candidate) -> TagId {
        let tag = Tag::new(candidate);
        let id = tag.id();
        debug!(%id, text = tag.original_text(), "add tag");
        self.tags.push(tag);
        id
    }

    /// Add each candidate in supply order
    pub fn extend<I>(&mut self, candidates: I) -> Vec<TagId>
    where
        I: IntoIterator<Item = Candidate>,
    {
        candidates.into_iter().map(|c| self.add(c)).collect()
    }

    /// Move emphasis one step toward strengthened
    pub fn strengthen(&mut self, id: TagId) -> Result<Emphasis> {
        let tag = self.find_mut(id)?;
        tag.emphasis_mut().strengthen();
        debug!(%id, emphasis = ?tag.emphasis(), "strengthen tag");
        Ok(tag.emphasis())
    }

    /// Move emphasis one step toward weakened
    pub fn weaken(&mut self, id: TagId) -> Result<Emphasis> {
        let tag = self.find_mut(id)?;
        tag.emphasis_mut().weaken();
        debug!(%id, emphasis = ?tag.emphasis(), "weaken tag");
        Ok(tag.emphasis())
    }

    pub fn remove(&mut self, id: TagId) -> Result<Tag> {
        let index = self.position(id).ok_or(TagsmithError::TagNotFound(id))?;
        debug!(%id, "remove tag");
        Ok(self.tags.remove(index))
    }

    /// Replace the order wholesale.
    ///
    /// `order` must list every current id exactly once. Anything else is
    /// rejected with [`TagsmithError::InvalidPermutation`] and the sequence
    /// is left as it was.
    pub fn reorder(&mut self, order: &[TagId]) -> Result<()> {
        if order.len() != self.tags.len() {
            return Err(TagsmithError::InvalidPermutation(format!(
                "expected {} tag(s), got {}",
                self.tags.len(),
                order.len()
            )));
        }

        let mut seen = HashSet::with_capacity(order.len());
        for id in order {
            if !seen.insert(*id) {
                return Err(TagsmithError::InvalidPermutation(format!(
                    "tag {} listed more than once",
                    id
                )));
            }
            if self.position(*id).is_none() {
                return Err(TagsmithError::InvalidPermutation(format!(
                    "unknown tag {}",
                    id
                )));
            }
        }

        let mut remaining = std::mem::take(&mut self.tags);
        let mut reordered = Vec::with_capacity(remaining.len());
        for id in order {
            // Membership was checked above.
            if let Some(index) = remaining.iter().position(|tag| tag.id() == *id) {
                reordered.push(remaining.swap_remove(index));
            }
        }
        self.tags = reordered;
        debug!(count = self.tags.len(), "reorder tags");
        Ok(())
    }

    /// Move one tag to a zero-based index, clamped to the end.
    pub fn move_tag(&mut self, id: TagId, to_index: usize) -> Result<()> {
        let mut order = self.ids();
        let from = self.position(id).ok_or(TagsmithError::TagNotFound(id))?;
        let moved = order.remove(from);
        let to = to_index.min(order.len());
        order.insert(to, moved);
        self.reorder(&order)
    }

    /// Remove every tag, returning how many were dropped
    pub fn clear(&mut self) -> usize {
        let count = self.tags.len();
        self.tags.clear();
        debug!(count, "clear tags");
        count
    }

    /// Export string for the current sequence
    pub fn render(&self, style: SymbolStyle) -> String {
        render_sequence(&self.tags, style)
    }

    fn find_mut(&mut self, id: TagId) -> Result<&mut Tag> {
        self.tags
            .iter_mut()
            .find(|tag| tag.id() == id)
            .ok_or(TagsmithError::TagNotFound(id))
    }
}

/// A [`TagStore`] behind one mutex; each call is atomic with respect to reads.
#[derive(Debug, Clone, Default)]
pub struct SharedTagStore {
    inner: Arc<Mutex<TagStore>>,
}

impl SharedTagStore {
    pub fn new() -> Self {
        SharedTagStore::default()
    }

    // Every store operation leaves the sequence valid, so a poisoned lock
    // still guards consistent data.
    fn lock(&self) -> MutexGuard<'_, TagStore> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn add(&self, candidate: Candidate) -> TagId {
        self.lock().add(candidate)
    }

    pub fn strengthen(&self, id: TagId) -> Result<Emphasis> {
        self.lock().strengthen(id)
    }

    pub fn weaken(&self, id: TagId) -> Result<Emphasis> {
        self.lock().weaken(id)
    }

    pub fn remove(&self, id: TagId) -> Result<Tag> {
        self.lock().remove(id)
    }

    pub fn reorder(&self, order: &[TagId]) -> Result<()> {
        self.lock().reorder(order)
    }

    pub fn clear(&self) -> usize {
        self.lock().clear()
    }

    /// Copy of the current sequence
    pub fn snapshot(&self) -> Vec<Tag> {
        self.lock().tags().to_vec()
    }

    pub fn render(&self, style: SymbolStyle) -> String {
        self.lock().render(style)
    }
}
