//! Tag entity and its emphasis counters

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use uuid::Uuid;

/// Opaque tag identifier, unique for the lifetime of a process
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagId(Uuid);

impl TagId {
    /// Generate a fresh identifier
    pub fn generate() -> Self {
        TagId(Uuid::new_v4())
    }
}

impl fmt::Display for TagId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

/// A label offered by some input source but not yet committed to a sequence
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Candidate {
    original_text: String,
    display_text: String,
    /// Importer-specific fields, carried but never interpreted
    metadata: BTreeMap<String, String>,
}

impl Candidate {
    /// Create a candidate; an empty display text falls back to the original.
    pub fn new(original_text: impl Into<String>, display_text: impl Into<String>) -> Self {
        let original_text = original_text.into();
        let mut display_text = display_text.into();
        if display_text.trim().is_empty() {
            display_text = original_text.clone();
        }
        Candidate {
            original_text,
            display_text,
            metadata: BTreeMap::new(),
        }
    }

    /// Candidate with no separate display label
    pub fn untranslated(original_text: impl Into<String>) -> Self {
        let original_text = original_text.into();
        Candidate::new(original_text.clone(), original_text)
    }

    /// Attach a metadata entry
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    pub fn original_text(&self) -> &str {
        &self.original_text
    }

    pub fn display_text(&self) -> &str {
        &self.display_text
    }

    pub fn metadata(&self) -> &BTreeMap<String, String> {
        &self.metadata
    }

    /// Label shown in candidate listings: `display (original)`
    pub fn label(&self) -> String {
        format!("{} ({})", self.display_text, self.original_text)
    }
}

/// Strengthen/weaken nesting depth.
///
/// At most one of the two counters is non-zero. Fields are private and the
/// only mutators are [`Emphasis::strengthen`] and [`Emphasis::weaken`], which
/// walk back through zero before crossing to the other side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Emphasis {
    strengthen_level: u32,
    weaken_level: u32,
}

impl Emphasis {
    pub fn neutral() -> Self {
        Emphasis::default()
    }

    pub fn strengthened(level: u32) -> Self {
        Emphasis {
            strengthen_level: level,
            weaken_level: 0,
        }
    }

    pub fn weakened(level: u32) -> Self {
        Emphasis {
            strengthen_level: 0,
            weaken_level: level,
        }
    }

    pub fn strengthen_level(&self) -> u32 {
        self.strengthen_level
    }

    pub fn weaken_level(&self) -> u32 {
        self.weaken_level
    }

    pub fn is_neutral(&self) -> bool {
        self.strengthen_level == 0 && self.weaken_level == 0
    }

    /// One step toward stronger emphasis
    pub fn strengthen(&mut self) {
        if self.weaken_level > 0 {
            self.weaken_level -= 1;
        } else {
            self.strengthen_level = self.strengthen_level.saturating_add(1);
        }
    }

    /// One step toward weaker emphasis
    pub fn weaken(&mut self) {
        if self.strengthen_level > 0 {
            self.strengthen_level -= 1;
        } else {
            self.weaken_level = self.weaken_level.saturating_add(1);
        }
    }
}

/// A committed tag in a sequence
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tag {
    id: TagId,
    original_text: String,
    display_text: String,
    #[serde(flatten)]
    emphasis: Emphasis,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    metadata: BTreeMap<String, String>,
}

impl Tag {
    /// Create a neutral tag with a fresh id from a candidate
    pub fn new(candidate: Candidate) -> Self {
        Tag {
            id: TagId::generate(),
            original_text: candidate.original_text,
            display_text: candidate.display_text,
            emphasis: Emphasis::neutral(),
            metadata: candidate.metadata,
        }
    }

    /// Replace the emphasis state
    pub fn with_emphasis(mut self, emphasis: Emphasis) -> Self {
        self.emphasis = emphasis;
        self
    }

    pub fn id(&self) -> TagId {
        self.id
    }

    pub fn original_text(&self) -> &str {
        &self.original_text
    }

    pub fn display_text(&self) -> &str {
        &self.display_text
    }

    pub fn emphasis(&self) -> Emphasis {
        self.emphasis
    }

    pub fn strengthen_level(&self) -> u32 {
        self.emphasis.strengthen_level()
    }

    pub fn weaken_level(&self) -> u32 {
        self.emphasis.weaken_level()
    }

    pub fn metadata(&self) -> &BTreeMap<String, String> {
        &self.metadata
    }

    pub(crate) fn emphasis_mut(&mut self) -> &mut Emphasis {
        &mut self.emphasis
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn candidate_falls_back_to_original_for_blank_display() {
        let c = Candidate::new("cat_ears", "  ");
        assert_eq!(c.display_text(), "cat_ears");
        assert_eq!(Tag::new(c).display_text(), "cat_ears");

        let c = Candidate::untranslated("blurry");
        assert_eq!(c.display_text(), "blurry");
        assert_eq!(c.label(), "blurry (blurry)");
    }

    #[test]
    fn candidate_label_shows_display_first() {
        let c = Candidate::new("cat_ears", "猫耳");
        assert_eq!(c.label(), "猫耳 (cat_ears)");
        assert_eq!(c.original_text(), "cat_ears");
        assert!(c.metadata().is_empty());
    }

    #[test]
    fn strengthen_then_weaken_cancels_through_zero() {
        let mut e = Emphasis::strengthened(1);
        e.weaken();
        assert!(e.is_neutral());
        e.weaken();
        assert_eq!(e, Emphasis::weakened(1));
    }

    #[test]
    fn weaken_level_drains_before_strengthening() {
        let mut e = Emphasis::weakened(2);
        e.strengthen();
        assert_eq!(e, Emphasis::weakened(1));
        e.strengthen();
        assert!(e.is_neutral());
        e.strengthen();
        assert_eq!(e, Emphasis::strengthened(1));
    }

    #[test]
    fn counters_never_both_positive() {
        let mut e = Emphasis::neutral();
        let steps = [true, true, false, false, false, true, false, false, true, true, true];
        for up in steps {
            if up {
                e.strengthen();
            } else {
                e.weaken();
            }
            assert_eq!(e.strengthen_level() * e.weaken_level(), 0);
        }
    }

    #[test]
    fn new_tag_is_neutral_and_keeps_metadata() {
        let tag = Tag::new(Candidate::new("smile", "微笑").with_metadata("group", "face"));
        assert!(tag.emphasis().is_neutral());
        assert_eq!(tag.display_text(), "微笑");
        assert_eq!(tag.metadata().get("group").map(String::as_str), Some("face"));
    }

    #[test]
    fn tag_ids_are_distinct() {
        let a = Tag::new(Candidate::untranslated("a"));
        let b = Tag::new(Candidate::untranslated("a"));
        assert_ne!(a.id(), b.id());
        assert_eq!(a.id().to_string().len(), 36);
    }
}
