//! Bracket-based weight encoding
//!
//! Strengthened tags are wrapped in `{}` or `()` depending on the symbol
//! style. Weakened tags always use `[]`; the style has no effect on them.

use super::tag::Tag;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Separator between rendered tags in the export string
pub const EXPORT_SEPARATOR: &str = ", ";

/// Bracket characters used for the strengthen direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SymbolStyle {
    /// `{tag}`
    #[default]
    Curly,
    /// `(tag)`
    Round,
}

impl SymbolStyle {
    pub fn from_round(use_round: bool) -> Self {
        if use_round {
            SymbolStyle::Round
        } else {
            SymbolStyle::Curly
        }
    }

    pub fn is_round(&self) -> bool {
        matches!(self, SymbolStyle::Round)
    }

    pub fn toggled(&self) -> Self {
        match self {
            SymbolStyle::Curly => SymbolStyle::Round,
            SymbolStyle::Round => SymbolStyle::Curly,
        }
    }

    fn strengthen_brackets(&self) -> (char, char) {
        match self {
            SymbolStyle::Curly => ('{', '}'),
            SymbolStyle::Round => ('(', ')'),
        }
    }
}

impl FromStr for SymbolStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "curly" => Ok(SymbolStyle::Curly),
            "round" => Ok(SymbolStyle::Round),
            _ => Err(format!(
                "Invalid symbol: '{}'. Valid symbols are: curly, round",
                s
            )),
        }
    }
}

impl fmt::Display for SymbolStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SymbolStyle::Curly => write!(f, "curly"),
            SymbolStyle::Round => write!(f, "round"),
        }
    }
}

/// Render one tag with its emphasis brackets
pub fn render_tag(tag: &Tag, style: SymbolStyle) -> String {
    let text = tag.original_text();
    let (open, close, depth) = if tag.strengthen_level() > 0 {
        let (open, close) = style.strengthen_brackets();
        (open, close, tag.strengthen_level())
    } else if tag.weaken_level() > 0 {
        ('[', ']', tag.weaken_level())
    } else {
        return text.to_string();
    };

    let depth = depth as usize;
    let mut out = String::with_capacity(text.len() + depth * 2);
    out.extend(std::iter::repeat(open).take(depth));
    out.push_str(text);
    out.extend(std::iter::repeat(close).take(depth));
    out
}

/// Render a whole sequence into the export string
pub fn render_sequence(tags: &[Tag], style: SymbolStyle) -> String {
    tags.iter()
        .map(|tag| render_tag(tag, style))
        .collect::<Vec<_>>()
        .join(EXPORT_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::tags::{Candidate, Emphasis};

    fn tag(text: &str, emphasis: Emphasis) -> Tag {
        Tag::new(Candidate::untranslated(text)).with_emphasis(emphasis)
    }

    #[test]
    fn strengthen_uses_curly_or_round() {
        let t = tag("cat_ears", Emphasis::strengthened(2));
        assert_eq!(render_tag(&t, SymbolStyle::Curly), "{{cat_ears}}");
        assert_eq!(render_tag(&t, SymbolStyle::Round), "((cat_ears))");
    }

    #[test]
    fn weaken_ignores_symbol_style() {
        let t = tag("blurry", Emphasis::weakened(3));
        assert_eq!(render_tag(&t, SymbolStyle::Round), "[[[blurry]]]");
        assert_eq!(render_tag(&t, SymbolStyle::Curly), "[[[blurry]]]");
    }

    #[test]
    fn neutral_tag_is_unchanged() {
        let t = tag("1girl", Emphasis::neutral());
        assert_eq!(render_tag(&t, SymbolStyle::Curly), "1girl");
    }

    #[test]
    fn render_does_not_mutate_tag() {
        let t = tag("smile", Emphasis::strengthened(1));
        let before = t.clone();
        let first = render_tag(&t, SymbolStyle::Round);
        let second = render_tag(&t, SymbolStyle::Round);
        assert_eq!(first, second);
        assert_eq!(t, before);
    }

    #[test]
    fn render_sequence_joins_with_comma_space() {
        assert_eq!(render_sequence(&[], SymbolStyle::Curly), "");

        let tags = vec![
            tag("a", Emphasis::neutral()),
            tag("b", Emphasis::neutral()),
            tag("c", Emphasis::neutral()),
        ];
        assert_eq!(render_sequence(&tags, SymbolStyle::Curly), "a, b, c");
    }

    #[test]
    fn render_sequence_mixes_emphasis() {
        let tags = vec![
            tag("masterpiece", Emphasis::strengthened(1)),
            tag("solo", Emphasis::neutral()),
            tag("lowres", Emphasis::weakened(2)),
        ];
        assert_eq!(
            render_sequence(&tags, SymbolStyle::Round),
            "(masterpiece), solo, [[lowres]]"
        );
    }

    #[test]
    fn symbol_style_parse_and_toggle() {
        assert_eq!(SymbolStyle::from_str("Round").unwrap(), SymbolStyle::Round);
        assert_eq!(SymbolStyle::from_str(" curly ").unwrap(), SymbolStyle::Curly);
        assert!(SymbolStyle::from_str("square").is_err());
        assert_eq!(SymbolStyle::Curly.toggled(), SymbolStyle::Round);
        assert_eq!(SymbolStyle::from_round(true), SymbolStyle::Round);
        assert!(!SymbolStyle::default().is_round());
    }
}
