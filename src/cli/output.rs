//! Output formatting utilities

use crate::application::Reply;
use crate::domain::tags::{render_tag, Candidate, SymbolStyle, Tag};
use crate::domain::Category;

/// Format the current tag sequence, one numbered line per tag
pub fn format_tag_list(tags: &[Tag], style: SymbolStyle) -> String {
    if tags.is_empty() {
        return "No tags".to_string();
    }

    let mut output = String::new();
    for (index, tag) in tags.iter().enumerate() {
        let rendered = render_tag(tag, style);
        if tag.display_text() == tag.original_text() {
            output.push_str(&format!("{}. {}\n", index + 1, rendered));
        } else {
            output.push_str(&format!(
                "{}. {} ({})\n",
                index + 1,
                rendered,
                tag.display_text()
            ));
        }
    }
    output
}

/// Format a candidate pool as `n. display (original)` lines
pub fn format_candidate_list(candidates: &[Candidate]) -> String {
    if candidates.is_empty() {
        return "No candidates found".to_string();
    }

    let mut output = String::new();
    for (index, candidate) in candidates.iter().enumerate() {
        output.push_str(&format!("{}. {}\n", index + 1, candidate.label()));
    }
    output
}

/// Format a list of category names
pub fn format_category_list(names: &[String]) -> String {
    if names.is_empty() {
        return "No categories found".to_string();
    }

    let mut output = String::new();
    for name in names {
        output.push_str(&format!("{}\n", name));
    }
    output
}

/// Format a category with its groups, optionally only one group
pub fn format_category(category: &Category, group: Option<&str>) -> String {
    let mut output = String::new();
    for g in &category.groups {
        if group.is_some_and(|wanted| wanted != g.name) {
            continue;
        }
        output.push_str(&format!("## {}\n", g.name));
        for entry in &g.entries {
            output.push_str(&format!(
                "  {} ({})\n",
                entry.display_text, entry.original_text
            ));
        }
    }

    if output.is_empty() {
        return "No labels found".to_string();
    }
    output
}

/// Text printed for one session reply; `None` prints nothing
pub fn format_reply(reply: &Reply) -> Option<String> {
    let text = match reply {
        Reply::Added(count) => format!("Added {} tag(s)", count),
        Reply::Emphasis { position, rendered } => format!("{}. {}", position, rendered),
        Reply::Removed { position, tag } => {
            format!("Removed {}. {}", position, tag.original_text())
        }
        Reply::Reordered(count) => format!("Reordered {} tag(s)", count),
        Reply::Cleared(count) => format!("Cleared {} tag(s)", count),
        Reply::Symbol(style) => format!("Symbol style: {}", style),
        Reply::Candidates(candidates) => format_candidate_list(candidates)
            .trim_end()
            .to_string(),
        Reply::Sequence { tags, style } => format_tag_list(tags, *style).trim_end().to_string(),
        Reply::Export(text) | Reply::Json(text) => text.clone(),
        Reply::Quit => return None,
    };
    Some(text)
}
