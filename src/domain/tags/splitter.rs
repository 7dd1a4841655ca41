//! Free-text tag splitting

use super::tag::Candidate;

/// Split a comma-separated tag string into candidates.
///
/// Pieces are trimmed and empty pieces dropped. No translation happens here,
/// so the display text is the original text.
pub fn split_custom_input(input: &str) -> Vec<Candidate> {
    input
        .split(',')
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(Candidate::untranslated)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(input: &str) -> Vec<String> {
        split_custom_input(input)
            .into_iter()
            .map(|c| c.original_text().to_string())
            .collect()
    }

    #[test]
    fn splits_and_trims() {
        assert_eq!(texts("1girl, solo ,  smile"), vec!["1girl", "solo", "smile"]);
    }

    #[test]
    fn drops_empty_pieces() {
        assert_eq!(texts(",a,, ,b,"), vec!["a", "b"]);
        assert!(texts("   ").is_empty());
        assert!(texts("").is_empty());
    }

    #[test]
    fn keeps_inner_spaces_and_brackets_verbatim() {
        assert_eq!(texts("long hair, {smile}"), vec!["long hair", "{smile}"]);
    }

    #[test]
    fn display_defaults_to_original() {
        let candidates = split_custom_input("cat_ears");
        assert_eq!(candidates[0].display_text(), "cat_ears");
    }
}
