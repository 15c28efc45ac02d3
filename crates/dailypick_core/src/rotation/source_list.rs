//! Source list text parsing.
//!
//! # Responsibility
//! - Split source file content into lines and keep the meaningful ones.
//! - Strip Markdown bullet markers and unchecked task prefixes so the
//!   injected text is the bare item.
//!
//! # Invariants
//! - Returned items are non-empty and carry no surrounding whitespace.
//! - Item order follows line order in the source text.
//! - Parsing already-clean items is a no-op, so injected text never grows
//!   extra markers across cycles.

use once_cell::sync::Lazy;
use regex::Regex;

static LIST_MARKER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[-*+]\s*(\[ \])?").expect("valid list marker regex"));

/// Parses source file content into rotation items.
///
/// Blank lines are skipped. A line holding only a bullet marker yields
/// nothing.
pub fn parse_source_items(content: &str) -> Vec<String> {
    content
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| LIST_MARKER_RE.replace(line, "").trim().to_string())
        .filter(|item| !item.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::parse_source_items;

    #[test]
    fn bullet_markers_are_stripped() {
        assert_eq!(parse_source_items("- Buy milk"), vec!["Buy milk"]);
        assert_eq!(parse_source_items("* Call mom"), vec!["Call mom"]);
        assert_eq!(parse_source_items("+ Water plants"), vec!["Water plants"]);
    }

    #[test]
    fn unchecked_task_prefix_is_stripped() {
        assert_eq!(parse_source_items("- [ ] Buy milk"), vec!["Buy milk"]);
    }

    #[test]
    fn checked_task_prefix_is_kept_after_marker() {
        assert_eq!(parse_source_items("- [x] Done item"), vec!["[x] Done item"]);
    }

    #[test]
    fn plain_lines_pass_through() {
        assert_eq!(parse_source_items("Just text"), vec!["Just text"]);
    }

    #[test]
    fn blank_and_whitespace_lines_are_skipped() {
        assert_eq!(parse_source_items("a\n\n   \nb"), vec!["a", "b"]);
    }

    #[test]
    fn bare_marker_lines_yield_nothing() {
        assert!(parse_source_items("-\n- \n* [ ]").is_empty());
    }

    #[test]
    fn duplicates_and_order_are_preserved() {
        assert_eq!(parse_source_items("- b\n- a\n- b"), vec!["b", "a", "b"]);
    }

    #[test]
    fn parsing_parsed_items_changes_nothing() {
        let items = parse_source_items("- [ ] Stretch\n* Read a page\nJust text");
        let rejoined = items.join("\n");
        assert_eq!(parse_source_items(&rejoined), items);
    }
}
