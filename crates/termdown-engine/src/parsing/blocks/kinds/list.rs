use std::sync::OnceLock;

use regex::Regex;

use crate::parsing::blocks::types::ListKind;

/// List item block type.
///
/// Each kind has its own marker; a list is a run of lines sharing the marker
/// kind of its first line. Indentation before the marker is ignored and no
/// nesting is built.
pub struct ListItem;

impl ListItem {
    fn marker(kind: ListKind) -> &'static Regex {
        static DASH: OnceLock<Regex> = OnceLock::new();
        static ASTERISK: OnceLock<Regex> = OnceLock::new();
        static PLUS: OnceLock<Regex> = OnceLock::new();
        static ORDERED: OnceLock<Regex> = OnceLock::new();
        let (cell, pattern) = match kind {
            ListKind::Dash => (&DASH, r"^\s*-\s"),
            ListKind::Asterisk => (&ASTERISK, r"^\s*\*\s"),
            ListKind::Plus => (&PLUS, r"^\s*\+\s"),
            ListKind::Ordered => (&ORDERED, r"^\s*\d+\.\s"),
        };
        cell.get_or_init(|| Regex::new(pattern).expect("Invalid list marker regex"))
    }

    /// Item text of `line` if it carries a `kind` marker.
    ///
    /// The marker and exactly one following whitespace character are removed.
    pub fn item(kind: ListKind, line: &str) -> Option<&str> {
        Self::marker(kind).find(line).map(|m| &line[m.end()..])
    }

    /// The kind of list `line` would start, if any.
    pub fn kind_of(line: &str) -> Option<ListKind> {
        [
            ListKind::Dash,
            ListKind::Asterisk,
            ListKind::Plus,
            ListKind::Ordered,
        ]
        .into_iter()
        .find(|&kind| Self::item(kind, line).is_some())
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("- a", ListKind::Dash, "a")]
    #[case("* a", ListKind::Asterisk, "a")]
    #[case("+ a", ListKind::Plus, "a")]
    #[case("12. a", ListKind::Ordered, "a")]
    #[case("   - indented", ListKind::Dash, "indented")]
    #[case("-  two spaces", ListKind::Dash, " two spaces")]
    fn recognizes_markers(#[case] line: &str, #[case] kind: ListKind, #[case] text: &str) {
        assert_eq!(ListItem::kind_of(line), Some(kind));
        assert_eq!(ListItem::item(kind, line), Some(text));
    }

    #[rstest]
    #[case("-a")]
    #[case("**bold**")]
    #[case("1) a")]
    #[case("1.a")]
    #[case("plain")]
    fn rejects_non_items(#[case] line: &str) {
        assert_eq!(ListItem::kind_of(line), None);
    }

    #[test]
    fn item_requires_same_kind() {
        assert_eq!(ListItem::item(ListKind::Dash, "* b"), None);
    }
}
