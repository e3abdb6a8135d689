use crate::parsing::{
    blocks::{Element, HeadingLevel},
    inline::Inline,
    table::Table,
};

/// Validates parser output invariants.
///
/// Asserts that:
/// - Heading levels are within `1..=6`
/// - Text nodes in inline content are never empty
/// - Tables have one alignment per header, header cells flagged as headers,
///   body cells not, and every cell aligned as its column says
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(elements: &[Element]) {
    for e in elements {
        check_element(e);
    }
}

fn check_inlines(content: &[Inline]) {
    for node in content {
        match node {
            Inline::Text(s) => assert!(!s.is_empty(), "empty text node in inline content"),
            Inline::Element(e) => check_element(e),
        }
    }
}

fn check_element(e: &Element) {
    match e {
        Element::Heading { level, content } => {
            assert!(
                (HeadingLevel::MIN..=HeadingLevel::MAX).contains(&level.get()),
                "heading level out of range: {}",
                level.get()
            );
            check_inlines(content);
        }
        Element::List { items, .. } => items.iter().for_each(|item| check_inlines(item)),
        Element::Table(table) => check_table(table),
        other => check_inlines(other.content()),
    }
}

fn check_table(table: &Table) {
    assert_eq!(
        table.alignments.len(),
        table.headers.len(),
        "alignments do not match header count"
    );
    for (i, cell) in table.headers.iter().enumerate() {
        assert!(cell.is_header, "header cell {i} not flagged as header");
        assert_eq!(cell.alignment, table.alignment_at(i), "header cell {i}");
        check_inlines(&cell.content);
    }
    for (r, row) in table.rows.iter().enumerate() {
        for (i, cell) in row.iter().enumerate() {
            assert!(!cell.is_header, "body cell {r}:{i} flagged as header");
            assert_eq!(cell.alignment, table.alignment_at(i), "body cell {r}:{i}");
            check_inlines(&cell.content);
        }
    }
}
