use std::sync::OnceLock;

use regex::Regex;

use super::types::Alignment;

/// The column delimiter.
pub const PIPE: char = '|';
/// Escapes the next character, so `\|` is a literal pipe.
pub const ESCAPE: char = '\\';
const ALIGN_MARKER: char = ':';

/// Returns true if `line` is a header separator row such as `|:--|--:|`.
///
/// At least two columns are required; outer pipes are optional.
pub fn is_separator_row(line: &str) -> bool {
    static SEPARATOR: OnceLock<Regex> = OnceLock::new();
    SEPARATOR
        .get_or_init(|| {
            Regex::new(r"^\s*\|?(\s*:?-+:?\s*\|)+\s*:?-+:?\s*\|?\s*$")
                .expect("Invalid separator row regex")
        })
        .is_match(line)
}

/// Returns true if `line` and `next` open a table: both contain a pipe and
/// `next` is a separator row.
pub fn starts_table(line: &str, next: Option<&str>) -> bool {
    next.is_some_and(|next| line.contains(PIPE) && next.contains(PIPE) && is_separator_row(next))
}

/// Splits a table row into raw (untrimmed) cell texts.
///
/// Surrounding whitespace and one leading and one trailing pipe are removed
/// first. A backslash makes the next character literal and is itself dropped.
/// Always yields at least one cell.
pub fn split_row(row: &str) -> Vec<String> {
    let mut row = row;
    if let Some(stripped) = row.trim().strip_prefix(PIPE) {
        row = stripped;
    }
    if let Some(stripped) = row.trim().strip_suffix(PIPE) {
        row = stripped;
    }

    let mut cells = vec![];
    let mut current = String::new();
    let mut escaped = false;
    for c in row.chars() {
        if c == ESCAPE && !escaped {
            escaped = true;
            continue;
        }
        if c == PIPE && !escaped {
            cells.push(std::mem::take(&mut current));
        } else {
            current.push(c);
            escaped = false;
        }
    }
    cells.push(current);
    cells
}

/// Reads the alignment of one separator cell from its colons.
pub fn alignment_of(separator_cell: &str) -> Alignment {
    let cell = separator_cell.trim();
    match (
        cell.starts_with(ALIGN_MARKER),
        cell.ends_with(ALIGN_MARKER),
    ) {
        (true, true) => Alignment::Center,
        (false, true) => Alignment::Right,
        _ => Alignment::Left,
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("|---|---|", true)]
    #[case("---|---", true)]
    #[case("| :-- | --: | :-: |", true)]
    #[case("|---|", false)]
    #[case("| a | b |", false)]
    #[case("|-- x --|---|", false)]
    fn separator_row_grammar(#[case] line: &str, #[case] expected: bool) {
        assert_eq!(is_separator_row(line), expected);
    }

    #[test]
    fn starts_table_needs_pipes_on_both_lines() {
        assert!(starts_table("a | b", Some("--|--")));
        assert!(!starts_table("a b", Some("--|--")));
        assert!(!starts_table("a | b", None));
    }

    #[test]
    fn split_strips_outer_pipes() {
        assert_eq!(split_row("| a | b |"), vec!["a ", " b "]);
        assert_eq!(split_row("a|b"), vec!["a", "b"]);
    }

    #[test]
    fn escaped_pipe_stays_in_cell() {
        assert_eq!(split_row(r"| a\|b | c |"), vec!["a|b ", " c "]);
    }

    #[test]
    fn backslash_escapes_any_character() {
        assert_eq!(split_row(r"a\\b|c\d"), vec![r"a\b", "cd"]);
    }

    #[test]
    fn lone_pipe_row_has_one_empty_cell() {
        assert_eq!(split_row("|"), vec![""]);
    }

    #[rstest]
    #[case(":-:", Alignment::Center)]
    #[case(":--", Alignment::Left)]
    #[case("--:", Alignment::Right)]
    #[case(" --- ", Alignment::Left)]
    fn alignment_from_colons(#[case] cell: &str, #[case] expected: Alignment) {
        assert_eq!(alignment_of(cell), expected);
    }
}
