use std::fmt::Write;

use crate::parsing::{
    blocks::Element,
    inline::Inline,
    table::{Table, TableCell},
};

const INDENT: &str = "  ";

/// Renders elements as an indented outline, one node per line.
///
/// Element nodes show their kind plus level, url or language; text nodes are
/// shown `Debug`-quoted so whitespace and newlines stay visible.
pub fn outline(elements: &[Element]) -> String {
    let mut out = String::new();
    for e in elements {
        write_element(&mut out, e, 0);
    }
    out
}

fn line(out: &mut String, depth: usize, text: std::fmt::Arguments<'_>) {
    for _ in 0..depth {
        out.push_str(INDENT);
    }
    // Writing into a String cannot fail.
    let _ = out.write_fmt(text);
    out.push('\n');
}

fn write_inlines(out: &mut String, content: &[Inline], depth: usize) {
    for node in content {
        match node {
            Inline::Text(s) => line(out, depth, format_args!("{s:?}")),
            Inline::Element(e) => write_element(out, e, depth),
        }
    }
}

fn write_element(out: &mut String, e: &Element, depth: usize) {
    let kind = e.kind();
    match e {
        Element::Heading { level, content } => {
            line(out, depth, format_args!("{kind:?}({})", level.get()));
            write_inlines(out, content, depth + 1);
        }
        Element::Paragraph(content)
        | Element::Bold(content)
        | Element::Italic(content)
        | Element::Blockquote(content) => {
            line(out, depth, format_args!("{kind:?}"));
            write_inlines(out, content, depth + 1);
        }
        Element::Link { text: content, url } | Element::Image { alt: content, url } => {
            line(out, depth, format_args!("{kind:?}({url:?})"));
            write_inlines(out, content, depth + 1);
        }
        Element::CodeBlock { code, language } => {
            let language = language.as_deref().unwrap_or("-");
            line(out, depth, format_args!("{kind:?}({language}) {code:?}"));
        }
        Element::Code(text) | Element::Text(text) | Element::Comment(text) => {
            line(out, depth, format_args!("{kind:?} {text:?}"));
        }
        Element::List { items, .. } => {
            line(out, depth, format_args!("{kind:?}"));
            for item in items {
                line(out, depth + 1, format_args!("Item"));
                write_inlines(out, item, depth + 2);
            }
        }
        Element::ThematicBreak(_) => line(out, depth, format_args!("{kind:?}")),
        Element::Table(table) => write_table(out, table, depth),
    }
}

fn write_table(out: &mut String, table: &Table, depth: usize) {
    let alignments: Vec<&str> = table.alignments.iter().map(|a| a.as_str()).collect();
    line(out, depth, format_args!("Table [{}]", alignments.join(", ")));
    line(out, depth + 1, format_args!("Header"));
    write_cells(out, &table.headers, depth + 2);
    for row in &table.rows {
        line(out, depth + 1, format_args!("Row"));
        write_cells(out, row, depth + 2);
    }
}

fn write_cells(out: &mut String, cells: &[TableCell], depth: usize) {
    for cell in cells {
        line(out, depth, format_args!("Cell({})", cell.alignment.as_str()));
        write_inlines(out, &cell.content, depth + 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::blocks::{HeadingLevel, ListKind, RuleKind};

    #[test]
    fn outline_nests_children() {
        let level = HeadingLevel::try_from(2).unwrap();
        let elements = vec![
            Element::Heading {
                level,
                content: vec![Inline::Text("Hi".into())],
            },
            Element::List {
                kind: ListKind::Dash,
                items: vec![vec![Inline::Element(Element::Code("x".into()))]],
            },
            Element::ThematicBreak(RuleKind::Dash),
        ];
        assert_eq!(
            outline(&elements),
            "Heading(2)\n  \"Hi\"\nDashList\n  Item\n    Code \"x\"\nDashRule\n"
        );
    }

    #[test]
    fn outline_of_nothing_is_empty() {
        assert_eq!(outline(&[]), "");
    }
}
