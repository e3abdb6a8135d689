//! Parser-level tests.
//!
//! Whole documents go through `parse`, get checked against the tree
//! invariants, and are pinned with inline `insta` snapshots of their outline.

use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::parsing::{
    MarkdownParser,
    blocks::{Element, ElementKind, RuleKind},
    inline::{Inline, plain_text},
    parse,
    snapshot::{invariants, outline},
    table::Alignment,
};

fn parse_checked(md: &str) -> Vec<Element> {
    let _ = env_logger::builder().is_test(true).try_init();
    let doc = parse(md);
    invariants(&doc);
    doc
}

// Snapshot tests

#[test]
fn snapshot_mixed_document() {
    let md = "# Title\n\nSome *emphasis* and `code`.\n\n- one\n- two\n\n> quoted **text**\n\n---\n";
    insta::assert_snapshot!(outline(&parse_checked(md)), @r#"
    Heading(1)
      "Title"
    Paragraph
      "Some "
      Italic
        "emphasis"
      " and "
      Code "code"
      "."
    DashList
      Item
        "one"
      Item
        "two"
    Blockquote
      "quoted "
      Bold
        "text"
    DashRule
    "#);
}

#[test]
fn snapshot_table() {
    let md = "| A | B |\n|:--|--:|\n| 1 | 2 |\n";
    insta::assert_snapshot!(outline(&parse_checked(md)), @r#"
    Table [left, right]
      Header
        Cell(left)
          "A"
        Cell(right)
          "B"
      Row
        Cell(left)
          "1"
        Cell(right)
          "2"
    "#);
}

#[test]
fn snapshot_comments_and_fences() {
    let md = "<!-- note -->\n```py\nprint(\"**hi**\")\n```\n<!-- open\nstill comment\n";
    insta::assert_snapshot!(outline(&parse_checked(md)), @r#"
    Comment "note"
    CodeBlock(py) "print(\"**hi**\")"
    Comment "open\nstill comment"
    "#);
}

#[test]
fn snapshot_images_and_links() {
    let md = "![logo](img/logo.png)\n\nRead [the *guide*](https://x.y/guide) now.";
    insta::assert_snapshot!(outline(&parse_checked(md)), @r#"
    Image("img/logo.png")
      "logo"
    Paragraph
      "Read "
      Link("https://x.y/guide")
        "the "
        Italic
          "guide"
      " now."
    "#);
}

#[test]
fn alignments_serialize_lowercase() {
    let doc = parse_checked("a | b | c\n:-:|--:|---\n");
    let table = doc[0].table().unwrap();
    insta::assert_json_snapshot!(table.alignments, @r#"
    [
      "center",
      "right",
      "left"
    ]
    "#);
}

// Parsing properties

#[test]
fn empty_document() {
    assert!(parse_checked("").is_empty());
}

#[test]
fn blank_lines_only() {
    assert!(parse_checked("\n  \n\t\n").is_empty());
}

#[test]
fn literal_passthrough() {
    let doc = parse_checked("just some words\nacross two lines");
    assert_eq!(doc.len(), 1);
    assert_eq!(doc[0].kind(), ElementKind::Paragraph);
    assert_eq!(
        plain_text(doc[0].content()),
        "just some words across two lines"
    );
}

#[rstest]
#[case(1)]
#[case(2)]
#[case(3)]
#[case(4)]
#[case(5)]
#[case(6)]
fn heading_levels(#[case] h: u8) {
    let md = format!("{} Title", "#".repeat(h.into()));
    let doc = parse_checked(&md);
    assert_eq!(doc.len(), 1);
    assert_eq!(doc[0].kind(), ElementKind::Heading);
    assert_eq!(doc[0].level(), h);
    assert_eq!(plain_text(doc[0].content()), "Title");
}

#[test]
fn bold_italic_nesting() {
    let doc = parse_checked("**a *b* c**");
    assert_eq!(
        doc,
        vec![Element::Paragraph(vec![Inline::Element(Element::Bold(
            vec![
                Inline::Text("a ".into()),
                Inline::Element(Element::Italic(vec![Inline::Text("b".into())])),
                Inline::Text(" c".into()),
            ]
        ))])]
    );
}

#[test]
fn table_round_trip() {
    let doc = parse_checked("| A | B |\n|:--|--:|\n| 1 | 2 |");
    let table = doc[0].table().unwrap();

    assert_eq!(table.alignments, vec![Alignment::Left, Alignment::Right]);
    let headers: Vec<_> = table
        .headers
        .iter()
        .map(|c| (plain_text(&c.content), c.alignment))
        .collect();
    assert_eq!(
        headers,
        vec![
            ("A".to_string(), Alignment::Left),
            ("B".to_string(), Alignment::Right)
        ]
    );
    let row: Vec<_> = table.rows[0]
        .iter()
        .map(|c| (plain_text(&c.content), c.alignment))
        .collect();
    assert_eq!(
        row,
        vec![
            ("1".to_string(), Alignment::Left),
            ("2".to_string(), Alignment::Right)
        ]
    );
}

#[test]
fn escaped_pipe_in_cell() {
    let doc = parse_checked("| X | Y |\n|---|---|\n| a\\|b | c |");
    let table = doc[0].table().unwrap();
    assert_eq!(table.rows[0].len(), 2);
    assert_eq!(plain_text(&table.rows[0][0].content), "a|b");
}

#[test]
fn list_kind_stability() {
    let doc = parse_checked("- a\n* b");
    assert_eq!(
        doc.iter().map(Element::kind).collect::<Vec<_>>(),
        vec![ElementKind::DashList, ElementKind::AsteriskList]
    );
    assert_eq!(doc[0].items().len(), 1);
    assert_eq!(doc[1].items().len(), 1);
}

#[test]
fn fence_integrity() {
    let doc = parse_checked("```\n**not bold**\n```");
    assert_eq!(
        doc,
        vec![Element::CodeBlock {
            code: "**not bold**".into(),
            language: None,
        }]
    );
}

#[test]
fn unterminated_comment() {
    let doc = parse_checked("<!-- never closed");
    assert_eq!(doc, vec![Element::Comment("never closed".into())]);
}

#[test]
fn crlf_input_matches_lf_input() {
    let lf = "# T\n\n- a\n- b\n\n```\ncode\n```\n";
    assert_eq!(parse_checked(&lf.replace('\n', "\r\n")), parse_checked(lf));
}

#[test]
fn parser_instance_resets_between_documents() {
    let mut parser = MarkdownParser::new();
    assert_eq!(parser.parse("# one\n\ntext").len(), 2);
    assert_eq!(parser.parse("---").len(), 1);
    assert_eq!(parser.elements(), &[Element::ThematicBreak(RuleKind::Dash)]);
    assert_eq!(parser.parse("").len(), 0);
}
