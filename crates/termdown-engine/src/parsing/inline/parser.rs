use crate::parsing::blocks::Element;

use super::{
    cursor::Cursor,
    kinds::{Candidate, SpanMatch, earliest},
    types::Inline,
};

/// Parses inline content into a sequence of [`Inline`] nodes.
///
/// At each step every candidate syntax is searched in the unconsumed suffix
/// and the match that starts earliest wins; on equal starts the order of
/// [`Candidate::ALL`] decides. Text before the match is emitted verbatim, the
/// match becomes an element, and the cursor jumps past it. Once nothing
/// matches, the rest is emitted as one final text node.
///
/// Bold, italic, link text and image alt are parsed recursively. Code and
/// comment text are kept raw.
pub fn parse_inline(s: &str) -> Vec<Inline> {
    let mut cur = Cursor::new(s);
    let mut out = vec![];

    while !cur.eof() {
        let rest = cur.rest();
        let Some((candidate, m)) = earliest(rest) else {
            out.push(Inline::Text(rest.to_string()));
            break;
        };
        if m.start > 0 {
            out.push(Inline::Text(rest[..m.start].to_string()));
        }
        out.push(Inline::Element(build(candidate, rest, &m)));
        cur.bump_n(m.end);
    }

    out
}

fn build(candidate: Candidate, s: &str, m: &SpanMatch) -> Element {
    let body = &s[m.body.clone()];
    let url = || {
        m.url
            .clone()
            .map(|r| s[r].to_string())
            .unwrap_or_default()
    };
    match candidate {
        Candidate::Comment => Element::Comment(body.trim().to_string()),
        Candidate::Image => Element::Image {
            alt: parse_inline(body),
            url: url(),
        },
        Candidate::Bold => Element::Bold(parse_inline(body)),
        Candidate::Italic => Element::Italic(parse_inline(body)),
        Candidate::Code => Element::Code(body.to_string()),
        Candidate::Link => Element::Link {
            text: parse_inline(body),
            url: url(),
        },
    }
}
