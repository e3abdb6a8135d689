use serde::Serialize;

use crate::parsing::blocks::Element;

/// One node of inline content: literal text or a typed span.
///
/// Matched delimiters are consumed into the element structure; unmatched
/// delimiters stay in `Text`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Inline {
    Text(String),
    Element(Element),
}

impl Inline {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Inline::Text(s) => Some(s),
            Inline::Element(_) => None,
        }
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Inline::Text(_) => None,
            Inline::Element(e) => Some(e),
        }
    }
}

impl From<Element> for Inline {
    fn from(e: Element) -> Self {
        Inline::Element(e)
    }
}

/// Flattens inline content to the text a reader would see.
///
/// Descends into bold, italic, link text and image alt; code contributes its
/// raw text and comments contribute nothing.
pub fn plain_text(content: &[Inline]) -> String {
    let mut out = String::new();
    push_plain(content, &mut out);
    out
}

fn push_plain(content: &[Inline], out: &mut String) {
    for node in content {
        match node {
            Inline::Text(s) => out.push_str(s),
            Inline::Element(Element::Comment(_)) => {}
            Inline::Element(Element::Code(code)) => out.push_str(code),
            Inline::Element(e) => push_plain(e.content(), out),
        }
    }
}
