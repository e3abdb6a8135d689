use serde::Serialize;

use crate::parsing::{inline::Inline, table::Table};

/// A heading level, always in `1..=6`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct HeadingLevel(u8);

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("heading level must be between 1 and 6, got {0}")]
pub struct InvalidHeadingLevel(pub u8);

impl HeadingLevel {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 6;

    pub fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for HeadingLevel {
    type Error = InvalidHeadingLevel;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        if (Self::MIN..=Self::MAX).contains(&level) {
            Ok(Self(level))
        } else {
            Err(InvalidHeadingLevel(level))
        }
    }
}

/// Which marker opened a bullet or ordered list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ListKind {
    /// `- item`
    Dash,
    /// `* item`
    Asterisk,
    /// `+ item`
    Plus,
    /// `1. item`
    Ordered,
}

/// Which character a thematic break was drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RuleKind {
    /// `---`
    Dash,
    /// `***`
    Asterisk,
    /// `___`
    Underscore,
}

/// The flat list of element kinds a consumer dispatches on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ElementKind {
    Heading,
    Paragraph,
    Bold,
    Italic,
    Code,
    CodeBlock,
    Link,
    Image,
    DashList,
    AsteriskList,
    PlusList,
    OrderedList,
    Blockquote,
    DashRule,
    AsteriskRule,
    UnderscoreRule,
    Text,
    Comment,
    Table,
}

/// A node of the parsed document tree.
///
/// Block elements appear at the top level of [`crate::parsing::parse`]'s
/// output; span elements (bold, italic, code, link, image, comment) appear
/// inside [`Inline`] content. `Image` and `Comment` can appear in both places.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Element {
    Heading {
        level: HeadingLevel,
        content: Vec<Inline>,
    },
    Paragraph(Vec<Inline>),
    Bold(Vec<Inline>),
    Italic(Vec<Inline>),
    /// Inline code; the text between the backticks, never tokenized.
    Code(String),
    /// Fenced code; lines joined with `\n`, never tokenized.
    CodeBlock {
        code: String,
        language: Option<String>,
    },
    Link {
        text: Vec<Inline>,
        url: String,
    },
    Image {
        alt: Vec<Inline>,
        url: String,
    },
    /// One item per source line, no nesting.
    List {
        kind: ListKind,
        items: Vec<Vec<Inline>>,
    },
    Blockquote(Vec<Inline>),
    ThematicBreak(RuleKind),
    /// A raw line no block recognizer accepted.
    Text(String),
    /// Trimmed text between `<!--` and `-->`.
    Comment(String),
    Table(Table),
}

impl Element {
    pub fn kind(&self) -> ElementKind {
        match self {
            Element::Heading { .. } => ElementKind::Heading,
            Element::Paragraph(_) => ElementKind::Paragraph,
            Element::Bold(_) => ElementKind::Bold,
            Element::Italic(_) => ElementKind::Italic,
            Element::Code(_) => ElementKind::Code,
            Element::CodeBlock { .. } => ElementKind::CodeBlock,
            Element::Link { .. } => ElementKind::Link,
            Element::Image { .. } => ElementKind::Image,
            Element::List { kind, .. } => match kind {
                ListKind::Dash => ElementKind::DashList,
                ListKind::Asterisk => ElementKind::AsteriskList,
                ListKind::Plus => ElementKind::PlusList,
                ListKind::Ordered => ElementKind::OrderedList,
            },
            Element::Blockquote(_) => ElementKind::Blockquote,
            Element::ThematicBreak(rule) => match rule {
                RuleKind::Dash => ElementKind::DashRule,
                RuleKind::Asterisk => ElementKind::AsteriskRule,
                RuleKind::Underscore => ElementKind::UnderscoreRule,
            },
            Element::Text(_) => ElementKind::Text,
            Element::Comment(_) => ElementKind::Comment,
            Element::Table(_) => ElementKind::Table,
        }
    }

    /// Heading level, or 0 for every other kind.
    pub fn level(&self) -> u8 {
        match self {
            Element::Heading { level, .. } => level.get(),
            _ => 0,
        }
    }

    /// Target of a link or source of an image.
    pub fn url(&self) -> Option<&str> {
        match self {
            Element::Link { url, .. } | Element::Image { url, .. } => Some(url),
            _ => None,
        }
    }

    /// Fence info string of a code block, if one was given.
    pub fn language(&self) -> Option<&str> {
        match self {
            Element::CodeBlock { language, .. } => language.as_deref(),
            _ => None,
        }
    }

    /// Inline children. Empty for kinds that hold raw text, list items or a table.
    pub fn content(&self) -> &[Inline] {
        match self {
            Element::Heading { content, .. }
            | Element::Paragraph(content)
            | Element::Bold(content)
            | Element::Italic(content)
            | Element::Blockquote(content) => content,
            Element::Link { text, .. } => text,
            Element::Image { alt, .. } => alt,
            _ => &[],
        }
    }

    /// List items. Empty for non-list kinds.
    pub fn items(&self) -> &[Vec<Inline>] {
        match self {
            Element::List { items, .. } => items,
            _ => &[],
        }
    }

    /// Untokenized text carried by code, code blocks, text and comments.
    pub fn raw_text(&self) -> Option<&str> {
        match self {
            Element::Code(text)
            | Element::Text(text)
            | Element::Comment(text)
            | Element::CodeBlock { code: text, .. } => Some(text),
            _ => None,
        }
    }

    pub fn table(&self) -> Option<&Table> {
        match self {
            Element::Table(table) => Some(table),
            _ => None,
        }
    }
}
