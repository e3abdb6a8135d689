//! Markdown parsing engine for a terminal viewer.
//!
//! [`parse`] turns markdown text into a tree of [`Element`]s that a renderer
//! walks. Parsing never fails: anything unrecognized degrades to text.

pub mod parsing;

// Re-export key types for easier usage
pub use parsing::{
    MarkdownParser,
    blocks::{Element, ElementKind, HeadingLevel, InvalidHeadingLevel, ListKind, RuleKind},
    inline::{Inline, parse_inline, plain_text},
    parse,
    table::{Alignment, ParseAlignmentError, Table, TableCell},
};
