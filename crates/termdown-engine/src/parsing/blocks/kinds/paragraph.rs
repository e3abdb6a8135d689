use crate::parsing::table::starts_table;

use super::{BlockQuote, CodeFence, Heading, HtmlComment, ListItem, StandaloneImage, ThematicBreak};

/// Paragraph block type.
///
/// Paragraphs have no delimiters. They are the default block and run over
/// consecutive non-blank lines until a line could open another block.
pub struct Paragraph;

impl Paragraph {
    /// Returns true if `lines[i]` cannot continue (or start) a paragraph.
    ///
    /// Heading, quote and comment openers are checked by prefix only, so a
    /// line like `#tag` ends a paragraph without being a heading.
    pub fn interrupted_at(lines: &[&str], i: usize) -> bool {
        let Some(line) = lines.get(i) else {
            return true;
        };
        line.trim().is_empty()
            || line.starts_with(Heading::PREFIX)
            || CodeFence::is_fence(line)
            || line.starts_with(BlockQuote::PREFIX)
            || line.starts_with(HtmlComment::OPEN)
            || starts_table(line, lines.get(i + 1).copied())
            || ListItem::kind_of(line).is_some()
            || ThematicBreak::parse(line).is_some()
            || StandaloneImage::parse(line).is_some()
    }
}
