pub mod blocks;
pub mod inline;
pub mod snapshot;
pub mod table;

#[cfg(test)]
mod tests;

use blocks::{BlockBuilder, Element, split_lines};

/// Parses markdown text into its top-level elements.
///
/// Never fails: unrecognized lines become `Text` elements and unterminated
/// constructs run to the end of the input.
pub fn parse(text: &str) -> Vec<Element> {
    let mut parser = MarkdownParser::new();
    parser.parse(text);
    parser.into_elements()
}

/// A reusable parser.
///
/// Its element buffer is cleared at the start of every [`parse`](Self::parse)
/// call, so one instance can parse many documents.
#[derive(Debug, Default)]
pub struct MarkdownParser {
    elements: Vec<Element>,
}

impl MarkdownParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn parse(&mut self, text: &str) -> &[Element] {
        self.elements.clear();
        let lines = split_lines(text);
        BlockBuilder::new(&lines).run(&mut self.elements);
        log::debug!(
            "parsed {} lines into {} elements",
            lines.len(),
            self.elements.len()
        );
        &self.elements
    }

    /// Elements of the most recent parse.
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn into_elements(self) -> Vec<Element> {
        self.elements
    }
}
