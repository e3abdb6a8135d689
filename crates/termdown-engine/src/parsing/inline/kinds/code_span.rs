use super::{SpanMatch, find_on_line, occurrences};

/// Code span inline type with owned delimiter constant.
///
/// Code spans are raw: their text is kept verbatim, never tokenized.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick that opens and closes a code span.
    pub const TICK: &'static str = "`";

    pub fn find(s: &str) -> Option<SpanMatch> {
        occurrences(s, Self::TICK).find_map(|start| {
            let body_start = start + Self::TICK.len();
            let close = find_on_line(s, body_start, Self::TICK)?;
            Some(SpanMatch {
                start,
                end: close + Self::TICK.len(),
                body: body_start..close,
                url: None,
            })
        })
    }
}
