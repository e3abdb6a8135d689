use super::{SpanMatch, find_on_line, occurrences};

/// HTML comment inline type with owned delimiter constants.
///
/// The comment text is stored trimmed and is never tokenized.
pub struct Comment;

impl Comment {
    pub const OPEN: &'static str = "<!--";
    pub const CLOSE: &'static str = "-->";

    pub fn find(s: &str) -> Option<SpanMatch> {
        occurrences(s, Self::OPEN).find_map(|start| {
            let body_start = start + Self::OPEN.len();
            let close = find_on_line(s, body_start, Self::CLOSE)?;
            Some(SpanMatch {
                start,
                end: close + Self::CLOSE.len(),
                body: body_start..close,
                url: None,
            })
        })
    }
}
