use super::{SpanMatch, find_on_line, occurrences};

const TEXT_CLOSE_URL_OPEN: &str = "](";
const URL_CLOSE: &str = ")";

/// Finds `<open>text](url)`, taking the first `](` and then the first `)`.
fn find_bracketed(s: &str, open: &str) -> Option<SpanMatch> {
    occurrences(s, open).find_map(|start| {
        let body_start = start + open.len();
        let mid = find_on_line(s, body_start, TEXT_CLOSE_URL_OPEN)?;
        let url_start = mid + TEXT_CLOSE_URL_OPEN.len();
        let close = find_on_line(s, url_start, URL_CLOSE)?;
        Some(SpanMatch {
            start,
            end: close + URL_CLOSE.len(),
            body: body_start..mid,
            url: Some(url_start..close),
        })
    })
}

/// `[text](url)`
pub struct Link;

impl Link {
    pub const OPEN: &'static str = "[";

    pub fn find(s: &str) -> Option<SpanMatch> {
        find_bracketed(s, Self::OPEN)
    }
}

/// `![alt](url)`
pub struct Image;

impl Image {
    pub const OPEN: &'static str = "![";

    pub fn find(s: &str) -> Option<SpanMatch> {
        find_bracketed(s, Self::OPEN)
    }
}
