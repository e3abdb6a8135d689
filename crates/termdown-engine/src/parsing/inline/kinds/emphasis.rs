use super::{SpanMatch, find_on_line};

/// Strong emphasis: `**text**` or `__text__`.
///
/// The closing delimiter must be the same pair as the opening one. The body
/// may be empty.
pub struct Bold;

impl Bold {
    pub const DELIMITERS: [&'static str; 2] = ["**", "__"];

    pub fn find(s: &str) -> Option<SpanMatch> {
        (0..s.len()).find_map(|start| {
            let rest = s.get(start..)?;
            let delim = Self::DELIMITERS.into_iter().find(|d| rest.starts_with(d))?;
            let body_start = start + delim.len();
            let close = find_on_line(s, body_start, delim)?;
            Some(SpanMatch {
                start,
                end: close + delim.len(),
                body: body_start..close,
                url: None,
            })
        })
    }
}

/// Emphasis: `*text*` or `_text_`.
///
/// A delimiter immediately followed by the same character never opens
/// italic, so `**` is left for [`Bold`]. The body is never empty.
pub struct Italic;

impl Italic {
    pub const DELIMITERS: [u8; 2] = [b'*', b'_'];

    pub fn find(s: &str) -> Option<SpanMatch> {
        let b = s.as_bytes();
        (0..b.len()).find_map(|start| {
            let delim = b[start];
            if !Self::DELIMITERS.contains(&delim) || b.get(start + 1) == Some(&delim) {
                return None;
            }
            let body_start = start + 1;
            let close = find_on_line(s, body_start, &s[start..body_start])?;
            Some(SpanMatch {
                start,
                end: close + 1,
                body: body_start..close,
                url: None,
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bold_with_asterisks_and_underscores() {
        let s = "**a** __b__";
        let m = Bold::find(s).unwrap();
        assert_eq!(&s[m.body.clone()], "a");
        let m = Bold::find(&s[m.end..]).unwrap();
        assert_eq!(m.body, 3..4);
    }

    #[test]
    fn bold_pairs_must_match() {
        assert_eq!(Bold::find("**a__"), None);
    }

    #[test]
    fn empty_bold_matches() {
        let m = Bold::find("****").unwrap();
        assert_eq!((m.start, m.end), (0, 4));
        assert!(m.body.is_empty());
    }

    #[test]
    fn italic_cedes_double_delimiter() {
        // Position 0 is `**`, so italic starts at the second asterisk.
        let m = Italic::find("**a**").unwrap();
        assert_eq!((m.start, m.end), (1, 4));
    }

    #[test]
    fn italic_body_is_never_empty() {
        assert_eq!(Italic::find("a * b"), None);
        assert_eq!(Italic::find("__"), None);
    }

    #[test]
    fn italic_with_underscores_and_multibyte_body() {
        let s = "_héllo_";
        let m = Italic::find(s).unwrap();
        assert_eq!(&s[m.body], "héllo");
    }

    #[test]
    fn italic_does_not_cross_lines() {
        assert_eq!(Italic::find("*a\nb*"), None);
    }
}
