use std::sync::OnceLock;

use regex::Regex;

/// HTML comment block type with owned delimiter constants.
pub struct HtmlComment;

impl HtmlComment {
    pub const OPEN: &'static str = "<!--";
    pub const CLOSE: &'static str = "-->";

    /// Text of a comment that is alone on its line, trimmed.
    pub fn single_line(line: &str) -> Option<&str> {
        static SINGLE: OnceLock<Regex> = OnceLock::new();
        let re = SINGLE.get_or_init(|| {
            Regex::new(r"^\s*<!--(.*?)-->\s*$").expect("Invalid comment regex")
        });
        re.captures(line)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().trim())
    }

    /// Returns true if `line` opens a comment that it does not close.
    pub fn opens_block(line: &str) -> bool {
        line.contains(Self::OPEN) && !line.contains(Self::CLOSE)
    }

    /// Consumes a comment opened on `lines[start]`.
    ///
    /// Returns the trimmed comment text, the index of the first line after
    /// the comment, and whether a closer was found. Text before the opener
    /// and after the closer is dropped. Without a closer the comment runs to
    /// the end of the input.
    pub fn consume_block(lines: &[&str], start: usize) -> (String, usize, bool) {
        let opener = lines[start];
        let first = opener
            .find(Self::OPEN)
            .map_or(opener, |at| &opener[at + Self::OPEN.len()..]);
        let mut fragments = vec![first];

        let mut i = start + 1;
        while let Some(line) = lines.get(i) {
            if let Some(at) = line.find(Self::CLOSE) {
                fragments.push(&line[..at]);
                return (fragments.join("\n").trim().to_string(), i + 1, true);
            }
            fragments.push(line);
            i += 1;
        }
        (fragments.join("\n").trim().to_string(), i, false)
    }
}
