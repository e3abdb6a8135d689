use std::sync::OnceLock;

use regex::Regex;

use crate::parsing::blocks::types::HeadingLevel;

/// ATX heading block type: `# Title`, up to six `#`.
pub struct Heading;

impl Heading {
    pub const PREFIX: char = '#';

    /// Parses a heading line into its level and trimmed text.
    ///
    /// A closing run of `#` preceded by whitespace is dropped.
    pub fn parse(line: &str) -> Option<(HeadingLevel, &str)> {
        static HEADING: OnceLock<Regex> = OnceLock::new();
        let re = HEADING.get_or_init(|| {
            Regex::new(r"^(#{1,6})\s+(.*?)(?:\s+#+)?$").expect("Invalid heading regex")
        });
        let caps = re.captures(line)?;
        let hashes = caps.get(1)?.as_str().len();
        let level = HeadingLevel::try_from(u8::try_from(hashes).ok()?).ok()?;
        Some((level, caps.get(2)?.as_str().trim()))
    }
}
