use std::sync::OnceLock;

use regex::Regex;

/// An image alone on its line: `![alt](url)`, optional surrounding spaces.
pub struct StandaloneImage;

impl StandaloneImage {
    /// Returns the raw alt text and url.
    pub fn parse(line: &str) -> Option<(&str, &str)> {
        static IMAGE: OnceLock<Regex> = OnceLock::new();
        let re = IMAGE.get_or_init(|| {
            Regex::new(r"^\s*!\[(.*?)\]\((.*?)\)\s*$").expect("Invalid image regex")
        });
        let caps = re.captures(line)?;
        Some((caps.get(1)?.as_str(), caps.get(2)?.as_str()))
    }
}
