/// Blockquote block type with owned delimiter constant.
///
/// Consecutive quoted lines form one blockquote; nested `>` markers beyond
/// the first are kept as text.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    /// Returns the quoted text of a line that starts with `>`, trimmed.
    pub fn strip_prefix(line: &str) -> Option<&str> {
        line.strip_prefix(Self::PREFIX).map(str::trim)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_no_quote() {
        assert_eq!(BlockQuote::strip_prefix("hello"), None);
    }

    #[test]
    fn strip_single_quote() {
        assert_eq!(BlockQuote::strip_prefix(">  hello "), Some("hello"));
    }

    #[test]
    fn strip_keeps_nested_marker() {
        assert_eq!(BlockQuote::strip_prefix(">> hello"), Some("> hello"));
    }

    #[test]
    fn indented_marker_is_not_a_quote() {
        assert_eq!(BlockQuote::strip_prefix(" > hello"), None);
    }

    #[test]
    fn bare_marker_is_an_empty_quote_line() {
        assert_eq!(BlockQuote::strip_prefix(">"), Some(""));
    }
}
