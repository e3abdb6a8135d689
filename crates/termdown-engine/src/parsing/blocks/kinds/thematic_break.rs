use crate::parsing::blocks::types::RuleKind;

/// Thematic break block type: a line of three or more identical `-`, `*`
/// or `_`, with nothing else on it.
pub struct ThematicBreak;

impl ThematicBreak {
    pub const MIN_LEN: usize = 3;

    pub fn parse(line: &str) -> Option<RuleKind> {
        let first = line.chars().next()?;
        let kind = match first {
            '-' => RuleKind::Dash,
            '*' => RuleKind::Asterisk,
            '_' => RuleKind::Underscore,
            _ => return None,
        };
        (line.len() >= Self::MIN_LEN && line.chars().all(|c| c == first)).then_some(kind)
    }
}
