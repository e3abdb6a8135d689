/// Fenced code block type with owned delimiter constant.
///
/// Only backtick fences are recognized. The fence line must start at column
/// zero; anything after the backticks on the opening line is the info string.
pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";

    /// Returns true if `line` opens or closes a fence.
    pub fn is_fence(line: &str) -> bool {
        line.starts_with(Self::BACKTICKS)
    }

    /// The trimmed info string of an opening fence line, if non-empty.
    pub fn language(line: &str) -> Option<String> {
        let info = line.strip_prefix(Self::BACKTICKS)?.trim();
        (!info.is_empty()).then(|| info.to_string())
    }
}
