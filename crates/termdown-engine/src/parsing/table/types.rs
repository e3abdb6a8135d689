use std::str::FromStr;

use serde::Serialize;

use crate::parsing::inline::Inline;

/// Horizontal alignment of a table column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown alignment `{0}`, expected left, center or right")]
pub struct ParseAlignmentError(pub String);

impl Alignment {
    pub fn as_str(self) -> &'static str {
        match self {
            Alignment::Left => "left",
            Alignment::Center => "center",
            Alignment::Right => "right",
        }
    }
}

impl FromStr for Alignment {
    type Err = ParseAlignmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(Alignment::Left),
            "center" => Ok(Alignment::Center),
            "right" => Ok(Alignment::Right),
            other => Err(ParseAlignmentError(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableCell {
    pub content: Vec<Inline>,
    pub is_header: bool,
    pub alignment: Alignment,
}

/// A pipe table.
///
/// # Invariants
///
/// - `alignments.len() == headers.len()`
/// - every header cell has `is_header == true`, every body cell `false`
/// - body rows may be shorter or longer than `headers`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Table {
    pub headers: Vec<TableCell>,
    pub rows: Vec<Vec<TableCell>>,
    pub alignments: Vec<Alignment>,
}

impl Table {
    pub fn column_count(&self) -> usize {
        self.alignments.len()
    }

    /// Alignment for column `index`; `Left` past the last column.
    pub fn alignment_at(&self, index: usize) -> Alignment {
        self.alignments.get(index).copied().unwrap_or_default()
    }
}
