use crate::parsing::inline::parse_inline;

use super::{
    row::{PIPE, alignment_of, is_separator_row, split_row},
    types::{Alignment, Table, TableCell},
};

/// Parses a table whose header row is `lines[start]`.
///
/// Returns the table and the index of the first line after it, or `None`
/// when there is no separator row at `start + 1`. Body rows are taken while
/// lines contain a pipe.
pub fn parse_table(lines: &[&str], start: usize) -> Option<(Table, usize)> {
    let header_line = lines.get(start)?;
    let separator_line = lines.get(start + 1)?;
    if !is_separator_row(separator_line) {
        return None;
    }

    let separator: Vec<Alignment> = split_row(separator_line)
        .iter()
        .map(|cell| alignment_of(cell))
        .collect();
    let header_cells = split_row(header_line);
    let alignments: Vec<Alignment> = (0..header_cells.len())
        .map(|i| separator.get(i).copied().unwrap_or_default())
        .collect();

    let headers = build_row(&header_cells, &alignments, true);

    let mut rows = vec![];
    let mut next = start + 2;
    while let Some(line) = lines.get(next).filter(|l| l.contains(PIPE)) {
        rows.push(build_row(&split_row(line), &alignments, false));
        next += 1;
    }

    Some((
        Table {
            headers,
            rows,
            alignments,
        },
        next,
    ))
}

/// Builds cells, taking each column's alignment by position. Cells past the
/// last column are kept and aligned left.
fn build_row(cells: &[String], alignments: &[Alignment], is_header: bool) -> Vec<TableCell> {
    cells
        .iter()
        .enumerate()
        .map(|(i, cell)| TableCell {
            content: parse_inline(cell.trim()),
            is_header,
            alignment: alignments.get(i).copied().unwrap_or_default(),
        })
        .collect()
}
