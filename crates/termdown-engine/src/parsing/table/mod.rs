//! # Table Parsing
//!
//! Pipe tables: a header row, a separator row that fixes column alignment,
//! then body rows for as long as lines contain a pipe.
//!
//! ```text
//! | Name | Qty |
//! |:-----|----:|
//! | pear |   3 |
//! ```
//!
//! Alignment is derived once per column from the separator and passed to
//! every cell by position; a cell past the last column is aligned left.

pub mod parser;
pub mod row;
pub mod types;

pub use parser::parse_table;
pub use row::starts_table;
pub use types::{Alignment, ParseAlignmentError, Table, TableCell};
