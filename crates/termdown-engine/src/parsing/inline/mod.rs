//! # Inline Parsing
//!
//! Leftmost-match inline tokenization over a single string.
//!
//! ## Architecture
//!
//! Inline parsing knows nothing about lines or blocks. The block segmenter
//! hands it the text payload of a heading, paragraph, blockquote, list item,
//! table cell, link text or image alt, and gets back literal text interleaved
//! with typed span elements.
//!
//! ## Modules
//!
//! - **`types`**: `Inline` node (text or element) and `plain_text`
//! - **`kinds`**: one matcher per syntax, owning its delimiters
//! - **`cursor`**: forward-only `Cursor` over the input
//! - **`parser`**: `parse_inline()` main entry point
//!
//! ## Raw Zones
//!
//! Code spans and comments are raw: `` `**x**` `` is a single Code element
//! holding `**x**`, not a Code element holding bold text.

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::parse_inline;
pub use types::{Inline, plain_text};
