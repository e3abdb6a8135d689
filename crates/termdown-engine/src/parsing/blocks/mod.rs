//! # Block Parsing
//!
//! Line-oriented block segmentation with a single forward cursor.
//!
//! ## Parsing Model
//!
//! The input is split into lines once. At the cursor, block rules are tried
//! in a fixed priority order and the first that fires consumes one or more
//! lines and produces at most one element. The cursor never moves back.
//!
//! 1. blank line (skipped)
//! 2. single-line `<!-- comment -->`
//! 3. comment opened but not closed on the line (runs to `-->` or EOF)
//! 4. table (header row followed by a separator row)
//! 5. ATX heading
//! 6. thematic break
//! 7. fenced code (runs to the closing fence or EOF)
//! 8. blockquote run
//! 9. list run (one marker kind per list)
//! 10. standalone image
//! 11. paragraph run
//!
//! A line no rule accepts becomes a `Text` element.
//!
//! ## Modules
//!
//! - **`types`**: the `Element` tree and its small enums
//! - **`kinds`**: one recognizer per block syntax, owning its delimiters
//! - **`lines`**: line splitting and `consume_run`
//! - **`builder`**: `BlockBuilder`, the cursor and the rule table
//!
//! ## Key Invariants
//!
//! - Blank lines never produce elements
//! - Fenced code is a raw zone: no inline parsing inside
//! - Every rule that fires advances the cursor

pub mod builder;
pub mod kinds;
pub mod lines;
pub mod types;

pub use builder::BlockBuilder;
pub use lines::{consume_run, split_lines};
pub use types::{Element, ElementKind, HeadingLevel, InvalidHeadingLevel, ListKind, RuleKind};
