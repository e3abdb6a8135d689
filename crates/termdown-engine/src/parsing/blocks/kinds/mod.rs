//! # Block Kinds
//!
//! One type per block syntax. Each owns its delimiters and the line-level
//! recognizer for its syntax; the builder only sequences them.

pub mod block_quote;
pub mod code_fence;
pub mod comment;
pub mod heading;
pub mod image;
pub mod list;
pub mod paragraph;
pub mod thematic_break;

pub use block_quote::BlockQuote;
pub use code_fence::CodeFence;
pub use comment::HtmlComment;
pub use heading::Heading;
pub use image::StandaloneImage;
pub use list::ListItem;
pub use paragraph::Paragraph;
pub use thematic_break::ThematicBreak;
