//! # Snapshot Testing Support
//!
//! Utilities for testing the parser via snapshot assertions and invariant checks.
//!
//! ## Modules
//!
//! - **`outline`**: renders an element tree as stable, indented text for
//!   `insta` snapshots
//! - **`invariants`**: runtime checks that any parsed tree is well formed
//!   (heading levels in range, table columns consistent, no empty text nodes)
//!
//! Parsing behavior is pinned by snapshot tests rather than a formal grammar.

pub mod invariants;
pub mod outline;

pub use invariants::check as invariants;
pub use outline::outline;
