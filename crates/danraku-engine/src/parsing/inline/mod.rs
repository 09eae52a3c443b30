//! # Inline Parsing
//!
//! Cursor-based inline scanning driven by a priority-ordered [`RuleSet`].
//!
//! ## Architecture
//!
//! Inline parsing is separate from block parsing. It runs over the joined
//! content of one inline-bearing block (paragraph, heading, table cell) and
//! fills an [`InlineContainer`] that knows its own kind and its parent's.
//!
//! At every position the engine offers the character to the rules whose
//! [`Trigger`](rule::Trigger) matches, highest priority first. A rule either
//! consumes input and returns `Handled`, or returns `Declined` and has its
//! cursor movement undone. Nodes a declined rule inserted are kept, which is
//! how the indentation rule adds a space without consuming anything.
//!
//! ## Modules
//!
//! - **`types`**: `InlineNode` and `NodeKind`
//! - **`container`**: `InlineContainer`, the node being filled
//! - **`cursor`**: `Cursor` for char-aware scanning
//! - **`rule`**: the `InlineRule` trait and `RuleSet`
//! - **`parser`**: `parse_inline()` and the scan loop
//! - **`kinds`**: the host Markdown rules (code spans, links, emphasis, ...)

pub mod container;
pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod rule;
pub mod types;

pub use container::InlineContainer;
pub use parser::{InlineContext, parse_inline};
pub use rule::{InlineRule, RuleOutcome, RuleSet, Trigger};
pub use types::{InlineNode, NodeKind, SpanKind};
