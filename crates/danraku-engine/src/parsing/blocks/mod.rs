//! # Block Parsing
//!
//! Two-phase block parsing over a container stack.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): Each line is classified into a `LineClass`
//!    containing local facts (blockquote depth, fence detection, blank status)
//!
//! 2. **Block Construction** (`builder`): A `BlockBuilder` maintains a container stack
//!    (blockquotes, lists, list items) and emits `BlockNode`s as leaf blocks close
//!
//! ## Modules
//!
//! - **`types`**: Core types (`BlockNode`, `BlockKind`, `ContainerFrame`)
//! - **`kinds`**: Block-specific types that own their delimiters
//! - **`classify`**: `MarkdownLineClassifier` produces `LineClass` for each line
//! - **`containers`**: `ContainerPath` for managing nested container state
//! - **`content`**: `ContentView` projections with container prefixes stripped
//! - **`open`**: `try_open_leaf` dispatch for detecting block openers
//! - **`builder`**: `BlockBuilder` state machine for block construction
//!
//! ## Key Invariants
//!
//! - Only a paragraph with an empty container path is a top-level paragraph
//! - Fenced code blocks are raw zones: no inline parsing inside
//! - All block nodes store byte spans into the rope

pub mod builder;
pub mod classify;
pub mod containers;
pub mod content;
pub mod kinds;
pub mod open;
pub mod types;

pub use builder::BlockBuilder;
pub use classify::{LineClass, MarkdownLineClassifier};
pub use content::{ContentLine, ContentView};
pub use types::{BlockKind, BlockNode, ContainerFrame};
