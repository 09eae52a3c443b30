//! # Danraku rules
//!
//! The two Japanese paragraph conventions, as inline rules for the scanning
//! engine in [`crate::parsing::inline`]:
//!
//! - **jisage** ([`IndentationRule`]): a full-width space (U+3000) at the
//!   start of each top-level paragraph.
//! - **yakumono** ([`PunctuationSpacingRule`]): a space after `!`, `?`,
//!   `！` and `？` when the text runs straight on.
//!
//! Both rules read their settings from the [`DanrakuOptions`] snapshot taken
//! when the scan started. Neither can fail: every position ends in
//! `Handled` or `Declined`.
//!
//! [`DanrakuOptions`]: crate::options::DanrakuOptions

pub mod chars;
pub mod jisage;
pub mod yakumono;

pub use jisage::IndentationRule;
pub use yakumono::PunctuationSpacingRule;
