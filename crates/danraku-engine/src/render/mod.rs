//! # Rendering
//!
//! HTML output for a [`ParsedDoc`](crate::parsing::ParsedDoc), in the shape
//! of CommonMark reference HTML. Inline content is scanned while rendering,
//! so the rule set and options decide what ends up in the output.

pub mod html;

pub use html::render_html;
