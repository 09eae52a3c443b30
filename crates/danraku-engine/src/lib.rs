//! Japanese paragraph conventions for Markdown.
//!
//! `danraku-engine` parses Markdown into blocks, scans each block's inline
//! content with a [`RuleSet`] and renders HTML. The standard rule set adds
//! the two danraku rules to the host Markdown rules:
//!
//! - jisage: a full-width space at the start of each top-level paragraph
//! - yakumono: a space after `!`, `?`, `！` and `？` inside running text
//!
//! ```
//! use danraku_engine::{DanrakuOptions, convert};
//!
//! let html = convert("素晴らしい!異論はないよね?うん", &DanrakuOptions::default());
//! assert_eq!(html, "<p>　素晴らしい! 異論はないよね? うん</p>\n");
//! ```

pub mod danraku;
pub mod io;
pub mod options;
pub mod parsing;
pub mod render;

use xi_rope::Rope;

pub use io::IoError;
pub use options::{DanrakuOptions, JisageOptions, YakumonoOptions};
pub use parsing::{
    ParsedDoc,
    inline::{InlineRule, RuleOutcome, RuleSet, Trigger},
    parse_document, parse_inline_for_block,
};
pub use render::render_html;

/// Converts Markdown to HTML with the standard rule set.
pub fn convert(markdown: &str, options: &DanrakuOptions) -> String {
    convert_with_rules(markdown, &RuleSet::standard(), options)
}

/// Converts Markdown to HTML with a custom rule set.
pub fn convert_with_rules(markdown: &str, rules: &RuleSet, options: &DanrakuOptions) -> String {
    let rope = Rope::from(markdown);
    let doc = parse_document(&rope);
    render_html(&rope, &doc, rules, options)
}
