//! # Inline Kinds
//!
//! The host Markdown inline rules. Each rule owns its delimiters: the scan
//! loop in [`super::parser`] never hardcodes `` ` ``, `[` or `*`.
//!
//! | rule | trigger | priority |
//! |------|---------|----------|
//! | [`CodeSpanRule`] | `` ` `` | 150 |
//! | [`EscapeRule`] | `\` | 80 |
//! | [`AutolinkRule`] | `<` | 50 |
//! | [`EntityRule`] | `&` | 40 |
//! | [`ImageRule`] | `!` | 30 |
//! | [`LinkRule`] | `[` | 30 |
//! | [`DelimitedSpanRule`] | `*` `_` `~` | 20 |
//! | [`ExtendedAutolinkRule`] | `h` `w` | 10 |
//! | [`LineBreakRule`] | newline | 5 |
//!
//! Code spans are raw zones: once the code-span rule has consumed a span, no
//! other rule sees its content.

pub mod autolink;
pub mod code_span;
pub mod delimited;
pub mod entity;
pub mod escape;
pub mod line_break;
pub mod link;

pub use autolink::{AutolinkRule, ExtendedAutolinkRule};
pub use code_span::CodeSpanRule;
pub use delimited::DelimitedSpanRule;
pub use entity::EntityRule;
pub use escape::EscapeRule;
pub use line_break::LineBreakRule;
pub use link::{ImageRule, LinkRule};
