use log::trace;

use super::chars::{IDEOGRAPHIC_SPACE, YAKUMONO, blocks_spacing, is_half_width};
use crate::parsing::inline::{
    parser::InlineContext,
    rule::{InlineRule, RuleOutcome, Trigger},
    types::InlineNode,
};

/// Yakumono spacing: puts a space after `!`, `?`, `！` and `？` when the
/// sentence runs straight on.
///
/// The character looked at is the next one in the inline stream: at the end
/// of an emphasis span that is its closing delimiter, so `**すごい!**` still
/// gets its space. Nothing is inserted at the end of the content, before an existing space
/// or other whitespace, before closing punctuation, before another mark of
/// the set, or after the `!` of image syntax. With `byte_sensitive` a
/// half-width mark gets a half-width space; otherwise the space is U+3000.
pub struct PunctuationSpacingRule;

impl PunctuationSpacingRule {
    fn spacing_for(mark: char, byte_sensitive: bool) -> char {
        if byte_sensitive && is_half_width(mark) {
            ' '
        } else {
            IDEOGRAPHIC_SPACE
        }
    }
}

impl InlineRule for PunctuationSpacingRule {
    fn name(&self) -> &'static str {
        "punctuation-spacing"
    }

    fn trigger(&self) -> Trigger {
        Trigger::OneOf(&YAKUMONO)
    }

    fn apply(&self, ctx: &mut InlineContext<'_>) -> RuleOutcome {
        let options = ctx.options().yakumono;
        if !options.spacing_enabled {
            return RuleOutcome::Declined;
        }
        let (Some(mark), Some(next)) = (ctx.cursor().current_char(), ctx.cursor().lookahead())
        else {
            return RuleOutcome::Declined;
        };
        if mark == '!' && next == '[' {
            return RuleOutcome::Declined;
        }
        if blocks_spacing(next) {
            trace!("yakumono: no space between {mark:?} and {next:?}");
            return RuleOutcome::Declined;
        }

        let spacing = Self::spacing_for(mark, options.byte_sensitive);
        trace!("yakumono: {spacing:?} after {mark:?}");
        ctx.cursor_mut().advance();
        ctx.container_mut()
            .append_child(InlineNode::Text(format!("{mark}{spacing}")));
        RuleOutcome::Handled
    }
}
