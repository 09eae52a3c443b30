use log::{debug, trace};

use super::chars::{HORIZONTAL_BAR, IDEOGRAPHIC_SPACE, OPT_OUT_MARK};
use crate::parsing::inline::{
    parser::InlineContext,
    rule::{InlineRule, RuleOutcome, Trigger},
    types::InlineNode,
};

/// Jisage: indents a top-level paragraph with one full-width space.
///
/// The rule only runs at offset zero of a paragraph scan. Indenting prepends
/// a text node and declines, so the first character is still seen by the
/// other rules. A leading `-` is consumed instead and suppresses the
/// indent; an escaped `\-` is indented and printed literally.
pub struct IndentationRule;

impl IndentationRule {
    /// Whether a paragraph opening with `first` gets indented.
    fn wants_indent(first: char, ctx: &InlineContext<'_>) -> bool {
        let options = &ctx.options().jisage;
        if options.ignore_alphabet && first.is_ascii_alphanumeric() {
            trace!("jisage: {first:?} is alphanumeric, ignored");
            return false;
        }
        if options.ignore_dash && first == HORIZONTAL_BAR {
            trace!("jisage: paragraph opens with a horizontal bar, ignored");
            return false;
        }
        // Already indented, e.g. output fed back in.
        first != IDEOGRAPHIC_SPACE
    }
}

impl InlineRule for IndentationRule {
    fn name(&self) -> &'static str {
        "indentation"
    }

    fn trigger(&self) -> Trigger {
        Trigger::Start
    }

    fn priority(&self) -> i32 {
        160
    }

    fn apply(&self, ctx: &mut InlineContext<'_>) -> RuleOutcome {
        if !ctx.container().is_top_level_paragraph() {
            return RuleOutcome::Declined;
        }
        let Some(first) = ctx.cursor().current_char() else {
            return RuleOutcome::Declined;
        };

        if first == OPT_OUT_MARK {
            debug!("jisage: paragraph opted out with a leading '-'");
            ctx.cursor_mut().advance();
            return RuleOutcome::Handled;
        }

        if Self::wants_indent(first, ctx) {
            debug!("jisage: indenting paragraph");
            ctx.container_mut()
                .prepend_child(InlineNode::Text(IDEOGRAPHIC_SPACE.to_string()));
        }
        RuleOutcome::Declined
    }
}
