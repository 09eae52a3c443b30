use crate::parsing::inline::{
    parser::InlineContext,
    rule::{InlineRule, RuleOutcome, Trigger},
    types::InlineNode,
};

/// Line endings inside inline content. Two or more trailing spaces make a
/// hard break, anything else a soft break; trailing spaces are dropped.
pub struct LineBreakRule;

impl LineBreakRule {
    const HARD_BREAK_SPACES: usize = 2;
}

impl InlineRule for LineBreakRule {
    fn name(&self) -> &'static str {
        "line-break"
    }

    fn trigger(&self) -> Trigger {
        Trigger::Char('\n')
    }

    fn priority(&self) -> i32 {
        5
    }

    fn apply(&self, ctx: &mut InlineContext<'_>) -> RuleOutcome {
        let trailing = ctx.container_mut().trim_trailing_spaces();
        ctx.cursor_mut().advance();
        let node = if trailing >= Self::HARD_BREAK_SPACES {
            InlineNode::HardBreak
        } else {
            InlineNode::SoftBreak
        };
        ctx.container_mut().append_child(node);
        RuleOutcome::Handled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        options::DanrakuOptions,
        parsing::inline::{parser::parse_inline, rule::RuleSet, types::NodeKind},
    };

    fn scan(s: &str) -> Vec<InlineNode> {
        let rules = RuleSet::new().with_rule(LineBreakRule);
        parse_inline(s, NodeKind::Heading, None, &rules, &DanrakuOptions::default())
    }

    #[test]
    fn soft_break_trims_single_space() {
        assert_eq!(
            scan("一 \n二"),
            vec![
                InlineNode::text("一"),
                InlineNode::SoftBreak,
                InlineNode::text("二")
            ]
        );
    }

    #[test]
    fn two_spaces_make_hard_break() {
        assert_eq!(
            scan("一  \n二"),
            vec![
                InlineNode::text("一"),
                InlineNode::HardBreak,
                InlineNode::text("二")
            ]
        );
    }
}
