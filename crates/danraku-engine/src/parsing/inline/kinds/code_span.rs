use crate::parsing::inline::{
    parser::InlineContext,
    rule::{InlineRule, RuleOutcome, Trigger},
    types::InlineNode,
};

/// Code spans are raw zones: no other inline rule runs inside them.
pub struct CodeSpanRule;

impl CodeSpanRule {
    /// The backtick character that delimits code spans.
    pub const TICK: char = '`';

    /// Finds the byte offset of a closing backtick run of exactly `len`.
    pub(super) fn find_closer(s: &str, len: usize) -> Option<usize> {
        let b = s.as_bytes();
        let mut i = 0;
        while i < b.len() {
            if b[i] == Self::TICK as u8 {
                let run = b[i..].iter().take_while(|&&x| x == Self::TICK as u8).count();
                if run == len {
                    return Some(i);
                }
                i += run;
            } else {
                i += 1;
            }
        }
        None
    }

    /// Line endings become spaces; one leading and trailing space is
    /// stripped when both are present and the content is not all spaces.
    fn normalize(raw: &str) -> String {
        let s = raw.replace('\n', " ");
        if s.len() >= 2 && s.starts_with(' ') && s.ends_with(' ') && s.chars().any(|c| c != ' ')
        {
            s[1..s.len() - 1].to_string()
        } else {
            s
        }
    }
}

impl InlineRule for CodeSpanRule {
    fn name(&self) -> &'static str {
        "code-span"
    }

    fn trigger(&self) -> Trigger {
        Trigger::Char(Self::TICK)
    }

    fn priority(&self) -> i32 {
        150
    }

    fn apply(&self, ctx: &mut InlineContext<'_>) -> RuleOutcome {
        let rest = ctx.cursor().rest();
        let open = rest.chars().take_while(|&c| c == Self::TICK).count();
        let body = &rest[open..];

        let node = match Self::find_closer(body, open) {
            Some(close) => {
                ctx.cursor_mut().bump_n(open + close + open);
                InlineNode::Code(Self::normalize(&body[..close]))
            }
            None => {
                // An unmatched run is literal as a whole, so its tail cannot
                // open a shorter span.
                ctx.cursor_mut().bump_n(open);
                InlineNode::text(&rest[..open])
            }
        };
        ctx.container_mut().append_child(node);
        RuleOutcome::Handled
    }
}
