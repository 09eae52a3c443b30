use crate::parsing::inline::{
    parser::InlineContext,
    rule::{InlineRule, RuleOutcome, Trigger},
    types::InlineNode,
};

/// Backslash escapes: `\` before ASCII punctuation yields that character, `\`
/// before a line ending is a hard break. Any other backslash is literal.
pub struct EscapeRule;

impl EscapeRule {
    pub const BACKSLASH: char = '\\';
}

impl InlineRule for EscapeRule {
    fn name(&self) -> &'static str {
        "escape"
    }

    fn trigger(&self) -> Trigger {
        Trigger::Char(Self::BACKSLASH)
    }

    fn priority(&self) -> i32 {
        80
    }

    fn apply(&self, ctx: &mut InlineContext<'_>) -> RuleOutcome {
        let node = match ctx.cursor().peek_char() {
            Some('\n') => InlineNode::HardBreak,
            Some(c) if c.is_ascii_punctuation() => InlineNode::Text(c.to_string()),
            _ => return RuleOutcome::Declined,
        };
        let cursor = ctx.cursor_mut();
        cursor.advance();
        cursor.advance();
        ctx.container_mut().append_child(node);
        RuleOutcome::Handled
    }
}

/// Unescapes backslash escapes in link destinations and titles.
pub fn unescape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c == EscapeRule::BACKSLASH
            && let Some(&next) = chars.peek()
            && next.is_ascii_punctuation()
        {
            out.push(next);
            chars.next();
        } else {
            out.push(c);
        }
    }
    out
}
