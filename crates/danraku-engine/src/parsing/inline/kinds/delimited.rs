use crate::parsing::inline::{
    parser::InlineContext,
    rule::{InlineRule, RuleOutcome, Trigger},
    types::{InlineNode, NodeKind, SpanKind},
};

use super::{code_span::CodeSpanRule, escape::EscapeRule};

/// Emphasis (`*`, `_`), strong emphasis (`**`, `__`) and strikethrough
/// (`~~`).
///
/// An opener is matched with the nearest closing run of the same length.
/// This is simpler than CommonMark's delimiter stack and differs from it on
/// overlapping or mismatched runs.
pub struct DelimitedSpanRule;

impl DelimitedSpanRule {
    pub const DELIMITERS: &'static [char] = &['*', '_', '~'];
    const STRIKE_LEN: usize = 2;

    /// Byte offset of the closing run for an opener of `len` copies of
    /// `delim`, within `body` (the text after the opener).
    fn find_closer(body: &str, delim: char, len: usize) -> Option<usize> {
        let mut i = 0;
        let mut prev: Option<char> = None;
        while let Some(c) = body[i..].chars().next() {
            if c == EscapeRule::BACKSLASH {
                i += c.len_utf8();
                if let Some(escaped) = body[i..].chars().next() {
                    i += escaped.len_utf8();
                    prev = Some(escaped);
                }
                continue;
            }
            if c == CodeSpanRule::TICK {
                let run = body[i..].chars().take_while(|&x| x == c).count();
                let after = i + run;
                i = match CodeSpanRule::find_closer(&body[after..], run) {
                    Some(close) => after + close + run,
                    None => after,
                };
                prev = Some(c);
                continue;
            }
            if c == delim {
                let run = body[i..].chars().take_while(|&x| x == delim).count();
                let flanked = prev.is_some_and(|p| !p.is_whitespace());
                let word_follows = body[i + run..]
                    .chars()
                    .next()
                    .is_some_and(char::is_alphanumeric);
                if run == len && flanked && !(delim == '_' && word_follows) {
                    return Some(i);
                }
                i += run;
                prev = Some(delim);
                continue;
            }
            i += c.len_utf8();
            prev = Some(c);
        }
        None
    }

    /// Span kinds to try for an opening run, longest first.
    fn candidates(delim: char, run: usize) -> &'static [(usize, SpanKind)] {
        match (delim, run) {
            ('~', Self::STRIKE_LEN) => &[(2, SpanKind::Strikethrough)],
            ('~', _) => &[],
            (_, 1) => &[(1, SpanKind::Emphasis)],
            _ => &[(2, SpanKind::Strong), (1, SpanKind::Emphasis)],
        }
    }
}

impl InlineRule for DelimitedSpanRule {
    fn name(&self) -> &'static str {
        "delimited-span"
    }

    fn trigger(&self) -> Trigger {
        Trigger::OneOf(Self::DELIMITERS)
    }

    fn priority(&self) -> i32 {
        20
    }

    fn apply(&self, ctx: &mut InlineContext<'_>) -> RuleOutcome {
        let Some(delim) = ctx.cursor().current_char() else {
            return RuleOutcome::Declined;
        };
        if delim == '_'
            && ctx
                .cursor()
                .prev_char()
                .is_some_and(char::is_alphanumeric)
        {
            return RuleOutcome::Declined;
        }

        let rest = ctx.cursor().rest();
        let run = rest.chars().take_while(|&c| c == delim).count();

        for &(len, kind) in Self::candidates(delim, run) {
            let body = &rest[len..];
            if body.chars().next().is_none_or(char::is_whitespace) {
                continue;
            }
            let Some(close) = Self::find_closer(body, delim, len) else {
                continue;
            };
            let children = ctx.parse_nested(body, close, NodeKind::Span(kind));
            ctx.cursor_mut().bump_n(len + close + len);
            ctx.container_mut()
                .append_child(InlineNode::Span { kind, children });
            return RuleOutcome::Handled;
        }
        RuleOutcome::Declined
    }
}
