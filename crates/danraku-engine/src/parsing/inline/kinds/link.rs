use crate::parsing::inline::{
    parser::InlineContext,
    rule::{InlineRule, RuleOutcome, Trigger},
    types::{InlineNode, NodeKind},
};

use super::escape::{EscapeRule, unescape};

/// Finds the byte offset of the `]` matching the `[` at the start of `s`.
fn label_end(s: &str) -> Option<usize> {
    let mut depth = 0usize;
    let mut chars = s.char_indices();
    while let Some((i, c)) = chars.next() {
        match c {
            EscapeRule::BACKSLASH => {
                chars.next();
            }
            '[' => depth += 1,
            ']' => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }
    None
}

fn leading_whitespace(s: &str) -> usize {
    s.len() - s.trim_start_matches([' ', '\t', '\n']).len()
}

/// The `(dest "title")` part of an inline link, with its length in bytes.
#[derive(Debug, PartialEq, Eq)]
struct LinkTail {
    dest: String,
    title: Option<String>,
    len: usize,
}

impl LinkTail {
    fn parse(s: &str) -> Option<Self> {
        if !s.starts_with('(') {
            return None;
        }
        let mut i = 1 + leading_whitespace(&s[1..]);
        let (raw_dest, dest_len) = Self::destination(&s[i..])?;
        i += dest_len;

        let gap = leading_whitespace(&s[i..]);
        let mut title = None;
        if gap > 0 || dest_len == 0 {
            i += gap;
            if let Some((raw_title, title_len)) = Self::title(&s[i..]) {
                title = Some(decode(raw_title));
                i += title_len;
                i += leading_whitespace(&s[i..]);
            }
        }

        if !s[i..].starts_with(')') {
            return None;
        }
        Some(Self {
            dest: decode(raw_dest),
            title,
            len: i + 1,
        })
    }

    /// `<...>` or a run of non-space characters with balanced parentheses.
    fn destination(s: &str) -> Option<(&str, usize)> {
        if let Some(body) = s.strip_prefix('<') {
            let end = body.find(['>', '<', '\n'])?;
            return body[end..]
                .starts_with('>')
                .then(|| (&body[..end], end + 2));
        }

        let mut depth = 0usize;
        let mut end = s.len();
        let mut chars = s.char_indices();
        while let Some((i, c)) = chars.next() {
            match c {
                EscapeRule::BACKSLASH => {
                    chars.next();
                }
                '(' => depth += 1,
                ')' if depth == 0 => {
                    end = i;
                    break;
                }
                ')' => depth -= 1,
                c if c.is_whitespace() || c.is_control() => {
                    end = i;
                    break;
                }
                _ => {}
            }
        }
        (depth == 0).then(|| (&s[..end], end))
    }

    /// A title quoted with `"`, `'` or parentheses.
    fn title(s: &str) -> Option<(&str, usize)> {
        let open = s.chars().next()?;
        let close = match open {
            '"' => '"',
            '\'' => '\'',
            '(' => ')',
            _ => return None,
        };
        let body = &s[1..];
        let mut chars = body.char_indices();
        while let Some((i, c)) = chars.next() {
            if c == EscapeRule::BACKSLASH {
                chars.next();
            } else if c == close {
                return Some((&body[..i], i + 2));
            }
        }
        None
    }
}

fn decode(raw: &str) -> String {
    html_escape::decode_html_entities(&unescape(raw)).into_owned()
}

/// Inline links: `[label](dest "title")`. Links do not nest.
pub struct LinkRule;

impl InlineRule for LinkRule {
    fn name(&self) -> &'static str {
        "link"
    }

    fn trigger(&self) -> Trigger {
        Trigger::Char('[')
    }

    fn priority(&self) -> i32 {
        30
    }

    fn apply(&self, ctx: &mut InlineContext<'_>) -> RuleOutcome {
        if ctx.container().kind() == NodeKind::Link {
            return RuleOutcome::Declined;
        }
        let rest = ctx.cursor().rest();
        let Some(close) = label_end(rest) else {
            return RuleOutcome::Declined;
        };
        let Some(tail) = LinkTail::parse(&rest[close + 1..]) else {
            return RuleOutcome::Declined;
        };

        let children = ctx.parse_nested(&rest[1..], close - 1, NodeKind::Link);
        ctx.cursor_mut().bump_n(close + 1 + tail.len);
        ctx.container_mut().append_child(InlineNode::Link {
            dest: tail.dest,
            title: tail.title,
            children,
        });
        RuleOutcome::Handled
    }
}

/// Inline images: `![alt](src "title")`. The alt text is the plain text of
/// the scanned label.
pub struct ImageRule;

impl InlineRule for ImageRule {
    fn name(&self) -> &'static str {
        "image"
    }

    fn trigger(&self) -> Trigger {
        Trigger::Char('!')
    }

    fn priority(&self) -> i32 {
        30
    }

    fn apply(&self, ctx: &mut InlineContext<'_>) -> RuleOutcome {
        let rest = ctx.cursor().rest();
        let Some(label) = rest.strip_prefix('!').filter(|l| l.starts_with('[')) else {
            return RuleOutcome::Declined;
        };
        let Some(close) = label_end(label) else {
            return RuleOutcome::Declined;
        };
        let Some(tail) = LinkTail::parse(&label[close + 1..]) else {
            return RuleOutcome::Declined;
        };

        let alt =
            InlineNode::plain_text(&ctx.parse_nested(&label[1..], close - 1, NodeKind::Image));
        ctx.cursor_mut().bump_n(1 + close + 1 + tail.len);
        ctx.container_mut().append_child(InlineNode::Image {
            dest: tail.dest,
            title: tail.title,
            alt,
        });
        RuleOutcome::Handled
    }
}
