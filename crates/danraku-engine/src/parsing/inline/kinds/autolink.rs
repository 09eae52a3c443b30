use std::sync::LazyLock;

use regex::Regex;

use crate::parsing::inline::{
    parser::InlineContext,
    rule::{InlineRule, RuleOutcome, Trigger},
    types::{InlineNode, NodeKind},
};

static URI: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^<([A-Za-z][A-Za-z0-9+.\-]{1,31}:[^<>\x00-\x20]*)>").expect("uri pattern is valid")
});

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^<([A-Za-z0-9.!#$%&'*+/=?^_`{|}~\-]+@[A-Za-z0-9](?:[A-Za-z0-9\-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9\-]{0,61}[A-Za-z0-9])?)*)>",
    )
    .expect("email pattern is valid")
});

static BARE_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:https?://[A-Za-z0-9_\-]+(?:\.[A-Za-z0-9_\-]+)*|www\.[A-Za-z0-9_\-]+(?:\.[A-Za-z0-9_\-]+)+)[^\s<]*")
        .expect("bare url pattern is valid")
});

fn link(dest: String, label: &str) -> InlineNode {
    InlineNode::Link {
        dest,
        title: None,
        children: vec![InlineNode::text(label)],
    }
}

/// `<scheme:...>` and `<user@host>` autolinks.
pub struct AutolinkRule;

impl InlineRule for AutolinkRule {
    fn name(&self) -> &'static str {
        "autolink"
    }

    fn trigger(&self) -> Trigger {
        Trigger::Char('<')
    }

    fn priority(&self) -> i32 {
        50
    }

    fn apply(&self, ctx: &mut InlineContext<'_>) -> RuleOutcome {
        let rest = ctx.cursor().rest();
        let (node, len) = if let Some(c) = URI.captures(rest) {
            let uri = &c[1];
            (link(uri.to_string(), uri), c[0].len())
        } else if let Some(c) = EMAIL.captures(rest) {
            let addr = &c[1];
            (link(format!("mailto:{addr}"), addr), c[0].len())
        } else {
            return RuleOutcome::Declined;
        };
        ctx.cursor_mut().bump_n(len);
        ctx.container_mut().append_child(node);
        RuleOutcome::Handled
    }
}

/// GFM extended autolinks: bare `http://`, `https://` and `www.` URLs.
pub struct ExtendedAutolinkRule;

impl ExtendedAutolinkRule {
    /// Drops trailing punctuation and unbalanced closing parentheses, which
    /// belong to the surrounding sentence rather than the URL.
    fn trim_url(url: &str) -> &str {
        let mut end = url.len();
        loop {
            let trimmed = &url[..end];
            let Some(last) = trimmed.chars().next_back() else {
                break;
            };
            if matches!(last, '?' | '!' | '.' | ',' | ':' | '*' | '_' | '~' | '\'' | '"') {
                end -= last.len_utf8();
            } else if last == ')'
                && trimmed.matches(')').count() > trimmed.matches('(').count()
            {
                end -= 1;
            } else {
                break;
            }
        }
        &url[..end]
    }
}

impl InlineRule for ExtendedAutolinkRule {
    fn name(&self) -> &'static str {
        "extended-autolink"
    }

    fn trigger(&self) -> Trigger {
        Trigger::OneOf(&['h', 'w'])
    }

    fn priority(&self) -> i32 {
        10
    }

    fn apply(&self, ctx: &mut InlineContext<'_>) -> RuleOutcome {
        if ctx.container().kind() == NodeKind::Link {
            return RuleOutcome::Declined;
        }
        let boundary = ctx
            .cursor()
            .prev_char()
            .is_none_or(|p| p.is_whitespace() || matches!(p, '*' | '_' | '~' | '('));
        if !boundary {
            return RuleOutcome::Declined;
        }
        let Some(m) = BARE_URL.find(ctx.cursor().rest()) else {
            return RuleOutcome::Declined;
        };
        let url = Self::trim_url(m.as_str());
        let dest = if url.starts_with("www.") {
            format!("http://{url}")
        } else {
            url.to_string()
        };
        ctx.cursor_mut().bump_n(url.len());
        ctx.container_mut().append_child(link(dest, url));
        RuleOutcome::Handled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        options::DanrakuOptions,
        parsing::inline::{parser::parse_inline, rule::RuleSet},
    };

    fn scan(s: &str) -> Vec<InlineNode> {
        let rules = RuleSet::new()
            .with_rule(AutolinkRule)
            .with_rule(ExtendedAutolinkRule);
        parse_inline(s, NodeKind::Heading, None, &rules, &DanrakuOptions::default())
    }

    #[test]
    fn angle_bracket_uri() {
        assert_eq!(
            scan("<https://example.com/a>"),
            vec![link("https://example.com/a".into(), "https://example.com/a")]
        );
    }

    #[test]
    fn angle_bracket_email() {
        assert_eq!(
            scan("<foo@example.com>"),
            vec![link("mailto:foo@example.com".into(), "foo@example.com")]
        );
    }

    #[test]
    fn raw_html_is_not_an_autolink() {
        assert_eq!(
            scan("<textarea>"),
            vec![InlineNode::text("<textarea>")]
        );
    }

    #[test]
    fn bare_url_stops_before_trailing_punctuation() {
        assert_eq!(
            scan("https://example.com! にもある"),
            vec![
                link("https://example.com".into(), "https://example.com"),
                InlineNode::text("! にもある")
            ]
        );
    }

    #[test]
    fn www_gets_http_scheme() {
        assert_eq!(
            scan("(www.example.com)"),
            vec![
                InlineNode::text("("),
                link("http://www.example.com".into(), "www.example.com"),
                InlineNode::text(")")
            ]
        );
    }

    #[test]
    fn mid_word_is_not_a_link() {
        assert_eq!(
            scan("xhttps://example.com"),
            vec![
                InlineNode::text("x"),
                InlineNode::text("https://example.com")
            ]
        );
    }
}
