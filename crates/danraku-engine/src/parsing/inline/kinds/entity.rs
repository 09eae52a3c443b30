use std::sync::LazyLock;

use regex::Regex;

use crate::parsing::inline::{
    parser::InlineContext,
    rule::{InlineRule, RuleOutcome, Trigger},
    types::InlineNode,
};

static ENTITY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^&(?:#[0-9]{1,7}|#[xX][0-9a-fA-F]{1,6}|[A-Za-z][A-Za-z0-9]{1,31});")
        .expect("entity pattern is valid")
});

/// HTML character references (`&amp;`, `&#12354;`, `&#x3042;`).
pub struct EntityRule;

impl InlineRule for EntityRule {
    fn name(&self) -> &'static str {
        "entity"
    }

    fn trigger(&self) -> Trigger {
        Trigger::Char('&')
    }

    fn priority(&self) -> i32 {
        40
    }

    fn apply(&self, ctx: &mut InlineContext<'_>) -> RuleOutcome {
        let Some(m) = ENTITY.find(ctx.cursor().rest()) else {
            return RuleOutcome::Declined;
        };
        let reference = m.as_str();
        let decoded = html_escape::decode_html_entities(reference);
        if decoded == reference {
            // Unknown names stay literal.
            return RuleOutcome::Declined;
        }
        let node = InlineNode::Text(decoded.into_owned());
        ctx.cursor_mut().bump_n(reference.len());
        ctx.container_mut().append_child(node);
        RuleOutcome::Handled
    }
}
