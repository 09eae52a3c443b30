use log::trace;

use crate::options::DanrakuOptions;

use super::{
    container::InlineContainer,
    cursor::Cursor,
    rule::{RuleOutcome, RuleSet},
    types::{InlineNode, NodeKind},
};

/// Everything a rule sees while it is applied: the cursor, the container
/// being filled, the option snapshot and the rule set (for nested scans).
pub struct InlineContext<'a> {
    cursor: Cursor<'a>,
    container: InlineContainer,
    options: DanrakuOptions,
    rules: &'a RuleSet,
}

impl<'a> InlineContext<'a> {
    pub fn new(
        cursor: Cursor<'a>,
        container: InlineContainer,
        rules: &'a RuleSet,
        options: DanrakuOptions,
    ) -> Self {
        Self {
            cursor,
            container,
            options,
            rules,
        }
    }

    pub fn cursor(&self) -> &Cursor<'a> {
        &self.cursor
    }

    pub fn cursor_mut(&mut self) -> &mut Cursor<'a> {
        &mut self.cursor
    }

    pub fn container(&self) -> &InlineContainer {
        &self.container
    }

    pub fn container_mut(&mut self) -> &mut InlineContainer {
        &mut self.container
    }

    pub fn options(&self) -> &DanrakuOptions {
        &self.options
    }

    /// Scans `text[..end]` as the children of a new `kind` node nested in
    /// the current container. The rest of `text` stays visible to
    /// [`Cursor::lookahead`], so a rule at the end of the span still sees
    /// the closing delimiter.
    pub fn parse_nested(&self, text: &str, end: usize, kind: NodeKind) -> Vec<InlineNode> {
        let cursor = Cursor::followed_by(&text[..end], text[end..].chars().next());
        let mut ctx = InlineContext::new(
            cursor,
            InlineContainer::new(kind, Some(self.container.kind())),
            self.rules,
            self.options,
        );
        scan(&mut ctx);
        ctx.into_children()
    }

    pub fn into_children(self) -> Vec<InlineNode> {
        self.container.into_children()
    }
}

/// Scans inline `content` into the children of a `kind` node.
///
/// At each position the rules whose trigger matches are applied in priority
/// order until one returns [`RuleOutcome::Handled`]. A position no rule
/// handles is plain text. `Trigger::Start` rules are evaluated at offset
/// zero, at most once per scan.
pub fn parse_inline(
    content: &str,
    kind: NodeKind,
    parent: Option<NodeKind>,
    rules: &RuleSet,
    options: &DanrakuOptions,
) -> Vec<InlineNode> {
    let mut ctx = InlineContext::new(
        Cursor::new(content),
        InlineContainer::new(kind, parent),
        rules,
        *options,
    );
    scan(&mut ctx);
    ctx.into_children()
}

fn scan(ctx: &mut InlineContext<'_>) {
    let rules = ctx.rules;
    let mut text = String::new();
    let mut start_evaluated = false;

    while let Some(c) = ctx.cursor.current_char() {
        let at_start = !start_evaluated && ctx.cursor.pos() == 0;
        start_evaluated = true;

        let mut handled = false;
        for rule in rules.iter() {
            if !rule.trigger().matches(c, at_start) {
                continue;
            }
            flush_text(&mut text, &mut ctx.container);
            let saved = ctx.cursor.clone();
            match rule.apply(ctx) {
                RuleOutcome::Handled => {
                    trace!("{} handled {c:?} at {}", rule.name(), saved.pos());
                    handled = true;
                    break;
                }
                RuleOutcome::Declined => ctx.cursor = saved,
            }
        }

        if !handled {
            text.push(c);
            ctx.cursor.advance();
        }
    }

    flush_text(&mut text, &mut ctx.container);
}

fn flush_text(text: &mut String, container: &mut InlineContainer) {
    if !text.is_empty() {
        container.append_child(InlineNode::Text(std::mem::take(text)));
    }
}
