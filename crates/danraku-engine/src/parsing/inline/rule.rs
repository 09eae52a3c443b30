use std::fmt;

use super::{
    kinds::{
        AutolinkRule, CodeSpanRule, DelimitedSpanRule, EntityRule, EscapeRule,
        ExtendedAutolinkRule, ImageRule, LineBreakRule, LinkRule,
    },
    parser::InlineContext,
};
use crate::danraku::{IndentationRule, PunctuationSpacingRule};

/// When the engine offers a position to a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// Only the first position of a scan, evaluated once.
    Start,
    /// A single trigger character.
    Char(char),
    /// Any character of a fixed set.
    OneOf(&'static [char]),
}

impl Trigger {
    pub fn matches(self, c: char, at_start: bool) -> bool {
        match self {
            Trigger::Start => at_start,
            Trigger::Char(t) => c == t,
            Trigger::OneOf(set) => set.contains(&c),
        }
    }
}

/// What a rule did at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleOutcome {
    /// The rule consumed input; no further rule sees this position.
    Handled,
    /// The rule passes. Its cursor movement is undone, but nodes it inserted
    /// stay.
    Declined,
}

/// An inline rule plugged into the scanning engine.
pub trait InlineRule: Send + Sync {
    fn name(&self) -> &'static str;

    fn trigger(&self) -> Trigger;

    /// Higher priorities run first. Equal priorities keep registration order.
    fn priority(&self) -> i32 {
        0
    }

    fn apply(&self, ctx: &mut InlineContext<'_>) -> RuleOutcome;
}

/// An ordered list of rules, sorted once when the set is composed.
#[derive(Default)]
pub struct RuleSet {
    rules: Vec<Box<dyn InlineRule>>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// The danraku rules together with the host Markdown inline rules.
    pub fn standard() -> Self {
        Self::new()
            .with_rule(IndentationRule)
            .with_rule(CodeSpanRule)
            .with_rule(EscapeRule)
            .with_rule(AutolinkRule)
            .with_rule(EntityRule)
            .with_rule(ImageRule)
            .with_rule(LinkRule)
            .with_rule(DelimitedSpanRule)
            .with_rule(ExtendedAutolinkRule)
            .with_rule(LineBreakRule)
            .with_rule(PunctuationSpacingRule)
    }

    /// Adds a rule after every rule of equal or higher priority.
    pub fn with_rule(mut self, rule: impl InlineRule + 'static) -> Self {
        let at = self
            .rules
            .iter()
            .position(|r| r.priority() < rule.priority())
            .unwrap_or(self.rules.len());
        self.rules.insert(at, Box::new(rule));
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn InlineRule> {
        self.rules.iter().map(|r| r.as_ref())
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Rule names in evaluation order.
    pub fn names(&self) -> Vec<&'static str> {
        self.iter().map(|r| r.name()).collect()
    }
}

impl fmt::Debug for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Named(&'static str, i32);

    impl InlineRule for Named {
        fn name(&self) -> &'static str {
            self.0
        }
        fn trigger(&self) -> Trigger {
            Trigger::Char('x')
        }
        fn priority(&self) -> i32 {
            self.1
        }
        fn apply(&self, _ctx: &mut InlineContext<'_>) -> RuleOutcome {
            RuleOutcome::Declined
        }
    }

    #[test]
    fn sorted_by_priority_then_registration() {
        let set = RuleSet::new()
            .with_rule(Named("low", 0))
            .with_rule(Named("high", 10))
            .with_rule(Named("low-2", 0))
            .with_rule(Named("high-2", 10));
        assert_eq!(set.names(), vec!["high", "high-2", "low", "low-2"]);
    }

    #[test]
    fn indentation_runs_before_escapes_and_code_spans() {
        let names = RuleSet::standard().names();
        let pos = |n: &str| names.iter().position(|x| *x == n).unwrap();
        assert_eq!(pos("indentation"), 0);
        assert!(pos("indentation") < pos("code-span"));
        assert!(pos("code-span") < pos("escape"));
        assert!(pos("image") < pos("punctuation-spacing"));
    }

    #[test]
    fn triggers() {
        assert!(Trigger::Start.matches('a', true));
        assert!(!Trigger::Start.matches('a', false));
        assert!(Trigger::OneOf(&['!', '？']).matches('？', false));
        assert!(!Trigger::Char('!').matches('?', false));
    }
}
