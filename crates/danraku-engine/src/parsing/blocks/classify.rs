use crate::parsing::rope::{lines::LineRef, span::Span};

use super::kinds::{BLANK, BlockQuote, CodeFence, FenceSig};

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of block parsing: each line is classified independently
/// without reference to surrounding context.
#[derive(Debug, Clone)]
pub struct LineClass {
    /// Full byte span of this line in the rope.
    pub line: Span,
    /// Whether the line is blank (whitespace only after stripping prefixes).
    pub is_blank: bool,
    /// Number of blockquote `>` prefixes found.
    pub quote_depth: u8,
    /// Byte span of the line content after stripping quote prefixes,
    /// excluding the line ending.
    pub remainder_span: Span,
    /// Text content after stripping prefixes.
    pub remainder_text: String,
    /// If the remainder looks like a fence opener/closer.
    pub fence_sig: Option<FenceSig>,
}

impl LineClass {
    /// Span of `remainder_text[from..to]` in the rope.
    pub fn sub_span(&self, from: usize, to: usize) -> Span {
        Span::new(self.remainder_span.start + from, self.remainder_span.start + to)
    }
}

/// Classifies individual lines for the block parsing phase.
pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    /// Classifies a line into a [`LineClass`] containing local facts.
    ///
    /// Extracts blockquote depth, remainder span, blank status, and fence signature.
    pub fn classify(&self, lr: &LineRef) -> LineClass {
        let (qd, idx) = BlockQuote::strip_prefixes(&lr.text);
        let remainder = &lr.text[idx..];

        LineClass {
            line: lr.span,
            is_blank: remainder.trim_matches(BLANK).is_empty(),
            quote_depth: qd,
            remainder_span: Span::new(lr.span.start + idx, lr.text_end()),
            remainder_text: remainder.to_string(),
            fence_sig: CodeFence::sig(remainder),
        }
    }
}
