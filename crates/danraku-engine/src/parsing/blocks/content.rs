//! Content projection types for blocks nested in prefix containers.
//!
//! A paragraph inside `> ` quotes or after a `- ` list marker has content
//! that is not contiguous in the source. These types record, per line, which
//! part is container prefix and which part is inline content.

use xi_rope::Rope;

use crate::parsing::rope::{slice::slice_to_string, span::Span};

/// A single line's content projection within a block.
///
/// # Invariants
///
/// - `prefix` and `content` are within `raw_line`
/// - `prefix.end <= content.start`
/// - `raw_line.start <= prefix.start`
/// - `content.end <= raw_line.end`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentLine {
    /// Full physical line span in the rope.
    pub raw_line: Span,
    /// Container prefix region on this line (e.g., `> ` or list marker).
    pub prefix: Span,
    /// Remainder after stripping container prefixes and indentation.
    pub content: Span,
}

impl ContentLine {
    pub fn new(raw_line: Span, content: Span) -> Self {
        Self {
            raw_line,
            prefix: Span::new(raw_line.start, content.start),
            content,
        }
    }
}

/// How a block's meaningful content is represented.
///
/// - `Contiguous`: a single span, used for one-line content
/// - `Lines`: one projection per physical line, joined with `\n`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentView {
    /// No per-line prefix semantics.
    Contiguous(Span),
    /// Content is non-contiguous; prefixes differ per line.
    Lines(Vec<ContentLine>),
}

impl ContentView {
    /// Builds a view from collected lines, collapsing a single line into a
    /// contiguous span.
    pub fn from_lines(mut lines: Vec<ContentLine>) -> Self {
        if lines.len() == 1 {
            let only = lines.remove(0);
            ContentView::Contiguous(only.content)
        } else {
            ContentView::Lines(lines)
        }
    }

    /// An empty view positioned at `at`.
    pub fn empty(at: usize) -> Self {
        ContentView::Contiguous(Span::new(at, at))
    }

    /// Returns true if this is a contiguous content view.
    #[must_use]
    pub fn is_contiguous(&self) -> bool {
        matches!(self, ContentView::Contiguous(_))
    }

    /// Returns true if this is a lines-based content view.
    #[must_use]
    pub fn is_lines(&self) -> bool {
        matches!(self, ContentView::Lines(_))
    }

    /// Every content span of the view, in source order.
    pub fn spans(&self) -> Vec<Span> {
        match self {
            ContentView::Contiguous(span) => vec![*span],
            ContentView::Lines(lines) => lines.iter().map(|l| l.content).collect(),
        }
    }

    /// Joins content spans into a single string, separated by newlines.
    ///
    /// This is the text the inline engine scans.
    #[must_use]
    pub fn join_content(&self, rope: &Rope) -> String {
        match self {
            ContentView::Contiguous(span) => slice_to_string(rope, *span),
            ContentView::Lines(lines) => lines
                .iter()
                .map(|line| slice_to_string(rope, line.content))
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }
}
