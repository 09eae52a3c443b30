use crate::parsing::rope::span::Span;

use super::{
    content::ContentView,
    kinds::{Alignment, FenceKind, ListMarker},
};

/// A frame in the container stack representing a nesting level.
///
/// Containers wrap leaf blocks (paragraphs, code blocks, tables). A leaf block
/// carries the full path of frames it was opened in, outermost first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContainerFrame {
    /// A blockquote container with its nesting depth.
    BlockQuote {
        /// How many `>` prefixes (1 = single quote, 2 = nested, etc.)
        depth: u8,
    },
    /// A list; consecutive items sharing the same marker family share the frame.
    List { marker: ListMarker },
    /// One item of the enclosing list.
    ListItem {
        /// Document-wide item counter, distinguishes sibling items.
        index: usize,
        /// The number written in the source for ordered items.
        number: Option<u64>,
        /// `Some(checked)` for GFM task list items.
        task: Option<bool>,
    },
}

/// The kind of a leaf block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockKind {
    /// A paragraph block (default when no other block opener matches).
    Paragraph,
    /// An ATX (`#`) or setext (`===`/`---`) heading.
    Heading { level: u8 },
    /// A fenced code block (``` or ~~~).
    FencedCode {
        /// Whether backticks or tildes were used.
        kind: FenceKind,
        /// The info string after the opening fence, trimmed.
        info: String,
    },
    /// A `***`, `---` or `___` line.
    ThematicBreak,
    /// Raw HTML lines, passed through without inline parsing.
    HtmlBlock,
    /// A GFM pipe table. Cell spans point at the trimmed cell text.
    Table {
        alignments: Vec<Alignment>,
        header: Vec<Span>,
        rows: Vec<Vec<Span>>,
    },
}

/// A parsed block node with its containers, kind, and spans.
#[derive(Debug, Clone)]
pub struct BlockNode {
    /// The container stack this block is nested within.
    pub containers: Vec<ContainerFrame>,
    /// The kind of leaf block (Paragraph, FencedCode, etc.)
    pub kind: BlockKind,
    /// Full byte span of the block including delimiters.
    pub span: Span,
    /// Meaningful content with container prefixes and delimiters stripped.
    pub content: ContentView,
}
