/// Kinds of delimited inline spans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpanKind {
    Emphasis,
    Strong,
    Strikethrough,
}

/// The kind of a node that can own inline children, or be an ancestor of one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Document,
    BlockQuote,
    ListItem,
    Paragraph,
    Heading,
    TableCell,
    Span(SpanKind),
    Link,
    Image,
}

impl NodeKind {
    pub fn is_paragraph(self) -> bool {
        matches!(self, NodeKind::Paragraph)
    }

    pub fn is_document(self) -> bool {
        matches!(self, NodeKind::Document)
    }
}

/// An inline node produced by a scan. Nodes own their text: rules insert
/// characters that never appeared in the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineNode {
    /// Plain text.
    Text(String),
    /// Code span content, already normalised.
    Code(String),
    /// Emphasis, strong emphasis or strikethrough.
    Span {
        kind: SpanKind,
        children: Vec<InlineNode>,
    },
    Link {
        dest: String,
        title: Option<String>,
        children: Vec<InlineNode>,
    },
    Image {
        dest: String,
        title: Option<String>,
        alt: String,
    },
    SoftBreak,
    HardBreak,
}

impl InlineNode {
    pub fn text(s: impl Into<String>) -> Self {
        InlineNode::Text(s.into())
    }

    /// Appends the plain-text rendering of `nodes` to `out`, as used for
    /// image alt text.
    pub fn collect_plain_text(nodes: &[InlineNode], out: &mut String) {
        for node in nodes {
            match node {
                InlineNode::Text(s) | InlineNode::Code(s) => out.push_str(s),
                InlineNode::Span { children, .. } | InlineNode::Link { children, .. } => {
                    Self::collect_plain_text(children, out)
                }
                InlineNode::Image { alt, .. } => out.push_str(alt),
                InlineNode::SoftBreak | InlineNode::HardBreak => out.push('\n'),
            }
        }
    }

    /// Concatenated plain text of `nodes`.
    pub fn plain_text(nodes: &[InlineNode]) -> String {
        let mut out = String::new();
        Self::collect_plain_text(nodes, &mut out);
        out
    }
}
