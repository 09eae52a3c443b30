use super::types::{InlineNode, NodeKind};

/// The node an inline scan is filling, plus the kind of its parent.
///
/// Only the parent's kind is kept: rules ask "am I directly under the
/// document?", they never walk further up the tree.
#[derive(Debug, Clone)]
pub struct InlineContainer {
    kind: NodeKind,
    parent: Option<NodeKind>,
    children: Vec<InlineNode>,
}

impl InlineContainer {
    pub fn new(kind: NodeKind, parent: Option<NodeKind>) -> Self {
        Self {
            kind,
            parent,
            children: vec![],
        }
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn parent(&self) -> Option<NodeKind> {
        self.parent
    }

    /// True for a paragraph placed directly in the document.
    pub fn is_top_level_paragraph(&self) -> bool {
        self.kind.is_paragraph() && self.parent.is_some_and(NodeKind::is_document)
    }

    pub fn children(&self) -> &[InlineNode] {
        &self.children
    }

    pub fn into_children(self) -> Vec<InlineNode> {
        self.children
    }

    pub fn prepend_child(&mut self, node: InlineNode) {
        self.children.insert(0, node);
    }

    pub fn append_child(&mut self, node: InlineNode) {
        self.children.push(node);
    }

    /// Removes trailing spaces from the last child when it is text, returning
    /// how many were removed.
    pub fn trim_trailing_spaces(&mut self) -> usize {
        let Some(InlineNode::Text(last)) = self.children.last_mut() else {
            return 0;
        };
        let kept = last.trim_end_matches(' ').len();
        let removed = last.len() - kept;
        last.truncate(kept);
        if last.is_empty() {
            self.children.pop();
        }
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prepend_goes_before_existing_children() {
        let mut c = InlineContainer::new(NodeKind::Paragraph, Some(NodeKind::Document));
        c.append_child(InlineNode::text("本文"));
        c.prepend_child(InlineNode::text("\u{3000}"));
        assert_eq!(
            c.children(),
            &[InlineNode::text("\u{3000}"), InlineNode::text("本文")]
        );
        assert!(c.is_top_level_paragraph());
    }

    #[test]
    fn nested_paragraph_is_not_top_level() {
        let c = InlineContainer::new(NodeKind::Paragraph, Some(NodeKind::BlockQuote));
        assert!(!c.is_top_level_paragraph());
        let c = InlineContainer::new(NodeKind::Heading, Some(NodeKind::Document));
        assert!(!c.is_top_level_paragraph());
    }

    #[test]
    fn trims_trailing_spaces_of_last_text() {
        let mut c = InlineContainer::new(NodeKind::Paragraph, None);
        c.append_child(InlineNode::text("行末  "));
        assert_eq!(c.trim_trailing_spaces(), 2);
        assert_eq!(c.children(), &[InlineNode::text("行末")]);

        let mut c = InlineContainer::new(NodeKind::Paragraph, None);
        c.append_child(InlineNode::text("   "));
        assert_eq!(c.trim_trailing_spaces(), 3);
        assert!(c.children().is_empty());
    }
}
