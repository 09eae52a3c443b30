//! # Parsing
//!
//! Markdown parsing in two passes over an `xi_rope::Rope`:
//!
//! 1. [`parse_document`] builds the block structure line by line.
//! 2. [`parse_inline_for_block`] scans the inline content of one block with a
//!    [`RuleSet`], yielding one node list per inline-bearing region.
//!
//! Block spans always point into the rope; inline nodes own their text
//! because rules insert characters that are not in the source.

pub mod blocks;
pub mod inline;
pub mod rope;

#[cfg(test)]
mod tests;

use xi_rope::Rope;

use crate::options::DanrakuOptions;
use blocks::{BlockBuilder, BlockKind, BlockNode, ContainerFrame, MarkdownLineClassifier};
use inline::{InlineNode, NodeKind, RuleSet, parse_inline};
use rope::{lines_with_spans, slice::slice_to_string};

#[derive(Debug)]
pub struct ParsedDoc {
    pub blocks: Vec<BlockNode>,
}

pub fn parse_document(rope: &Rope) -> ParsedDoc {
    let classifier = MarkdownLineClassifier;
    let mut builder = BlockBuilder::new();

    for lr in lines_with_spans(rope) {
        let lc = classifier.classify(&lr);
        builder.push(&lc);
    }

    ParsedDoc {
        blocks: builder.finish(),
    }
}

/// The node kind directly enclosing a block with the given container path.
pub fn parent_kind(containers: &[ContainerFrame]) -> NodeKind {
    match containers.last() {
        None => NodeKind::Document,
        Some(ContainerFrame::BlockQuote { .. }) => NodeKind::BlockQuote,
        Some(ContainerFrame::List { .. } | ContainerFrame::ListItem { .. }) => NodeKind::ListItem,
    }
}

/// Inline-parses every inline-bearing region of `block`: its content for a
/// paragraph or heading, each cell (header first) for a table. Code blocks
/// and thematic breaks have none.
pub fn parse_inline_for_block(
    rope: &Rope,
    block: &BlockNode,
    rules: &RuleSet,
    options: &DanrakuOptions,
) -> Vec<Vec<InlineNode>> {
    let parent = Some(parent_kind(&block.containers));
    match &block.kind {
        BlockKind::Paragraph => vec![parse_inline(
            &block.content.join_content(rope),
            NodeKind::Paragraph,
            parent,
            rules,
            options,
        )],
        BlockKind::Heading { .. } => vec![parse_inline(
            &block.content.join_content(rope),
            NodeKind::Heading,
            parent,
            rules,
            options,
        )],
        BlockKind::Table { header, rows, .. } => header
            .iter()
            .chain(rows.iter().flatten())
            .map(|cell| {
                parse_inline(
                    &slice_to_string(rope, *cell),
                    NodeKind::TableCell,
                    parent,
                    rules,
                    options,
                )
            })
            .collect(),
        BlockKind::FencedCode { .. } | BlockKind::ThematicBreak | BlockKind::HtmlBlock => vec![],
    }
}
