use std::fmt::Write as _;

use html_escape::{encode_double_quoted_attribute, encode_text};
use log::debug;
use xi_rope::Rope;

use crate::{
    options::DanrakuOptions,
    parsing::{
        ParsedDoc,
        blocks::{
            BlockKind, BlockNode, ContainerFrame,
            kinds::{Alignment, HtmlBlock, ListMarker},
        },
        inline::{InlineNode, RuleSet, SpanKind},
        parse_inline_for_block,
    },
};

/// An HTML element left open between blocks.
#[derive(Debug, Clone, Copy)]
enum Open {
    Quote,
    List { marker: ListMarker, start: Option<u64> },
    Item { index: usize, task: Option<bool> },
}

impl Open {
    /// Two frames continue the same element. A list's start number only
    /// matters when it is opened.
    fn continues(&self, other: &Open) -> bool {
        match (self, other) {
            (Open::Quote, Open::Quote) => true,
            (Open::List { marker: a, .. }, Open::List { marker: b, .. }) => a == b,
            (Open::Item { index: a, .. }, Open::Item { index: b, .. }) => a == b,
            _ => false,
        }
    }
}

/// Expands a block's container path into the elements that enclose it.
fn open_path(containers: &[ContainerFrame]) -> Vec<Open> {
    let mut path = vec![];
    for (i, frame) in containers.iter().enumerate() {
        match frame {
            ContainerFrame::BlockQuote { depth } => {
                path.extend(std::iter::repeat_n(Open::Quote, usize::from(*depth)))
            }
            ContainerFrame::List { marker } => {
                let start = match containers.get(i + 1) {
                    Some(ContainerFrame::ListItem { number, .. }) => *number,
                    _ => None,
                };
                path.push(Open::List {
                    marker: *marker,
                    start,
                });
            }
            ContainerFrame::ListItem { index, task, .. } => path.push(Open::Item {
                index: *index,
                task: *task,
            }),
        }
    }
    path
}

/// Renders a parsed document to HTML, scanning inline content with `rules`.
pub fn render_html(
    rope: &Rope,
    doc: &ParsedDoc,
    rules: &RuleSet,
    options: &DanrakuOptions,
) -> String {
    let mut renderer = HtmlRenderer {
        rope,
        rules,
        options,
        out: String::new(),
        open: vec![],
    };
    for block in &doc.blocks {
        renderer.block(block);
    }
    renderer.close_to(0);
    renderer.out
}

struct HtmlRenderer<'a> {
    rope: &'a Rope,
    rules: &'a RuleSet,
    options: &'a DanrakuOptions,
    out: String,
    open: Vec<Open>,
}

impl HtmlRenderer<'_> {
    fn block(&mut self, block: &BlockNode) {
        let path = open_path(&block.containers);
        let shared = self
            .open
            .iter()
            .zip(&path)
            .take_while(|(a, b)| a.continues(b))
            .count();
        self.close_to(shared);
        for open in &path[shared..] {
            self.open_element(*open);
        }

        let in_item = matches!(self.open.last(), Some(Open::Item { .. }));
        let mut regions = parse_inline_for_block(self.rope, block, self.rules, self.options);
        debug!("render {:?} with {} inline regions", block.kind, regions.len());

        match &block.kind {
            BlockKind::Paragraph => {
                let nodes = regions.pop().unwrap_or_default();
                if in_item {
                    // Tight list items hold their text directly.
                    self.inlines(&nodes);
                } else {
                    self.out.push_str("<p>");
                    self.inlines(&nodes);
                    self.out.push_str("</p>\n");
                }
            }
            BlockKind::Heading { level } => {
                let nodes = regions.pop().unwrap_or_default();
                let _ = write!(self.out, "<h{level}>");
                self.inlines(&nodes);
                let _ = writeln!(self.out, "</h{level}>");
            }
            BlockKind::FencedCode { info, .. } => {
                self.out.push_str("<pre><code");
                if let Some(lang) = info.split_whitespace().next() {
                    let _ = write!(
                        self.out,
                        " class=\"language-{}\"",
                        encode_double_quoted_attribute(lang)
                    );
                }
                self.out.push('>');
                let code = block.content.join_content(self.rope);
                if !code.is_empty() {
                    self.out.push_str(&encode_text(&code));
                    self.out.push('\n');
                }
                self.out.push_str("</code></pre>\n");
            }
            BlockKind::ThematicBreak => self.out.push_str("<hr />\n"),
            BlockKind::HtmlBlock => {
                let html = block.content.join_content(self.rope);
                self.out.push_str(&HtmlBlock::filter_disallowed(&html));
                self.out.push('\n');
            }
            BlockKind::Table {
                alignments, header, ..
            } => self.table(alignments, header.len(), regions),
        }
    }

    fn table(
        &mut self,
        alignments: &[Alignment],
        width: usize,
        cells: Vec<Vec<InlineNode>>,
    ) {
        self.out.push_str("<table>\n<thead>\n");
        let mut rows = cells.chunks(width.max(1));
        if let Some(header) = rows.next() {
            self.table_row(alignments, header, "th");
        }
        self.out.push_str("</thead>\n");

        let mut body = rows.peekable();
        if body.peek().is_some() {
            self.out.push_str("<tbody>\n");
            for row in body {
                self.table_row(alignments, row, "td");
            }
            self.out.push_str("</tbody>\n");
        }
        self.out.push_str("</table>\n");
    }

    fn table_row(
        &mut self,
        alignments: &[Alignment],
        cells: &[Vec<InlineNode>],
        tag: &str,
    ) {
        self.out.push_str("<tr>\n");
        for (cell, alignment) in cells.iter().zip(alignments) {
            match alignment.as_attr() {
                Some(align) => {
                    let _ = write!(self.out, "<{tag} align=\"{align}\">");
                }
                None => {
                    let _ = write!(self.out, "<{tag}>");
                }
            }
            self.inlines(cell);
            let _ = writeln!(self.out, "</{tag}>");
        }
        self.out.push_str("</tr>\n");
    }

    fn open_element(&mut self, open: Open) {
        match open {
            Open::Quote => self.out.push_str("<blockquote>\n"),
            Open::List { marker, start } => match (marker.is_ordered(), start) {
                (true, Some(n)) if n != 1 => {
                    let _ = writeln!(self.out, "<ol start=\"{n}\">");
                }
                (true, _) => self.out.push_str("<ol>\n"),
                (false, _) => self.out.push_str("<ul>\n"),
            },
            Open::Item { task, .. } => {
                self.out.push_str("<li>");
                match task {
                    Some(true) => self
                        .out
                        .push_str("<input checked=\"\" disabled=\"\" type=\"checkbox\">"),
                    Some(false) => self.out.push_str("<input disabled=\"\" type=\"checkbox\">"),
                    None => {}
                }
            }
        }
        self.open.push(open);
    }

    /// Closes open elements until only `keep` remain.
    fn close_to(&mut self, keep: usize) {
        while self.open.len() > keep {
            match self.open.pop() {
                Some(Open::Quote) => self.out.push_str("</blockquote>\n"),
                Some(Open::List { marker, .. }) if marker.is_ordered() => {
                    self.out.push_str("</ol>\n")
                }
                Some(Open::List { .. }) => self.out.push_str("</ul>\n"),
                Some(Open::Item { .. }) => self.out.push_str("</li>\n"),
                None => break,
            }
        }
    }

    fn inlines(&mut self, nodes: &[InlineNode]) {
        for node in nodes {
            self.inline(node);
        }
    }

    fn inline(&mut self, node: &InlineNode) {
        match node {
            InlineNode::Text(text) => self.out.push_str(&encode_text(text)),
            InlineNode::Code(code) => {
                self.out.push_str("<code>");
                self.out.push_str(&encode_text(code));
                self.out.push_str("</code>");
            }
            InlineNode::Span { kind, children } => {
                let tag = match kind {
                    SpanKind::Emphasis => "em",
                    SpanKind::Strong => "strong",
                    SpanKind::Strikethrough => "del",
                };
                let _ = write!(self.out, "<{tag}>");
                self.inlines(children);
                let _ = write!(self.out, "</{tag}>");
            }
            InlineNode::Link {
                dest,
                title,
                children,
            } => {
                let _ = write!(self.out, "<a href=\"{}\"", encode_double_quoted_attribute(dest));
                self.title(title.as_deref());
                self.out.push('>');
                self.inlines(children);
                self.out.push_str("</a>");
            }
            InlineNode::Image { dest, title, alt } => {
                let _ = write!(
                    self.out,
                    "<img src=\"{}\" alt=\"{}\"",
                    encode_double_quoted_attribute(dest),
                    encode_double_quoted_attribute(alt)
                );
                self.title(title.as_deref());
                self.out.push_str(" />");
            }
            InlineNode::SoftBreak => self.out.push('\n'),
            InlineNode::HardBreak => self.out.push_str("<br />\n"),
        }
    }

    fn title(&mut self, title: Option<&str>) {
        if let Some(title) = title {
            let _ = write!(self.out, " title=\"{}\"", encode_double_quoted_attribute(title));
        }
    }
}
