use log::debug;

use crate::parsing::rope::span::Span;

use super::{
    classify::LineClass,
    containers::ContainerPath,
    content::{ContentLine, ContentView},
    kinds::{
        Alignment, CodeFence, FenceKind, Heading, HtmlBlock, HtmlBlockEnd, ListItemOpen, Paragraph,
        Table,
    },
    open::{BlockOpen, try_open_leaf},
    types::{BlockKind, BlockNode, ContainerFrame},
};

#[derive(Debug)]
enum LeafState {
    None,
    Paragraph {
        start: Span,
        lines: Vec<ContentLine>,
        /// End of the last line's text without trailing whitespace.
        last_trimmed_end: usize,
        last_line_end: usize,
        /// Text of the first content line, kept for table detection.
        first_text: String,
    },
    Fence {
        kind: FenceKind,
        info: String,
        start: Span,
        lines: Vec<ContentLine>,
        last_line_end: usize,
    },
    Table {
        alignments: Vec<Alignment>,
        header: Vec<Span>,
        rows: Vec<Vec<Span>>,
        start: Span,
        last_line_end: usize,
    },
    Html {
        end: HtmlBlockEnd,
        start: Span,
        lines: Vec<ContentLine>,
        last_line_end: usize,
    },
}

/// Line-by-line block construction over a container stack.
pub struct BlockBuilder {
    containers: ContainerPath,
    leaf: LeafState,
    out: Vec<BlockNode>,
    next_item: usize,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self {
            containers: ContainerPath::default(),
            leaf: LeafState::None,
            out: vec![],
            next_item: 0,
        }
    }

    pub fn push(&mut self, c: &LineClass) {
        let depth_changed = c.quote_depth != self.containers.quote_depth();

        if self.in_fence() {
            if !depth_changed {
                self.consume_fence_line(c);
                return;
            }
            self.flush_leaf();
        }

        if let LeafState::Html { end, .. } = self.leaf {
            if !depth_changed && !(end == HtmlBlockEnd::BlankLine && c.is_blank) {
                self.consume_html_line(c, end);
                return;
            }
            self.flush_leaf();
        }

        if c.is_blank {
            self.flush_leaf();
            self.containers.set_blockquote_depth(c.quote_depth);
            return;
        }

        if !depth_changed
            && (self.continue_table(c) || self.try_start_table(c) || self.try_setext(c))
        {
            return;
        }

        let open = try_open_leaf(&c.remainder_text);
        let lazy = c.quote_depth <= self.containers.quote_depth();
        let interrupts = open
            .as_ref()
            .is_some_and(|o| interrupts_paragraph(o, self.containers.in_list()));
        if self.in_paragraph() && lazy && !interrupts {
            self.extend_paragraph(c);
            return;
        }

        self.flush_leaf();
        self.containers.set_blockquote_depth(c.quote_depth);
        match open {
            Some(open) => self.open_leaf(open, c),
            None => {
                self.containers.close_list();
                self.start_paragraph(c, Paragraph::indent_len(&c.remainder_text));
            }
        }
    }

    pub fn finish(mut self) -> Vec<BlockNode> {
        // EOF flush
        self.flush_leaf();
        self.out
    }

    fn in_fence(&self) -> bool {
        matches!(self.leaf, LeafState::Fence { .. })
    }

    fn in_paragraph(&self) -> bool {
        matches!(self.leaf, LeafState::Paragraph { .. })
    }

    fn emit(&mut self, kind: BlockKind, span: Span, content: ContentView) {
        debug!("block {kind:?} at {span:?} in {:?}", self.containers.0);
        self.out.push(BlockNode {
            containers: self.containers.0.clone(),
            kind,
            span,
            content,
        });
    }

    fn open_leaf(&mut self, open: BlockOpen, c: &LineClass) {
        if !matches!(open, BlockOpen::ListItem(_)) {
            self.containers.close_list();
        }
        match open {
            BlockOpen::ListItem(item) => self.open_list_item(c, item),
            BlockOpen::FencedCode { kind, info } => {
                self.leaf = LeafState::Fence {
                    kind,
                    info,
                    start: c.line,
                    lines: vec![],
                    last_line_end: c.line.end,
                }
            }
            BlockOpen::Heading(h) => {
                let content = c.sub_span(h.content.0, h.content.1);
                self.emit(
                    BlockKind::Heading { level: h.level },
                    c.line,
                    ContentView::Contiguous(content),
                );
            }
            BlockOpen::HtmlBlock(html) => {
                self.leaf = LeafState::Html {
                    end: html.end,
                    start: c.line,
                    lines: vec![],
                    last_line_end: c.line.end,
                };
                self.consume_html_line(c, html.end);
            }
            BlockOpen::ThematicBreak => {
                self.emit(
                    BlockKind::ThematicBreak,
                    c.line,
                    ContentView::empty(c.remainder_span.start),
                );
            }
        }
    }

    fn open_list_item(&mut self, c: &LineClass, item: ListItemOpen) {
        let frame = ContainerFrame::ListItem {
            index: self.next_item,
            number: item.number,
            task: item.task,
        };
        self.next_item += 1;
        self.containers.open_list_item(item.marker, frame);
        // An item always yields a paragraph, even an empty one, so that
        // the item itself is rendered.
        self.start_paragraph(c, item.content_offset);
    }

    fn consume_fence_line(&mut self, c: &LineClass) {
        let LeafState::Fence {
            kind,
            lines,
            last_line_end,
            ..
        } = &mut self.leaf
        else {
            return;
        };

        *last_line_end = c.line.end;
        if CodeFence::closes(*kind, c.fence_sig, &c.remainder_text) {
            self.flush_leaf();
        } else {
            lines.push(ContentLine::new(c.line, c.remainder_span));
        }
    }

    /// Adds `c` verbatim to the open HTML block, closing it on its end line.
    fn consume_html_line(&mut self, c: &LineClass, end: HtmlBlockEnd) {
        if let LeafState::Html {
            lines,
            last_line_end,
            ..
        } = &mut self.leaf
        {
            lines.push(ContentLine::new(c.line, c.remainder_span));
            *last_line_end = c.line.end;
        }
        if end != HtmlBlockEnd::BlankLine && HtmlBlock::ends(end, &c.remainder_text) {
            self.flush_leaf();
        }
    }

    fn start_paragraph(&mut self, c: &LineClass, offset: usize) {
        let text = &c.remainder_text;
        let offset = offset.min(text.len());
        let trimmed = Paragraph::trimmed_len(text).max(offset);
        self.leaf = LeafState::Paragraph {
            start: c.line,
            lines: vec![ContentLine::new(c.line, c.sub_span(offset, text.len()))],
            last_trimmed_end: c.remainder_span.start + trimmed,
            last_line_end: c.line.end,
            first_text: text[offset..].to_string(),
        };
    }

    fn extend_paragraph(&mut self, c: &LineClass) {
        if let LeafState::Paragraph {
            lines,
            last_trimmed_end,
            last_line_end,
            ..
        } = &mut self.leaf
        {
            let text = &c.remainder_text;
            let offset = Paragraph::indent_len(text);
            lines.push(ContentLine::new(c.line, c.sub_span(offset, text.len())));
            *last_trimmed_end = c.remainder_span.start + Paragraph::trimmed_len(text).max(offset);
            *last_line_end = c.line.end;
        }
    }

    /// Turns a one-line paragraph with pipes into a table when `c` is a
    /// matching delimiter row.
    fn try_start_table(&mut self, c: &LineClass) -> bool {
        let (start, base, first_text) = match &self.leaf {
            LeafState::Paragraph {
                start,
                lines,
                first_text,
                ..
            } if lines.len() == 1 && first_text.contains(Table::PIPE) => {
                (*start, lines[0].content.start, first_text.clone())
            }
            _ => return false,
        };
        let Some(alignments) = Table::delimiter_row(&c.remainder_text) else {
            return false;
        };
        let header_cells = Table::split_row(&first_text);
        if header_cells.len() != alignments.len() {
            return false;
        }

        let header = header_cells
            .into_iter()
            .map(|(a, z)| Span::new(base + a, base + z))
            .collect();
        self.leaf = LeafState::Table {
            alignments,
            header,
            rows: vec![],
            start,
            last_line_end: c.line.end,
        };
        true
    }

    fn continue_table(&mut self, c: &LineClass) -> bool {
        let LeafState::Table {
            header,
            rows,
            last_line_end,
            ..
        } = &mut self.leaf
        else {
            return false;
        };
        if try_open_leaf(&c.remainder_text).is_some() {
            return false;
        }

        let width = header.len();
        let mut row: Vec<Span> = Table::split_row(&c.remainder_text)
            .into_iter()
            .take(width)
            .map(|(a, z)| c.sub_span(a, z))
            .collect();
        // Short rows are padded with empty cells.
        while row.len() < width {
            let at = c.remainder_span.end;
            row.push(Span::new(at, at));
        }
        rows.push(row);
        *last_line_end = c.line.end;
        true
    }

    fn try_setext(&mut self, c: &LineClass) -> bool {
        if !self.in_paragraph() || self.containers.in_list() {
            return false;
        }
        let Some(level) = Heading::setext_level(&c.remainder_text) else {
            return false;
        };
        if let LeafState::Paragraph { last_line_end, .. } = &mut self.leaf {
            *last_line_end = c.line.end;
        }
        self.flush_paragraph(BlockKind::Heading { level });
        true
    }

    fn flush_leaf(&mut self) {
        match std::mem::replace(&mut self.leaf, LeafState::None) {
            LeafState::None => {}
            paragraph @ LeafState::Paragraph { .. } => {
                self.leaf = paragraph;
                self.flush_paragraph(BlockKind::Paragraph);
            }
            LeafState::Fence {
                kind,
                info,
                start,
                lines,
                last_line_end,
            } => {
                // Unterminated fences run to the end of their container.
                self.emit(
                    BlockKind::FencedCode { kind, info },
                    Span::new(start.start, last_line_end),
                    ContentView::from_lines(lines),
                );
            }
            LeafState::Html {
                start,
                lines,
                last_line_end,
                ..
            } => {
                self.emit(
                    BlockKind::HtmlBlock,
                    Span::new(start.start, last_line_end),
                    ContentView::from_lines(lines),
                );
            }
            LeafState::Table {
                alignments,
                header,
                rows,
                start,
                last_line_end,
            } => {
                let span = Span::new(start.start, last_line_end);
                self.emit(
                    BlockKind::Table {
                        alignments,
                        header,
                        rows,
                    },
                    span,
                    ContentView::Contiguous(span),
                );
            }
        }
    }

    fn flush_paragraph(&mut self, kind: BlockKind) {
        let prev = std::mem::replace(&mut self.leaf, LeafState::None);
        if let LeafState::Paragraph {
            start,
            mut lines,
            last_trimmed_end,
            last_line_end,
            ..
        } = prev
        {
            if let Some(last) = lines.last_mut() {
                last.content.end = last_trimmed_end.max(last.content.start);
            }
            self.emit(
                kind,
                Span::new(start.start, last_line_end),
                ContentView::from_lines(lines),
            );
        } else {
            self.leaf = prev; // put back non-paragraph leaf (e.g. fence)
        }
    }
}

impl Default for BlockBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Whether an opener may end a paragraph that is still open. Outside a list,
/// ordered items not starting at 1 read as paragraph text instead, and so
/// does a lone tag of an unknown element.
fn interrupts_paragraph(open: &BlockOpen, in_list: bool) -> bool {
    match open {
        BlockOpen::ListItem(item) => in_list || item.number.is_none_or(|n| n == 1),
        BlockOpen::HtmlBlock(html) => html.interrupts_paragraph,
        _ => true,
    }
}
