//! Block and inline tests for the parsing module.
//!
//! Documents are projected through [`normalize`] into compact
//! [`BlockSnap`](normalize::BlockSnap)s and compared whole, after the
//! structural [`invariants`] have been checked.


use pretty_assertions::assert_eq;
use rstest::rstest;
use xi_rope::Rope;

use normalize::{BlockSnap, normalize};

use crate::{
    options::DanrakuOptions,
    parsing::{
        inline::{InlineNode, RuleSet},
        parse_document, parse_inline_for_block,
    },
};

fn blocks(md: &str) -> Vec<BlockSnap> {
    let rope = Rope::from(md);
    let doc = parse_document(&rope);
    invariants::check(&rope, &doc.blocks);
    normalize(&rope, &doc.blocks)
}

fn inline_text(md: &str) -> Vec<String> {
    let rope = Rope::from(md);
    let doc = parse_document(&rope);
    doc.blocks
        .iter()
        .flat_map(|b| {
            parse_inline_for_block(&rope, b, &RuleSet::standard(), &DanrakuOptions::default())
        })
        .map(|nodes| InlineNode::plain_text(&nodes))
        .collect()
}

// Block structure

#[test]
fn paragraphs_split_on_blank_lines() {
    assert_eq!(
        blocks("段落一\n続き  \n\n段落二\n"),
        vec![
            BlockSnap::new("Paragraph", &[], "段落一\n続き"),
            BlockSnap::new("Paragraph", &[], "段落二"),
        ]
    );
}

#[test]
fn atx_and_setext_headings() {
    assert_eq!(
        blocks("# 見出し #\n本文\n===\n副題\n---\n"),
        vec![
            BlockSnap::new("Heading(1)", &[], "見出し"),
            BlockSnap::new("Heading(1)", &[], "本文"),
            BlockSnap::new("Heading(2)", &[], "副題"),
        ]
    );
}

#[test]
fn blockquote_lazy_continuation() {
    assert_eq!(
        blocks("> 引用\n続き\n\n>> 二重\n"),
        vec![
            BlockSnap::new("Paragraph", &["Quote(1)"], "引用\n続き"),
            BlockSnap::new("Paragraph", &["Quote(2)"], "二重"),
        ]
    );
}

#[test]
fn list_items_and_tasks() {
    assert_eq!(
        blocks("- 一\n- [x] 二\n\n本文\n"),
        vec![
            BlockSnap::new("Paragraph", &["List", "Item"], "一"),
            BlockSnap::new("Paragraph", &["List", "Task(true)"], " 二"),
            BlockSnap::new("Paragraph", &[], "本文"),
        ]
    );
}

#[test]
fn ordered_items_continue_their_list() {
    assert_eq!(
        blocks("3. 三\n4. 四\n"),
        vec![
            BlockSnap::new("Paragraph", &["List", "Item"], "三"),
            BlockSnap::new("Paragraph", &["List", "Item"], "四"),
        ]
    );
}

#[test]
fn ordered_item_not_at_one_does_not_interrupt_paragraph() {
    assert_eq!(
        blocks("西暦\n2024. 年\n"),
        vec![BlockSnap::new("Paragraph", &[], "西暦\n2024. 年")]
    );
}

#[test]
fn dash_line_after_list_item_is_thematic_break() {
    assert_eq!(
        blocks("- 項目\n---\n"),
        vec![
            BlockSnap::new("Paragraph", &["List", "Item"], "項目"),
            BlockSnap::new("ThematicBreak", &[], ""),
        ]
    );
}

#[test]
fn fenced_code_keeps_blank_lines() {
    assert_eq!(
        blocks("```rust\nlet a = 1;\n\n```\n後\n"),
        vec![
            BlockSnap::new("FencedCode(rust)", &[], "let a = 1;\n"),
            BlockSnap::new("Paragraph", &[], "後"),
        ]
    );
}

#[test]
fn fence_inside_blockquote() {
    assert_eq!(
        blocks("> ~~~\n> code!\n> ~~~\n"),
        vec![BlockSnap::new("FencedCode()", &["Quote(1)"], "code!")]
    );
}

#[test]
fn unterminated_fence_runs_to_end() {
    assert_eq!(
        blocks("```\na\nb"),
        vec![BlockSnap::new("FencedCode()", &[], "a\nb")]
    );
}

#[test]
fn pipe_table_with_short_row() {
    assert_eq!(
        blocks("| a | b |\n|---|:-:|\n| 1 | 2 |\n| 3 |\n\n後\n"),
        vec![
            BlockSnap::new("Table(2x2)", &[], "a|b"),
            BlockSnap::new("Paragraph", &[], "後"),
        ]
    );
}

#[test]
fn pipe_line_without_delimiter_row_is_paragraph() {
    assert_eq!(
        blocks("a | b\nc | d\n"),
        vec![BlockSnap::new("Paragraph", &[], "a | b\nc | d")]
    );
}

#[test]
fn html_blocks() {
    assert_eq!(
        blocks("段落\n<div>\n中身\n\n<!-- 注\n\n釈 -->\n後\n<span>\n"),
        vec![
            BlockSnap::new("Paragraph", &[], "段落"),
            BlockSnap::new("HtmlBlock", &[], "<div>\n中身"),
            BlockSnap::new("HtmlBlock", &[], "<!-- 注\n\n釈 -->"),
            BlockSnap::new("Paragraph", &[], "後\n<span>"),
        ]
    );
}

#[test]
fn ideographic_space_is_content_not_whitespace() {
    assert_eq!(
        blocks("一\n　\n二\n\n# 　題\n"),
        vec![
            BlockSnap::new("Paragraph", &[], "一\n　\n二"),
            BlockSnap::new("Heading(1)", &[], "　題"),
        ]
    );
}

#[rstest]
#[case("")]
#[case("\n\n\n")]
#[case(">\n> \n")]
fn blank_documents_have_no_blocks(#[case] md: &str) {
    assert!(blocks(md).is_empty());
}

// Inline regions per block

#[test]
fn only_top_level_paragraphs_are_indented() {
    assert_eq!(
        inline_text("段落\n\n> 引用\n\n- 項目\n\n# 見出し\n"),
        vec!["　段落", "引用", "項目", "見出し"]
    );
}

#[test]
fn table_cells_are_separate_regions() {
    assert_eq!(
        inline_text("| 問 | 答 |\n|---|---|\n| 本当? | はい! |\n"),
        vec!["問", "答", "本当?", "はい!"]
    );
}

#[test]
fn code_blocks_have_no_inline_regions() {
    assert!(inline_text("```\n素晴らしい!異論\n```\n").is_empty());
}

#[test]
fn multi_line_paragraph_is_one_scan() {
    assert_eq!(
        inline_text("一行目!\n二行目!続き\n"),
        vec!["　一行目!\n二行目! 続き"]
    );
}
