use super::kinds::{
    AtxHeading, CodeFence, FenceKind, Heading, HtmlBlock, HtmlBlockOpen, ListItem, ListItemOpen,
    ThematicBreak,
};

/// A block opener recognised at the start of a line's remainder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockOpen {
    FencedCode { kind: FenceKind, info: String },
    Heading(AtxHeading),
    ThematicBreak,
    ListItem(ListItemOpen),
    HtmlBlock(HtmlBlockOpen),
}

pub fn try_open_leaf(remainder: &str) -> Option<BlockOpen> {
    // Precedence: fence, heading, thematic break, list item, then HTML. A
    // thematic break wins over a `- ` or `* ` list marker.
    if let Some(sig) = CodeFence::sig(remainder) {
        return Some(BlockOpen::FencedCode {
            kind: CodeFence::kind(sig),
            info: CodeFence::info(remainder),
        });
    }
    if let Some(h) = Heading::atx(remainder) {
        return Some(BlockOpen::Heading(h));
    }
    if ThematicBreak::matches(remainder) {
        return Some(BlockOpen::ThematicBreak);
    }
    if let Some(item) = ListItem::parse(remainder) {
        return Some(BlockOpen::ListItem(item));
    }
    HtmlBlock::start(remainder).map(BlockOpen::HtmlBlock)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn precedence() {
        assert!(matches!(
            try_open_leaf("```rust"),
            Some(BlockOpen::FencedCode { info, .. }) if info == "rust"
        ));
        assert!(matches!(try_open_leaf("## 見出し"), Some(BlockOpen::Heading(_))));
        assert_eq!(try_open_leaf("- - -"), Some(BlockOpen::ThematicBreak));
        assert!(matches!(try_open_leaf("- 項目"), Some(BlockOpen::ListItem(_))));
        assert!(matches!(
            try_open_leaf("<textarea>"),
            Some(BlockOpen::HtmlBlock(_))
        ));
        assert_eq!(try_open_leaf("-字下げしない段落"), None);
        assert_eq!(try_open_leaf("普通の段落"), None);
    }
}
