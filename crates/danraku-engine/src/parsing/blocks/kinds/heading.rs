use super::BLANK;

/// Heading block types: ATX (`# title`) and setext underlines.
pub struct Heading;

/// A recognised ATX heading line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AtxHeading {
    pub level: u8,
    /// Byte range of the heading text within the line, closing `#`s removed.
    pub content: (usize, usize),
}

impl Heading {
    pub const ATX: char = '#';
    pub const MAX_LEVEL: usize = 6;

    pub fn atx(remainder: &str) -> Option<AtxHeading> {
        let indent = remainder.len() - remainder.trim_start_matches(' ').len();
        if indent > 3 {
            return None;
        }
        let t = &remainder[indent..];
        let level = t.chars().take_while(|&c| c == Self::ATX).count();
        if level == 0 || level > Self::MAX_LEVEL {
            return None;
        }
        let after = &t[level..];
        if !(after.is_empty() || after.starts_with(BLANK)) {
            return None;
        }

        let body_start = indent + level + (after.len() - after.trim_start_matches(BLANK).len());
        let mut body = remainder[body_start..].trim_end_matches(BLANK);
        // An optional closing sequence must be preceded by a space.
        let without_closing = body.trim_end_matches(Self::ATX);
        if without_closing.is_empty() {
            body = without_closing;
        } else if without_closing.len() != body.len() && without_closing.ends_with(BLANK)
        {
            body = without_closing.trim_end_matches(BLANK);
        }

        Some(AtxHeading {
            level: level as u8,
            content: (body_start, body_start + body.len()),
        })
    }

    /// Level of a setext underline: `=` gives 1, `-` gives 2.
    pub fn setext_level(remainder: &str) -> Option<u8> {
        let indent = remainder.len() - remainder.trim_start_matches(' ').len();
        if indent > 3 {
            return None;
        }
        let t = remainder.trim_matches(BLANK);
        let first = t.chars().next()?;
        if !matches!(first, '=' | '-') || !t.chars().all(|c| c == first) {
            return None;
        }
        Some(if first == '=' { 1 } else { 2 })
    }
}
