use super::BLANK;

/// The marker family of a list. Items only continue a list of the same family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListMarker {
    /// `-`, `*` or `+`.
    Bullet(char),
    /// Digits followed by `.` or `)`; holds the delimiter.
    Ordered(char),
}

impl ListMarker {
    pub fn is_ordered(self) -> bool {
        matches!(self, ListMarker::Ordered(_))
    }
}

/// A line that opens a list item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListItemOpen {
    pub marker: ListMarker,
    pub number: Option<u64>,
    /// `Some(checked)` when the item starts with `[ ]` or `[x]`. The text after
    /// the marker is kept as written, including a separating space.
    pub task: Option<bool>,
    /// Byte offset into the line where the item's text begins.
    pub content_offset: usize,
}

pub struct ListItem;

impl ListItem {
    pub const BULLETS: [char; 3] = ['-', '*', '+'];
    pub const ORDERED_DELIMITERS: [char; 2] = ['.', ')'];
    const MAX_DIGITS: usize = 9;

    pub fn parse(remainder: &str) -> Option<ListItemOpen> {
        let indent = remainder.len() - remainder.trim_start_matches(' ').len();
        if indent > 3 {
            return None;
        }
        let t = &remainder[indent..];
        let first = t.chars().next()?;

        let (marker, number, marker_len) = if Self::BULLETS.contains(&first) {
            (ListMarker::Bullet(first), None, 1)
        } else {
            let digits = t.chars().take_while(char::is_ascii_digit).count();
            if digits == 0 || digits > Self::MAX_DIGITS {
                return None;
            }
            let delimiter = t[digits..].chars().next()?;
            if !Self::ORDERED_DELIMITERS.contains(&delimiter) {
                return None;
            }
            let number = t[..digits].parse().ok()?;
            (ListMarker::Ordered(delimiter), Some(number), digits + 1)
        };

        let after = &t[marker_len..];
        if !(after.is_empty() || after.starts_with(BLANK)) {
            return None;
        }
        let mut content_offset =
            indent + marker_len + (after.len() - after.trim_start_matches(BLANK).len());

        let (task, task_len) = Self::task_marker(&remainder[content_offset..]);
        content_offset += task_len;

        Some(ListItemOpen {
            marker,
            number,
            task,
            content_offset,
        })
    }

    /// Recognises a GFM task marker, returning its state and the bytes to skip.
    /// The marker may run straight into the item text: `[x]実装する`.
    fn task_marker(text: &str) -> (Option<bool>, usize) {
        match text.get(..3) {
            Some("[ ]") => (Some(false), 3),
            Some("[x]") | Some("[X]") => (Some(true), 3),
            _ => (None, 0),
        }
    }
}
