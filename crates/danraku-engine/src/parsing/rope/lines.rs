use xi_rope::Rope;

use super::span::Span;

/// A reference to a single physical line in the rope.
#[derive(Debug, Clone)]
pub struct LineRef {
    /// Byte span of this line in the rope (includes the line ending if present).
    pub span: Span,
    /// The line text with its line ending (`\n` or `\r\n`) removed.
    pub text: String,
}

impl LineRef {
    /// Byte offset just past the visible text, i.e. before the line ending.
    pub fn text_end(&self) -> usize {
        self.span.start + self.text.len()
    }
}

/// Returns an iterator over lines with their byte spans.
///
/// Uses `lines_raw` so that spans account for line endings; the stored text
/// has them stripped.
pub fn lines_with_spans(rope: &Rope) -> impl Iterator<Item = LineRef> + '_ {
    let mut offset = 0usize;
    rope.lines_raw(..).map(move |line| {
        let start = offset;
        offset += line.len();
        LineRef {
            span: Span { start, end: offset },
            text: line.trim_end_matches(['\r', '\n']).to_string(),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spans_include_line_endings() {
        let rope = Rope::from("一行目\r\nsecond\nlast");
        let lines: Vec<_> = lines_with_spans(&rope).collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].text, "一行目");
        assert_eq!(lines[0].span, Span::new(0, 11));
        assert_eq!(lines[0].text_end(), 9);
        assert_eq!(lines[1].text, "second");
        assert_eq!(lines[2].span, Span::new(18, 22));
    }
}
