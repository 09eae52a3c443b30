use super::BLANK;

/// Paragraph block type.
///
/// Paragraphs have no delimiters; they are the default leaf block when no
/// other block opener matches. Their lines lose leading indentation, and the
/// final line loses trailing whitespace, before inline scanning.
pub struct Paragraph;

impl Paragraph {
    /// Byte offset of the first non-whitespace character of a line.
    pub fn indent_len(line: &str) -> usize {
        line.len() - line.trim_start_matches(BLANK).len()
    }

    /// Byte length of a line without trailing spaces and tabs.
    pub fn trimmed_len(line: &str) -> usize {
        line.trim_end_matches(BLANK).len()
    }
}
