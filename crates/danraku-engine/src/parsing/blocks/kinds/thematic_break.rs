pub struct ThematicBreak;

impl ThematicBreak {
    /// Three or more matching `*`, `-` or `_`, optionally separated by spaces.
    pub fn matches(remainder: &str) -> bool {
        let indent = remainder.len() - remainder.trim_start_matches(' ').len();
        if indent > 3 {
            return false;
        }
        let mut marks = remainder.chars().filter(|c| !matches!(c, ' ' | '\t'));
        let Some(first) = marks.next() else {
            return false;
        };
        if !matches!(first, '*' | '-' | '_') {
            return false;
        }
        let mut count = 1;
        for c in marks {
            if c != first {
                return false;
            }
            count += 1;
        }
        count >= 3
    }
}
