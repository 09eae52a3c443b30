use super::BLANK;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FenceSig {
    Backticks,
    Tildes,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FenceKind {
    Backticks,
    Tildes,
}

pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";
    pub const TILDES: &'static str = "~~~";

    /// Detects a fence line, allowing up to three spaces of indentation.
    pub fn sig(remainder: &str) -> Option<FenceSig> {
        let t = Self::strip_indent(remainder)?;
        if t.starts_with(Self::BACKTICKS) {
            // A backtick info string may not itself contain backticks.
            let info = t.trim_start_matches('`');
            if info.contains('`') {
                return None;
            }
            Some(FenceSig::Backticks)
        } else if t.starts_with(Self::TILDES) {
            Some(FenceSig::Tildes)
        } else {
            None
        }
    }

    pub fn kind(sig: FenceSig) -> FenceKind {
        match sig {
            FenceSig::Backticks => FenceKind::Backticks,
            FenceSig::Tildes => FenceKind::Tildes,
        }
    }

    /// The info string of an opening fence line (language hint), trimmed.
    pub fn info(remainder: &str) -> String {
        let t = remainder.trim_start_matches(BLANK);
        t.trim_start_matches(['`', '~']).trim_matches(BLANK).to_string()
    }

    /// A closing fence uses the same character and carries no info string.
    pub fn closes(kind: FenceKind, sig: Option<FenceSig>, remainder: &str) -> bool {
        let same = matches!(
            (kind, sig),
            (FenceKind::Backticks, Some(FenceSig::Backticks))
                | (FenceKind::Tildes, Some(FenceSig::Tildes))
        );
        same && Self::info(remainder).is_empty()
    }

    fn strip_indent(s: &str) -> Option<&str> {
        let indent = s.len() - s.trim_start_matches(' ').len();
        (indent <= 3).then(|| &s[indent..])
    }
}
