//! Character classification shared by the danraku rules.

use unicode_general_category::{GeneralCategory, get_general_category};
use unicode_width::UnicodeWidthChar;

/// The full-width space used for indentation and full-width spacing.
pub const IDEOGRAPHIC_SPACE: char = '\u{3000}';

/// `―` (U+2015). Paragraphs opening with it are dialogue or asides and are
/// not indented by default.
pub const HORIZONTAL_BAR: char = '\u{2015}';

/// A leading `-` opts a paragraph out of indentation.
pub const OPT_OUT_MARK: char = '-';

/// Terminal punctuation that takes a following space.
pub const YAKUMONO: [char; 4] = ['!', '?', '！', '？'];

pub fn is_yakumono(c: char) -> bool {
    YAKUMONO.contains(&c)
}

/// Unicode general category Pe: `)`, `]`, `」`, `）` and friends.
pub fn is_close_punctuation(c: char) -> bool {
    get_general_category(c) == GeneralCategory::ClosePunctuation
}

/// True when `c` takes a single display column.
pub fn is_half_width(c: char) -> bool {
    c.width() == Some(1)
}

/// A half-width or full-width space.
pub fn is_space(c: char) -> bool {
    c == ' ' || c == IDEOGRAPHIC_SPACE
}

/// True when a space must not be inserted before `next`.
pub fn blocks_spacing(next: char) -> bool {
    is_space(next) || next.is_whitespace() || is_close_punctuation(next) || is_yakumono(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case('!', true)]
    #[case('?', true)]
    #[case('a', true)]
    #[case('！', false)]
    #[case('？', false)]
    #[case('あ', false)]
    fn width_classification(#[case] c: char, #[case] half: bool) {
        assert_eq!(is_half_width(c), half);
    }

    #[rstest]
    #[case(')')]
    #[case(']')]
    #[case('」')]
    #[case('）')]
    #[case('』')]
    fn close_punctuation(#[case] c: char) {
        assert!(is_close_punctuation(c));
        assert!(blocks_spacing(c));
    }

    #[rstest]
    #[case(' ')]
    #[case('\u{3000}')]
    #[case('\n')]
    #[case('\t')]
    #[case('!')]
    #[case('？')]
    fn spacing_is_blocked(#[case] c: char) {
        assert!(blocks_spacing(c));
    }

    #[rstest]
    #[case('異')]
    #[case('D')]
    #[case('(')]
    #[case('「')]
    fn spacing_is_allowed(#[case] c: char) {
        assert!(!blocks_spacing(c));
    }
}
