/// A cursor for character-by-character inline scanning.
///
/// Positions are byte offsets into `s` and always sit on a char boundary;
/// all movement goes through whole characters.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The string being scanned.
    s: &'a str,
    /// Current byte index into `s`.
    i: usize,
    /// The character right after `s` in the enclosing text, for nested scans.
    follow: Option<char>,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `s`.
    pub fn new(s: &'a str) -> Self {
        Self::followed_by(s, None)
    }

    /// Creates a cursor over `s`, which the enclosing text continues with
    /// `follow`.
    pub fn followed_by(s: &'a str, follow: Option<char>) -> Self {
        Self { s, i: 0, follow }
    }

    /// Returns the current byte position.
    pub fn pos(&self) -> usize {
        self.i
    }

    /// Returns true if at end of string.
    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// The character under the cursor, or `None` at the end.
    pub fn current_char(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// The character after the current one, or `None`.
    pub fn peek_char(&self) -> Option<char> {
        let mut chars = self.rest().chars();
        chars.next()?;
        chars.next()
    }

    /// Like [`peek_char`](Self::peek_char), but at the last character it
    /// looks into the enclosing text.
    pub fn lookahead(&self) -> Option<char> {
        let mut chars = self.rest().chars();
        chars.next()?;
        chars.next().or(self.follow)
    }

    /// The character before the cursor, or `None` at the start.
    pub fn prev_char(&self) -> Option<char> {
        self.s[..self.i].chars().next_back()
    }

    /// Everything from the cursor to the end. Borrows the scanned string, not
    /// the cursor, so the slice outlives later cursor movement.
    pub fn rest(&self) -> &'a str {
        &self.s[self.i.min(self.s.len())..]
    }

    /// Checks if the remaining input starts with `pat`.
    pub fn starts_with(&self, pat: &str) -> bool {
        self.rest().starts_with(pat)
    }

    /// Advances by one character, returning it.
    pub fn advance(&mut self) -> Option<char> {
        let c = self.current_char()?;
        self.i += c.len_utf8();
        Some(c)
    }

    /// Advances by `n` bytes. `n` must land on a char boundary.
    pub fn bump_n(&mut self, n: usize) {
        self.i = (self.i + n).min(self.s.len());
        debug_assert!(self.s.is_char_boundary(self.i));
    }
}
