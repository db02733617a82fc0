//! Character cursor for traversing the input buffer.
//!
//! This module provides the `Cursor` struct which maintains position state
//! while the scanner walks the source. The cursor is an index into a
//! borrowed, immutable buffer, so backtracking is nothing more than
//! restoring an earlier index (see [`Cursor::snapshot`] and
//! [`Cursor::restore`]). Line and column information is tracked alongside
//! the byte offset for token spans.

use crate::classify::END_MARKER;

/// A cursor for traversing source text character by character.
///
/// The current character is always the character starting at the current
/// byte offset, or [`END_MARKER`] once the offset reaches the end of the
/// buffer.
///
/// # Example
///
/// ```
/// use dragon_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("x >= 1");
///
/// assert_eq!(cursor.current_char(), 'x');
/// cursor.advance();
/// assert_eq!(cursor.current_char(), ' ');
/// ```
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: &'a str,

    /// Current byte position in the source.
    position: usize,

    /// Current line number (1-based).
    line: u32,

    /// Current column number (1-based, in characters).
    column: u32,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor positioned at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Returns the character at the cursor position.
    ///
    /// Returns `'\0'` if at the end of the source.
    ///
    /// # Example
    ///
    /// ```
    /// use dragon_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("a");
    /// assert_eq!(cursor.current_char(), 'a');
    /// cursor.advance();
    /// assert_eq!(cursor.current_char(), '\0');
    /// ```
    #[inline]
    pub fn current_char(&self) -> char {
        self.char_at(0)
    }

    /// Returns the character `offset` bytes past the current position, or
    /// `'\0'` past the end.
    ///
    /// Only meaningful when every byte being skipped is ASCII, which holds
    /// for the one-character lookahead the scanner performs.
    #[inline]
    pub fn char_at(&self, offset: usize) -> char {
        let pos = self.position + offset;
        if pos >= self.source.len() {
            return END_MARKER;
        }

        // Fast path for ASCII
        let b = self.source.as_bytes()[pos];
        if b < 128 {
            return b as char;
        }

        self.source
            .get(pos..)
            .and_then(|rest| rest.chars().next())
            .unwrap_or(END_MARKER)
    }

    /// Advances the cursor past the current character.
    ///
    /// Multi-byte UTF-8 characters are stepped over whole. Does nothing if
    /// already at the end.
    #[inline]
    pub fn advance(&mut self) {
        if self.is_at_end() {
            return;
        }

        let c = self.current_char();
        self.position += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
    }

    /// Advances while `predicate` holds for the current character.
    ///
    /// Returns the number of characters consumed.
    ///
    /// # Example
    ///
    /// ```
    /// use dragon_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("123abc");
    /// assert_eq!(cursor.eat_while(|c| c.is_ascii_digit()), 3);
    /// assert_eq!(cursor.current_char(), 'a');
    /// ```
    pub fn eat_while(&mut self, mut predicate: impl FnMut(char) -> bool) -> usize {
        let mut count = 0;
        while !self.is_at_end() && predicate(self.current_char()) {
            self.advance();
            count += 1;
        }
        count
    }

    /// Returns true if the cursor is at the end of the source.
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Matches and consumes the expected character if present.
    ///
    /// # Example
    ///
    /// ```
    /// use dragon_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("=>");
    /// assert!(cursor.match_char('='));
    /// assert!(!cursor.match_char('='));
    /// assert_eq!(cursor.current_char(), '>');
    /// ```
    pub fn match_char(&mut self, expected: char) -> bool {
        if !self.is_at_end() && self.current_char() == expected {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns the current column number (1-based).
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Returns the current byte position in the source.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the source from byte offset `start` up to the current position.
    ///
    /// # Example
    ///
    /// ```
    /// use dragon_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("abc 12");
    /// let start = cursor.position();
    /// cursor.eat_while(|c| c.is_ascii_alphabetic());
    /// assert_eq!(cursor.slice_from(start), "abc");
    /// ```
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.position]
    }

    /// Returns the unconsumed remainder of the source.
    pub fn remaining(&self) -> &'a str {
        &self.source[self.position..]
    }

    /// Returns the full source text.
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Creates a snapshot of the current cursor state.
    ///
    /// # Example
    ///
    /// ```
    /// use dragon_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("12.a");
    /// cursor.advance();
    /// cursor.advance();
    /// let accepted = cursor.snapshot();
    /// cursor.advance(); // speculatively consume '.'
    /// cursor.restore(accepted);
    /// assert_eq!(cursor.current_char(), '.');
    /// ```
    pub fn snapshot(&self) -> CursorSnapshot {
        CursorSnapshot {
            position: self.position,
            line: self.line,
            column: self.column,
        }
    }

    /// Restores the cursor to a previously saved snapshot.
    ///
    /// The snapshot must have been taken from a cursor over the same source.
    pub fn restore(&mut self, snapshot: CursorSnapshot) {
        debug_assert!(snapshot.position <= self.source.len());
        self.position = snapshot.position;
        self.line = snapshot.line;
        self.column = snapshot.column;
    }
}

/// A snapshot of cursor state that can be restored later.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CursorSnapshot {
    /// Byte position in source.
    pub position: usize,
    /// Line number (1-based).
    pub line: u32,
    /// Column number (1-based).
    pub column: u32,
}

impl CursorSnapshot {
    /// The snapshot of a fresh cursor.
    pub const START: CursorSnapshot = CursorSnapshot {
        position: 0,
        line: 1,
        column: 1,
    };
}
