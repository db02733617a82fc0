//! Core lexer implementation.
//!
//! This module contains the main Lexer struct and its dispatch loop.

use crate::classify;
use crate::cursor::{Cursor, CursorSnapshot};
use crate::token::{Keywords, Span, Token, TokenKind};

/// Maximal-munch scanner over an in-memory buffer.
///
/// The lexer owns a cursor into the borrowed source and hands out one token
/// per [`Lexer::next_token`] call. Once the source is exhausted it keeps
/// returning [`TokenKind::EndOfInput`].
///
/// # Example
///
/// ```
/// use dragon_lex::{Lexer, TokenKind};
///
/// let mut lexer = Lexer::new("x>=1.5e3");
/// let kinds: Vec<_> = std::iter::from_fn(|| {
///     let token = lexer.next_token();
///     (!token.is_eof()).then(|| token.kind())
/// })
/// .collect();
///
/// assert_eq!(
///     kinds,
///     [TokenKind::Identifier, TokenKind::GreaterOrEqual, TokenKind::Scientific]
/// );
/// ```
///
/// Tokens only come out of [`Lexer::next_token`] (or the iterator); the
/// per-kind scanners are internal:
///
/// ```compile_fail
/// let mut lexer = dragon_lex::Lexer::new("x>");
/// lexer.lex_number();
/// ```
#[derive(Clone, Debug)]
pub struct Lexer<'a> {
    /// Character cursor for source traversal.
    pub(crate) cursor: Cursor<'a>,

    /// Where the previous token ended, which is where the next one starts.
    pub(crate) last_matched: CursorSnapshot,

    /// Identifier spellings that lex as something other than `Identifier`.
    pub(crate) keywords: Keywords,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer with an empty keyword table.
    pub fn new(source: &'a str) -> Self {
        Self::with_keywords(source, Keywords::default())
    }

    /// Creates a lexer that maps identifiers through `keywords`.
    pub fn with_keywords(source: &'a str, keywords: Keywords) -> Self {
        Self {
            cursor: Cursor::new(source),
            last_matched: CursorSnapshot::START,
            keywords,
        }
    }

    /// Returns the next token from the source, advancing past it.
    ///
    /// Never fails: a character that starts no token is consumed on its own
    /// and returned as [`TokenKind::Unknown`], so every call either makes
    /// progress or returns end-of-input.
    pub fn next_token(&mut self) -> Token<'a> {
        if self.cursor.is_at_end() {
            let end = self.cursor.snapshot();
            return Token::new(
                TokenKind::EndOfInput,
                None,
                Span::new(end.position, end.position, end.line, end.column),
            );
        }

        let c = self.cursor.current_char();
        let token = if classify::is_whitespace(c) {
            self.lex_whitespace()
        } else if classify::is_alpha(c) {
            self.lex_identifier()
        } else if classify::is_digit(c) {
            self.lex_number()
        } else if classify::is_equal(c) {
            self.lex_single(TokenKind::Equal)
        } else if classify::is_greater_than(c) {
            self.lex_greater()
        } else if classify::is_less_than(c) {
            self.lex_less()
        } else if classify::is_dot(c) {
            self.lex_single(TokenKind::Dot)
        } else if classify::is_plus(c) {
            self.lex_single(TokenKind::Plus)
        } else if classify::is_minus(c) {
            self.lex_single(TokenKind::Minus)
        } else {
            self.lex_single(TokenKind::Unknown)
        };

        self.last_matched = self.cursor.snapshot();
        token
    }

    /// Scans the remaining input, returning every token including the
    /// trailing end-of-input token.
    pub fn tokenize(mut self) -> Vec<Token<'a>> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            let done = token.is_eof();
            tokens.push(token);
            if done {
                return tokens;
            }
        }
    }

    /// Consumes a maximal run of whitespace.
    fn lex_whitespace(&mut self) -> Token<'a> {
        self.cursor.eat_while(classify::is_whitespace);
        self.finish(TokenKind::Whitespace, false)
    }

    /// Consumes exactly one character and tags it with `kind`.
    pub(crate) fn lex_single(&mut self, kind: TokenKind) -> Token<'a> {
        self.cursor.advance();
        self.finish(kind, true)
    }

    /// Builds the token spanning `last_matched` to the cursor.
    pub(crate) fn finish(&self, kind: TokenKind, keep_lexeme: bool) -> Token<'a> {
        let start = self.last_matched;
        let end = self.cursor.position();
        let lexeme = keep_lexeme.then(|| self.cursor.slice_from(start.position));
        Token::new(
            kind,
            lexeme,
            Span::new(start.position, end, start.line, start.column),
        )
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Returns the current column number (1-based).
    pub fn column(&self) -> u32 {
        self.cursor.column()
    }

    /// Returns the byte offset of the next character to be scanned.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// Returns the keyword table this lexer was built with.
    pub fn keywords(&self) -> &Keywords {
        &self.keywords
    }

    /// Returns the source being scanned.
    pub fn source(&self) -> &'a str {
        self.cursor.source()
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.next_token();
        if token.is_eof() {
            None
        } else {
            Some(token)
        }
    }
}

impl std::iter::FusedIterator for Lexer<'_> {}
