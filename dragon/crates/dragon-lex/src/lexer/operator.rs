//! Relational operator lexing.
//!
//! Single-character punctuation (`=`, `.`, `+`, `-`) goes through
//! `Lexer::lex_single`; only `<` and `>` need one character of lookahead.

use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes greater or greater-equals.
    ///
    /// Handles: `>`, `>=`
    pub(crate) fn lex_greater(&mut self) -> Token<'a> {
        self.cursor.advance();
        if self.cursor.match_char('=') {
            self.finish(TokenKind::GreaterOrEqual, true)
        } else {
            self.finish(TokenKind::GreaterThan, true)
        }
    }

    /// Lexes less or less-equals.
    ///
    /// Handles: `<`, `<=`
    pub(crate) fn lex_less(&mut self) -> Token<'a> {
        self.cursor.advance();
        if self.cursor.match_char('=') {
            self.finish(TokenKind::LessOrEqual, true)
        } else {
            self.finish(TokenKind::LessThan, true)
        }
    }
}
