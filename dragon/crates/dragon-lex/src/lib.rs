//! dragon-lex - Hand-written scanner for the dragon expression language
//!
//! This crate turns an in-memory source buffer into a stream of typed
//! tokens. It is deliberately small: a stateless character classifier, a
//! cursor over the buffer, and a lexer that dispatches on the current
//! character and runs an explicit automaton for numeric literals.
//!
//! # Example Usage
//!
//! ```
//! use dragon_lex::{Lexer, TokenKind};
//!
//! let mut lexer = Lexer::new("rate >= 2.5e-3");
//!
//! let rate = lexer.next_token();
//! assert_eq!(rate.kind(), TokenKind::Identifier);
//! assert_eq!(rate.lexeme(), Some("rate"));
//!
//! assert_eq!(lexer.next_token().kind(), TokenKind::Whitespace);
//! assert_eq!(lexer.next_token().kind(), TokenKind::GreaterOrEqual);
//! assert_eq!(lexer.next_token().kind(), TokenKind::Whitespace);
//! assert_eq!(lexer.next_token().to_string(), "Token(SCI, 2.5e-3)");
//! assert!(lexer.next_token().is_eof());
//! ```
//!
//! # Module Structure
//!
//! - [`classify`] - Character class predicates
//! - [`cursor`] - Character cursor with snapshot/restore
//! - [`token`] - Token kinds, tokens, spans and the keyword table
//! - [`lexer`] - Dispatch and the numeric literal automaton
//!
//! # Token Categories
//!
//! - **Identifiers**: `[A-Za-z][A-Za-z0-9]*`, optionally remapped by a [`Keywords`] table
//! - **Numbers**: integer `42`, real `3.14`, scientific `1e10` / `2.5E-3`
//! - **Relational**: `=`, `<`, `<=`, `>`, `>=`
//! - **Punctuation**: `.`, `+`, `-`
//! - **Whitespace**: runs of space, tab, newline, carriage return
//! - **Unknown**: any other single character
//!
//! # Numeric literals and backtracking
//!
//! Numbers use maximal munch: the lexer consumes as much as could still
//! become a literal and then falls back to the longest prefix that actually
//! is one. `12.` scans as the integer `12` followed by a `.` token, and
//! `5e+` as the integer `5` followed by `e` and `+`.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod classify;
pub mod cursor;
pub mod lexer;
pub mod token;

#[cfg(test)]
mod edge_cases;

// Re-export main types for convenience
pub use classify::CharClass;
pub use cursor::{Cursor, CursorSnapshot};
pub use lexer::Lexer;
pub use token::{KeywordError, Keywords, ParseTokenKindError, Span, Token, TokenKind};

/// Scans `source` to completion with an empty keyword table.
///
/// The returned vector always ends with a single end-of-input token.
pub fn tokenize(source: &str) -> Vec<Token<'_>> {
    Lexer::new(source).tokenize()
}
