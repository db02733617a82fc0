//! Identifier and keyword lexing.

use crate::classify::is_alphanumeric;
use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes an identifier or keyword.
    ///
    /// Consumes a letter followed by a maximal run of letters and digits,
    /// then looks the spelling up in the keyword table. Spellings the table
    /// does not know are plain identifiers.
    pub(crate) fn lex_identifier(&mut self) -> Token<'a> {
        let start = self.last_matched.position;
        self.cursor.advance();
        self.cursor.eat_while(is_alphanumeric);

        let spelling = self.cursor.slice_from(start);
        let kind = match self.keywords.get(spelling) {
            Some(kind) => {
                tracing::trace!(spelling, %kind, "keyword");
                kind
            },
            None => TokenKind::Identifier,
        };
        self.finish(kind, true)
    }
}
