//! Number literal lexing.
//!
//! Integers, reals and scientific literals are recognised by one explicit
//! automaton. The lexer speculatively runs the automaton as far as the
//! input allows, remembering the last point at which the consumed text was
//! a complete literal, and then backs the cursor up to that point.
//!
//! # Literal shapes
//!
//! - Integer: `42`
//! - Real: `3.14` (a trailing `.` with no digit after it is not part of the literal)
//! - Scientific: `1e10`, `2.5E-3`, `7e+2`
//!
//! # Automaton
//!
//! ```text
//!            digit          digit            digit
//!           ┌─────┐        ┌─────┐          ┌─────┐
//!           ▼     │        ▼     │          ▼     │
//!  ──► [Integer]──┘ ─.─► Dot ─digit─► [Fraction]─┘
//!        │                               │
//!        └──────e/E──────► Exponent ◄──e/E┘
//!                          │      │
//!                     +/-  │      │ digit
//!                          ▼      ▼
//!                ExponentSign ─digit─► [ExponentDigits]◄─┐
//!                                              └──digit──┘
//! ```
//!
//! Bracketed states accept. Any input without an outgoing edge stops the
//! machine.

use crate::classify::CharClass;
use crate::cursor::CursorSnapshot;
use crate::token::{Token, TokenKind};
use crate::Lexer;

/// A state of the numeric literal automaton.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NumberState {
    /// One or more digits.
    Integer,
    /// Digits followed by `.`, waiting for a fraction digit.
    Dot,
    /// Digits, `.`, one or more digits.
    Fraction,
    /// A mantissa followed by `e`/`E`.
    Exponent,
    /// An exponent marker followed by `+`/`-`.
    ExponentSign,
    /// A mantissa, exponent marker, optional sign, one or more digits.
    ExponentDigits,
}

/// The result of feeding one character class to a [`NumberState`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    /// Consume the character and move to the given state.
    Advance(NumberState),
    /// The character cannot extend the literal.
    Stop,
}

impl NumberState {
    /// The state entered after the first digit.
    pub const START: NumberState = NumberState::Integer;

    /// The transition function.
    ///
    /// # Example
    ///
    /// ```
    /// use dragon_lex::classify::CharClass;
    /// use dragon_lex::lexer::number::{NumberState, Transition};
    ///
    /// assert_eq!(
    ///     NumberState::Integer.step(CharClass::Dot),
    ///     Transition::Advance(NumberState::Dot)
    /// );
    /// assert_eq!(NumberState::Dot.step(CharClass::Exponent), Transition::Stop);
    /// ```
    pub const fn step(self, class: CharClass) -> Transition {
        use NumberState::*;

        match (self, class) {
            (Integer, CharClass::Digit) => Transition::Advance(Integer),
            (Integer, CharClass::Dot) => Transition::Advance(Dot),
            (Integer | Fraction, CharClass::Exponent) => Transition::Advance(Exponent),
            (Dot | Fraction, CharClass::Digit) => Transition::Advance(Fraction),
            (Exponent, CharClass::Sign) => Transition::Advance(ExponentSign),
            (Exponent | ExponentSign | ExponentDigits, CharClass::Digit) => {
                Transition::Advance(ExponentDigits)
            },
            _ => Transition::Stop,
        }
    }

    /// The kind of literal the text consumed so far forms, if it is a
    /// complete literal.
    pub const fn accepts(self) -> Option<TokenKind> {
        match self {
            NumberState::Integer => Some(TokenKind::Integer),
            NumberState::Fraction => Some(TokenKind::Real),
            NumberState::ExponentDigits => Some(TokenKind::Scientific),
            NumberState::Dot | NumberState::Exponent | NumberState::ExponentSign => None,
        }
    }
}

/// The longest complete literal seen so far in the current scan.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Checkpoint {
    at: CursorSnapshot,
    kind: TokenKind,
}

impl<'a> Lexer<'a> {
    /// Lexes a number literal starting at the current digit.
    ///
    /// Runs the automaton until it stops, then emits the longest accepted
    /// prefix. If the automaton consumed characters past that prefix (as in
    /// `12.` or `5e+`), the cursor is moved back so those characters are
    /// scanned again by the next call.
    pub(crate) fn lex_number(&mut self) -> Token<'a> {
        let start = self.last_matched;
        debug_assert!(crate::classify::is_digit(self.cursor.current_char()));

        self.cursor.advance();
        let mut state = NumberState::START;
        let mut checkpoint = Checkpoint {
            at: self.cursor.snapshot(),
            kind: TokenKind::Integer,
        };

        loop {
            let next = match state.step(CharClass::of(self.cursor.current_char())) {
                Transition::Advance(next) => next,
                Transition::Stop => break,
            };

            self.cursor.advance();
            state = next;
            if let Some(kind) = state.accepts() {
                checkpoint = Checkpoint {
                    at: self.cursor.snapshot(),
                    kind,
                };
            }
        }

        debug_assert!(start.position <= checkpoint.at.position);
        debug_assert!(checkpoint.at.position <= self.cursor.position());

        if checkpoint.at.position < self.cursor.position() {
            tracing::trace!(
                reached = self.cursor.position(),
                accepted = checkpoint.at.position,
                "numeric scan backtracked"
            );
            self.cursor.restore(checkpoint.at);
        }

        self.finish(checkpoint.kind, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CLASSES: [CharClass; 5] = [
        CharClass::Digit,
        CharClass::Dot,
        CharClass::Exponent,
        CharClass::Sign,
        CharClass::Other,
    ];

    const STATES: [NumberState; 6] = [
        NumberState::Integer,
        NumberState::Dot,
        NumberState::Fraction,
        NumberState::Exponent,
        NumberState::ExponentSign,
        NumberState::ExponentDigits,
    ];

    /// Lexes the first token and reports what is left for the next call.
    fn lex_num(source: &str) -> (TokenKind, &str, &str) {
        let mut lexer = Lexer::new(source);
        let token = lexer.lex_number();
        let lexeme = token.lexeme().unwrap_or_default();
        (token.kind(), lexeme, lexer.cursor.remaining())
    }

    #[test]
    fn test_transition_table() {
        use NumberState::*;
        use Transition::{Advance, Stop};

        let expected = [
            // Digit, Dot, Exponent, Sign, Other
            (Integer, [Advance(Integer), Advance(Dot), Advance(Exponent), Stop, Stop]),
            (Dot, [Advance(Fraction), Stop, Stop, Stop, Stop]),
            (Fraction, [Advance(Fraction), Stop, Advance(Exponent), Stop, Stop]),
            (Exponent, [Advance(ExponentDigits), Stop, Stop, Advance(ExponentSign), Stop]),
            (ExponentSign, [Advance(ExponentDigits), Stop, Stop, Stop, Stop]),
            (ExponentDigits, [Advance(ExponentDigits), Stop, Stop, Stop, Stop]),
        ];

        for (state, row) in expected {
            for (class, want) in CLASSES.into_iter().zip(row) {
                assert_eq!(state.step(class), want, "{:?} on {:?}", state, class);
            }
        }
    }

    #[test]
    fn test_accepting_states() {
        let accepting: Vec<_> = STATES.iter().filter_map(|s| s.accepts()).collect();
        assert_eq!(
            accepting,
            [TokenKind::Integer, TokenKind::Real, TokenKind::Scientific]
        );
        assert_eq!(NumberState::START.accepts(), Some(TokenKind::Integer));
    }

    #[test]
    fn test_other_always_stops() {
        for state in STATES {
            assert_eq!(state.step(CharClass::Other), Transition::Stop);
        }
    }

    #[test]
    fn test_integer() {
        assert_eq!(lex_num("123"), (TokenKind::Integer, "123", ""));
        assert_eq!(lex_num("0"), (TokenKind::Integer, "0", ""));
        assert_eq!(lex_num("007 "), (TokenKind::Integer, "007", " "));
    }

    #[test]
    fn test_real() {
        assert_eq!(lex_num("12.34"), (TokenKind::Real, "12.34", ""));
        assert_eq!(lex_num("0.5+"), (TokenKind::Real, "0.5", "+"));
    }

    #[test]
    fn test_scientific() {
        assert_eq!(lex_num("1e10"), (TokenKind::Scientific, "1e10", ""));
        assert_eq!(lex_num("2.5E-3"), (TokenKind::Scientific, "2.5E-3", ""));
        assert_eq!(lex_num("7e+2x"), (TokenKind::Scientific, "7e+2", "x"));
    }

    #[test]
    fn test_trailing_dot_backtracks() {
        assert_eq!(lex_num("12."), (TokenKind::Integer, "12", "."));
        assert_eq!(lex_num("5.a"), (TokenKind::Integer, "5", ".a"));
        assert_eq!(lex_num("12.a"), (TokenKind::Integer, "12", ".a"));
    }

    #[test]
    fn test_second_dot_stops() {
        assert_eq!(lex_num("1.2.3"), (TokenKind::Real, "1.2", ".3"));
        assert_eq!(lex_num("1..2"), (TokenKind::Integer, "1", "..2"));
    }

    #[test]
    fn test_incomplete_exponent_backtracks() {
        assert_eq!(lex_num("5e"), (TokenKind::Integer, "5", "e"));
        assert_eq!(lex_num("5e+"), (TokenKind::Integer, "5", "e+"));
        assert_eq!(lex_num("5E-x"), (TokenKind::Integer, "5", "E-x"));
        assert_eq!(lex_num("1.5e"), (TokenKind::Real, "1.5", "e"));
        assert_eq!(lex_num("1.5e-"), (TokenKind::Real, "1.5", "e-"));
    }

    #[test]
    fn test_exponent_takes_one_sign_only() {
        assert_eq!(lex_num("1e+-2"), (TokenKind::Integer, "1", "e+-2"));
        assert_eq!(lex_num("1e2e3"), (TokenKind::Scientific, "1e2", "e3"));
        assert_eq!(lex_num("1e2.5"), (TokenKind::Scientific, "1e2", ".5"));
    }

    #[test]
    fn test_dot_after_exponent_marker_stops() {
        assert_eq!(lex_num("1e.5"), (TokenKind::Integer, "1", "e.5"));
    }

    #[test]
    fn test_backtrack_restores_line_and_column() {
        let mut lexer = Lexer::new("3e\n");
        let token = lexer.lex_number();
        assert_eq!(token.lexeme(), Some("3"));
        assert_eq!((lexer.line(), lexer.column()), (1, 2));
        assert_eq!(lexer.position(), 1);
    }
}
