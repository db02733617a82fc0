//! Edge case and property tests for dragon-lex

#[cfg(test)]
mod tests {
    use crate::{tokenize, Lexer, Token, TokenKind};
    use proptest::prelude::*;

    fn lex_all(source: &str) -> Vec<Token<'_>> {
        tokenize(source)
    }

    fn kinds(source: &str) -> Vec<TokenKind> {
        lex_all(source).iter().map(|t| t.kind()).collect()
    }

    /// Checks the shape of a numeric lexeme without going through the lexer.
    fn is_number_shape(kind: TokenKind, text: &str) -> bool {
        let (mantissa, exponent) = match text.find(['e', 'E']) {
            Some(i) => (&text[..i], Some(&text[i + 1..])),
            None => (text, None),
        };
        let digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
        let mantissa_ok = match mantissa.split_once('.') {
            Some((int, frac)) => digits(int) && digits(frac),
            None => digits(mantissa),
        };
        let has_dot = mantissa.contains('.');
        match (kind, exponent) {
            (TokenKind::Integer, None) => mantissa_ok && !has_dot,
            (TokenKind::Real, None) => mantissa_ok && has_dot,
            (TokenKind::Scientific, Some(exp)) => {
                let exp = exp.strip_prefix(['+', '-']).unwrap_or(exp);
                mantissa_ok && digits(exp)
            },
            _ => false,
        }
    }

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_empty_source() {
        assert_eq!(kinds(""), [TokenKind::EndOfInput]);
    }

    #[test]
    fn test_edge_whitespace_only() {
        assert_eq!(
            kinds(" \t\r\n  "),
            [TokenKind::Whitespace, TokenKind::EndOfInput]
        );
    }

    #[test]
    fn test_edge_long_identifier() {
        let name = "a".repeat(10_000) + "9";
        let tokens = lex_all(&name);
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].lexeme(), Some(name.as_str()));
    }

    #[test]
    fn test_edge_long_number() {
        let digits = "9".repeat(5_000);
        let source = format!("{digits}.{digits}e-{digits}");
        let tokens = lex_all(&source);
        assert_eq!(tokens[0].kind(), TokenKind::Scientific);
        assert_eq!(tokens[0].lexeme(), Some(source.as_str()));
    }

    #[test]
    fn test_edge_number_then_identifier() {
        assert_eq!(
            kinds("12abc"),
            [TokenKind::Integer, TokenKind::Identifier, TokenKind::EndOfInput]
        );
        assert_eq!(
            kinds("1e5x"),
            [TokenKind::Scientific, TokenKind::Identifier, TokenKind::EndOfInput]
        );
    }

    #[test]
    fn test_edge_exponent_becomes_identifier_after_backtrack() {
        let tokens = lex_all("5e");
        assert_eq!(tokens[0].lexeme(), Some("5"));
        assert_eq!(tokens[1].kind(), TokenKind::Identifier);
        assert_eq!(tokens[1].lexeme(), Some("e"));
    }

    #[test]
    fn test_edge_signed_number_is_two_tokens() {
        assert_eq!(
            kinds("-1.5"),
            [TokenKind::Minus, TokenKind::Real, TokenKind::EndOfInput]
        );
    }

    #[test]
    fn test_edge_leading_dot_is_not_real() {
        assert_eq!(
            kinds(".5"),
            [TokenKind::Dot, TokenKind::Integer, TokenKind::EndOfInput]
        );
    }

    #[test]
    fn test_edge_embedded_nul_is_unknown() {
        let tokens = lex_all("1\0 2");
        assert_eq!(tokens[1].kind(), TokenKind::Unknown);
        assert_eq!(tokens[1].lexeme(), Some("\0"));
        assert_eq!(tokens.last().map(|t| t.kind()), Some(TokenKind::EndOfInput));
        assert_eq!(tokens.len(), 5);
    }

    #[test]
    fn test_edge_punctuation_is_unknown() {
        let tokens = lex_all("(a, b);:");
        let unknown: Vec<_> = tokens
            .iter()
            .filter(|t| t.kind() == TokenKind::Unknown)
            .filter_map(|t| t.lexeme())
            .collect();
        assert_eq!(unknown, ["(", ",", ")", ";", ":"]);
    }

    #[test]
    fn test_edge_crlf_is_one_whitespace_run() {
        assert_eq!(
            kinds("a\r\n\r\nb"),
            [
                TokenKind::Identifier,
                TokenKind::Whitespace,
                TokenKind::Identifier,
                TokenKind::EndOfInput,
            ]
        );
    }

    #[test]
    fn test_edge_span_lines_after_backtrack() {
        let tokens = lex_all("1.\n2e");
        let spans: Vec<_> = tokens
            .iter()
            .map(|t| (t.span().line, t.span().column))
            .collect();
        assert_eq!(spans, [(1, 1), (1, 2), (1, 3), (2, 1), (2, 2), (2, 3)]);
    }

    #[test]
    fn test_edge_independent_lexers_share_source() {
        let source = "1.5 x";
        let mut first = Lexer::new(source);
        let mut second = Lexer::new(source);
        assert_eq!(first.next_token(), second.next_token());
        first.next_token();
        assert_eq!(second.next_token().kind(), TokenKind::Whitespace);
    }

    // ==================== PROPERTIES ====================

    const ALPHABET: &str = "[a-zA-Z0-9.eE+\\-=<>! \t\r\n,;:()]{0,64}";

    proptest! {
        #[test]
        fn test_property_terminates_with_sticky_eof(input in ALPHABET) {
            let mut lexer = Lexer::new(&input);
            let mut calls = 0;
            while !lexer.next_token().is_eof() {
                calls += 1;
                prop_assert!(calls <= input.len());
            }
            for _ in 0..3 {
                prop_assert!(lexer.next_token().is_eof());
            }
        }

        #[test]
        fn test_property_spans_tile_input(input in ALPHABET) {
            let tokens = lex_all(&input);
            let mut rebuilt = String::new();
            let mut expected_start = 0;
            for token in &tokens {
                let span = token.span();
                prop_assert_eq!(span.start, expected_start);
                if let Some(lexeme) = token.lexeme() {
                    prop_assert_eq!(lexeme, &input[span.range()]);
                }
                rebuilt.push_str(&input[span.range()]);
                expected_start = span.end;
            }
            prop_assert_eq!(rebuilt, input.clone());
            prop_assert_eq!(tokens.iter().filter(|t| t.is_eof()).count(), 1);
        }

        #[test]
        fn test_property_only_eof_and_whitespace_lack_lexemes(input in ALPHABET) {
            for token in lex_all(&input) {
                let bare = matches!(token.kind(), TokenKind::EndOfInput | TokenKind::Whitespace);
                prop_assert_eq!(token.lexeme().is_none(), bare);
                prop_assert!(bare || !token.span().is_empty());
            }
        }

        #[test]
        fn test_property_numbers_are_well_formed(input in "[0-9.eE+\\-a]{1,24}") {
            for token in lex_all(&input) {
                if token.kind().is_number() {
                    let text = token.lexeme().unwrap_or_default();
                    prop_assert!(is_number_shape(token.kind(), text), "{:?} as {:?}", text, token.kind());
                }
            }
        }

        #[test]
        fn test_property_numbers_are_maximal(
            int in "[0-9]{1,6}",
            frac in proptest::option::of("[0-9]{1,6}"),
            exp in proptest::option::of(("[eE]", "[+\\-]?", "[0-9]{1,4}")),
        ) {
            let mut literal = int;
            let mut kind = TokenKind::Integer;
            if let Some(frac) = frac {
                literal = format!("{literal}.{frac}");
                kind = TokenKind::Real;
            }
            if let Some((marker, sign, digits)) = exp {
                literal = format!("{literal}{marker}{sign}{digits}");
                kind = TokenKind::Scientific;
            }
            let tokens = lex_all(&literal);
            prop_assert_eq!(tokens.len(), 2);
            prop_assert_eq!(tokens[0].kind(), kind);
            prop_assert_eq!(tokens[0].lexeme(), Some(literal.as_str()));
        }

        #[test]
        fn test_property_identifiers(input in "[a-zA-Z][a-zA-Z0-9]{0,40}") {
            let tokens = lex_all(&input);
            prop_assert_eq!(tokens.len(), 2);
            prop_assert_eq!(tokens[0].kind(), TokenKind::Identifier);
            prop_assert_eq!(tokens[0].lexeme(), Some(input.as_str()));
        }
    }
}
