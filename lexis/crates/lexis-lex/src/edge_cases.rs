//! Edge case tests for lexis-lex

#[cfg(test)]
mod tests {
    use crate::grammar;
    use crate::{LexError, LexErrorKind, Token, TokenType, TokenValue, Tokeniser};

    fn lex_all(source: &str) -> Vec<Token> {
        let mut tok = Tokeniser::new(source, grammar::source()).unwrap();
        tok.tokens()
            .map(|t| t.unwrap())
            .take_while(|t| !t.is_eof())
            .collect()
    }

    fn lex_err(source: &str) -> LexError {
        let mut tok = match Tokeniser::new(source, grammar::source()) {
            Ok(tok) => tok,
            Err(err) => return err,
        };
        tok.tokens()
            .find_map(|t| t.err())
            .unwrap_or_else(|| panic!("no error in {:?}", source))
    }

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_empty_source() {
        assert!(lex_all("").is_empty());
        assert!(lex_all("   \n\t ").is_empty());
        assert!(lex_all("// only a comment").is_empty());
        assert!(lex_all("/**/").is_empty());
    }

    #[test]
    fn test_edge_single_char_ident() {
        let t = lex_all("x");
        assert_eq!(t[0].text_value(), Some("x"));
    }

    #[test]
    fn test_edge_case_sensitivity() {
        let t = lex_all("If if");
        assert_eq!(t[0].kind, TokenType::IDENTIFIER);
        assert_eq!(t[1].kind, TokenType::new("if"));
    }

    #[test]
    fn test_edge_keyword_prefix_is_identifier() {
        let t = lex_all("int int32 int3");
        assert_eq!(t[0].kind, TokenType::new("int"));
        assert_eq!(t[1].kind, TokenType::new("int32"));
        assert_eq!(t[2].kind, TokenType::IDENTIFIER);
    }

    #[test]
    fn test_edge_comment_directly_after_literal() {
        let t = lex_all("1// c\n2/* c */3");
        let values: Vec<_> = t.iter().map(|t| t.int_value()).collect();
        assert_eq!(values, vec![Some(1), Some(2), Some(3)]);
    }

    #[test]
    fn test_edge_literal_then_operator() {
        let t = lex_all("1+2");
        assert_eq!(t.len(), 3);
        assert_eq!(t[1].kind, TokenType::new("+"));
    }

    #[test]
    fn test_edge_negative_after_operator() {
        let t = lex_all("x=-5");
        assert_eq!(t[1].kind, TokenType::new("="));
        assert_eq!(t[2].int_value(), Some(-5));
    }

    #[test]
    fn test_edge_subtraction_without_spaces() {
        let t = lex_all("3 -2");
        assert_eq!(t.len(), 2);
        assert_eq!(t[1].int_value(), Some(-2));
    }

    #[test]
    fn test_edge_range_style_dots() {
        let t = lex_all("0..5");
        assert_eq!(t[0].kind, TokenType::LITERAL_FLOAT64);
        assert_eq!(t[1].kind, TokenType::LITERAL_FLOAT64);
        assert_eq!(t[1].float_value(), Some(0.5));
    }

    #[test]
    fn test_edge_empty_strings_both_quotes() {
        let t = lex_all("\"\" ''");
        assert!(t.iter().all(|t| t.value == TokenValue::Text(String::new())));
    }

    #[test]
    fn test_edge_string_containing_comment_markers() {
        let t = lex_all("\"/* not a comment */\" // real");
        assert_eq!(t.len(), 1);
        assert_eq!(t[0].text_value(), Some("/* not a comment */"));
    }

    #[test]
    fn test_edge_crlf_line_endings() {
        let mut tok = Tokeniser::new("a\r\nb", grammar::source()).unwrap();
        tok.advance().unwrap();
        assert_eq!((tok.location().line, tok.location().column), (2, 1));
    }

    #[test]
    fn test_edge_unicode_whitespace() {
        let t = lex_all("a\u{00A0}\u{2003}b");
        assert_eq!(t.len(), 2);
    }

    #[test]
    fn test_edge_column_after_multibyte_string() {
        let mut tok = Tokeniser::new("\"ππ\" x", grammar::source()).unwrap();
        tok.advance().unwrap();
        assert_eq!(tok.location().column, 6);
        assert_eq!(tok.location().start, 7);
    }

    #[test]
    fn test_edge_max_int64_boundaries() {
        let t = lex_all("0x7FFFFFFFFFFFFFFFi64 -0x8000000000000000i64");
        assert_eq!(t[0].int_value(), Some(i64::MAX));
        assert_eq!(t[1].int_value(), Some(i64::MIN));
    }

    #[test]
    fn test_edge_zero_forms() {
        let t = lex_all("0 0L 0.0 0x0 0b0 -0");
        assert_eq!(t.len(), 6);
        assert_eq!(t[5].int_value(), Some(0));
    }

    // ==================== ERROR CASES ====================

    #[test]
    fn test_err_stops_at_first_error() {
        let mut tok = Tokeniser::new("a b ` c ~", grammar::source()).unwrap();
        let results: Vec<_> = tok.tokens().collect();
        assert_eq!(results.len(), 3);
        assert_eq!(
            results[2].as_ref().unwrap_err().kind,
            LexErrorKind::IllegalCharacter('`')
        );
    }

    #[test]
    fn test_err_octal_after_valid_tokens() {
        let err = lex_err("let x = 0777;");
        assert_eq!(err.kind, LexErrorKind::NoOctalLiterals);
        assert_eq!(err.span.column, 9);
    }

    #[test]
    fn test_err_suffix_on_hex() {
        assert_eq!(lex_err("0xFFg").kind, LexErrorKind::UnrecognisedLiteralSuffix);
        assert_eq!(lex_err("1i16").kind, LexErrorKind::UnrecognisedLiteralSuffix);
    }

    #[test]
    fn test_err_underscore_after_valid_tokens() {
        let err = lex_err("a + _b");
        assert_eq!(err.kind, LexErrorKind::NoLeadingUnderscore);
        assert_eq!(err.span.column, 5);
    }

    #[test]
    fn test_err_messages_are_stable() {
        assert_eq!(lex_err("\"abc").to_string(), "unexpected end of input in string constant");
        assert_eq!(lex_err("09").to_string(), "decimal digit in octal constant");
        assert_eq!(lex_err("/*").to_string(), "unterminated comment");
    }
}
