//! Stable diagnostic codes.
//!
//! Codes print as a prefix plus a zero-padded number (`E1004`). Lexical
//! errors occupy `E1001..=E1013`.

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiagnosticCode {
    pub prefix: &'static str,
    pub number: u32,
}

impl DiagnosticCode {
    #[inline]
    pub const fn new(prefix: &'static str, number: u32) -> Self {
        Self { prefix, number }
    }

    pub fn as_str(&self) -> String {
        format!("{}{:04}", self.prefix, self.number)
    }

    pub const E_LEXER_IDENTIFIER_TOO_LONG: Self = Self::new("E", 1001);
    pub const E_LEXER_ILLEGAL_CHARACTER: Self = Self::new("E", 1002);
    pub const E_LEXER_LEADING_UNDERSCORE: Self = Self::new("E", 1003);
    pub const E_LEXER_UNTERMINATED_COMMENT: Self = Self::new("E", 1004);
    pub const E_LEXER_INTEGER_TOO_LARGE: Self = Self::new("E", 1005);
    pub const E_LEXER_INTEGER_TOO_LOW: Self = Self::new("E", 1006);
    pub const E_LEXER_OCTAL_LITERAL: Self = Self::new("E", 1007);
    pub const E_LEXER_DECIMAL_DIGIT_IN_OCTAL: Self = Self::new("E", 1008);
    pub const E_LEXER_MALFORMED_NUMBER: Self = Self::new("E", 1009);
    pub const E_LEXER_UNRECOGNISED_SUFFIX: Self = Self::new("E", 1010);
    pub const E_LEXER_BAD_ESCAPE: Self = Self::new("E", 1011);
    pub const E_LEXER_UNTERMINATED_STRING: Self = Self::new("E", 1012);
    pub const E_LEXER_UNEXPECTED_TOKEN: Self = Self::new("E", 1013);
}

impl std::fmt::Debug for DiagnosticCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DiagnosticCode({})", self.as_str())
    }
}

impl std::fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{:04}", self.prefix, self.number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_str_pads() {
        assert_eq!(DiagnosticCode::new("E", 1).as_str(), "E0001");
        assert_eq!(DiagnosticCode::new("W", 12).as_str(), "W0012");
        assert_eq!(DiagnosticCode::E_LEXER_UNTERMINATED_COMMENT.as_str(), "E1004");
    }

    #[test]
    fn test_display_matches_as_str() {
        let code = DiagnosticCode::E_LEXER_UNEXPECTED_TOKEN;
        assert_eq!(code.to_string(), code.as_str());
        assert_eq!(format!("{:?}", code), "DiagnosticCode(E1013)");
    }

    #[test]
    fn test_lexer_codes_are_distinct() {
        let codes = [
            DiagnosticCode::E_LEXER_IDENTIFIER_TOO_LONG,
            DiagnosticCode::E_LEXER_ILLEGAL_CHARACTER,
            DiagnosticCode::E_LEXER_LEADING_UNDERSCORE,
            DiagnosticCode::E_LEXER_UNTERMINATED_COMMENT,
            DiagnosticCode::E_LEXER_INTEGER_TOO_LARGE,
            DiagnosticCode::E_LEXER_INTEGER_TOO_LOW,
            DiagnosticCode::E_LEXER_OCTAL_LITERAL,
            DiagnosticCode::E_LEXER_DECIMAL_DIGIT_IN_OCTAL,
            DiagnosticCode::E_LEXER_MALFORMED_NUMBER,
            DiagnosticCode::E_LEXER_UNRECOGNISED_SUFFIX,
            DiagnosticCode::E_LEXER_BAD_ESCAPE,
            DiagnosticCode::E_LEXER_UNTERMINATED_STRING,
            DiagnosticCode::E_LEXER_UNEXPECTED_TOKEN,
        ];
        let unique: std::collections::HashSet<_> = codes.iter().collect();
        assert_eq!(unique.len(), codes.len());
    }
}
