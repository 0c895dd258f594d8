//! Token identities and owned token records.
//!
//! A [`TokenType`] names a token category. It wraps an interned [`Symbol`],
//! so two token types are equal exactly when they were created from the same
//! text, and comparing them never touches the text.
//!
//! Categories whose text begins with `$` are synthetic: they stand for a
//! class of tokens (end of input, a literal kind, "any identifier") rather
//! than literal source text, and render unquoted in diagnostics.

use std::fmt;

use lexis_util::span::Span;
use lexis_util::symbol::{
    Symbol, SYM_EOF, SYM_FLOAT32, SYM_FLOAT64, SYM_IDENTIFIER, SYM_INTEGER32, SYM_INTEGER64,
    SYM_STRING_LITERAL,
};

/// Marks a synthetic category.
pub const SYNTHETIC_MARKER: char = '$';

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct TokenType(Symbol);

impl TokenType {
    pub const EOF: TokenType = TokenType(SYM_EOF);
    pub const LITERAL_INT32: TokenType = TokenType(SYM_INTEGER32);
    pub const LITERAL_INT64: TokenType = TokenType(SYM_INTEGER64);
    pub const LITERAL_FLOAT32: TokenType = TokenType(SYM_FLOAT32);
    pub const LITERAL_FLOAT64: TokenType = TokenType(SYM_FLOAT64);
    pub const LITERAL_STRING: TokenType = TokenType(SYM_STRING_LITERAL);
    pub const IDENTIFIER: TokenType = TokenType(SYM_IDENTIFIER);

    /// The token type spelled `text`.
    ///
    /// ```
    /// use lexis_lex::TokenType;
    ///
    /// assert_eq!(TokenType::new("while"), TokenType::new("while"));
    /// assert_eq!(TokenType::new("$eof"), TokenType::EOF);
    /// ```
    pub fn new(text: &str) -> Self {
        Self(Symbol::intern(text))
    }

    pub fn symbol(self) -> Symbol {
        self.0
    }

    pub fn text(self) -> &'static str {
        self.0.as_str()
    }

    pub fn is_synthetic(self) -> bool {
        self.text().starts_with(SYNTHETIC_MARKER)
    }

    pub fn is_integer_literal(self) -> bool {
        self == Self::LITERAL_INT32 || self == Self::LITERAL_INT64
    }

    pub fn is_float_literal(self) -> bool {
        self == Self::LITERAL_FLOAT32 || self == Self::LITERAL_FLOAT64
    }

    /// Human-readable form for "expected X, found Y" messages.
    ///
    /// Synthetic categories drop their marker; everything else is quoted.
    ///
    /// ```
    /// use lexis_lex::TokenType;
    ///
    /// assert_eq!(TokenType::IDENTIFIER.description(), "identifier");
    /// assert_eq!(TokenType::new("+=").description(), "\"+=\"");
    /// ```
    pub fn description(self) -> String {
        match self.text().strip_prefix(SYNTHETIC_MARKER) {
            Some(name) => name.to_string(),
            None => format!("\"{}\"", self.text()),
        }
    }
}

impl fmt::Debug for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TokenType({})", self.text())
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description())
    }
}

/// Decoded payload of a token.
#[derive(Clone, Debug, PartialEq)]
pub enum TokenValue {
    None,
    Int(i64),
    Float(f64),
    Text(String),
}

/// An owned copy of one scanned token, independent of the tokeniser that
/// produced it.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub kind: TokenType,
    pub value: TokenValue,
    pub span: Span,
}

impl Token {
    pub fn is_eof(&self) -> bool {
        self.kind == TokenType::EOF
    }

    pub fn int_value(&self) -> Option<i64> {
        match self.value {
            TokenValue::Int(v) => Some(v),
            _ => None,
        }
    }

    pub fn float_value(&self) -> Option<f64> {
        match self.value {
            TokenValue::Float(v) => Some(v),
            _ => None,
        }
    }

    pub fn text_value(&self) -> Option<&str> {
        match &self.value {
            TokenValue::Text(s) => Some(s),
            _ => None,
        }
    }
}
