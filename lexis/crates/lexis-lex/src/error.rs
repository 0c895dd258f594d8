//! Lexical errors.
//!
//! Every error is fatal to the scan that raised it: the tokeniser returns it
//! up the call chain and does no local recovery. Each carries the span it
//! points at and maps onto a stable diagnostic code.

use lexis_util::diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticCode};
use lexis_util::span::Span;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexErrorKind {
    #[error("identifier name too long")]
    IdentifierTooLong,

    #[error("illegal character '{}'", .0.escape_debug())]
    IllegalCharacter(char),

    #[error("identifiers cannot begin with an underscore")]
    NoLeadingUnderscore,

    #[error("unterminated comment")]
    UnterminatedComment,

    #[error("integer literal is too large to be represented")]
    IntegerLiteralTooLarge,

    #[error("integer literal is too low to be represented")]
    IntegerLiteralTooLow,

    #[error("octal literals are not supported")]
    NoOctalLiterals,

    #[error("decimal digit in octal constant")]
    DecimalDigitInOctal,

    #[error("syntax error in numeric constant")]
    ErrorInNumericLiteral,

    #[error("unrecognised literal suffix")]
    UnrecognisedLiteralSuffix,

    #[error("syntax error in unicode escape sequence")]
    ErrorInEscapeCode,

    #[error("unexpected end of input in string constant")]
    EndOfInputInStringConstant,

    /// `expected` and `found` are token descriptions.
    #[error("found {found} when expecting {expected}")]
    FoundWhenExpecting { found: String, expected: String },
}

impl LexErrorKind {
    pub fn code(&self) -> DiagnosticCode {
        match self {
            Self::IdentifierTooLong => DiagnosticCode::E_LEXER_IDENTIFIER_TOO_LONG,
            Self::IllegalCharacter(_) => DiagnosticCode::E_LEXER_ILLEGAL_CHARACTER,
            Self::NoLeadingUnderscore => DiagnosticCode::E_LEXER_LEADING_UNDERSCORE,
            Self::UnterminatedComment => DiagnosticCode::E_LEXER_UNTERMINATED_COMMENT,
            Self::IntegerLiteralTooLarge => DiagnosticCode::E_LEXER_INTEGER_TOO_LARGE,
            Self::IntegerLiteralTooLow => DiagnosticCode::E_LEXER_INTEGER_TOO_LOW,
            Self::NoOctalLiterals => DiagnosticCode::E_LEXER_OCTAL_LITERAL,
            Self::DecimalDigitInOctal => DiagnosticCode::E_LEXER_DECIMAL_DIGIT_IN_OCTAL,
            Self::ErrorInNumericLiteral => DiagnosticCode::E_LEXER_MALFORMED_NUMBER,
            Self::UnrecognisedLiteralSuffix => DiagnosticCode::E_LEXER_UNRECOGNISED_SUFFIX,
            Self::ErrorInEscapeCode => DiagnosticCode::E_LEXER_BAD_ESCAPE,
            Self::EndOfInputInStringConstant => DiagnosticCode::E_LEXER_UNTERMINATED_STRING,
            Self::FoundWhenExpecting { .. } => DiagnosticCode::E_LEXER_UNEXPECTED_TOKEN,
        }
    }

    fn help(&self) -> Option<&'static str> {
        match self {
            Self::NoOctalLiterals | Self::DecimalDigitInOctal => {
                Some("write the value in decimal, or use a 0x or 0b prefix")
            }
            Self::UnterminatedComment => Some("block comments end at the first `*/` and do not nest"),
            Self::UnrecognisedLiteralSuffix => {
                Some("valid suffixes are i32, i64, L, f32, f64 and f, optionally preceded by `_`")
            }
            Self::ErrorInEscapeCode => Some("`\\u` must be followed by exactly four hex digits"),
            _ => None,
        }
    }
}

/// A lexical error and the position it refers to.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}")]
pub struct LexError {
    pub kind: LexErrorKind,
    pub span: Span,
}

impl LexError {
    pub fn new(kind: LexErrorKind, span: Span) -> Self {
        Self { kind, span }
    }

    pub fn kind(&self) -> &LexErrorKind {
        &self.kind
    }

    pub fn span(&self) -> Span {
        self.span
    }

    pub fn code(&self) -> DiagnosticCode {
        self.kind.code()
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let builder = DiagnosticBuilder::error(self.kind.to_string())
            .code(self.code())
            .span(self.span);
        match self.kind.help() {
            Some(help) => builder.help(help).build(),
            None => builder.build(),
        }
    }
}

pub type LexResult<T> = std::result::Result<T, LexError>;
