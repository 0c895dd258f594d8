//! lexis-lex - grammar-agnostic tokeniser for the lexis language family
//!
//! This crate turns UTF-8 source text into classified tokens: keywords,
//! operators, identifiers and typed literals (32/64-bit integers, 32/64-bit
//! floats and strings), each stamped with the span it came from.
//!
//! The scanner itself knows no language. Keywords, operators and identifier
//! characters come from a [`Grammar`], and two built-in grammars are
//! provided: [`grammar::source()`] and [`grammar::ir()`].
//!
//! # Example Usage
//!
//! ```
//! use lexis_lex::{grammar, Tokeniser, TokenType};
//!
//! let mut tok = Tokeniser::new("let x = -42;", grammar::source()).unwrap();
//!
//! assert!(tok.match_if(TokenType::new("let")).unwrap());
//! assert_eq!(tok.read_identifier().unwrap(), "x");
//! tok.expect(TokenType::new("=")).unwrap();
//!
//! assert_eq!(tok.current_type(), TokenType::LITERAL_INT32);
//! assert_eq!(tok.literal_int_value(), -42);
//! ```
//!
//! # Errors
//!
//! Every lexical error is fatal to the scan that raised it. Fallible
//! operations return [`LexResult`]; the [`LexError`] inside carries the
//! condition and the span it points at, and converts to a
//! [`lexis_util::Diagnostic`] for rendering.
//!
//! # Module Structure
//!
//! - [`cursor`] - Character cursor over the source text
//! - [`token`] - Token identities and owned token records
//! - [`grammar`] - Grammar policy traits and the built-in grammars
//! - [`lexer`] - The scanning engine
//! - [`unicode`] - Character classes and UTF-8 encoding helpers
//! - [`error`] - Lexical error conditions

pub mod cursor;
pub mod error;
pub mod grammar;
pub mod lexer;
pub mod token;
pub mod unicode;

#[cfg(test)]
mod edge_cases;

pub use cursor::{Cursor, CursorSnapshot};
pub use error::{LexError, LexErrorKind, LexResult};
pub use grammar::{Grammar, GrammarKind, IdentifierMatcher, KeywordList, OperatorList};
pub use lexer::{tokenise, Tokeniser, Tokens, MAX_IDENTIFIER_LENGTH};
pub use token::{Token, TokenType, TokenValue};
