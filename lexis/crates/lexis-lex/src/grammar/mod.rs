//! Grammar policies.
//!
//! The tokeniser knows nothing about any particular language. What counts as
//! an identifier character, which identifiers are reserved words and which
//! operator spellings exist are supplied by three small traits, bundled as a
//! [`Grammar`]. Any type implementing all three is a grammar, including
//! trait objects, so both `Tokeniser<'_, MyGrammar>` and
//! `Tokeniser<'_, dyn Grammar>` work.
//!
//! [`table`] has ready-made building blocks, and two built-in grammars cover
//! the language family: [`source()`] for the high-level language and
//! [`ir()`] for its intermediate-representation dialect.

mod ir;
mod source;
pub mod table;

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::cursor::Cursor;
use crate::token::TokenType;

pub use ir::ir;
pub use source::source;
pub use table::{BuiltinGrammar, CharClasses, KeywordTable, OperatorTable, Policies};

/// Classifies identifier characters.
///
/// Every character allowed after the first must be accepted by
/// `is_identifier_body`; start characters need not be body characters.
pub trait IdentifierMatcher {
    fn is_identifier_start(&self, c: char) -> bool;
    fn is_identifier_body(&self, c: char) -> bool;
}

/// Recognises reserved words.
pub trait KeywordList {
    /// The keyword spelled exactly `text`, if there is one. `text` is always
    /// a maximal run of identifier characters.
    fn match_keyword(&self, text: &str) -> Option<TokenType>;
}

/// Recognises operators and punctuation.
pub trait OperatorList {
    /// Match the longest operator at the cursor. On success the cursor has
    /// been moved past it; on failure the cursor is untouched.
    fn match_operator(&self, cursor: &mut Cursor<'_>) -> Option<TokenType>;
}

/// The full set of policies a tokeniser needs.
pub trait Grammar: IdentifierMatcher + KeywordList + OperatorList {}

impl<T: IdentifierMatcher + KeywordList + OperatorList + ?Sized> Grammar for T {}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown grammar '{0}' (expected 'source' or 'ir')")]
pub struct UnknownGrammar(pub String);

/// Selects one of the built-in grammars by name.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum GrammarKind {
    #[default]
    Source,
    Ir,
}

impl GrammarKind {
    pub fn grammar(self) -> &'static BuiltinGrammar {
        match self {
            GrammarKind::Source => source(),
            GrammarKind::Ir => ir(),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            GrammarKind::Source => "source",
            GrammarKind::Ir => "ir",
        }
    }
}

impl FromStr for GrammarKind {
    type Err = UnknownGrammar;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "source" | "src" => Ok(GrammarKind::Source),
            "ir" => Ok(GrammarKind::Ir),
            _ => Err(UnknownGrammar(s.to_string())),
        }
    }
}

impl fmt::Display for GrammarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
