//! The scanning engine.
//!
//! The implementation is split by concern:
//! - `core` - token dispatch and the parser-facing match/expect surface
//! - `identifier` - identifiers and keywords
//! - `number` - integer and floating-point literals
//! - `string` - string literals and escape decoding
//! - `operator` - operators and the illegal-character fallbacks
//! - `comment` - whitespace and comment skipping

mod comment;
mod core;
mod identifier;
mod number;
mod operator;
mod string;

use lexis_util::span::{FileId, Span};

use crate::cursor::{Cursor, CursorSnapshot};
use crate::error::{LexError, LexResult};
use crate::grammar::Grammar;
use crate::token::{Token, TokenType, TokenValue};

pub use identifier::MAX_IDENTIFIER_LENGTH;

/// Tokeniser over one source unit.
///
/// The tokeniser always holds one scanned-but-unconsumed token: its type is
/// [`current_type`](Self::current_type) and, depending on that type, one of
/// the literal accessors holds its value. [`advance`](Self::advance) consumes
/// it and scans the next one.
///
/// The literal and string fields are reused on every advance. Take a
/// [`token()`](Self::token) snapshot to keep a value around.
pub struct Tokeniser<'a, G: Grammar + ?Sized> {
    cursor: Cursor<'a>,
    grammar: &'a G,
    file_id: FileId,

    current_type: TokenType,
    literal_int_value: i64,
    literal_double_value: f64,
    current_string_value: String,

    /// Span of the current token
    location: Span,
    start_location: Span,

    /// Where the current token begins
    token_start: CursorSnapshot,
}

impl<'a, G: Grammar + ?Sized> Tokeniser<'a, G> {
    /// Start tokenising `source` and scan its first token.
    pub fn new(source: &'a str, grammar: &'a G) -> LexResult<Self> {
        Self::with_file(source, FileId::DUMMY, grammar)
    }

    /// Like [`new`](Self::new), with spans tagged as belonging to `file_id`.
    pub fn with_file(source: &'a str, file_id: FileId, grammar: &'a G) -> LexResult<Self> {
        let mut cursor = Cursor::new(source);
        cursor.skip_bom();

        let start = cursor.snapshot();
        let start_location = start.to_span().with_file(file_id);
        let mut tokeniser = Self {
            cursor,
            grammar,
            file_id,
            current_type: TokenType::EOF,
            literal_int_value: 0,
            literal_double_value: 0.0,
            current_string_value: String::new(),
            location: start_location,
            start_location,
            token_start: start,
        };
        tokeniser.advance()?;
        Ok(tokeniser)
    }

    #[inline]
    pub fn current_type(&self) -> TokenType {
        self.current_type
    }

    /// Value of the current integer literal, already negated for `-N`.
    #[inline]
    pub fn literal_int_value(&self) -> i64 {
        self.literal_int_value
    }

    #[inline]
    pub fn literal_double_value(&self) -> f64 {
        self.literal_double_value
    }

    /// Text of the current identifier, or decoded contents of the current
    /// string literal.
    #[inline]
    pub fn current_string_value(&self) -> &str {
        &self.current_string_value
    }

    #[inline]
    pub fn location(&self) -> Span {
        self.location
    }

    #[inline]
    pub fn start_location(&self) -> Span {
        self.start_location
    }

    pub fn file_id(&self) -> FileId {
        self.file_id
    }

    pub fn grammar(&self) -> &'a G {
        self.grammar
    }

    /// Owned snapshot of the current token.
    pub fn token(&self) -> Token {
        let kind = self.current_type;
        let value = if kind.is_integer_literal() {
            TokenValue::Int(self.literal_int_value)
        } else if kind.is_float_literal() {
            TokenValue::Float(self.literal_double_value)
        } else if kind == TokenType::LITERAL_STRING || kind == TokenType::IDENTIFIER {
            TokenValue::Text(self.current_string_value.clone())
        } else {
            TokenValue::None
        };
        Token {
            kind,
            value,
            span: self.location,
        }
    }

    /// A second tokeniser positioned at the current token.
    ///
    /// The two share only the immutable source and grammar; advancing one
    /// does not move the other.
    pub fn fork(&self) -> Self {
        Self {
            cursor: self.cursor.clone(),
            grammar: self.grammar,
            file_id: self.file_id,
            current_type: self.current_type,
            literal_int_value: self.literal_int_value,
            literal_double_value: self.literal_double_value,
            current_string_value: self.current_string_value.clone(),
            location: self.location,
            start_location: self.start_location,
            token_start: self.token_start,
        }
    }

    /// Iterate from the current token up to and including end of file.
    pub fn tokens(&mut self) -> Tokens<'_, 'a, G> {
        Tokens {
            tokeniser: self,
            pending: None,
            finished: false,
        }
    }
}

/// Iterator returned by [`Tokeniser::tokens`].
///
/// Yields `Ok` for each token through end of file. If scanning fails, the
/// error is yielded once and iteration stops.
pub struct Tokens<'t, 'a, G: Grammar + ?Sized> {
    tokeniser: &'t mut Tokeniser<'a, G>,
    pending: Option<LexError>,
    finished: bool,
}

impl<G: Grammar + ?Sized> Iterator for Tokens<'_, '_, G> {
    type Item = LexResult<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        if let Some(err) = self.pending.take() {
            self.finished = true;
            return Some(Err(err));
        }

        let token = self.tokeniser.token();
        if token.is_eof() {
            self.finished = true;
        } else if let Err(err) = self.tokeniser.advance() {
            self.pending = Some(err);
        }
        Some(Ok(token))
    }
}

/// Scan all of `source`, end-of-file token included.
///
/// ```
/// use lexis_lex::{grammar, tokenise, TokenType};
/// use lexis_util::FileId;
///
/// let tokens = tokenise("a -1", FileId::DUMMY, grammar::source()).unwrap();
/// assert_eq!(tokens.len(), 3);
/// assert_eq!(tokens[1].int_value(), Some(-1));
/// assert_eq!(tokens[2].kind, TokenType::EOF);
/// ```
pub fn tokenise<G: Grammar + ?Sized>(
    source: &str,
    file_id: FileId,
    grammar: &G,
) -> LexResult<Vec<Token>> {
    let mut tokeniser = Tokeniser::with_file(source, file_id, grammar)?;
    tokeniser.tokens().collect()
}
