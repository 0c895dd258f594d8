//! Token dispatch and the parser-facing surface.

use lexis_util::span::Span;
use tracing::{debug, trace};

use super::Tokeniser;
use crate::cursor::CursorSnapshot;
use crate::error::{LexError, LexErrorKind, LexResult};
use crate::grammar::Grammar;
use crate::token::TokenType;

impl<'a, G: Grammar + ?Sized> Tokeniser<'a, G> {
    /// Consume the current token and scan the next one.
    ///
    /// Returns the type of the token that was consumed.
    pub fn advance(&mut self) -> LexResult<TokenType> {
        self.skip_whitespace_and_comments()?;

        self.token_start = self.cursor.snapshot();
        let previous = self.current_type;
        self.current_type = self.match_next_token()?;
        self.location = self.cursor.span_from(self.token_start).with_file(self.file_id);

        trace!(
            kind = %self.current_type.text(),
            line = self.location.line,
            column = self.location.column,
            "scanned token"
        );
        Ok(previous)
    }

    fn match_next_token(&mut self) -> LexResult<TokenType> {
        let c = self.cursor.current_char();

        if !self.cursor.is_at_end() && self.grammar.is_identifier_start(c) {
            return self.scan_identifier_or_keyword();
        }

        if self.cursor.is_digit() {
            return self.parse_numeric_literal(false);
        }

        // `-1` is a literal but `- 1` is an operator followed by a literal.
        if c == '-' && self.cursor.peek_char(1).is_ascii_digit() {
            self.cursor.advance();
            return self.parse_numeric_literal(true);
        }

        if c == '"' || c == '\'' {
            self.parse_string_literal(c)?;
            return Ok(TokenType::LITERAL_STRING);
        }

        if c == '.' {
            if let Some(kind) = self.parse_float_literal()? {
                return Ok(kind);
            }
        }

        self.match_operator_or_end(c)
    }

    /// Start of the current token, for a later [`reset_position`](Self::reset_position).
    pub fn current_position(&self) -> CursorSnapshot {
        self.token_start
    }

    /// Rewind (or skip ahead) to `position` and rescan from there.
    pub fn reset_position(&mut self, position: CursorSnapshot) -> LexResult<()> {
        self.cursor.restore(position);
        self.advance().map(|_| ())
    }

    #[inline]
    pub fn matches(&self, token_type: TokenType) -> bool {
        self.current_type == token_type
    }

    /// Is the current token the identifier `name`.
    pub fn matches_identifier(&self, name: &str) -> bool {
        self.matches(TokenType::IDENTIFIER) && self.current_string_value == name
    }

    pub fn matches_any(&self, types: &[TokenType]) -> bool {
        types.iter().any(|&t| self.matches(t))
    }

    /// Consume the current token if it is `expected`.
    pub fn match_if(&mut self, expected: TokenType) -> LexResult<bool> {
        if self.matches(expected) {
            self.advance()?;
            return Ok(true);
        }
        Ok(false)
    }

    /// Re-tag the current token as `replacement` if it is `expected`,
    /// without consuming it.
    ///
    /// Parsers use this to turn an identifier into a contextual keyword
    /// once they know which one it is.
    pub fn match_and_replace_if(&mut self, expected: TokenType, replacement: TokenType) -> bool {
        if self.matches(expected) {
            self.current_type = replacement;
            return true;
        }
        false
    }

    /// Consume the current token if it is the identifier `text`, or if its
    /// type is spelled `text`.
    pub fn match_if_keyword_or_identifier(&mut self, text: &str) -> LexResult<bool> {
        if self.matches_identifier(text) || self.current_type.text() == text {
            self.advance()?;
            return Ok(true);
        }
        Ok(false)
    }

    /// Consume the current token, which must be `expected`.
    pub fn expect(&mut self, expected: TokenType) -> LexResult<()> {
        if self.match_if(expected)? {
            return Ok(());
        }
        Err(self.error(
            LexErrorKind::FoundWhenExpecting {
                found: self.current_type.description(),
                expected: expected.description(),
            },
            self.location,
        ))
    }

    /// Consume an identifier and return its name.
    pub fn read_identifier(&mut self) -> LexResult<String> {
        let name = self.current_string_value.clone();
        self.expect(TokenType::IDENTIFIER)?;
        Ok(name)
    }

    /// Error spanning from the start of the token being scanned to the cursor.
    pub(super) fn error_at_token(&self, kind: LexErrorKind) -> LexError {
        self.error(kind, self.cursor.span_from(self.token_start))
    }

    /// Error pointing at the character under the cursor.
    pub(super) fn error_at_cursor(&self, kind: LexErrorKind) -> LexError {
        self.error(kind, self.cursor.snapshot().to_span())
    }

    pub(super) fn error(&self, kind: LexErrorKind, span: Span) -> LexError {
        let span = span.with_file(self.file_id);
        debug!(
            code = %kind.code(),
            line = span.line,
            column = span.column,
            "lexical error: {}",
            kind
        );
        LexError::new(kind, span)
    }
}
