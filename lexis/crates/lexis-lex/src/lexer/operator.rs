//! Operator matching and the end-of-dispatch fallbacks.

use super::Tokeniser;
use crate::error::{LexErrorKind, LexResult};
use crate::grammar::Grammar;
use crate::token::TokenType;

impl<'a, G: Grammar + ?Sized> Tokeniser<'a, G> {
    /// Last stage of dispatch: an operator, end of file, or an error for
    /// whatever `c` is.
    pub(super) fn match_operator_or_end(&mut self, c: char) -> LexResult<TokenType> {
        if let Some(operator) = self.grammar.match_operator(&mut self.cursor) {
            return Ok(operator);
        }

        // Identifiers never start with `_`, so `_name` is a mistake rather
        // than two tokens.
        if c == '_' && self.grammar.is_identifier_body(self.cursor.peek_char(1)) {
            return Err(self.error_at_token(LexErrorKind::NoLeadingUnderscore));
        }

        if !self.cursor.is_at_end() {
            self.cursor.advance();
            return Err(self.error_at_token(LexErrorKind::IllegalCharacter(c)));
        }

        Ok(TokenType::EOF)
    }
}
