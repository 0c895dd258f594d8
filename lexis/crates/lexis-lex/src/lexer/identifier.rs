//! Identifier and keyword scanning.

use super::Tokeniser;
use crate::error::{LexErrorKind, LexResult};
use crate::grammar::Grammar;
use crate::token::TokenType;

/// Longest identifier accepted, in characters.
pub const MAX_IDENTIFIER_LENGTH: usize = 256;

impl<'a, G: Grammar + ?Sized> Tokeniser<'a, G> {
    /// Scans a maximal run of identifier characters. A run spelling a
    /// keyword yields the keyword and leaves the string value alone.
    pub(super) fn scan_identifier_or_keyword(&mut self) -> LexResult<TokenType> {
        let start = self.cursor.position();
        self.cursor.advance();

        let mut length = 1;
        while !self.cursor.is_at_end()
            && self.grammar.is_identifier_body(self.cursor.current_char())
        {
            length += 1;
            if length > MAX_IDENTIFIER_LENGTH {
                return Err(self.error_at_token(LexErrorKind::IdentifierTooLong));
            }
            self.cursor.advance();
        }

        let text = self.cursor.slice_from(start);
        if let Some(keyword) = self.grammar.match_keyword(text) {
            return Ok(keyword);
        }

        self.current_string_value.clear();
        self.current_string_value.push_str(text);
        Ok(TokenType::IDENTIFIER)
    }
}
