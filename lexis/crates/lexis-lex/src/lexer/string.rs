//! String literal scanning.
//!
//! Either quote opens a literal and only the same quote closes it. Decoded
//! characters are re-encoded into a reused byte buffer, which becomes the
//! current string value.

use super::Tokeniser;
use crate::error::{LexErrorKind, LexResult};
use crate::grammar::Grammar;
use crate::unicode::{
    append_utf8, combine_surrogates, hex_digit_value, is_high_surrogate, is_low_surrogate,
};

impl<'a, G: Grammar + ?Sized> Tokeniser<'a, G> {
    /// The cursor is on the opening `quote`.
    pub(super) fn parse_string_literal(&mut self, quote: char) -> LexResult<()> {
        self.cursor.advance();

        let mut buffer = std::mem::take(&mut self.current_string_value).into_bytes();
        buffer.clear();

        loop {
            if self.cursor.is_at_end() {
                return Err(self.error_at_token(LexErrorKind::EndOfInputInStringConstant));
            }

            let c = self.cursor.get_and_advance();
            if c == quote {
                break;
            }

            let codepoint = if c == '\\' {
                self.parse_escape_sequence()?
            } else {
                u32::from(c)
            };
            append_utf8(&mut buffer, codepoint);
        }

        self.current_string_value = String::from_utf8(buffer)
            .map_err(|_| self.error_at_token(LexErrorKind::ErrorInEscapeCode))?;
        self.check_character_after_literal()
    }

    /// The backslash has been consumed.
    fn parse_escape_sequence(&mut self) -> LexResult<u32> {
        if self.cursor.is_at_end() {
            return Err(self.error_at_token(LexErrorKind::EndOfInputInStringConstant));
        }

        let codepoint = match self.cursor.get_and_advance() {
            'a' => 0x07,
            'b' => 0x08,
            'f' => 0x0C,
            'n' => 0x0A,
            'r' => 0x0D,
            't' => 0x09,
            'u' => return self.parse_unicode_escape(),
            // `\"`, `\'`, `\\`, `\/` and anything unrecognised
            other => u32::from(other),
        };
        Ok(codepoint)
    }

    /// `\uXXXX`, or a `\uD8xx\uDCxx` surrogate pair.
    fn parse_unicode_escape(&mut self) -> LexResult<u32> {
        let unit = self.read_hex_quad()?;
        if is_low_surrogate(unit) {
            return Err(self.error_at_cursor(LexErrorKind::ErrorInEscapeCode));
        }
        if !is_high_surrogate(unit) {
            return Ok(unit);
        }

        if !self.cursor.starts_with("\\u") {
            return Err(self.error_at_cursor(LexErrorKind::ErrorInEscapeCode));
        }
        self.cursor.advance_n(2);

        let low = self.read_hex_quad()?;
        if !is_low_surrogate(low) {
            return Err(self.error_at_cursor(LexErrorKind::ErrorInEscapeCode));
        }
        Ok(combine_surrogates(unit, low))
    }

    fn read_hex_quad(&mut self) -> LexResult<u32> {
        let mut value = 0;
        for _ in 0..4 {
            let digit = hex_digit_value(self.cursor.current_char())
                .ok_or_else(|| self.error_at_cursor(LexErrorKind::ErrorInEscapeCode))?;
            self.cursor.advance();
            value = (value << 4) | digit;
        }
        Ok(value)
    }
}
