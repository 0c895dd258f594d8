//! Numeric literal scanning.
//!
//! Forms are tried in a fixed order: hex, float, octal, binary, decimal.
//! A form that does not fit leaves the cursor where it was so the next can
//! try. Octal-looking input is recognised only so it can be rejected.
//!
//! Integer digits accumulate into a `u64` magnitude; the sign and the
//! 32/64-bit range checks are applied once the suffix is known.

use super::Tokeniser;
use crate::error::{LexErrorKind, LexResult};
use crate::grammar::Grammar;
use crate::token::TokenType;
use crate::unicode::digit_value;

const INT64_SUFFIXES: &[&str] = &["i64", "_i64", "L", "_L"];
const INT32_SUFFIXES: &[&str] = &["i32", "_i32"];
const FLOAT64_SUFFIXES: &[&str] = &["f64", "_f64"];
const FLOAT32_SUFFIXES: &[&str] = &["f32", "_f32", "f", "_f"];

/// An integer literal before its sign is applied.
#[derive(Clone, Copy, Debug)]
struct IntLiteral {
    magnitude: u64,
    kind: TokenType,
}

impl<'a, G: Grammar + ?Sized> Tokeniser<'a, G> {
    /// Scans a numeric literal at the cursor. With `negative`, a `-` has
    /// already been consumed and the value is negated.
    pub(super) fn parse_numeric_literal(&mut self, negative: bool) -> LexResult<TokenType> {
        if let Some(literal) = self.parse_prefixed_literal(['x', 'X'], 16)? {
            return self.check_int_literal_range(literal, negative);
        }

        if let Some(kind) = self.parse_float_literal()? {
            if negative {
                self.literal_double_value = -self.literal_double_value;
            }
            return Ok(kind);
        }

        if self.parse_octal_literal()? {
            return Err(self.error_at_token(LexErrorKind::NoOctalLiterals));
        }

        if let Some(literal) = self.parse_prefixed_literal(['b', 'B'], 2)? {
            return self.check_int_literal_range(literal, negative);
        }

        if let Some(literal) = self.parse_decimal_literal()? {
            return self.check_int_literal_range(literal, negative);
        }

        Err(self.error_at_token(LexErrorKind::ErrorInNumericLiteral))
    }

    /// `0x…` or `0b…`. Needs at least one digit after the marker.
    fn parse_prefixed_literal(
        &mut self,
        markers: [char; 2],
        base: u32,
    ) -> LexResult<Option<IntLiteral>> {
        if self.cursor.current_char() != '0'
            || !markers.contains(&self.cursor.peek_char(1))
            || digit_value(self.cursor.peek_char(2), base).is_none()
        {
            return Ok(None);
        }

        self.cursor.advance_n(2);
        let magnitude = self.accumulate_digits(base)?;
        self.finish_int_literal(magnitude).map(Some)
    }

    fn parse_decimal_literal(&mut self) -> LexResult<Option<IntLiteral>> {
        if !self.cursor.is_digit() {
            return Ok(None);
        }
        let magnitude = self.accumulate_digits(10)?;
        self.finish_int_literal(magnitude).map(Some)
    }

    /// Returns true if a `0` followed by more digits is at the cursor. An
    /// `8` or `9` in that run is an error of its own.
    fn parse_octal_literal(&mut self) -> LexResult<bool> {
        if self.cursor.current_char() != '0' {
            return Ok(false);
        }

        let start = self.cursor.snapshot();
        self.cursor.advance();

        let mut digits = 0;
        loop {
            match self.cursor.current_char() {
                '0'..='7' => digits += 1,
                '8' | '9' => return Err(self.error_at_token(LexErrorKind::DecimalDigitInOctal)),
                _ => break,
            }
            self.cursor.advance();
        }

        if digits == 0 {
            self.cursor.restore(start);
            return Ok(false);
        }
        Ok(true)
    }

    fn accumulate_digits(&mut self, base: u32) -> LexResult<u64> {
        let mut value: u64 = 0;
        while let Some(digit) = digit_value(self.cursor.current_char(), base) {
            value = value
                .checked_mul(u64::from(base))
                .and_then(|v| v.checked_add(u64::from(digit)))
                .ok_or_else(|| self.error_at_token(LexErrorKind::IntegerLiteralTooLarge))?;
            self.cursor.advance();
        }
        Ok(value)
    }

    fn finish_int_literal(&mut self, magnitude: u64) -> LexResult<IntLiteral> {
        let kind = self.parse_int_suffix();
        self.check_character_after_literal()?;
        Ok(IntLiteral { magnitude, kind })
    }

    fn parse_int_suffix(&mut self) -> TokenType {
        if self.cursor.advance_if_starts_with(INT64_SUFFIXES) {
            return TokenType::LITERAL_INT64;
        }
        self.cursor.advance_if_starts_with(INT32_SUFFIXES);
        TokenType::LITERAL_INT32
    }

    fn check_int_literal_range(
        &mut self,
        literal: IntLiteral,
        negative: bool,
    ) -> LexResult<TokenType> {
        let IntLiteral { magnitude, kind } = literal;
        let (max_positive, max_negative) = if kind == TokenType::LITERAL_INT64 {
            (i64::MAX as u64, i64::MIN.unsigned_abs())
        } else {
            (i32::MAX as u64, u64::from(i32::MIN.unsigned_abs()))
        };

        if negative && magnitude > max_negative {
            return Err(self.error_at_token(LexErrorKind::IntegerLiteralTooLow));
        }
        if !negative && magnitude > max_positive {
            return Err(self.error_at_token(LexErrorKind::IntegerLiteralTooLarge));
        }

        // i64::MIN's magnitude wraps to itself under negation.
        let value = magnitude as i64;
        self.literal_int_value = if negative { value.wrapping_neg() } else { value };
        Ok(kind)
    }

    /// Digits with a decimal point, an exponent, or both. Leaves the cursor
    /// alone and returns `None` for anything else, including a bare `.`.
    pub(super) fn parse_float_literal(&mut self) -> LexResult<Option<TokenType>> {
        let start = self.cursor.snapshot();

        let mut digits = self.skip_decimal_digits();
        let has_point = self.cursor.current_char() == '.';
        if has_point {
            self.cursor.advance();
            digits += self.skip_decimal_digits();
        }

        if digits == 0 {
            self.cursor.restore(start);
            return Ok(None);
        }

        let has_exponent = matches!(self.cursor.current_char(), 'e' | 'E');
        if has_exponent {
            self.cursor.advance();
            if matches!(self.cursor.current_char(), '+' | '-') {
                self.cursor.advance();
            }
            if self.skip_decimal_digits() == 0 {
                self.cursor.restore(start);
                return Ok(None);
            }
        }

        if !(has_point || has_exponent) {
            self.cursor.restore(start);
            return Ok(None);
        }

        let value = match self.cursor.slice_from(start.position).parse::<f64>() {
            Ok(value) if value.is_finite() => value,
            _ => return Err(self.error_at_token(LexErrorKind::ErrorInNumericLiteral)),
        };

        self.literal_double_value = value;
        let kind = self.parse_float_suffix();
        self.check_character_after_literal()?;
        Ok(Some(kind))
    }

    fn skip_decimal_digits(&mut self) -> usize {
        let mut count = 0;
        while self.cursor.is_digit() {
            self.cursor.advance();
            count += 1;
        }
        count
    }

    fn parse_float_suffix(&mut self) -> TokenType {
        if self.cursor.advance_if_starts_with(FLOAT64_SUFFIXES) {
            return TokenType::LITERAL_FLOAT64;
        }
        if self.cursor.advance_if_starts_with(FLOAT32_SUFFIXES) {
            return TokenType::LITERAL_FLOAT32;
        }
        TokenType::LITERAL_FLOAT64
    }

    /// A literal may not run straight into a digit or identifier character.
    pub(super) fn check_character_after_literal(&self) -> LexResult<()> {
        let c = self.cursor.current_char();
        if !self.cursor.is_at_end() && (c.is_ascii_digit() || self.grammar.is_identifier_body(c)) {
            return Err(self.error_at_cursor(LexErrorKind::UnrecognisedLiteralSuffix));
        }
        Ok(())
    }
}
