//! Character cursor over in-memory source text.
//!
//! The cursor walks a `&str` one `char` at a time while tracking the byte
//! offset and the 1-based line/column of the next character. Past the end,
//! every peek returns `'\0'` and every advance is a no-op, so scanners can
//! look ahead without bounds checks and test [`Cursor::is_at_end`] when the
//! difference matters.
//!
//! Positions are saved and restored as [`CursorSnapshot`] values, which is
//! how the literal scanners back out of a failed attempt and how callers
//! re-scan speculatively.

use lexis_util::span::Span;

const BYTE_ORDER_MARK: char = '\u{FEFF}';

#[derive(Clone)]
pub struct Cursor<'a> {
    source: &'a str,

    /// Byte offset of the next character
    position: usize,

    line: u32,

    /// Counted in characters
    column: u32,
}

/// A saved cursor position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CursorSnapshot {
    pub position: usize,
    pub line: u32,
    pub column: u32,
}

impl CursorSnapshot {
    /// Empty span at this position.
    pub fn to_span(self) -> Span {
        Span::point(self.position, self.line, self.column)
    }
}

impl<'a> Cursor<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Step over a leading byte-order mark without counting it as a column.
    pub fn skip_bom(&mut self) {
        if self.position == 0 && self.starts_with_char(BYTE_ORDER_MARK) {
            self.position = BYTE_ORDER_MARK.len_utf8();
        }
    }

    fn starts_with_char(&self, c: char) -> bool {
        self.remaining().starts_with(c)
    }

    /// The next character, or `'\0'` at end of input.
    #[inline]
    pub fn current_char(&self) -> char {
        match self.source.as_bytes().get(self.position) {
            Some(&b) if b < 0x80 => b as char,
            Some(_) => self.remaining().chars().next().unwrap_or('\0'),
            None => '\0',
        }
    }

    /// The character `offset` characters ahead, or `'\0'` past the end.
    #[inline]
    pub fn peek_char(&self, offset: usize) -> char {
        if offset == 0 {
            return self.current_char();
        }
        self.remaining().chars().nth(offset).unwrap_or('\0')
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Is the next character an ASCII decimal digit.
    #[inline]
    pub fn is_digit(&self) -> bool {
        self.current_char().is_ascii_digit()
    }

    /// Move past one character.
    #[inline]
    pub fn advance(&mut self) {
        let c = self.current_char();
        if self.is_at_end() {
            return;
        }
        self.position += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
    }

    /// Move past one character and return it.
    #[inline]
    pub fn get_and_advance(&mut self) -> char {
        let c = self.current_char();
        self.advance();
        c
    }

    /// Move past up to `count` characters.
    pub fn advance_n(&mut self, count: usize) {
        for _ in 0..count {
            if self.is_at_end() {
                break;
            }
            self.advance();
        }
    }

    /// Move forward until at least `count` bytes have been consumed.
    ///
    /// Stops at the end of input, and never leaves the cursor inside a
    /// multi-byte character.
    pub fn advance_bytes(&mut self, count: usize) {
        let target = self.position.saturating_add(count).min(self.source.len());
        while self.position < target {
            self.advance();
        }
    }

    #[inline]
    pub fn starts_with(&self, text: &str) -> bool {
        self.remaining().starts_with(text)
    }

    /// If the upcoming text begins with one of `candidates`, move past the
    /// longest such candidate and return true.
    pub fn advance_if_starts_with(&mut self, candidates: &[&str]) -> bool {
        let best = candidates
            .iter()
            .filter(|c| !c.is_empty() && self.starts_with(c))
            .map(|c| c.len())
            .max();
        match best {
            Some(len) => {
                self.advance_bytes(len);
                true
            }
            None => false,
        }
    }

    /// Move to the next occurrence of `needle`.
    ///
    /// Returns false, leaving the cursor at end of input, when there is none.
    pub fn find(&mut self, needle: &str) -> bool {
        match self.remaining().find(needle) {
            Some(offset) => {
                self.advance_bytes(offset);
                true
            }
            None => {
                self.advance_bytes(self.source.len() - self.position);
                false
            }
        }
    }

    pub fn skip_whitespace(&mut self) {
        while !self.is_at_end() && self.current_char().is_whitespace() {
            self.advance();
        }
    }

    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }

    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Text from byte offset `start` up to the cursor.
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.position]
    }

    #[inline]
    pub fn remaining(&self) -> &'a str {
        &self.source[self.position..]
    }

    pub fn source(&self) -> &'a str {
        self.source
    }

    pub fn snapshot(&self) -> CursorSnapshot {
        CursorSnapshot {
            position: self.position,
            line: self.line,
            column: self.column,
        }
    }

    pub fn restore(&mut self, snapshot: CursorSnapshot) {
        self.position = snapshot.position;
        self.line = snapshot.line;
        self.column = snapshot.column;
    }

    /// Span from `start` up to the cursor.
    pub fn span_from(&self, start: CursorSnapshot) -> Span {
        Span::new(start.position, self.position, start.line, start.column)
    }
}
