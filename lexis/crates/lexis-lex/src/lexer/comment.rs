//! Whitespace and comment skipping.

use super::Tokeniser;
use crate::error::{LexErrorKind, LexResult};
use crate::grammar::Grammar;

impl<'a, G: Grammar + ?Sized> Tokeniser<'a, G> {
    /// Skips whitespace, `// line` comments and `/* block */` comments.
    /// Block comments do not nest.
    pub(super) fn skip_whitespace_and_comments(&mut self) -> LexResult<()> {
        loop {
            self.cursor.skip_whitespace();

            if self.cursor.current_char() != '/' {
                return Ok(());
            }

            match self.cursor.peek_char(1) {
                '/' => {
                    self.cursor.find("\n");
                }
                '*' => {
                    let opener = self.cursor.snapshot();
                    self.cursor.advance_n(2);
                    if !self.cursor.find("*/") {
                        let span = self.cursor.span_from(opener);
                        return Err(self.error(LexErrorKind::UnterminatedComment, span));
                    }
                    self.cursor.advance_n(2);
                }
                _ => return Ok(()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::grammar;
    use crate::token::TokenType;
    use crate::{LexErrorKind, Tokeniser};

    #[test]
    fn test_line_comment() {
        let mut tok = Tokeniser::new("// lead\nx // trailing\n// last", grammar::source()).unwrap();
        assert!(tok.matches_identifier("x"));
        assert_eq!(tok.location().line, 2);
        tok.advance().unwrap();
        assert_eq!(tok.current_type(), TokenType::EOF);
    }

    #[test]
    fn test_block_comment() {
        let tok = Tokeniser::new("/* a\n * b */ y", grammar::source()).unwrap();
        assert!(tok.matches_identifier("y"));
        assert_eq!((tok.location().line, tok.location().column), (2, 9));
    }

    #[test]
    fn test_block_comments_do_not_nest() {
        let mut tok = Tokeniser::new("/* /* */ z */", grammar::source()).unwrap();
        assert!(tok.matches_identifier("z"));
        tok.advance().unwrap();
        assert_eq!(tok.current_type(), TokenType::new("*"));
    }

    #[test]
    fn test_unterminated_block_comment_points_at_opener() {
        let err = Tokeniser::new("a\n  /* never closed", grammar::source())
            .and_then(|mut tok| tok.advance())
            .unwrap_err();
        assert_eq!(err.kind, LexErrorKind::UnterminatedComment);
        assert_eq!((err.span.line, err.span.column), (2, 3));
        assert_eq!(err.span.start, 4);
    }

    #[test]
    fn test_opener_cannot_close_itself() {
        let err = Tokeniser::new("/*/", grammar::source()).err().unwrap();
        assert_eq!(err.kind, LexErrorKind::UnterminatedComment);
    }

    #[test]
    fn test_division_is_not_a_comment() {
        let mut tok = Tokeniser::new("a / b", grammar::source()).unwrap();
        tok.advance().unwrap();
        assert_eq!(tok.current_type(), TokenType::new("/"));
    }
}
