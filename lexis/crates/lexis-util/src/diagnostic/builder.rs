//! Fluent construction of diagnostics and source snippets.

use super::{Diagnostic, DiagnosticCode, Handler, Level};
use crate::span::Span;

/// One source line with an underlined column range.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceSnippet {
    pub line: String,
    /// 1-based
    pub line_number: usize,
    /// 1-based, inclusive
    pub start_column: usize,
    /// 1-based, exclusive
    pub end_column: usize,
    pub label: Option<String>,
}

impl SourceSnippet {
    pub fn new(
        line: impl Into<String>,
        line_number: usize,
        start_column: usize,
        end_column: usize,
    ) -> Self {
        Self {
            line: line.into(),
            line_number,
            start_column,
            end_column,
            label: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Render the gutter, the line, and a caret underline.
    ///
    /// ```
    /// use lexis_util::diagnostic::SourceSnippet;
    ///
    /// let out = SourceSnippet::new("let x = 0777;", 1, 9, 13).format();
    /// assert_eq!(out, "  1 | let x = 0777;\n    |         ^^^^");
    /// ```
    pub fn format(&self) -> String {
        let width = self.line_number.to_string().len().max(3);
        let indent = self.start_column.saturating_sub(1);
        let carets = self.end_column.saturating_sub(self.start_column).max(1);

        let mut result = format!(
            "{:>width$} | {}\n{:>width$} | {}{}",
            self.line_number,
            self.line,
            "",
            " ".repeat(indent),
            "^".repeat(carets),
        );
        if let Some(label) = &self.label {
            result.push(' ');
            result.push_str(label);
        }
        result
    }
}

/// Builder for [`Diagnostic`].
#[must_use]
pub struct DiagnosticBuilder {
    diagnostic: Diagnostic,
}

impl DiagnosticBuilder {
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            diagnostic: Diagnostic::new(level, message, Span::DUMMY),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Level::Error, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Level::Warning, message)
    }

    pub fn code(mut self, code: DiagnosticCode) -> Self {
        self.diagnostic.code = Some(code);
        self
    }

    pub fn span(mut self, span: Span) -> Self {
        self.diagnostic.span = span;
        self
    }

    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.diagnostic.notes.push(note.into());
        self
    }

    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.diagnostic.helps.push(help.into());
        self
    }

    pub fn snippet(mut self, snippet: SourceSnippet) -> Self {
        self.diagnostic.snippets.push(snippet);
        self
    }

    pub fn build(self) -> Diagnostic {
        self.diagnostic
    }

    pub fn emit(self, handler: &Handler) {
        handler.emit_diagnostic(self.build());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snippet_format_with_label() {
        let snippet = SourceSnippet::new("x = \"abc", 3, 5, 9).with_label("string starts here");
        assert_eq!(
            snippet.format(),
            "  3 | x = \"abc\n    |     ^^^^ string starts here"
        );
    }

    #[test]
    fn test_snippet_empty_range_gets_one_caret() {
        let snippet = SourceSnippet::new("abc", 1, 2, 2);
        assert!(snippet.format().ends_with("|  ^"));
    }

    #[test]
    fn test_snippet_wide_line_numbers() {
        let snippet = SourceSnippet::new("x", 12345, 1, 2);
        assert!(snippet.format().starts_with("12345 | x\n      | ^"));
    }

    #[test]
    fn test_builder_fluent() {
        let diag = DiagnosticBuilder::error("unterminated comment")
            .code(DiagnosticCode::E_LEXER_UNTERMINATED_COMMENT)
            .span(Span::new(0, 2, 1, 1))
            .note("block comments do not nest")
            .help("add a closing `*/`")
            .build();

        assert_eq!(diag.level, Level::Error);
        assert_eq!(diag.code, Some(DiagnosticCode::E_LEXER_UNTERMINATED_COMMENT));
        assert_eq!(diag.notes, vec!["block comments do not nest"]);
        assert_eq!(diag.helps, vec!["add a closing `*/`"]);
        assert_eq!(diag.span.end, 2);
    }

    #[test]
    fn test_builder_emit() {
        let handler = Handler::new();
        DiagnosticBuilder::warning("odd spacing").emit(&handler);
        assert_eq!(handler.warning_count(), 1);
        assert!(!handler.has_errors());
    }
}
