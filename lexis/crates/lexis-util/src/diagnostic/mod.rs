//! Diagnostics: structured error reports and their rendering.
//!
//! Producers build a [`Diagnostic`] (usually through [`DiagnosticBuilder`])
//! and hand it to a [`Handler`], which collects them until the driver renders
//! the lot against a [`SourceMap`].
//!
//! ```text
//! error[E1008]: decimal digit in octal constant
//!   --> main.src:1:9
//!   1 | let x = 0779;
//!     |         ^^^^
//!   = help: write the value in decimal or with a 0x prefix
//! ```

mod builder;
mod codes;

pub use builder::{DiagnosticBuilder, SourceSnippet};
pub use codes::DiagnosticCode;

use std::cell::RefCell;
use std::fmt::{self, Write as _};

use crate::error::DiagnosticResult;
use crate::span::{SourceMap, Span};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    Error,
    Warning,
    Note,
    Help,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Level::Error => "error",
            Level::Warning => "warning",
            Level::Note => "note",
            Level::Help => "help",
        })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Diagnostic {
    pub level: Level,
    pub message: String,
    pub span: Span,
    pub code: Option<DiagnosticCode>,
    pub notes: Vec<String>,
    pub helps: Vec<String>,
    pub snippets: Vec<SourceSnippet>,
}

impl Diagnostic {
    pub fn new(level: Level, message: impl Into<String>, span: Span) -> Self {
        Self {
            level,
            message: message.into(),
            span,
            code: None,
            notes: Vec::new(),
            helps: Vec::new(),
            snippets: Vec::new(),
        }
    }

    pub fn error(message: impl Into<String>, span: Span) -> Self {
        Self::new(Level::Error, message, span)
    }

    pub fn with_code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.helps.push(help.into());
        self
    }

    /// Header line only, e.g. `error[E1002]: illegal character 'ä'`.
    pub fn headline(&self) -> String {
        match self.code {
            Some(code) => format!("{}[{}]: {}", self.level, code, self.message),
            None => format!("{}: {}", self.level, self.message),
        }
    }

    /// Full multi-line rendering.
    ///
    /// Without explicit snippets, one is derived from `span` when the span
    /// carries a real position.
    pub fn render(&self, sources: &SourceMap) -> DiagnosticResult<String> {
        let mut out = self.headline();

        if self.span.line > 0 {
            write!(out, "\n  --> {}", sources.location(self.span)?)?;
        }

        if self.snippets.is_empty() && self.span.line > 0 {
            write!(out, "\n{}", sources.snippet(self.span)?.format())?;
        }
        for snippet in &self.snippets {
            write!(out, "\n{}", snippet.format())?;
        }

        for note in &self.notes {
            write!(out, "\n  = note: {}", note)?;
        }
        for help in &self.helps {
            write!(out, "\n  = help: {}", help)?;
        }
        Ok(out)
    }
}

/// Collects diagnostics emitted during a run.
#[derive(Default)]
pub struct Handler {
    diagnostics: RefCell<Vec<Diagnostic>>,
}

impl Handler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn emit_diagnostic(&self, diagnostic: Diagnostic) {
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    pub fn build_error(&self, span: Span, message: impl Into<String>) -> DiagnosticBuilder {
        DiagnosticBuilder::error(message).span(span)
    }

    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }

    pub fn error_count(&self) -> usize {
        self.count(Level::Error)
    }

    pub fn warning_count(&self) -> usize {
        self.count(Level::Warning)
    }

    fn count(&self, level: Level) -> usize {
        self.diagnostics
            .borrow()
            .iter()
            .filter(|d| d.level == level)
            .count()
    }

    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }

    /// Render every collected diagnostic, separated by blank lines.
    pub fn render_all(&self, sources: &SourceMap) -> DiagnosticResult<String> {
        let rendered = self
            .diagnostics
            .borrow()
            .iter()
            .map(|d| d.render(sources))
            .collect::<DiagnosticResult<Vec<_>>>()?;
        Ok(rendered.join("\n\n"))
    }

    pub fn clear(&self) {
        self.diagnostics.borrow_mut().clear();
    }
}
