//! Error types for the util crate.

use thiserror::Error;

/// Errors raised while resolving interned symbols.
#[derive(Debug, Error)]
pub enum SymbolError {
    /// The index does not name an entry of the string table.
    #[error("symbol not found: index {index}")]
    NotFound { index: u32 },
}

/// Errors raised by [`SourceMap`](crate::span::SourceMap) lookups.
#[derive(Debug, Error)]
pub enum SourceMapError {
    #[error("file not found: {0}")]
    FileNotFound(String),

    #[error("invalid span: start {start} > end {end}")]
    InvalidSpan { start: usize, end: usize },

    #[error("span out of bounds: file has {file_len} bytes, span is {span_start}..{span_end}")]
    SpanOutOfBounds {
        file_len: usize,
        span_start: usize,
        span_end: usize,
    },

    #[error("invalid line number: {line} (file has {max_lines} lines)")]
    InvalidLineNumber { line: usize, max_lines: usize },

    /// The range splits a multi-byte character.
    #[error("range {start}..{end} is not on character boundaries")]
    NotCharBoundary { start: usize, end: usize },
}

/// Errors raised while rendering diagnostics.
#[derive(Debug, Error)]
pub enum DiagnosticError {
    #[error("failed to render diagnostic: {0}")]
    Render(#[from] SourceMapError),

    #[error("failed to format diagnostic: {0}")]
    Format(#[from] std::fmt::Error),
}

pub type SymbolResult<T> = std::result::Result<T, SymbolError>;

pub type SourceMapResult<T> = std::result::Result<T, SourceMapError>;

pub type DiagnosticResult<T> = std::result::Result<T, DiagnosticError>;
