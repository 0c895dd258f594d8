//! Registry of loaded source files and line lookup.

use std::sync::Arc;

use super::{FileId, Span};
use crate::diagnostic::SourceSnippet;
use crate::error::{SourceMapError, SourceMapResult};

/// One loaded file with precomputed line starts.
#[derive(Clone)]
pub struct SourceFile {
    id: FileId,
    name: String,
    content: Arc<str>,
    line_starts: Arc<[usize]>,
}

impl SourceFile {
    pub fn new(id: FileId, name: impl Into<String>, content: impl Into<Arc<str>>) -> Self {
        let content = content.into();
        let line_starts = std::iter::once(0)
            .chain(content.match_indices('\n').map(|(i, _)| i + 1))
            .collect();
        Self {
            id,
            name: name.into(),
            content,
            line_starts,
        }
    }

    #[inline]
    pub fn id(&self) -> FileId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn content(&self) -> &str {
        &self.content
    }

    #[inline]
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// 1-based (line, column) of a byte offset. Columns count characters.
    pub fn line_col(&self, offset: usize) -> (usize, usize) {
        let offset = offset.min(self.content.len());
        let line = match self.line_starts.binary_search(&offset) {
            Ok(line) => line,
            Err(insert_point) => insert_point - 1,
        };
        let line_start = self.line_starts[line];
        let column = self
            .content
            .get(line_start..offset)
            .map_or(offset - line_start, |text| text.chars().count());
        (line + 1, column + 1)
    }

    /// Text of a 1-based line, without its terminator.
    pub fn line_text(&self, line: usize) -> SourceMapResult<&str> {
        let invalid = || SourceMapError::InvalidLineNumber {
            line,
            max_lines: self.line_count(),
        };
        let start = line
            .checked_sub(1)
            .and_then(|l| self.line_starts.get(l).copied())
            .ok_or_else(invalid)?;
        let end = self
            .line_starts
            .get(line)
            .copied()
            .unwrap_or(self.content.len());
        Ok(self.content[start..end].trim_end_matches(['\n', '\r']))
    }

    /// Text between two byte offsets.
    pub fn extract(&self, start: usize, end: usize) -> SourceMapResult<&str> {
        if start > end {
            return Err(SourceMapError::InvalidSpan { start, end });
        }
        if end > self.content.len() {
            return Err(SourceMapError::SpanOutOfBounds {
                file_len: self.content.len(),
                span_start: start,
                span_end: end,
            });
        }
        self.content
            .get(start..end)
            .ok_or(SourceMapError::NotCharBoundary { start, end })
    }
}

impl std::fmt::Debug for SourceFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceFile")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("line_count", &self.line_count())
            .finish()
    }
}

/// All files of one run, addressed by [`FileId`].
#[derive(Default)]
pub struct SourceMap {
    files: Vec<Arc<SourceFile>>,
}

impl SourceMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_file(&mut self, name: impl Into<String>, content: impl Into<Arc<str>>) -> FileId {
        let id = FileId(self.files.len());
        self.files.push(Arc::new(SourceFile::new(id, name, content)));
        id
    }

    pub fn get_file(&self, id: FileId) -> SourceMapResult<Arc<SourceFile>> {
        self.files
            .get(id.0)
            .cloned()
            .ok_or_else(|| SourceMapError::FileNotFound(format!("FileId({})", id.0)))
    }

    #[inline]
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// `name:line:column` for a span.
    pub fn location(&self, span: Span) -> SourceMapResult<String> {
        let file = self.get_file(span.file_id)?;
        Ok(format!("{}:{}:{}", file.name(), span.line, span.column))
    }

    /// The source line a span starts on, with the span underlined.
    ///
    /// Spans that run past the end of their first line are clipped to it.
    pub fn snippet(&self, span: Span) -> SourceMapResult<SourceSnippet> {
        let file = self.get_file(span.file_id)?;
        let line = file.line_text(span.line as usize)?;
        let start_column = span.column as usize;
        let width = file
            .extract(span.start, span.end)
            .map(|text| text.lines().next().unwrap_or("").chars().count())
            .unwrap_or(0);
        Ok(SourceSnippet::new(
            line,
            span.line as usize,
            start_column,
            start_column + width,
        ))
    }
}
