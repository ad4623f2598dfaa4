//! Source positions and the per-document offset oracle.

use memchr::memchr_iter;

/// A 1-based line/column location in a document's source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SourcePosition {
    pub line: u64,
    pub column: u64,
}

impl SourcePosition {
    pub fn new(line: u64, column: u64) -> Self {
        Self { line, column }
    }
}

/// Byte offsets of every line start in one document's source text.
///
/// Converts a line/column position into a zero-based linear offset, giving a
/// total order over nodes that are not siblings of each other. The index
/// depends on one document's line breaks: build it once per document and
/// never share it across documents.
#[derive(Debug, Clone)]
pub struct LineIndex {
    line_starts: Vec<usize>,
}

impl LineIndex {
    pub fn new(source: &str) -> Self {
        let mut line_starts = Vec::with_capacity(64);
        line_starts.push(0);
        for newline in memchr_iter(b'\n', source.as_bytes()) {
            line_starts.push(newline + 1);
        }
        Self { line_starts }
    }

    /// Convert a position to a zero-based byte offset into the source.
    ///
    /// Returns `None` for line 0 or a line past the end of the indexed
    /// source (malformed position data).
    pub fn offset(&self, position: SourcePosition) -> Option<usize> {
        let line = usize::try_from(position.line.checked_sub(1)?).ok()?;
        let start = *self.line_starts.get(line)?;
        Some(start + position.column.saturating_sub(1) as usize)
    }
}
