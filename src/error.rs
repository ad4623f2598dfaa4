//! Error types for folio operations.

use std::fmt;

use thiserror::Error;

use crate::position::SourcePosition;

/// Errors that can occur while processing input files.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON encoding error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Rejected(#[from] Failure),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Why a document was rejected.
///
/// Every externally visible rejection belongs to this fixed set; stages that
/// hit an unexpected internal condition remap it to the nearest entry rather
/// than letting a raw error escape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// No preformatted or paragraph block to look for metadata in.
    MissingMetadata,
    /// Candidate blocks exist, but none carries a `title:` marker.
    MissingTitle,
    /// Candidate blocks exist, but none carries an `author:` marker.
    MissingAuthor,
    /// No heading elements anywhere, or heading positions too malformed to order.
    NoChapters,
    /// A chapter's sibling range could not be computed.
    ChapterContentUnresolvable,
    /// The assembled book contains no paragraphs at all.
    EmptyBook,
    /// Fewer paragraphs than chapters; segmentation likely mis-assigned content.
    InsufficientContent,
}

impl FailureKind {
    /// Stable identifier used in diagnostics.
    pub fn as_str(self) -> &'static str {
        match self {
            FailureKind::MissingMetadata => "missing-metadata",
            FailureKind::MissingTitle => "missing-title",
            FailureKind::MissingAuthor => "missing-author",
            FailureKind::NoChapters => "no-chapters",
            FailureKind::ChapterContentUnresolvable => "chapter-content-unresolvable",
            FailureKind::EmptyBook => "empty-book",
            FailureKind::InsufficientContent => "insufficient-content",
        }
    }
}

/// A document-scoped rejection.
///
/// Terminal for its document, never for the run: the driver logs it and
/// moves on to the next input. Carries the source location of the offending
/// node when one is known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    pub kind: FailureKind,
    pub location: Option<SourcePosition>,
}

impl Failure {
    pub fn new(kind: FailureKind) -> Self {
        Self {
            kind,
            location: None,
        }
    }

    /// Attach the source location of the offending node.
    pub fn at(mut self, location: Option<SourcePosition>) -> Self {
        self.location = location;
        self
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.kind.as_str())?;
        if let Some(location) = self.location {
            write!(f, " (line {}, column {})", location.line, location.column)?;
        }
        Ok(())
    }
}

impl std::error::Error for Failure {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_display_without_location() {
        let failure = Failure::new(FailureKind::MissingAuthor);
        assert_eq!(failure.to_string(), "missing-author");
    }

    #[test]
    fn failure_display_with_location() {
        let failure = Failure::new(FailureKind::NoChapters).at(Some(SourcePosition::new(12, 1)));
        assert_eq!(failure.to_string(), "no-chapters (line 12, column 1)");
    }
}
