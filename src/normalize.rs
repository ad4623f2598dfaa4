//! The per-document normalization pipeline.

use crate::dom::{self, sanitize::sanitize};
use crate::error::Failure;
use crate::metadata::{self, MetadataPatterns};
use crate::model::{Book, DocNode};
use crate::position::LineIndex;
use crate::segment;
use crate::text::text_content;

/// Converts one HTML document into a [`Book`].
///
/// Holds the compiled metadata patterns, which are the only state shared
/// between documents and are read-only; everything else (DOM, line index)
/// is derived fresh per call, so one `Normalizer` can serve any number of
/// documents.
#[derive(Debug, Default)]
pub struct Normalizer {
    patterns: MetadataPatterns,
}

impl Normalizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run the full pipeline on one document's source text.
    ///
    /// Stages run in strict sequence (metadata, chapter detection,
    /// per-chapter harvesting, validation) and the first failure is terminal
    /// for the document. There is no partial output: the result is a
    /// complete [`Book`] or a single [`Failure`].
    pub fn normalize(&self, source: &str) -> Result<Book, Failure> {
        let mut dom = dom::parse(source);
        sanitize(&mut dom);
        let lines = LineIndex::new(source);

        let metadata = metadata::locate(&dom, &self.patterns)?;
        let headings = segment::detect_headings(&dom, &lines)?;

        let mut chapters = Vec::with_capacity(headings.len());
        for index in 0..headings.len() {
            let heading = headings[index];
            let body = segment::chapter_body(&dom, &lines, &headings, index)?;
            chapters.push(DocNode::Chapter {
                title: text_content(&dom, heading.node),
                level: heading.level,
                children: segment::harvest_paragraphs(&dom, &body),
            });
        }

        let book = Book {
            title: metadata.title,
            author: metadata.author,
            chapters,
        };
        book.validate()?;
        Ok(book)
    }
}
