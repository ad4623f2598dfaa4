//! The normalized document model.
//!
//! Three levels: a [`Book`] holds ordered chapters, a chapter holds ordered
//! paragraphs, a paragraph holds plain text. Everything is built fresh per
//! input document, serialized, and discarded; nothing is mutated after
//! assembly.

use std::fmt;

use serde::Serialize;

use crate::error::{Failure, FailureKind};

/// Heading level of a chapter-opening element (levels 1-6).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HeadingLevel {
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
}

impl HeadingLevel {
    /// Map an element tag to its heading level, if it is one.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "h1" => Some(HeadingLevel::H1),
            "h2" => Some(HeadingLevel::H2),
            "h3" => Some(HeadingLevel::H3),
            "h4" => Some(HeadingLevel::H4),
            "h5" => Some(HeadingLevel::H5),
            "h6" => Some(HeadingLevel::H6),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            HeadingLevel::H1 => "h1",
            HeadingLevel::H2 => "h2",
            HeadingLevel::H3 => "h3",
            HeadingLevel::H4 => "h4",
            HeadingLevel::H5 => "h5",
            HeadingLevel::H6 => "h6",
        }
    }
}

impl fmt::Display for HeadingLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A node in the normalized document tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum DocNode {
    Chapter {
        title: String,
        level: HeadingLevel,
        children: Vec<DocNode>,
    },
    Paragraph {
        value: String,
    },
}

impl DocNode {
    /// Number of paragraphs in this node's subtree.
    pub fn paragraph_count(&self) -> usize {
        match self {
            DocNode::Chapter { children, .. } => {
                children.iter().map(DocNode::paragraph_count).sum()
            }
            DocNode::Paragraph { .. } => 1,
        }
    }
}

/// A fully assembled book.
///
/// Chapters are ordered by ascending source position of their opening
/// heading; a chapter's identity is its index in that sequence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Book {
    pub title: String,
    pub author: String,
    pub chapters: Vec<DocNode>,
}

impl Book {
    /// Total paragraph count across all chapters.
    pub fn paragraph_count(&self) -> usize {
        self.chapters.iter().map(DocNode::paragraph_count).sum()
    }

    /// Sanity-check the assembled structure before trusting it.
    ///
    /// A book with no paragraphs at all is rejected outright. A paragraph
    /// total below the chapter count is a heuristic signal that segmentation
    /// mis-assigned content; such books are rejected rather than emitted.
    pub fn validate(&self) -> Result<(), Failure> {
        let paragraphs = self.paragraph_count();
        if paragraphs == 0 {
            return Err(Failure::new(FailureKind::EmptyBook));
        }
        if paragraphs < self.chapters.len() {
            return Err(Failure::new(FailureKind::InsufficientContent));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chapter(title: &str, paragraphs: &[&str]) -> DocNode {
        DocNode::Chapter {
            title: title.to_string(),
            level: HeadingLevel::H1,
            children: paragraphs
                .iter()
                .map(|p| DocNode::Paragraph {
                    value: p.to_string(),
                })
                .collect(),
        }
    }

    fn book(chapters: Vec<DocNode>) -> Book {
        Book {
            title: "T".to_string(),
            author: "A".to_string(),
            chapters,
        }
    }

    #[test]
    fn serializes_with_type_tags() {
        let node = DocNode::Paragraph {
            value: "Hello.".to_string(),
        };
        assert_eq!(
            serde_json::to_string(&node).unwrap(),
            r#"{"type":"paragraph","value":"Hello."}"#
        );

        let node = chapter("One", &["Hello."]);
        assert_eq!(
            serde_json::to_string(&node).unwrap(),
            r#"{"type":"chapter","title":"One","level":"h1","children":[{"type":"paragraph","value":"Hello."}]}"#
        );
    }

    #[test]
    fn heading_levels_round_trip_through_tags() {
        for tag in ["h1", "h2", "h3", "h4", "h5", "h6"] {
            let level = HeadingLevel::from_tag(tag).unwrap();
            assert_eq!(level.as_str(), tag);
        }
        assert_eq!(HeadingLevel::from_tag("h7"), None);
        assert_eq!(HeadingLevel::from_tag("p"), None);
    }

    #[test]
    fn validate_rejects_paragraphless_book() {
        let failure = book(vec![chapter("One", &[])]).validate().unwrap_err();
        assert_eq!(failure.kind, FailureKind::EmptyBook);
    }

    #[test]
    fn validate_rejects_more_chapters_than_paragraphs() {
        let failure = book(vec![
            chapter("One", &["only"]),
            chapter("Two", &[]),
            chapter("Three", &[]),
        ])
        .validate()
        .unwrap_err();
        assert_eq!(failure.kind, FailureKind::InsufficientContent);
    }

    #[test]
    fn validate_accepts_balanced_book() {
        let checked = book(vec![chapter("One", &["a", "b"]), chapter("Two", &["c"])]);
        assert!(checked.validate().is_ok());
        assert_eq!(checked.paragraph_count(), 3);
    }
}
