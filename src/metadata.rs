//! Bibliographic metadata extraction.
//!
//! Digitized books carry their title and author in a loosely formatted
//! metadata block rather than structured markup: typically a `<pre>` at the
//! top of the file with `Title:` / `Author:` marker lines, sometimes a plain
//! paragraph. Pattern matching over candidate blocks is inherently fragile,
//! so it is isolated behind this module's interface; a different extraction
//! strategy can replace it without touching chapter logic.

use regex::Regex;

use crate::dom::{Dom, NodeData, NodeId};
use crate::error::{Failure, FailureKind};

/// Compiled `title:` / `author:` marker patterns.
///
/// The only state shared between documents, and read-only: compile once,
/// reuse for every document in a run.
#[derive(Debug, Clone)]
pub struct MetadataPatterns {
    title: Regex,
    author: Regex,
}

impl Default for MetadataPatterns {
    fn default() -> Self {
        Self {
            title: Regex::new(r"(?i)title:\s*(.+)").expect("static pattern"),
            author: Regex::new(r"(?i)author:\s*(.+)").expect("static pattern"),
        }
    }
}

/// Extracted bibliographic fields. Both are required; a book with either
/// missing is rejected, not partially filled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metadata {
    pub title: String,
    pub author: String,
}

/// Scan the document's candidate blocks for title and author markers.
///
/// Candidates are every preformatted block and every plain paragraph, in
/// document order. Each field is resolved independently: the first
/// text-bearing descendant across all candidates whose raw value matches the
/// field's pattern wins, and capture group 1 (trimmed) is the value.
pub fn locate(dom: &Dom, patterns: &MetadataPatterns) -> Result<Metadata, Failure> {
    let blocks = candidate_blocks(dom);
    if blocks.is_empty() {
        return Err(Failure::new(FailureKind::MissingMetadata));
    }

    let title = scan_blocks(dom, &blocks, &patterns.title)
        .ok_or_else(|| Failure::new(FailureKind::MissingTitle))?;
    let author = scan_blocks(dom, &blocks, &patterns.author)
        .ok_or_else(|| Failure::new(FailureKind::MissingAuthor))?;

    Ok(Metadata { title, author })
}

fn candidate_blocks(dom: &Dom) -> Vec<NodeId> {
    dom.descendants(dom.document())
        .filter(|&id| dom.is_element_named(id, "pre") || dom.is_element_named(id, "p"))
        .collect()
}

fn scan_blocks(dom: &Dom, blocks: &[NodeId], pattern: &Regex) -> Option<String> {
    for &block in blocks {
        for id in dom.descendants(block) {
            if let Some(NodeData::Text(value)) = dom.get(id).map(|n| &n.data)
                && let Some(captures) = pattern.captures(value)
            {
                return Some(captures[1].trim().to_string());
            }
        }
    }
    None
}
