//! Chapter boundary detection and paragraph harvesting.
//!
//! The input tree encodes chapter structure only implicitly: a heading
//! element opens a chapter, and the chapter's body is the run of siblings
//! between that heading and the next one in source order. Headings found at
//! arbitrary tree depth are not siblings of each other, so parent order
//! alone cannot sequence them; they are totally ordered by their linear
//! source offset instead, with arena allocation order breaking ties between
//! nodes the parser saw on the same line (allocation order matches document
//! order).

use crate::dom::{Dom, NodeId};
use crate::error::{Failure, FailureKind};
use crate::model::{DocNode, HeadingLevel};
use crate::position::LineIndex;
use crate::text::text_content;

/// A chapter-opening heading, located and ordered by source position.
#[derive(Debug, Clone, Copy)]
pub struct Heading {
    pub node: NodeId,
    pub level: HeadingLevel,
    offset: usize,
}

impl Heading {
    fn key(&self) -> (usize, u32) {
        (self.offset, self.node.0)
    }
}

/// Find every heading element in the document, ordered by source position.
///
/// Headings are collected depth-first, then sorted by ascending offset of
/// their start position. The sort is stable, so discovery order is kept
/// where offsets coincide.
///
/// A document without headings cannot be segmented; a heading whose position
/// is missing or unmappable counts as the same condition rather than
/// surfacing an internal error.
pub fn detect_headings(dom: &Dom, lines: &LineIndex) -> Result<Vec<Heading>, Failure> {
    let mut headings = Vec::new();
    for id in dom.descendants(dom.document()) {
        let Some(level) = dom
            .element_name(id)
            .and_then(|name| HeadingLevel::from_tag(name.as_ref()))
        else {
            continue;
        };
        let offset = dom
            .position(id)
            .and_then(|position| lines.offset(position))
            .ok_or_else(|| Failure::new(FailureKind::NoChapters).at(dom.position(id)))?;
        headings.push(Heading {
            node: id,
            level,
            offset,
        });
    }

    if headings.is_empty() {
        return Err(Failure::new(FailureKind::NoChapters));
    }

    headings.sort_by_key(|h| h.offset);
    Ok(headings)
}

/// Compute the sibling range holding one chapter's body content.
///
/// The range covers the heading's siblings (within its parent) positioned
/// strictly after the heading and strictly before the start of the next
/// heading in the ordered list. The final chapter has no next heading and
/// runs to the end of its enclosing container.
pub fn chapter_body(
    dom: &Dom,
    lines: &LineIndex,
    headings: &[Heading],
    index: usize,
) -> Result<Vec<NodeId>, Failure> {
    let heading = &headings[index];
    let parent = dom.parent(heading.node).ok_or_else(|| {
        Failure::new(FailureKind::ChapterContentUnresolvable).at(dom.position(heading.node))
    })?;

    let start = heading.key();
    let end = headings.get(index + 1).map(Heading::key);

    let mut body = Vec::new();
    for sibling in dom.children(parent) {
        if sibling == heading.node {
            continue;
        }
        // Position-less nodes (inter-element whitespace) carry no content
        // boundaries; skip them. An element whose recorded position cannot
        // be mapped back into the source is another matter: the range is
        // unresolvable.
        let Some(position) = dom.position(sibling) else {
            continue;
        };
        let Some(offset) = lines.offset(position) else {
            return Err(
                Failure::new(FailureKind::ChapterContentUnresolvable).at(Some(position))
            );
        };
        let key = (offset, sibling.0);
        if key <= start {
            continue;
        }
        if let Some(end) = end
            && key >= end
        {
            continue;
        }
        body.push(sibling);
    }

    Ok(body)
}

/// Reduce a chapter body range to its paragraph content.
///
/// Only paragraph elements contribute, in document order. A heading directly
/// followed by another heading legitimately yields no paragraphs.
pub fn harvest_paragraphs(dom: &Dom, body: &[NodeId]) -> Vec<DocNode> {
    body.iter()
        .filter(|&&id| dom.is_element_named(id, "p"))
        .map(|&id| DocNode::Paragraph {
            value: text_content(dom, id),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use html5ever::{LocalName, QualName, ns};

    use super::*;
    use crate::dom::parse;
    use crate::position::SourcePosition;

    fn make_qname(local: &str) -> QualName {
        QualName::new(None, ns!(html), LocalName::from(local))
    }

    fn paragraph_values(dom: &Dom, body: &[NodeId]) -> Vec<String> {
        harvest_paragraphs(dom, body)
            .into_iter()
            .map(|node| match node {
                DocNode::Paragraph { value } => value,
                other => panic!("expected paragraph, got {other:?}"),
            })
            .collect()
    }

    #[test]
    fn no_headings_means_no_chapters() {
        let dom = parse("<p>just text</p>");
        let lines = LineIndex::new("<p>just text</p>");
        let failure = detect_headings(&dom, &lines).unwrap_err();
        assert_eq!(failure.kind, FailureKind::NoChapters);
    }

    #[test]
    fn headings_are_ordered_by_source_offset_not_discovery_order() {
        // Build the tree by hand with positions deliberately out of
        // discovery order.
        let mut dom = Dom::new();
        let body = dom.create_element(make_qname("body"), vec![]);
        dom.append(dom.document(), body);

        let late = dom.create_element(make_qname("h1"), vec![]);
        dom.set_position(late, Some(SourcePosition::new(5, 1)));
        dom.append(body, late);

        let early = dom.create_element(make_qname("h2"), vec![]);
        dom.set_position(early, Some(SourcePosition::new(2, 1)));
        dom.append(body, early);

        let lines = LineIndex::new("a\nb\nc\nd\ne\nf\n");
        let headings = detect_headings(&dom, &lines).unwrap();
        assert_eq!(headings.len(), 2);
        assert_eq!(headings[0].node, early);
        assert_eq!(headings[0].level, HeadingLevel::H2);
        assert_eq!(headings[1].node, late);
    }

    #[test]
    fn heading_without_position_is_remapped_to_no_chapters() {
        let mut dom = Dom::new();
        let body = dom.create_element(make_qname("body"), vec![]);
        dom.append(dom.document(), body);
        let h1 = dom.create_element(make_qname("h1"), vec![]);
        dom.append(body, h1);

        let lines = LineIndex::new("one line");
        let failure = detect_headings(&dom, &lines).unwrap_err();
        assert_eq!(failure.kind, FailureKind::NoChapters);
    }

    #[test]
    fn body_runs_to_next_heading() {
        let source = "<h1>One</h1>\n<p>first</p>\n<p>second</p>\n<h1>Two</h1>\n<p>third</p>";
        let dom = parse(source);
        let lines = LineIndex::new(source);
        let headings = detect_headings(&dom, &lines).unwrap();
        assert_eq!(headings.len(), 2);

        let body = chapter_body(&dom, &lines, &headings, 0).unwrap();
        assert_eq!(paragraph_values(&dom, &body), vec!["first", "second"]);
    }

    #[test]
    fn final_chapter_runs_to_end_of_container() {
        let source = "<h1>One</h1>\n<p>first</p>\n<h1>Two</h1>\n<p>second</p>\n<p>third</p>";
        let dom = parse(source);
        let lines = LineIndex::new(source);
        let headings = detect_headings(&dom, &lines).unwrap();

        let body = chapter_body(&dom, &lines, &headings, 1).unwrap();
        assert_eq!(paragraph_values(&dom, &body), vec!["second", "third"]);
    }

    #[test]
    fn adjacent_chapters_do_not_share_paragraphs() {
        let source = "<h1>A</h1>\n<p>pa</p>\n<h1>B</h1>\n<p>pb</p>\n<h1>C</h1>\n<p>pc</p>";
        let dom = parse(source);
        let lines = LineIndex::new(source);
        let headings = detect_headings(&dom, &lines).unwrap();
        assert_eq!(headings.len(), 3);

        let mut seen = Vec::new();
        for index in 0..headings.len() {
            let body = chapter_body(&dom, &lines, &headings, index).unwrap();
            seen.push(paragraph_values(&dom, &body));
        }
        assert_eq!(seen, vec![vec!["pa"], vec!["pb"], vec!["pc"]]);
    }

    #[test]
    fn heading_followed_by_heading_yields_empty_body() {
        let source = "<h1>Empty</h1>\n<h1>Full</h1>\n<p>content</p>";
        let dom = parse(source);
        let lines = LineIndex::new(source);
        let headings = detect_headings(&dom, &lines).unwrap();

        let body = chapter_body(&dom, &lines, &headings, 0).unwrap();
        assert!(harvest_paragraphs(&dom, &body).is_empty());
    }

    #[test]
    fn elements_on_one_line_keep_document_order() {
        let source = "<h1>One</h1><p>first</p><p>second</p>";
        let dom = parse(source);
        let lines = LineIndex::new(source);
        let headings = detect_headings(&dom, &lines).unwrap();

        let body = chapter_body(&dom, &lines, &headings, 0).unwrap();
        assert_eq!(paragraph_values(&dom, &body), vec!["first", "second"]);
    }

    #[test]
    fn next_heading_in_nested_container_still_bounds_the_chapter() {
        let source = "<h1>One</h1>\n<p>mine</p>\n<div>\n<h2>Two</h2>\n<p>theirs</p>\n</div>";
        let dom = parse(source);
        let lines = LineIndex::new(source);
        let headings = detect_headings(&dom, &lines).unwrap();
        assert_eq!(headings.len(), 2);

        // Chapter one's range is bounded by the h2 even though the h2 is not
        // its sibling; the div wrapping it starts before the h2 and is not a
        // paragraph, so chapter one keeps only its own content.
        let body = chapter_body(&dom, &lines, &headings, 0).unwrap();
        assert_eq!(paragraph_values(&dom, &body), vec!["mine"]);

        // Chapter two harvests within the div.
        let body = chapter_body(&dom, &lines, &headings, 1).unwrap();
        assert_eq!(paragraph_values(&dom, &body), vec!["theirs"]);
    }

    #[test]
    fn non_paragraph_elements_are_ignored_by_the_harvest() {
        let source = "<h1>One</h1>\n<blockquote>quote</blockquote>\n<p>para</p>\n<ul><li>item</li></ul>";
        let dom = parse(source);
        let lines = LineIndex::new(source);
        let headings = detect_headings(&dom, &lines).unwrap();

        let body = chapter_body(&dom, &lines, &headings, 0).unwrap();
        assert_eq!(paragraph_values(&dom, &body), vec!["para"]);
    }
}
