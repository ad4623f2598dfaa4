//! Plain-text extraction from DOM subtrees.

use crate::dom::{Dom, NodeData, NodeId};

/// Flatten a subtree into its concatenated plain-text content.
///
/// Text-bearing leaves are taken in document order and joined with a single
/// space between consecutive leaves; each leaf's own value is left
/// untouched. A subtree with no text yields the empty string.
pub fn text_content(dom: &Dom, root: NodeId) -> String {
    let mut parts: Vec<&str> = Vec::new();
    for id in dom.descendants(root) {
        if let Some(NodeData::Text(value)) = dom.get(id).map(|n| &n.data) {
            parts.push(value);
        }
    }
    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::parse;

    fn find_by_tag(dom: &Dom, tag: &str) -> NodeId {
        dom.descendants(dom.document())
            .find(|&id| dom.is_element_named(id, tag))
            .expect("tag not found")
    }

    #[test]
    fn single_leaf_is_returned_raw() {
        let dom = parse("<p>Hello.</p>");
        assert_eq!(text_content(&dom, find_by_tag(&dom, "p")), "Hello.");
    }

    #[test]
    fn consecutive_leaves_join_with_one_space() {
        let dom = parse("<p><em>Hello</em><em>World</em></p>");
        assert_eq!(text_content(&dom, find_by_tag(&dom, "p")), "Hello World");
    }

    #[test]
    fn leaf_values_are_not_rewritten() {
        // The join never reaches inside a leaf; whatever spacing the source
        // had within one text node is preserved.
        let dom = parse("<p>Hello <em>world</em>!</p>");
        assert_eq!(text_content(&dom, find_by_tag(&dom, "p")), "Hello  world !");
    }

    #[test]
    fn no_leaves_yield_empty_string() {
        let dom = parse("<p><br></p>");
        assert_eq!(text_content(&dom, find_by_tag(&dom, "p")), "");
    }

    #[test]
    fn nested_subtrees_flatten_in_document_order() {
        let dom = parse("<div><p>one</p><p><em>two</em> three</p></div>");
        assert_eq!(
            text_content(&dom, find_by_tag(&dom, "div")),
            "one two  three"
        );
    }
}
