//! Tree sanitization.
//!
//! Digitized books arrive with whatever markup the digitization tooling left
//! behind. This pass detaches subtrees whose text must never leak into
//! extracted content (scripts, styles, embeds, form controls), drops
//! comments, and strips event-handler and presentation attributes. It runs
//! once, before segmentation, and never again.

use super::{Dom, NodeData, NodeId};

/// Elements whose entire subtree is detached.
const DISALLOWED_TAGS: &[&str] = &[
    "applet", "audio", "button", "canvas", "embed", "form", "frame", "frameset", "iframe",
    "input", "noscript", "object", "script", "select", "style", "template", "textarea", "video",
];

/// Attributes that survive sanitization.
const ALLOWED_ATTRS: &[&str] = &["alt", "class", "href", "id", "lang", "src", "title"];

/// Sanitize a parsed document in place.
pub fn sanitize(dom: &mut Dom) {
    // Collect first: detaching while traversing would skip siblings.
    let ids: Vec<NodeId> = dom.descendants(dom.document()).collect();

    let mut doomed = Vec::new();
    for &id in &ids {
        match dom.get(id).map(|n| &n.data) {
            Some(NodeData::Element { name, .. })
                if DISALLOWED_TAGS.contains(&name.local.as_ref()) =>
            {
                doomed.push(id);
            }
            Some(NodeData::Comment(_)) => doomed.push(id),
            _ => {}
        }
    }
    for id in doomed {
        dom.detach(id);
    }

    for &id in &ids {
        if let Some(node) = dom.get_mut(id)
            && let NodeData::Element { attrs, .. } = &mut node.data
        {
            attrs.retain(|a| ALLOWED_ATTRS.contains(&a.name.local.as_ref()));
        }
    }
}
