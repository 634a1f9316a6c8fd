//! DOM Operations Adapter
//!
//! Thin helpers over the `dom_query` crate used by the extractor and the
//! renderer. Node-level operations take a [`NodeRef`] so the renderer can walk
//! text and element children in document order.

// Re-export core types for external use
pub use dom_query::{Document, NodeRef, Selection};

// === Parsing ===

/// Parse HTML string into document
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

// === Tag/Node Information ===

/// Get tag name (lowercase) of an element node.
///
/// Returns `None` for text, comment and document nodes.
#[must_use]
pub fn tag_name(node: &NodeRef) -> Option<String> {
    if !node.is_element() {
        return None;
    }
    node.node_name().map(|t| t.to_ascii_lowercase())
}

/// Check whether the node is an element with the given tag name.
#[must_use]
pub fn is_tag(node: &NodeRef, tag: &str) -> bool {
    tag_name(node).is_some_and(|t| t == tag)
}

// === Attribute Operations ===

/// Get any attribute value
#[inline]
#[must_use]
pub fn get_attribute(node: &NodeRef, name: &str) -> Option<String> {
    node.attr(name).map(|s| s.to_string())
}

/// Check if attribute exists
#[inline]
#[must_use]
pub fn has_attribute(node: &NodeRef, name: &str) -> bool {
    node.has_attr(name)
}

/// Check whether the `class` attribute contains `class` as a whole token.
#[must_use]
pub fn has_class(node: &NodeRef, class: &str) -> bool {
    node.attr("class")
        .is_some_and(|value| value.split_whitespace().any(|token| token == class))
}

/// Iterate the whitespace-separated tokens of the `class` attribute.
#[must_use]
pub fn class_list(node: &NodeRef) -> Vec<String> {
    node.attr("class")
        .map(|value| value.split_whitespace().map(str::to_string).collect())
        .unwrap_or_default()
}

// === Text Content ===

/// Get all text content of node and descendants
#[inline]
#[must_use]
pub fn text_content(node: &NodeRef) -> String {
    node.text().to_string()
}

// === Querying ===

/// Find the first descendant element with the given tag, in document order.
#[must_use]
pub fn find_first<'a>(node: &NodeRef<'a>, tag: &str) -> Option<NodeRef<'a>> {
    for child in node.children() {
        if is_tag(&child, tag) {
            return Some(child);
        }
        if let Some(found) = find_first(&child, tag) {
            return Some(found);
        }
    }
    None
}

/// Find every descendant element with the given tag, in document order.
#[must_use]
pub fn find_all<'a>(node: &NodeRef<'a>, tag: &str) -> Vec<NodeRef<'a>> {
    fn walk<'a>(node: &NodeRef<'a>, tag: &str, out: &mut Vec<NodeRef<'a>>) {
        for child in node.children() {
            if is_tag(&child, tag) {
                out.push(child);
            }
            walk(&child, tag, out);
        }
    }

    let mut found = Vec::new();
    walk(node, tag, &mut found);
    found
}

/// Direct element children matching one of the given tags (non-recursive).
#[must_use]
pub fn child_elements<'a>(node: &NodeRef<'a>, tags: &[&str]) -> Vec<NodeRef<'a>> {
    node.children()
        .into_iter()
        .filter(|child| tag_name(child).is_some_and(|t| tags.contains(&t.as_str())))
        .collect()
}

/// Check whether any descendant element has the given tag.
#[inline]
#[must_use]
pub fn contains_tag(node: &NodeRef, tag: &str) -> bool {
    find_first(node, tag).is_some()
}

/// Check whether the node has no child nodes at all.
#[inline]
#[must_use]
pub fn is_childless(node: &NodeRef) -> bool {
    node.first_child().is_none()
}

// === Tree Manipulation ===

/// Detach a node (and its subtree) from the tree.
#[inline]
pub fn remove(node: &NodeRef) {
    node.remove_from_parent();
}

/// First node matched by a CSS selector, or `None` when the selector is
/// invalid or matches nothing.
#[must_use]
pub fn try_select_first<'a>(doc: &'a Document, selector: &str) -> Option<NodeRef<'a>> {
    doc.try_select(selector)
        .and_then(|sel| sel.nodes().first().copied())
}
