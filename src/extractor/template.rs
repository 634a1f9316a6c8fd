//! Article container templates.

use std::fmt;

use dom_query::{Document, Matcher, NodeRef};

use crate::dom;

/// A tag name plus an optional attribute filter locating an article container.
///
/// A `class` filter matches one whitespace-separated class token; any other
/// attribute must match exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContainerTemplate {
    /// Element tag name.
    pub tag: &'static str,

    /// Attribute name/value pairs that must all match.
    pub attrs: &'static [(&'static str, &'static str)],
}

impl ContainerTemplate {
    /// Template matching any element with the given tag.
    #[must_use]
    pub const fn tag(tag: &'static str) -> Self {
        Self { tag, attrs: &[] }
    }

    /// Template matching elements with the given tag and attributes.
    #[must_use]
    pub const fn with_attrs(tag: &'static str, attrs: &'static [(&'static str, &'static str)]) -> Self {
        Self { tag, attrs }
    }

    /// CSS selector equivalent of this template.
    #[must_use]
    pub fn selector(&self) -> String {
        let mut selector = self.tag.to_string();
        for (name, value) in self.attrs {
            let op = if *name == "class" { "~=" } else { "=" };
            selector.push_str(&format!(r#"[{name}{op}"{}"]"#, escape_value(value)));
        }
        selector
    }

    /// First element in document order matching the template, provided it has
    /// at least one child node.
    ///
    /// An empty first match counts as no match. Invalid selectors (possible
    /// only with hand-written templates) are logged and never match.
    #[must_use]
    pub fn find<'a>(&self, doc: &'a Document) -> Option<NodeRef<'a>> {
        let selector = self.selector();
        let matcher = match Matcher::new(&selector) {
            Ok(matcher) => matcher,
            Err(err) => {
                tracing::warn!(%selector, error = ?err, "invalid container selector");
                return None;
            }
        };

        let node = doc.select_matcher(&matcher).nodes().first().copied()?;
        if dom::is_childless(&node) {
            None
        } else {
            Some(node)
        }
    }
}

impl fmt::Display for ContainerTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.selector())
    }
}

fn escape_value(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
