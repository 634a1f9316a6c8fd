//! Result types for extraction and conversion output.
//!
//! [`Article`] is the extractor's output: metadata plus a reference to the
//! sanitized container inside the parsed document. [`Conversion`] is the final
//! `(title, markdown)` pair handed back to callers.

use std::fmt;

use dom_query::NodeRef;
use serde::{Deserialize, Serialize};

use crate::dom;

/// An article located inside a parsed document.
///
/// `body` borrows into the document the article was extracted from; the
/// article does not own a copy of the tree.
#[derive(Clone)]
pub struct Article<'a> {
    /// Article title (`og:title`, `<title>`, or the removed `<h1>`).
    pub title: String,

    /// Canonical URL, used as the base for relative links and images.
    pub url: Option<String>,

    /// Short description (`og:description`).
    pub description: Option<String>,

    /// The sanitized article container.
    pub body: NodeRef<'a>,
}

impl<'a> Article<'a> {
    /// Create an article over an existing container node.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        url: Option<String>,
        description: Option<String>,
        body: NodeRef<'a>,
    ) -> Self {
        Self {
            title: title.into(),
            url: url.filter(|u| !u.trim().is_empty()),
            description: description.filter(|d| !d.trim().is_empty()),
            body,
        }
    }
}

impl fmt::Debug for Article<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Article")
            .field("title", &self.title)
            .field("url", &self.url)
            .field("description", &self.description)
            .field("body", &dom::tag_name(&self.body))
            .finish()
    }
}

/// Result of converting an HTML document to Markdown.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversion {
    /// Article title.
    pub title: String,

    /// The complete Markdown document.
    pub markdown: String,
}
