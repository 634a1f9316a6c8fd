//! Metadata extraction module.
//!
//! Collects the page-level signals extractors rely on: Open Graph tags, the
//! document `<title>`, the `generator` meta tag and the canonical link.

pub mod meta_tags;

use dom_query::Document;

pub use meta_tags::{examine_canonical_link, examine_meta, examine_title_element};

/// Page-level metadata read from the document head.
///
/// All fields are optional; absent or empty values are `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageMetadata {
    /// Text of the `<title>` element.
    pub title: Option<String>,

    /// `og:title` content.
    pub og_title: Option<String>,

    /// `og:description` content.
    pub og_description: Option<String>,

    /// `og:url` content.
    pub og_url: Option<String>,

    /// `og:site_name` content.
    pub og_site_name: Option<String>,

    /// `<meta name="generator">` content.
    pub generator: Option<String>,

    /// `href` of `<link rel="canonical">`.
    pub canonical: Option<String>,
}

impl PageMetadata {
    /// Title used for the article: `og:title`, then `<title>`, then empty.
    #[must_use]
    pub fn best_title(&self) -> String {
        self.og_title
            .as_ref()
            .or(self.title.as_ref())
            .cloned()
            .unwrap_or_default()
    }

    /// URL of the article: canonical link, then `og:url`.
    #[must_use]
    pub fn best_url(&self) -> Option<String> {
        self.canonical.clone().or_else(|| self.og_url.clone())
    }

    /// Whether the canonical link starts with `prefix`.
    #[must_use]
    pub fn canonical_starts_with(&self, prefix: &str) -> bool {
        self.canonical
            .as_deref()
            .is_some_and(|canonical| canonical.starts_with(prefix))
    }
}

/// Extract all page metadata from a document.
#[must_use]
pub fn extract_metadata(doc: &Document) -> PageMetadata {
    let mut metadata = PageMetadata::default();

    metadata = meta_tags::examine_meta(doc, metadata);
    metadata = meta_tags::examine_title_element(doc, metadata);
    metadata = meta_tags::examine_canonical_link(doc, metadata);

    metadata
}
