//! The catch-all extractor.

use dom_query::Document;

use super::{ContainerTemplate, Extractor};

/// Generic container list: known platform containers, then semantic
/// fallbacks, then `<body>`.
pub const ARTICLE_CONTAINERS: &[ContainerTemplate] = &[
    ContainerTemplate::with_attrs("div", &[("class", "main-content")]),
    ContainerTemplate::with_attrs("div", &[("id", "page-content")]),
    ContainerTemplate::with_attrs("div", &[("class", "post-content")]),
    ContainerTemplate::with_attrs("div", &[("class", "article-content")]),
    ContainerTemplate::with_attrs("div", &[("class", "Post-RichText")]),
    ContainerTemplate::with_attrs("div", &[("id", "postBody")]),
    ContainerTemplate::tag("article"),
    ContainerTemplate::tag("main"),
    ContainerTemplate::tag("body"),
];

/// Extractor of last resort: handles every document and tries the full
/// generic container list.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultExtractor;

impl Extractor for DefaultExtractor {
    fn name(&self) -> &'static str {
        "default"
    }

    fn can_handle(&self, _doc: &Document) -> bool {
        true
    }

    fn article_container(&self) -> &[ContainerTemplate] {
        ARTICLE_CONTAINERS
    }
}
