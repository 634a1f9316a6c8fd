//! HTML Meta Tag Extraction
//!
//! Extracts the Open Graph tags, `<title>`, the `generator` meta tag and the
//! canonical link that extractors use for site recognition and article
//! metadata.

use dom_query::{Document, Selection};

use super::PageMetadata;

/// Examine HTML meta tags for metadata.
///
/// The first non-empty value of each field wins, matching document order.
/// Values are trimmed; empty values are ignored.
#[must_use]
pub fn examine_meta(doc: &Document, original: PageMetadata) -> PageMetadata {
    let mut result = original;

    for node in doc.select("meta").nodes() {
        let meta = Selection::from(*node);

        let name = meta
            .attr("property")
            .or_else(|| meta.attr("name"))
            .map(|n| n.trim().to_lowercase())
            .unwrap_or_default();

        let content = meta
            .attr("content")
            .map(|c| c.trim().to_string())
            .unwrap_or_default();

        if name.is_empty() || content.is_empty() {
            continue;
        }

        let slot = match name.as_str() {
            "og:title" => &mut result.og_title,
            "og:description" => &mut result.og_description,
            "og:url" => &mut result.og_url,
            "og:site_name" => &mut result.og_site_name,
            "generator" => &mut result.generator,
            _ => continue,
        };

        if slot.is_none() {
            *slot = Some(content);
        }
    }

    result
}

/// Extract the `<title>` element text.
#[must_use]
pub fn examine_title_element(doc: &Document, original: PageMetadata) -> PageMetadata {
    let mut result = original;

    if result.title.is_none() {
        let title = doc.select("title").text();
        let title = title.trim();
        if !title.is_empty() {
            result.title = Some(title.to_string());
        }
    }

    result
}

/// Extract the `href` of `<link rel="canonical">`.
#[must_use]
pub fn examine_canonical_link(doc: &Document, original: PageMetadata) -> PageMetadata {
    let mut result = original;

    if result.canonical.is_none() {
        result.canonical = doc
            .select(r#"link[rel~="canonical"]"#)
            .attr("href")
            .map(|href| href.trim().to_string())
            .filter(|href| !href.is_empty());
    }

    result
}
