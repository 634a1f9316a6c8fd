//! Article extraction.
//!
//! An [`Extractor`] recognizes a site, locates its article container through an
//! ordered list of [`ContainerTemplate`]s, sanitizes the container in place and
//! reads title, description and URL from the page metadata.
//!
//! # Module Structure
//!
//! - `template`: container templates and their CSS selector form
//! - `default`: the catch-all [`DefaultExtractor`] and the generic template list
//! - `sites`: site-specific extractors
//! - `registry`: ordered first-match dispatch with the default as fallback
//!
//! # Usage
//!
//! ```rust
//! use article_md::dom;
//! use article_md::extractor::{DefaultExtractor, Extractor};
//!
//! let doc = dom::parse("<html><head><title>Hi</title></head><body><article><p>Body</p></article></body></html>");
//! let article = DefaultExtractor.extract(&doc).unwrap();
//! assert_eq!(article.title, "Hi");
//! ```

pub mod default;
pub mod registry;
pub mod sites;
pub mod template;

use dom_query::Document;

use crate::dom;
use crate::metadata;
use crate::result::Article;
use crate::selector::CleaningRules;

pub use default::{DefaultExtractor, ARTICLE_CONTAINERS};
pub use registry::ExtractorRegistry;
pub use template::ContainerTemplate;

/// Site recognition plus container and metadata extraction.
///
/// Implementors normally provide only [`can_handle`](Extractor::can_handle),
/// [`article_container`](Extractor::article_container) and
/// [`name`](Extractor::name); the metadata accessors and
/// [`extract`](Extractor::extract) have defaults that site variants override
/// where a platform needs it.
pub trait Extractor {
    /// Short identifier used in log events.
    fn name(&self) -> &'static str;

    /// Whether this extractor recognizes the document's site.
    fn can_handle(&self, doc: &Document) -> bool;

    /// Candidate containers in priority order; the first non-empty match wins.
    fn article_container(&self) -> &[ContainerTemplate];

    /// Rules applied to the container before rendering.
    fn cleaning_rules(&self) -> CleaningRules {
        CleaningRules::default()
    }

    /// `og:title`, else `<title>` text, else empty.
    fn extract_title(&self, doc: &Document) -> String {
        metadata::extract_metadata(doc).best_title()
    }

    /// `og:description`, if any.
    fn extract_description(&self, doc: &Document) -> Option<String> {
        metadata::extract_metadata(doc).og_description
    }

    /// Canonical link, else `og:url`.
    fn extract_url(&self, doc: &Document) -> Option<String> {
        metadata::extract_metadata(doc).best_url()
    }

    /// Locate, sanitize and describe the article.
    ///
    /// Returns `None` when the site is not recognized or no template matches.
    /// The document is only mutated when an article is returned.
    fn extract<'a>(&self, doc: &'a Document) -> Option<Article<'a>> {
        extract_article(self, doc)
    }
}

/// Default extraction procedure shared by every [`Extractor`].
///
/// Metadata is read before the tree is touched. The container's first `<h1>`
/// is then removed (its text backs up an empty metadata title) and the
/// container is sanitized with the extractor's cleaning rules.
pub fn extract_article<'a, E>(extractor: &E, doc: &'a Document) -> Option<Article<'a>>
where
    E: Extractor + ?Sized,
{
    if !extractor.can_handle(doc) {
        return None;
    }

    let (template, body) = extractor
        .article_container()
        .iter()
        .find_map(|template| template.find(doc).map(|node| (template, node)))?;

    tracing::debug!(
        extractor = extractor.name(),
        template = %template,
        "matched article container"
    );

    let mut title = extractor.extract_title(doc);
    let description = extractor.extract_description(doc);
    let url = extractor.extract_url(doc);

    if let Some(h1) = dom::find_first(&body, "h1") {
        if title.trim().is_empty() {
            title = dom::text_content(&h1).trim().to_string();
        }
        dom::remove(&h1);
    }

    let removed = extractor.cleaning_rules().sanitize(&body);
    tracing::debug!(extractor = extractor.name(), removed, "sanitized article container");

    Some(Article::new(title, url, description, body))
}

/// Remove the body's first `<h1>` when its text equals the article title.
///
/// Both sides are compared with surrounding whitespace trimmed. A heading that
/// differs from the title is meaningful content and is left in place. Returns
/// whether a heading was removed.
pub fn remove_duplicate_titles(article: &Article) -> bool {
    let Some(h1) = dom::find_first(&article.body, "h1") else {
        return false;
    };

    if dom::text_content(&h1).trim() == article.title.trim() {
        dom::remove(&h1);
        true
    } else {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_html(content: &str) -> String {
        format!(
            r#"<html>
                <head>
                    <title>Page Title</title>
                    <meta property="og:description" content="Desc">
                    <meta property="og:url" content="https://example.com">
                </head>
                <body>{content}</body>
            </html>"#
        )
    }

    struct SpecialExtractor;

    impl Extractor for SpecialExtractor {
        fn name(&self) -> &'static str {
            "special"
        }

        fn can_handle(&self, doc: &Document) -> bool {
            metadata::extract_metadata(doc)
                .title
                .is_some_and(|title| title.contains("Special"))
        }

        fn article_container(&self) -> &[ContainerTemplate] {
            const CONTAINERS: &[ContainerTemplate] = &[ContainerTemplate::tag("body")];
            CONTAINERS
        }
    }

    #[test]
    fn test_extract_reads_metadata() {
        let doc = dom::parse(&make_html("<article><p>Body</p></article>"));
        let article = DefaultExtractor.extract(&doc).unwrap();

        assert_eq!(article.title, "Page Title");
        assert_eq!(article.description.as_deref(), Some("Desc"));
        assert_eq!(article.url.as_deref(), Some("https://example.com"));
        assert_eq!(dom::tag_name(&article.body).as_deref(), Some("article"));
    }

    #[test]
    fn test_extract_removes_container_h1() {
        let doc = dom::parse(&make_html("<article><h1>Other Heading</h1><p>Body</p></article>"));
        let article = DefaultExtractor.extract(&doc).unwrap();

        assert!(dom::find_first(&article.body, "h1").is_none());
        assert_eq!(article.title, "Page Title");
    }

    #[test]
    fn test_h1_backs_up_missing_title() {
        let doc = dom::parse("<html><body><article><h1> Heading </h1><p>Body</p></article></body></html>");
        let article = DefaultExtractor.extract(&doc).unwrap();

        assert_eq!(article.title, "Heading");
    }

    #[test]
    fn test_custom_extractor_can_handle() {
        let doc = dom::parse(
            "<html><head><title>Special Page</title></head><body><p>Hello</p></body></html>",
        );
        let article = SpecialExtractor.extract(&doc).unwrap();

        assert!(dom::text_content(&article.body).contains("Hello"));
    }

    #[test]
    fn test_custom_extractor_declines_other_sites() {
        let doc = dom::parse(&make_html("<p>Hello</p>"));

        assert!(SpecialExtractor.extract(&doc).is_none());
    }

    #[test]
    fn test_remove_duplicate_titles_same() {
        let doc = dom::parse("<article><h1>Same Title</h1><p>Body text</p></article>");
        let body = *doc.select("article").nodes().first().unwrap();
        let article = Article::new("Same Title", None, None, body);

        assert!(remove_duplicate_titles(&article));
        assert_eq!(article.title, "Same Title");
        assert!(dom::find_first(&article.body, "h1").is_none());
    }

    #[test]
    fn test_remove_duplicate_titles_different() {
        let doc = dom::parse("<article><h1>Other Title</h1><p>Body text</p></article>");
        let body = *doc.select("article").nodes().first().unwrap();
        let article = Article::new("Main Page", None, None, body);

        assert!(!remove_duplicate_titles(&article));
        assert_eq!(article.title, "Main Page");
        assert!(dom::find_first(&article.body, "h1").is_some());
    }

    #[test]
    fn test_remove_duplicate_titles_ignores_surrounding_whitespace() {
        let doc = dom::parse("<article><h1>\n  Same Title </h1><p>Body text</p></article>");
        let body = *doc.select("article").nodes().first().unwrap();
        let article = Article::new(" Same Title", None, None, body);

        assert!(remove_duplicate_titles(&article));

        let doc = dom::parse("<article><h1>Same  Title</h1></article>");
        let body = *doc.select("article").nodes().first().unwrap();
        let article = Article::new("Same Title", None, None, body);

        assert!(!remove_duplicate_titles(&article));
    }
}
