//! # article-md
//!
//! Convert a web article's HTML into clean Markdown.
//!
//! Conversion runs in two stages: an extractor locates and sanitizes the
//! article container (with site-specific handling for blogging platforms, Q&A
//! sites and news aggregators), then a recursive renderer walks the container
//! and emits Markdown with proper block structure, nested lists, fenced code,
//! tables and math.
//!
//! ## Quick Start
//!
//! ```rust
//! use article_md::convert;
//!
//! let html = r#"<html><head><title>My Article</title></head>
//! <body><article><p>Main <strong>content</strong> here.</p></article></body></html>"#;
//!
//! let result = convert(html)?;
//! assert_eq!(result.title, "My Article");
//! assert_eq!(result.markdown, "# My Article\n\nMain **content** here.");
//! # Ok::<(), article_md::Error>(())
//! ```
//!
//! ## Features
//!
//! - **Site Extractors**: Freedium, WeChat, Hugo, Toutiao, Zhihu and more,
//!   with a generic fallback
//! - **Sanitization**: Drops scripts, page chrome and hidden elements
//! - **Rendering**: Lists, code blocks with language labels, GFM tables, math
//! - **Extensible**: Register your own [`extractor::Extractor`] implementations

mod convert;
mod error;
mod options;
mod patterns;
mod result;

/// DOM operations adapter over `dom_query`.
pub mod dom;

/// Node predicates used to sanitize article containers.
pub mod selector;

/// Site recognition, container lookup and article extraction.
pub mod extractor;

/// Page metadata (Open Graph, title, generator, canonical link).
pub mod metadata;

/// URL resolution helpers.
pub mod url_utils;

/// Markdown renderer and post-processing.
pub mod markdown;

// Public API - re-exports
pub use error::{Error, Result};
pub use extractor::ExtractorRegistry;
pub use options::Options;
pub use result::{Article, Conversion};

/// Converts an HTML document to Markdown using default options.
///
/// # Example
///
/// ```rust
/// use article_md::convert;
///
/// let html = "<html><body><article><ul><li>Apple</li><li>Banana</li></ul></article></body></html>";
/// let result = convert(html)?;
/// assert!(result.markdown.ends_with("- Apple\n- Banana"));
/// # Ok::<(), article_md::Error>(())
/// ```
#[allow(clippy::missing_errors_doc)]
pub fn convert(html: &str) -> Result<Conversion> {
    convert_with_options(html, &Options::default())
}

/// Converts an HTML document to Markdown with custom options.
///
/// # Example
///
/// ```rust
/// use article_md::{convert_with_options, Options};
///
/// let html = r#"<html><body><article><p><a href="/about">About</a></p></article></body></html>"#;
/// let options = Options {
///     include_title: false,
///     url: Some("https://example.com/posts/1".to_string()),
///     ..Options::default()
/// };
/// let result = convert_with_options(html, &options)?;
/// assert_eq!(result.markdown, "[About](https://example.com/about)");
/// # Ok::<(), article_md::Error>(())
/// ```
#[allow(clippy::missing_errors_doc)]
pub fn convert_with_options(html: &str, options: &Options) -> Result<Conversion> {
    convert::convert_document(html, options)
}

/// Converts an HTML document using a caller-built extractor registry.
///
/// `options.use_site_extractors` is ignored; the registry decides which
/// extractors run before the default one.
///
/// # Errors
///
/// Returns [`Error::ParseError`] for empty input and [`Error::NoContent`]
/// when no extractor finds an article container.
pub fn convert_with_registry(
    html: &str,
    options: &Options,
    registry: &ExtractorRegistry,
) -> Result<Conversion> {
    convert::convert_with_registry(html, options, registry)
}
