//! Configuration options for article conversion.
//!
//! The `Options` struct controls which parts of the document are emitted and
//! how extraction is performed.

/// Configuration options for article conversion.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use article_md::Options;
///
/// // Use defaults
/// let options = Options::default();
///
/// // Customize specific fields
/// let options = Options {
///     include_description: false,
///     url: Some("https://example.com/post".to_string()),
///     ..Options::default()
/// };
/// ```
#[derive(Debug, Clone)]
#[allow(clippy::struct_excessive_bools)]
pub struct Options {
    /// Base URL of the document.
    ///
    /// Used to resolve relative links and images when the document itself
    /// declares neither a canonical link nor an `og:url`.
    ///
    /// Default: `None`
    pub url: Option<String>,

    /// Prepend the article title as a level-one heading.
    ///
    /// Default: `true`
    pub include_title: bool,

    /// Prepend the article description as a blockquote line.
    ///
    /// Default: `true`
    pub include_description: bool,

    /// Resolve relative `href`/`src` values against the base URL.
    ///
    /// Default: `true`
    pub resolve_urls: bool,

    /// Drop the body's `<h1>` when its text equals the article title.
    ///
    /// Default: `true`
    pub remove_duplicate_titles: bool,

    /// Try the built-in site-specific extractors before the default one.
    ///
    /// Default: `true`
    pub use_site_extractors: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            url: None,
            include_title: true,
            include_description: true,
            resolve_urls: true,
            remove_duplicate_titles: true,
            use_site_extractors: true,
        }
    }
}
