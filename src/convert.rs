//! Conversion pipeline.
//!
//! Parse, pick an extractor, optionally drop a duplicated title heading, then
//! render the article.

use crate::dom;
use crate::error::{Error, Result};
use crate::extractor::{self, ExtractorRegistry};
use crate::markdown;
use crate::options::Options;
use crate::result::Conversion;

/// Main entry point for conversion.
pub(crate) fn convert_document(html: &str, options: &Options) -> Result<Conversion> {
    let registry = if options.use_site_extractors {
        ExtractorRegistry::with_builtin()
    } else {
        ExtractorRegistry::new()
    };
    convert_with_registry(html, options, &registry)
}

/// Conversion with a caller-supplied registry.
pub(crate) fn convert_with_registry(
    html: &str,
    options: &Options,
    registry: &ExtractorRegistry,
) -> Result<Conversion> {
    if html.trim().is_empty() {
        return Err(Error::ParseError("empty document".to_string()));
    }

    let document = dom::parse(html);

    let article = registry.extract(&document).ok_or(Error::NoContent)?;
    tracing::debug!(
        title = %article.title,
        url = article.url.as_deref().unwrap_or(""),
        "extracted article"
    );

    if options.remove_duplicate_titles && extractor::remove_duplicate_titles(&article) {
        tracing::debug!("removed heading duplicating the title");
    }

    Ok(markdown::render_article(&article, options))
}
