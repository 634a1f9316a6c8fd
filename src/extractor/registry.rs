//! Ordered extractor dispatch.

use std::fmt;

use dom_query::Document;

use super::{sites, DefaultExtractor, Extractor};
use crate::result::Article;

/// Ordered list of extractors tried before [`DefaultExtractor`].
///
/// The first registered extractor returning an article wins. The default
/// extractor is not part of the list and always runs last.
pub struct ExtractorRegistry {
    extractors: Vec<Box<dyn Extractor + Send + Sync>>,
}

impl ExtractorRegistry {
    /// Registry with no site extractors; every document goes to the default.
    #[must_use]
    pub fn new() -> Self {
        Self {
            extractors: Vec::new(),
        }
    }

    /// Registry holding the built-in site extractors.
    #[must_use]
    pub fn with_builtin() -> Self {
        Self {
            extractors: sites::builtin(),
        }
    }

    /// Append an extractor after those already registered.
    pub fn register(&mut self, extractor: Box<dyn Extractor + Send + Sync>) -> &mut Self {
        self.extractors.push(extractor);
        self
    }

    /// Number of registered extractors, excluding the default.
    #[must_use]
    pub fn len(&self) -> usize {
        self.extractors.len()
    }

    /// Whether no extractor besides the default is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.extractors.is_empty()
    }

    /// Extract the article with the first extractor that accepts the document.
    ///
    /// Returns `None` only when even the default extractor finds no container.
    #[must_use]
    pub fn extract<'a>(&self, doc: &'a Document) -> Option<Article<'a>> {
        for extractor in &self.extractors {
            if let Some(article) = extractor.extract(doc) {
                tracing::debug!(extractor = extractor.name(), "selected extractor");
                return Some(article);
            }
        }

        let article = DefaultExtractor.extract(doc);
        if article.is_some() {
            tracing::debug!(extractor = DefaultExtractor.name(), "selected extractor");
        }
        article
    }
}

impl Default for ExtractorRegistry {
    fn default() -> Self {
        Self::with_builtin()
    }
}

impl fmt::Debug for ExtractorRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<_> = self.extractors.iter().map(|e| e.name()).collect();
        f.debug_struct("ExtractorRegistry")
            .field("extractors", &names)
            .finish()
    }
}
