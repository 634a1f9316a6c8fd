//! Error types for article-md.
//!
//! This module defines the error types returned by conversion operations.

/// Error type for conversion operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input could not be treated as an HTML document.
    #[error("HTML parsing failed: {0}")]
    ParseError(String),

    /// No extractor, including the default fallback, located an article container.
    #[error("No article container found")]
    NoContent,
}

/// Result type alias for conversion operations.
pub type Result<T> = std::result::Result<T, Error>;
