//! Compiled regex patterns used by sanitization and post-processing.
//!
//! All patterns are compiled once on first use via `LazyLock`.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Sanitization Patterns
// =============================================================================

/// Matches an inline style that hides the element.
pub static DISPLAY_NONE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)display\s*:\s*none").expect("DISPLAY_NONE regex")
});

// =============================================================================
// Post-processing Patterns
// =============================================================================

/// Matches bold text wrapped in an inline code span: `` `**text**` ``.
pub static BOLD_IN_CODE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"`\*\*(.*?)\*\*`").expect("BOLD_IN_CODE regex")
});

/// Matches italic text wrapped in an inline code span: `` `*text*` ``.
pub static ITALIC_IN_CODE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"`\*(.*?)\*`").expect("ITALIC_IN_CODE regex")
});

/// Matches a whole link wrapped in an inline code span: `` `[text](url)` ``.
pub static LINK_IN_CODE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"`\s*\[([^\]]+)\]\(([^)]+)\)\s*`").expect("LINK_IN_CODE regex")
});

/// Matches inline LaTeX delimited by `\(` and `\)`.
pub static INLINE_MATH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\\\((.+?)\\\)").expect("INLINE_MATH regex")
});

/// Matches display LaTeX delimited by `\[` and `\]`, possibly across lines.
pub static DISPLAY_MATH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)\\\[(.+?)\\\]").expect("DISPLAY_MATH regex")
});

// =============================================================================
// Text Cleaning Patterns
// =============================================================================

/// Matches runs of whitespace for normalization.
pub static WHITESPACE_NORMALIZE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s+").expect("WHITESPACE_NORMALIZE regex")
});
