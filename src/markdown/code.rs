//! Fenced code blocks.

use std::fmt;

/// Guesses the language of an unlabeled code block.
///
/// Any `Fn(&str) -> Option<String>` closure is a detector.
pub trait LanguageDetector {
    /// Language name for the fence, or `None` to leave it unlabeled.
    fn detect(&self, code: &str) -> Option<String>;
}

impl<F> LanguageDetector for F
where
    F: Fn(&str) -> Option<String>,
{
    fn detect(&self, code: &str) -> Option<String> {
        self(code)
    }
}

/// Detector that never guesses.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopDetector;

impl LanguageDetector for NoopDetector {
    fn detect(&self, _code: &str) -> Option<String> {
        None
    }
}

/// A code block ready to be fenced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeBlock {
    /// Fence label; empty when unknown.
    pub language: String,

    /// Code with surrounding whitespace trimmed.
    pub code: String,
}

impl fmt::Display for CodeBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "```{}\n{}\n```", self.language, self.code)
    }
}

/// Language named by a `language-<x>` class token.
#[must_use]
pub fn class_language<S: AsRef<str>>(classes: &[S]) -> Option<String> {
    classes
        .iter()
        .find_map(|class| class.as_ref().strip_prefix("language-"))
        .filter(|language| !language.is_empty())
        .map(str::to_string)
}

/// Whether every non-blank line is an integer, each one greater than the
/// previous by exactly one.
///
/// Such blocks are line-number gutters rendered next to the real code. Blocks
/// with no numbers or a single number count as sequential.
#[must_use]
pub fn is_sequentially_increasing(code: &str) -> bool {
    let mut previous: Option<i64> = None;

    for line in code.lines().map(str::trim).filter(|line| !line.is_empty()) {
        let Ok(number) = line.parse::<i64>() else {
            return false;
        };
        if let Some(prev) = previous {
            if prev.checked_add(1) != Some(number) {
                return false;
            }
        }
        previous = Some(number);
    }

    true
}

/// Build the fenced block for `code`, or `None` for a line-number gutter.
///
/// The class-declared language wins over the detector.
#[must_use]
pub fn code_block(
    code: &str,
    classes: &[String],
    detector: &dyn LanguageDetector,
) -> Option<CodeBlock> {
    let code = code.trim();
    if is_sequentially_increasing(code) {
        return None;
    }

    let language = class_language(classes)
        .or_else(|| detector.detect(code))
        .unwrap_or_default();

    Some(CodeBlock {
        language,
        code: code.to_string(),
    })
}
