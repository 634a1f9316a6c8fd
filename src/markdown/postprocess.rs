//! Text-level fixups and break collapsing, applied once per render.
//!
//! The fixups run per segment before [`collapse`] turns block breaks into
//! blank lines. [`CODE_SPAN_HANDLERS`] see text and inline code;
//! [`MATH_HANDLERS`] see text only. Fenced code blocks are left verbatim.

use regex::Captures;

use super::fragment::{Fragment, Segment};
use crate::patterns::{BOLD_IN_CODE, DISPLAY_MATH, INLINE_MATH, ITALIC_IN_CODE, LINK_IN_CODE};

/// A single string-to-string fixup.
pub type PostHandler = fn(&str) -> String;

/// Formatting moved out of inline code spans, in order.
pub static CODE_SPAN_HANDLERS: &[PostHandler] = &[bold_in_code, italic_in_code, link_in_code];

/// LaTeX delimiters rewritten to dollar form, in order.
pub static MATH_HANDLERS: &[PostHandler] = &[inline_math, display_math];

/// Apply the fixups to every segment, then collapse block breaks.
#[must_use]
pub fn process(fragment: &Fragment) -> String {
    let mut fixed = Fragment::new();
    for segment in fragment.segments() {
        fixed.push(fix_segment(segment));
    }
    collapse(&fixed)
}

fn fix_segment(segment: &Segment) -> Segment {
    match segment {
        Segment::Text(text) => {
            Segment::Text(apply(MATH_HANDLERS, &apply(CODE_SPAN_HANDLERS, text)))
        }
        Segment::InlineCode(code) => Segment::InlineCode(apply(CODE_SPAN_HANDLERS, code)),
        other => other.clone(),
    }
}

fn apply(handlers: &[PostHandler], text: &str) -> String {
    handlers
        .iter()
        .fold(text.to_string(), |text, handler| handler(&text))
}

/// Render a fragment to text, turning each run of breaks into one blank line.
///
/// Whitespace-only text touching a break is layout noise between blocks and
/// is dropped, so breaks separated only by whitespace collapse together. The
/// result is trimmed.
#[must_use]
pub fn collapse(fragment: &Fragment) -> String {
    let segments = fragment.segments();
    let mut out = String::new();
    let mut after_break = false;

    for (index, segment) in segments.iter().enumerate() {
        match segment {
            Segment::Break => {
                if !after_break {
                    out.push_str("\n\n");
                    after_break = true;
                }
            }
            Segment::Text(text) => {
                let before_break = matches!(segments.get(index + 1), Some(Segment::Break));
                if text.trim().is_empty() && (after_break || before_break) {
                    continue;
                }
                out.push_str(text);
                after_break = false;
            }
            Segment::InlineCode(code) | Segment::CodeBlock(code) => {
                out.push_str(code);
                after_break = false;
            }
        }
    }

    out.trim().to_string()
}

/// `` `**text**` `` becomes `` **`text`** ``.
#[must_use]
pub fn bold_in_code(markdown: &str) -> String {
    BOLD_IN_CODE
        .replace_all(markdown, |caps: &Captures| format!("**`{}`**", &caps[1]))
        .into_owned()
}

/// `` `*text*` `` becomes `` *`text`* ``.
#[must_use]
pub fn italic_in_code(markdown: &str) -> String {
    ITALIC_IN_CODE
        .replace_all(markdown, |caps: &Captures| format!("*`{}`*", &caps[1]))
        .into_owned()
}

/// `` `[text](url)` `` becomes `` [`text`](url) ``.
#[must_use]
pub fn link_in_code(markdown: &str) -> String {
    LINK_IN_CODE
        .replace_all(markdown, |caps: &Captures| {
            format!("[`{}`]({})", &caps[1], &caps[2])
        })
        .into_owned()
}

/// `\(x\)` becomes `$x$`.
#[must_use]
pub fn inline_math(markdown: &str) -> String {
    INLINE_MATH
        .replace_all(markdown, |caps: &Captures| format!("${}$", &caps[1]))
        .into_owned()
}

/// `\[x\]` becomes `$$x$$`.
#[must_use]
pub fn display_math(markdown: &str) -> String {
    DISPLAY_MATH
        .replace_all(markdown, |caps: &Captures| format!("$${}$$", &caps[1]))
        .into_owned()
}
