//! Discard Rules
//!
//! Predicates identifying nodes to delete from an article container before
//! rendering. Tag rules look only at the tag name (and, for scripts, the
//! `src`); attribute rules inspect the attribute set of otherwise-kept nodes.

use dom_query::NodeRef;

use crate::dom;
use crate::patterns::DISPLAY_NONE;
use crate::selector::Rule;

/// Script hosts whose embeds are kept and rendered as links.
pub const GIST_SCRIPT_PREFIX: &str = "https://gist.github.com";

/// Tag removal rules, evaluated before [`ATTRS_TO_CLEAN`].
pub static TAGS_TO_CLEAN: &[Rule] = &[page_chrome, inline_script, foreign_script];

/// Attribute rules, evaluated only for nodes no tag rule removed.
pub static ATTRS_TO_CLEAN: &[Rule] = &[
    hidden_by_style,
    hidden_attribute,
    test_id_attribute,
    speechify_ignore,
    katex_html,
];

/// Styling, interactive and layout chrome that never carries article text.
#[must_use]
pub fn page_chrome(node: &NodeRef) -> bool {
    dom::tag_name(node).is_some_and(|tag| {
        matches!(
            tag.as_str(),
            "style" | "link" | "button" | "footer" | "header" | "aside" | "nav"
        )
    })
}

/// Inline `<script>` blocks.
#[must_use]
pub fn inline_script(node: &NodeRef) -> bool {
    dom::is_tag(node, "script") && !dom::has_attribute(node, "src")
}

/// External scripts, except gist embeds.
#[must_use]
pub fn foreign_script(node: &NodeRef) -> bool {
    dom::is_tag(node, "script")
        && dom::get_attribute(node, "src").is_some_and(|src| !src.starts_with(GIST_SCRIPT_PREFIX))
}

/// `style="display: none"` in any spacing or case.
#[must_use]
pub fn hidden_by_style(node: &NodeRef) -> bool {
    dom::get_attribute(node, "style").is_some_and(|style| DISPLAY_NONE.is_match(&style))
}

/// The boolean `hidden` attribute.
#[must_use]
pub fn hidden_attribute(node: &NodeRef) -> bool {
    dom::has_attribute(node, "hidden")
}

/// Medium's `data-testid` widgets (claps, share bars, author cards).
#[must_use]
pub fn test_id_attribute(node: &NodeRef) -> bool {
    dom::has_attribute(node, "data-testid")
}

/// Medium's text-to-speech exclusion blocks.
#[must_use]
pub fn speechify_ignore(node: &NodeRef) -> bool {
    dom::has_class(node, "speechify-ignore")
}

/// KaTeX's visual HTML rendering; the MathML twin carries the TeX source.
#[must_use]
pub fn katex_html(node: &NodeRef) -> bool {
    dom::has_class(node, "katex-html")
}

/// WeChat's article meta block (author, account, publish time).
#[must_use]
pub fn wechat_meta_content(node: &NodeRef) -> bool {
    dom::get_attribute(node, "id").is_some_and(|id| id == "meta_content")
}
