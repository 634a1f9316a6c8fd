//! Selector Infrastructure
//!
//! Cleaning rules are plain predicate functions over a node. Extractors hold
//! them as ordered lists in a [`CleaningRules`] value and apply them to the
//! article container before rendering.

use std::fmt;

use dom_query::NodeRef;

use crate::dom;

pub mod discard;

/// A rule that tests if a node matches certain criteria.
///
/// Rules are pure: they never mutate the node they inspect.
pub type Rule = fn(&NodeRef) -> bool;

/// Ordered tag-removal and attribute rules used to sanitize an article
/// container.
///
/// The default value holds the base rule lists shared by every extractor.
/// Site-specific extractors compose their own additions on top:
///
/// ```rust
/// use article_md::selector::{discard, CleaningRules};
///
/// let rules = CleaningRules::default().with_attr_rule(discard::wechat_meta_content);
/// assert_eq!(rules.attr_rules().len(), discard::ATTRS_TO_CLEAN.len() + 1);
/// ```
#[derive(Clone)]
pub struct CleaningRules {
    tag_rules: Vec<Rule>,
    attr_rules: Vec<Rule>,
}

impl CleaningRules {
    /// Rule set with no rules at all.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            tag_rules: Vec::new(),
            attr_rules: Vec::new(),
        }
    }

    /// Append a tag-removal rule.
    #[must_use]
    pub fn with_tag_rule(mut self, rule: Rule) -> Self {
        self.tag_rules.push(rule);
        self
    }

    /// Append an attribute rule.
    #[must_use]
    pub fn with_attr_rule(mut self, rule: Rule) -> Self {
        self.attr_rules.push(rule);
        self
    }

    /// Tag-removal rules in evaluation order.
    #[must_use]
    pub fn tag_rules(&self) -> &[Rule] {
        &self.tag_rules
    }

    /// Attribute rules in evaluation order.
    #[must_use]
    pub fn attr_rules(&self) -> &[Rule] {
        &self.attr_rules
    }

    /// Whether any tag-removal rule matches the node.
    #[must_use]
    pub fn matches_tag(&self, node: &NodeRef) -> bool {
        self.tag_rules.iter().any(|rule| rule(node))
    }

    /// Whether any attribute rule matches the node.
    ///
    /// Nodes without attributes never match.
    #[must_use]
    pub fn matches_attrs(&self, node: &NodeRef) -> bool {
        !node.attrs().is_empty() && self.attr_rules.iter().any(|rule| rule(node))
    }

    /// Remove every descendant element of `root` matched by the rules.
    ///
    /// Descendants are visited in document order. Tag rules run first; a node
    /// they remove is skipped entirely, so attribute rules never see a detached
    /// node and its subtree is not visited. Returns the number of removed
    /// nodes.
    pub fn sanitize(&self, root: &NodeRef) -> usize {
        let mut removed = 0;

        for child in root.children() {
            if !child.is_element() {
                continue;
            }

            if self.matches_tag(&child) {
                dom::remove(&child);
                removed += 1;
                continue;
            }

            if self.matches_attrs(&child) {
                dom::remove(&child);
                removed += 1;
                continue;
            }

            removed += self.sanitize(&child);
        }

        removed
    }
}

impl Default for CleaningRules {
    fn default() -> Self {
        Self {
            tag_rules: discard::TAGS_TO_CLEAN.to_vec(),
            attr_rules: discard::ATTRS_TO_CLEAN.to_vec(),
        }
    }
}

impl fmt::Debug for CleaningRules {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CleaningRules")
            .field("tag_rules", &self.tag_rules.len())
            .field("attr_rules", &self.attr_rules.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dom_query::Document;

    fn article<'a>(doc: &'a Document) -> NodeRef<'a> {
        *doc.select("article").nodes().first().unwrap()
    }

    #[test]
    fn test_sanitize_removes_tags_and_hidden_nodes() {
        let doc = Document::from(
            r#"<article>
                <p>Visible</p>
                <style>p{color:red}</style>
                <p style="display:none">Hidden</p>
                <div hidden>Invisible</div>
                <!-- comment -->
            </article>"#,
        );
        let root = article(&doc);

        let removed = CleaningRules::default().sanitize(&root);

        let text = dom::text_content(&root);
        assert_eq!(removed, 3);
        assert!(text.contains("Visible"));
        assert!(!text.contains("Hidden"));
        assert!(!text.contains("Invisible"));
        assert!(!text.contains("color:red"));
    }

    #[test]
    fn test_sanitize_recurses_into_kept_nodes() {
        let doc = Document::from(
            r#"<article><section><div><span data-testid="claps">50</span>Body</div></section></article>"#,
        );
        let root = article(&doc);

        CleaningRules::default().sanitize(&root);

        assert!(doc.select("span").is_empty());
        assert!(dom::text_content(&root).contains("Body"));
    }

    #[test]
    fn test_removed_subtree_is_not_visited() {
        let doc = Document::from(
            r#"<article><aside><p hidden>inner</p></aside><p>kept</p></article>"#,
        );
        let root = article(&doc);

        // Only the aside counts; its hidden child goes with it.
        assert_eq!(CleaningRules::default().sanitize(&root), 1);
        assert_eq!(doc.select("p").length(), 1);
    }

    #[test]
    fn test_tag_rules_run_before_attr_rules() {
        fn any_id(node: &NodeRef) -> bool {
            dom::has_attribute(node, "id")
        }

        let doc = Document::from(r#"<article><footer id="f">x</footer></article>"#);
        let rules = CleaningRules::default().with_attr_rule(any_id);
        let footer = *doc.select("footer").nodes().first().unwrap();

        assert!(rules.matches_tag(&footer));
        assert_eq!(rules.sanitize(&article(&doc)), 1);
    }

    #[test]
    fn test_composed_rules_extend_base_lists() {
        let rules = CleaningRules::default().with_attr_rule(discard::wechat_meta_content);

        assert_eq!(rules.tag_rules().len(), discard::TAGS_TO_CLEAN.len());
        assert_eq!(rules.attr_rules().len(), discard::ATTRS_TO_CLEAN.len() + 1);

        let doc = Document::from(
            r#"<article><div id="meta_content">By someone</div><p>Body</p></article>"#,
        );
        rules.sanitize(&article(&doc));
        assert!(doc.select("#meta_content").is_empty());

        let doc = Document::from(
            r#"<article><div id="meta_content">By someone</div><p>Body</p></article>"#,
        );
        CleaningRules::default().sanitize(&article(&doc));
        assert!(doc.select("#meta_content").exists());
    }

    #[test]
    fn test_empty_rules_remove_nothing() {
        let doc = Document::from(r#"<article><script>x()</script><p>Body</p></article>"#);

        assert_eq!(CleaningRules::empty().sanitize(&article(&doc)), 0);
        assert!(doc.select("script").exists());
    }
}
