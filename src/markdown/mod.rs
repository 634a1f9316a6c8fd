//! Markdown rendering.
//!
//! [`Renderer`] walks a sanitized article container and produces a
//! [`Fragment`]: Markdown text with block boundaries carried out-of-band.
//! [`postprocess`] turns the fragment into the final string.
//!
//! # Module Structure
//!
//! - `fragment`: the text/break segment sequence
//! - `code`: fenced code blocks and language detection
//! - `table`: GFM pipe tables
//! - `postprocess`: break collapsing and text-level fixups
//!
//! # Example
//!
//! ```rust
//! use article_md::dom;
//! use article_md::markdown::Renderer;
//!
//! let doc = dom::parse("<article><p>Hello <strong>world</strong></p></article>");
//! let article = *doc.select("article").nodes().first().unwrap();
//! assert_eq!(Renderer::new().render(&article), "Hello **world**");
//! ```

pub mod code;
pub mod fragment;
pub mod postprocess;
pub mod table;

use std::fmt;

use dom_query::NodeRef;
use url::Url;

use crate::dom;
use crate::options::Options;
use crate::result::{Article, Conversion};
use crate::selector::discard::GIST_SCRIPT_PREFIX;
use crate::url_utils;

pub use code::{LanguageDetector, NoopDetector};
pub use fragment::{Fragment, Segment};

/// Inline tags whose text is trusted (and escaped when whitespace is stripped).
pub const INLINE_ELEMENTS: &[&str] = &["span", "code", "li", "a", "strong", "em", "img", "b", "i"];

/// Tags whose non-empty output is wrapped in block breaks.
pub const BLOCK_ELEMENTS: &[&str] = &[
    "p",
    "h1",
    "h2",
    "h3",
    "h4",
    "h5",
    "h6",
    "ul",
    "ol",
    "blockquote",
    "pre",
    "picture",
    "hr",
    "figcaption",
    "table",
    "math",
];

const TEX_ENCODING: &str = "application/x-tex";

/// Whether text directly inside `tag` is trusted content.
#[must_use]
pub fn is_trusted(tag: &str) -> bool {
    INLINE_ELEMENTS.contains(&tag) || BLOCK_ELEMENTS.contains(&tag)
}

/// Whether `tag` renders as a block.
#[must_use]
pub fn is_block(tag: &str) -> bool {
    BLOCK_ELEMENTS.contains(&tag)
}

/// Recursive HTML-to-Markdown renderer.
///
/// Holds only configuration; every render call threads its own nesting level
/// and whitespace mode, so one renderer can serve many documents.
pub struct Renderer {
    base_url: Option<Url>,
    detector: Box<dyn LanguageDetector + Send + Sync>,
}

impl Renderer {
    /// Renderer without a base URL and with the no-op language detector.
    #[must_use]
    pub fn new() -> Self {
        Self {
            base_url: None,
            detector: Box::new(NoopDetector),
        }
    }

    /// Resolve relative `href`/`src` values against `url`.
    ///
    /// Anything that is not an absolute HTTP(S) URL disables resolution.
    #[must_use]
    pub fn with_base_url(mut self, url: Option<&str>) -> Self {
        self.base_url = url.and_then(url_utils::parse_base_url);
        self
    }

    /// Use `detector` for code blocks without a `language-*` class.
    #[must_use]
    pub fn with_detector(mut self, detector: impl LanguageDetector + Send + Sync + 'static) -> Self {
        self.detector = Box::new(detector);
        self
    }

    /// The base URL in effect, if any.
    #[must_use]
    pub fn base_url(&self) -> Option<&Url> {
        self.base_url.as_ref()
    }

    /// Render the children of `root` and post-process the result.
    #[must_use]
    pub fn render(&self, root: &NodeRef) -> String {
        postprocess::process(&self.render_fragment(root))
    }

    /// Render the children of `root` without post-processing.
    #[must_use]
    pub fn render_fragment(&self, root: &NodeRef) -> Fragment {
        self.children(root, 0, true)
    }

    /// Assemble the final document: title heading, description quote, body.
    #[must_use]
    pub fn render_article(&self, article: &Article, options: &Options) -> Conversion {
        let mut markdown = String::new();

        if options.include_title {
            markdown.push_str(&format!("# {}\n\n", article.title));
        }
        if options.include_description {
            if let Some(description) = &article.description {
                markdown.push_str(&format!("> {description}\n\n"));
            }
        }
        markdown.push_str(&self.render(&article.body));

        Conversion {
            title: article.title.clone(),
            markdown,
        }
    }

    // === Tree walk ===

    fn children(&self, node: &NodeRef, level: usize, strip: bool) -> Fragment {
        let fragment = self.children_untrimmed(node, level, strip);
        if strip {
            fragment.trim()
        } else {
            fragment
        }
    }

    fn children_untrimmed(&self, node: &NodeRef, level: usize, strip: bool) -> Fragment {
        let trusted = dom::tag_name(node).is_some_and(|tag| is_trusted(&tag));
        let mut fragment = Fragment::new();

        for child in node.children() {
            if child.is_text() {
                let text = child.text();
                if trusted && strip {
                    fragment.push_text(&escape_angle_brackets(&text));
                } else {
                    fragment.push_text(&text);
                }
            } else if child.is_element() {
                fragment.append(self.element(&child, level, strip));
            }
        }

        fragment
    }

    fn element(&self, node: &NodeRef, level: usize, strip: bool) -> Fragment {
        let Some(tag) = dom::tag_name(node) else {
            return Fragment::new();
        };

        let fragment = match tag.as_str() {
            "br" => Fragment::text("\n"),
            "hr" => Fragment::text("---"),
            "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => self.heading(node, &tag, level, strip),
            "a" => self.link(node, level, strip),
            "strong" | "b" => self.emphasis(node, "**", level, strip),
            "em" | "i" => self.emphasis(node, "*", level, strip),
            "ul" | "ol" => self.list(node, level),
            "img" => self.image(node),
            "blockquote" => blockquote(&self.children(node, level, strip)),
            "pre" => self.code_block(node, level),
            "code" => self.inline_code(node, level, strip),
            "picture" => self.picture(node),
            "figcaption" => {
                let caption = self.children(node, level, strip).to_text();
                if caption.is_empty() {
                    Fragment::new()
                } else {
                    Fragment::text(format!("*{caption}*"))
                }
            }
            "table" => self.table(node, level, strip),
            "math" => self.math(node, level, strip),
            "script" => gist_link(node),
            _ => self.children(node, level, strip),
        };

        if is_block(&tag) {
            fragment.into_block()
        } else {
            fragment
        }
    }

    // === Inline elements ===

    fn heading(&self, node: &NodeRef, tag: &str, level: usize, strip: bool) -> Fragment {
        let content = self.children(node, level, strip);
        if content.is_empty() {
            return content;
        }

        let depth = tag[1..].parse::<usize>().unwrap_or(1);
        let mut heading = Fragment::text(format!("{} ", "#".repeat(depth)));
        heading.append(content);
        heading
    }

    fn link(&self, node: &NodeRef, level: usize, strip: bool) -> Fragment {
        let text = self.children(node, level, strip).to_text();
        if text.is_empty() {
            return Fragment::new();
        }

        match dom::get_attribute(node, "href") {
            Some(href) => Fragment::text(format!("[{text}]({})", self.resolve(&href))),
            None => Fragment::text(text),
        }
    }

    // Untrimmed, so edge whitespace can move outside the markers.
    fn emphasis(&self, node: &NodeRef, marker: &str, level: usize, strip: bool) -> Fragment {
        let text = self.children_untrimmed(node, level, strip).to_text();
        Fragment::text(wrap_emphasis(&text, marker))
    }

    fn inline_code(&self, node: &NodeRef, level: usize, strip: bool) -> Fragment {
        let content = self.children(node, level, strip);
        if content.is_empty() {
            return content;
        }
        if content.has_newline() {
            content
        } else {
            Fragment::segment(Segment::InlineCode(format!("`{}`", content.to_text())))
        }
    }

    fn image(&self, node: &NodeRef) -> Fragment {
        let src = non_empty_attr(node, "src").or_else(|| non_empty_attr(node, "data-src"));
        match src {
            Some(src) => {
                let alt = dom::get_attribute(node, "alt").unwrap_or_default();
                Fragment::text(format!("![{alt}]({})", self.resolve(&src)))
            }
            None => Fragment::new(),
        }
    }

    fn picture(&self, node: &NodeRef) -> Fragment {
        let img = dom::find_first(node, "img");
        let from_source = dom::find_first(node, "source")
            .and_then(|source| dom::get_attribute(&source, "srcset"))
            .and_then(|srcset| srcset.split_whitespace().next().map(str::to_string));
        let from_img = img
            .as_ref()
            .and_then(|img| non_empty_attr(img, "src").or_else(|| non_empty_attr(img, "data-src")));

        let Some(src) = from_source.or(from_img) else {
            return Fragment::new();
        };
        let alt = img
            .and_then(|img| dom::get_attribute(&img, "alt"))
            .unwrap_or_default();
        Fragment::text(format!("![{alt}]({})", self.resolve(&src)))
    }

    // === Block algorithms ===

    // Blocks inside an item are flattened onto the item's line.
    fn list(&self, node: &NodeRef, level: usize) -> Fragment {
        let ordered = dom::is_tag(node, "ol");
        let indent = "    ".repeat(level);
        let mut list = Fragment::new();

        for (index, li) in dom::child_elements(node, &["li"]).iter().enumerate() {
            if index > 0 || level > 0 {
                list.push_text("\n");
            }
            let marker = if ordered {
                format!("{}.", index + 1)
            } else {
                "-".to_string()
            };
            list.push_text(&format!("{indent}{marker} "));
            list.append(self.children(li, level + 1, true).flatten());
        }

        list
    }

    fn code_block(&self, node: &NodeRef, level: usize) -> Fragment {
        let code_node = dom::find_first(node, "code").unwrap_or(*node);
        let code = self.children(&code_node, level, false).to_text();

        match code::code_block(&code, &dom::class_list(&code_node), self.detector.as_ref()) {
            Some(block) => Fragment::segment(Segment::CodeBlock(block.to_string())),
            None => {
                tracing::trace!(lines = code.lines().count(), "suppressed line-number block");
                Fragment::new()
            }
        }
    }

    fn table(&self, node: &NodeRef, level: usize, strip: bool) -> Fragment {
        if dom::contains_tag(node, "pre") {
            return self.children(node, level, strip);
        }
        Fragment::text(table::table_to_markdown(node))
    }

    fn math(&self, node: &NodeRef, level: usize, strip: bool) -> Fragment {
        let tex = dom::find_all(node, "annotation")
            .into_iter()
            .find(|annotation| {
                dom::get_attribute(annotation, "encoding").is_some_and(|enc| enc == TEX_ENCODING)
            })
            .map(|annotation| dom::text_content(&annotation).trim().to_string())
            .filter(|tex| !tex.is_empty())
            .or_else(|| non_empty_attr(node, "alttext"));

        match tex {
            Some(tex) => Fragment::text(format!("$$ {tex} $$")),
            None => self.children(node, level, strip),
        }
    }

    fn resolve(&self, url: &str) -> String {
        url_utils::resolve(url, self.base_url.as_ref())
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Renderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Renderer")
            .field("base_url", &self.base_url.as_ref().map(Url::as_str))
            .finish_non_exhaustive()
    }
}

/// Render an extracted article with the base URL and sections `options` ask
/// for.
///
/// The base URL is the article's own URL, else `options.url`; with
/// `resolve_urls` off no URL is resolved.
#[must_use]
pub fn render_article(article: &Article, options: &Options) -> Conversion {
    let base = if options.resolve_urls {
        article.url.as_deref().or(options.url.as_deref())
    } else {
        None
    };
    Renderer::new().with_base_url(base).render_article(article, options)
}

/// Link to an embedded gist; other scripts render as nothing.
fn gist_link(node: &NodeRef) -> Fragment {
    match dom::get_attribute(node, "src") {
        Some(src) if src.starts_with(GIST_SCRIPT_PREFIX) => {
            let url = src.strip_suffix(".js").unwrap_or(&src);
            Fragment::text(format!("[{url}]({url})"))
        }
        _ => Fragment::new(),
    }
}

fn escape_angle_brackets(text: &str) -> String {
    text.replace('<', "&lt;").replace('>', "&gt;")
}

fn non_empty_attr(node: &NodeRef, name: &str) -> Option<String> {
    dom::get_attribute(node, name).filter(|value| !value.trim().is_empty())
}

/// Wrap `text` in emphasis markers, moving surrounding whitespace outside.
///
/// `"bold "` with `**` gives `"**bold** "`. Whitespace-only text is returned
/// as is, since empty markers would render literally.
#[must_use]
pub fn wrap_emphasis(text: &str, marker: &str) -> String {
    let inner = text.trim();
    if inner.is_empty() {
        return text.to_string();
    }

    let leading = &text[..text.len() - text.trim_start().len()];
    let trailing = &text[text.trim_end().len()..];
    format!("{leading}{marker}{inner}{marker}{trailing}")
}

/// Prefix every line of a rendered blockquote with `> `.
///
/// Blocks inside the quote are separated by a bare `>` line; empty edge
/// blocks are dropped. A quoted code block stays a code segment.
fn blockquote(content: &Fragment) -> Fragment {
    let mut quote = Fragment::new();
    let mut pending_gap = false;

    for block in content.blocks() {
        let text = block.to_text();
        let text = text.trim();
        if text.is_empty() {
            pending_gap = !quote.is_empty();
            continue;
        }
        if !quote.is_empty() {
            quote.push_text(if pending_gap { "\n>\n" } else { "\n" });
        }
        pending_gap = false;

        let lines = text
            .lines()
            .map(|line| {
                if line.trim().is_empty() {
                    ">".to_string()
                } else {
                    format!("> {line}")
                }
            })
            .collect::<Vec<_>>()
            .join("\n");

        if block.is_code_block() {
            quote.push(Segment::CodeBlock(lines));
        } else {
            quote.push_text(&lines);
        }
    }

    quote
}

#[cfg(test)]
mod tests {
    use super::*;
    use dom_query::Document;

    fn render(html: &str) -> String {
        let doc = Document::from(format!("<div id=\"root\">{html}</div>"));
        let root = *doc.select("#root").nodes().first().unwrap();
        Renderer::new().render(&root)
    }

    #[test]
    fn test_wrap_emphasis() {
        assert_eq!(wrap_emphasis("bold", "**"), "**bold**");
        assert_eq!(wrap_emphasis("hello  ", "**"), "**hello**  ");
        assert_eq!(wrap_emphasis(" x ", "*"), " *x* ");
        assert_eq!(wrap_emphasis("  ", "*"), "  ");
    }

    #[test]
    fn test_strong_and_em() {
        assert_eq!(render("<p><strong>bold</strong></p>"), "**bold**");
        assert_eq!(render("<p><em>italic</em></p>"), "*italic*");
        assert_eq!(render("<p><b>b</b> and <i>i</i></p>"), "**b** and *i*");
    }

    #[test]
    fn test_strong_relocates_trailing_space() {
        assert_eq!(render("<p><strong>bold </strong>text</p>"), "**bold** text");
    }

    #[test]
    fn test_headings() {
        assert_eq!(render("<h2>Title</h2><p>x</p>"), "## Title\n\nx");
        assert_eq!(render("<h3></h3><p>x</p>"), "x");
    }

    #[test]
    fn test_paragraphs_separated_by_blank_line() {
        assert_eq!(render("<p>One</p>\n   <p>Two</p>"), "One\n\nTwo");
    }

    #[test]
    fn test_links() {
        assert_eq!(render(r#"<p><a href="https://x.io">X</a></p>"#), "[X](https://x.io)");
        assert_eq!(render(r#"<p><a href="https://x.io"></a>y</p>"#), "y");
        assert_eq!(render("<p><a>anchor</a></p>"), "anchor");
    }

    #[test]
    fn test_text_escaping_in_trusted_tags() {
        assert_eq!(render("<p>a &lt;b&gt; c</p>"), "a &lt;b&gt; c");
    }

    #[test]
    fn test_br_and_hr() {
        assert_eq!(render("<p>a<br>b</p><hr><p>c</p>"), "a\nb\n\n---\n\nc");
    }

    #[test]
    fn test_unordered_list() {
        assert_eq!(render("<ul><li>Apple</li><li>Banana</li></ul>"), "- Apple\n- Banana");
    }

    #[test]
    fn test_ordered_list() {
        assert_eq!(render("<ol><li>One</li><li>Two</li></ol>"), "1. One\n2. Two");
    }

    #[test]
    fn test_nested_list() {
        assert_eq!(
            render("<ul><li>Fruit<ul><li>Apple</li></ul></li><li>Veg</li></ul>"),
            "- Fruit\n    - Apple\n- Veg"
        );
    }

    #[test]
    fn test_list_item_paragraphs_share_the_item_line() {
        assert_eq!(render("<ul><li><p>Para</p></li></ul>"), "- Para");
        assert_eq!(render("<ul><li><p>A</p><p>B</p></li></ul>"), "- A B");
        assert_eq!(render("<ol><li>Lead <p>more</p>\n</li></ol>"), "1. Lead more");
    }

    #[test]
    fn test_code_keeps_math_delimiters() {
        assert_eq!(
            render(r#"<pre><code class="language-bash">find . \( -name a \)</code></pre>"#),
            "```bash\nfind . \\( -name a \\)\n```"
        );
        assert_eq!(
            render(r#"<pre>re.compile(r"\[abc\]")</pre>"#),
            "```\nre.compile(r\"\\[abc\\]\")\n```"
        );
        assert_eq!(render(r"<p>Use <code>\(x\)</code> here</p>"), r"Use `\(x\)` here");
        assert_eq!(render(r"<p>\(a\) vs <code>\(a\)</code></p>"), r"$a$ vs `\(a\)`");
    }

    #[test]
    fn test_code_in_list_and_quote_keeps_math_delimiters() {
        assert_eq!(render(r"<ul><li>Type <code>\(x\)</code></li></ul>"), r"- Type `\(x\)`");
        assert_eq!(
            render(r"<blockquote><pre>\[x\]</pre></blockquote>"),
            "> ```\n> \\[x\\]\n> ```"
        );
    }

    #[test]
    fn test_images() {
        assert_eq!(render(r#"<p><img src="a.png" alt="A"></p>"#), "![A](a.png)");
        assert_eq!(render(r#"<p><img data-src="lazy.png"></p>"#), "![](lazy.png)");
        assert_eq!(render(r#"<p>x<img alt="none"></p>"#), "x");
    }

    #[test]
    fn test_picture_prefers_source() {
        let html = r#"<picture><source srcset="big.webp 2x, small.webp 1x"><img src="fallback.png" alt="Pic"></picture>"#;
        assert_eq!(render(html), "![Pic](big.webp)");

        let html = r#"<picture><img src="only.png" alt="Pic"></picture>"#;
        assert_eq!(render(html), "![Pic](only.png)");
    }

    #[test]
    fn test_figcaption() {
        assert_eq!(render("<figure><figcaption>Caption</figcaption></figure>"), "*Caption*");
    }

    #[test]
    fn test_blockquote() {
        assert_eq!(render("<blockquote>Quote</blockquote>"), "> Quote");
        assert_eq!(
            render("<blockquote><p>One</p><p>Two</p></blockquote>"),
            "> One\n>\n> Two"
        );
        assert_eq!(render("<blockquote>a<br>b</blockquote>"), "> a\n> b");
    }

    #[test]
    fn test_inline_code() {
        assert_eq!(render("<p>Run <code>ls -al</code> now</p>"), "Run `ls -al` now");
    }

    #[test]
    fn test_multiline_inline_code_is_raw() {
        assert_eq!(render("<p><code>a<br>b</code></p>"), "a\nb");
    }

    #[test]
    fn test_code_block() {
        assert_eq!(
            render(r#"<pre><code class="language-rust">fn main() {}</code></pre>"#),
            "```rust\nfn main() {}\n```"
        );
        assert_eq!(render("<pre>  plain\n    indented\n</pre>"), "```\nplain\n    indented\n```");
    }

    #[test]
    fn test_code_block_keeps_angle_brackets() {
        assert_eq!(
            render("<pre><code>Vec&lt;u8&gt;</code></pre>"),
            "```\nVec<u8>\n```"
        );
    }

    #[test]
    fn test_line_number_gutter_suppressed() {
        assert_eq!(render("<pre><code>1\n2\n3</code></pre><p>x</p>"), "x");
        assert_eq!(render("<pre><code>1\n3\n5</code></pre>"), "```\n1\n3\n5\n```");
    }

    #[test]
    fn test_detector_used_without_class() {
        let doc = Document::from("<div id=\"root\"><pre><code>SELECT 1;</code></pre></div>");
        let root = *doc.select("#root").nodes().first().unwrap();
        let renderer = Renderer::new().with_detector(|code: &str| {
            code.starts_with("SELECT").then(|| "sql".to_string())
        });

        assert_eq!(renderer.render(&root), "```sql\nSELECT 1;\n```");
    }

    #[test]
    fn test_table_block() {
        assert_eq!(
            render("<p>Before</p><table><tr><th>A</th></tr><tr><td>1</td></tr></table>"),
            "Before\n\n| A |\n|---|\n| 1 |"
        );
    }

    #[test]
    fn test_table_with_pre_is_transparent() {
        assert_eq!(
            render("<table><tr><td><pre><code>x = 1</code></pre></td></tr></table>"),
            "```\nx = 1\n```"
        );
    }

    #[test]
    fn test_math_annotation() {
        let html = r#"<p>Energy:</p><math alttext="E=mc^2"><semantics><mi>E</mi><annotation encoding="application/x-tex">E = mc^2</annotation></semantics></math>"#;
        assert_eq!(render(html), "Energy:\n\n$$ E = mc^2 $$");
    }

    #[test]
    fn test_math_alttext_fallback() {
        assert_eq!(render(r#"<math alttext="a+b"><mi>a</mi></math>"#), "$$ a+b $$");
    }

    #[test]
    fn test_gist_script_link() {
        assert_eq!(
            render(r#"<script src="https://gist.github.com/u/abc.js"></script>"#),
            "[https://gist.github.com/u/abc](https://gist.github.com/u/abc)"
        );
    }

    #[test]
    fn test_unknown_tags_are_transparent() {
        assert_eq!(render("<section><custom-el>inside</custom-el></section>"), "inside");
    }

    #[test]
    fn test_base_url_resolution() {
        let doc = Document::from(
            r#"<div id="root"><p><img src="../images/demo.png"><a href="/about">About</a></p></div>"#,
        );
        let root = *doc.select("#root").nodes().first().unwrap();
        let renderer = Renderer::new().with_base_url(Some("https://site.com/docs/page.html"));

        assert_eq!(
            renderer.render(&root),
            "![](https://site.com/images/demo.png)[About](https://site.com/about)"
        );
    }

    #[test]
    fn test_render_article_assembly() {
        let doc = Document::from("<article><p>Body</p></article>");
        let body = *doc.select("article").nodes().first().unwrap();
        let article = Article::new("Title", None, Some("Desc".to_string()), body);

        let conversion = render_article(&article, &Options::default());
        assert_eq!(conversion.title, "Title");
        assert_eq!(conversion.markdown, "# Title\n\n> Desc\n\nBody");

        let options = Options {
            include_title: false,
            include_description: false,
            ..Options::default()
        };
        assert_eq!(render_article(&article, &options).markdown, "Body");
    }
}
