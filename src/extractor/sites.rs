//! Site-specific extractors.
//!
//! Each variant recognizes one platform from page metadata and points at the
//! platform's article container. Most only differ in those two answers; the
//! ones with metadata quirks override the relevant accessor.

use dom_query::Document;

use super::{ContainerTemplate, Extractor, ARTICLE_CONTAINERS};
use crate::dom;
use crate::metadata::{self, PageMetadata};
use crate::selector::{discard, CleaningRules};
use crate::url_utils;

/// Every built-in site extractor, in the order the registry tries them.
#[must_use]
pub fn builtin() -> Vec<Box<dyn Extractor + Send + Sync>> {
    vec![
        Box::new(FreediumExtractor),
        Box::new(WechatExtractor),
        Box::new(HugoExtractor),
        Box::new(ToutiaoExtractor),
        Box::new(ZhihuExtractor),
        Box::new(QuantaExtractor),
        Box::new(CloudflareBlogExtractor),
        Box::new(Netease163Extractor),
        Box::new(JianshuExtractor),
    ]
}

fn site_name_is(metadata: &PageMetadata, name: &str) -> bool {
    metadata
        .og_site_name
        .as_deref()
        .is_some_and(|site| site.trim() == name)
}

fn title_ends_with(metadata: &PageMetadata, suffix: &str) -> bool {
    metadata
        .title
        .as_deref()
        .is_some_and(|title| title.trim_end().ends_with(suffix))
}

fn first_text(doc: &Document, tag: &str) -> Option<String> {
    dom::try_select_first(doc, tag)
        .map(|node| dom::text_content(&node).trim().to_string())
        .filter(|text| !text.is_empty())
}

/// Freedium, the Medium mirror.
#[derive(Debug, Clone, Copy, Default)]
pub struct FreediumExtractor;

impl Extractor for FreediumExtractor {
    fn name(&self) -> &'static str {
        "freedium"
    }

    fn can_handle(&self, doc: &Document) -> bool {
        title_ends_with(&metadata::extract_metadata(doc), " - Freedium")
    }

    fn article_container(&self) -> &[ContainerTemplate] {
        const CONTAINERS: &[ContainerTemplate] =
            &[ContainerTemplate::with_attrs("div", &[("class", "main-content")])];
        CONTAINERS
    }

    // The mirror's <title> carries the site suffix; the page heading doesn't.
    fn extract_title(&self, doc: &Document) -> String {
        first_text(doc, "h1").unwrap_or_else(|| metadata::extract_metadata(doc).best_title())
    }

    fn extract_description(&self, doc: &Document) -> Option<String> {
        first_text(doc, "h2").or_else(|| metadata::extract_metadata(doc).og_description)
    }
}

/// WeChat official account articles.
#[derive(Debug, Clone, Copy, Default)]
pub struct WechatExtractor;

impl Extractor for WechatExtractor {
    fn name(&self) -> &'static str {
        "wechat"
    }

    fn can_handle(&self, doc: &Document) -> bool {
        let metadata = metadata::extract_metadata(doc);
        site_name_is(&metadata, "微信公众平台")
            || metadata
                .best_url()
                .is_some_and(|url| url.starts_with("https://mp.weixin.qq.com"))
    }

    fn article_container(&self) -> &[ContainerTemplate] {
        const CONTAINERS: &[ContainerTemplate] =
            &[ContainerTemplate::with_attrs("div", &[("id", "page-content")])];
        CONTAINERS
    }

    fn cleaning_rules(&self) -> CleaningRules {
        CleaningRules::default().with_attr_rule(discard::wechat_meta_content)
    }
}

/// Blogs generated by Hugo.
#[derive(Debug, Clone, Copy, Default)]
pub struct HugoExtractor;

impl Extractor for HugoExtractor {
    fn name(&self) -> &'static str {
        "hugo"
    }

    fn can_handle(&self, doc: &Document) -> bool {
        metadata::extract_metadata(doc)
            .generator
            .is_some_and(|generator| generator.trim_start().starts_with("Hugo"))
    }

    fn article_container(&self) -> &[ContainerTemplate] {
        const CONTAINERS: &[ContainerTemplate] =
            &[ContainerTemplate::with_attrs("div", &[("class", "post-content")])];
        CONTAINERS
    }
}

/// Toutiao (今日头条).
#[derive(Debug, Clone, Copy, Default)]
pub struct ToutiaoExtractor;

impl Extractor for ToutiaoExtractor {
    fn name(&self) -> &'static str {
        "toutiao"
    }

    fn can_handle(&self, doc: &Document) -> bool {
        let metadata = metadata::extract_metadata(doc);
        title_ends_with(&metadata, "今日头条") || site_name_is(&metadata, "今日头条")
    }

    fn article_container(&self) -> &[ContainerTemplate] {
        const CONTAINERS: &[ContainerTemplate] =
            &[ContainerTemplate::with_attrs("div", &[("class", "article-content")])];
        CONTAINERS
    }
}

/// Zhihu columns.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZhihuExtractor;

impl Extractor for ZhihuExtractor {
    fn name(&self) -> &'static str {
        "zhihu"
    }

    fn can_handle(&self, doc: &Document) -> bool {
        metadata::extract_metadata(doc).canonical_starts_with("https://zhuanlan.zhihu.com")
    }

    fn article_container(&self) -> &[ContainerTemplate] {
        const CONTAINERS: &[ContainerTemplate] =
            &[ContainerTemplate::with_attrs("div", &[("class", "Post-RichText")])];
        CONTAINERS
    }
}

/// Quanta Magazine.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuantaExtractor;

impl Extractor for QuantaExtractor {
    fn name(&self) -> &'static str {
        "quanta"
    }

    fn can_handle(&self, doc: &Document) -> bool {
        metadata::extract_metadata(doc).canonical_starts_with("https://www.quantamagazine.org")
    }

    fn article_container(&self) -> &[ContainerTemplate] {
        const CONTAINERS: &[ContainerTemplate] =
            &[ContainerTemplate::with_attrs("div", &[("id", "postBody")])];
        CONTAINERS
    }
}

/// The Cloudflare blog.
#[derive(Debug, Clone, Copy, Default)]
pub struct CloudflareBlogExtractor;

impl Extractor for CloudflareBlogExtractor {
    fn name(&self) -> &'static str {
        "cloudflare-blog"
    }

    fn can_handle(&self, doc: &Document) -> bool {
        metadata::extract_metadata(doc).canonical_starts_with("https://blog.cloudflare.com")
    }

    fn article_container(&self) -> &[ContainerTemplate] {
        const CONTAINERS: &[ContainerTemplate] = &[ContainerTemplate::with_attrs(
            "section",
            &[("class", "post-full-content")],
        )];
        CONTAINERS
    }
}

/// NetEase news (163.com).
#[derive(Debug, Clone, Copy, Default)]
pub struct Netease163Extractor;

impl Extractor for Netease163Extractor {
    fn name(&self) -> &'static str {
        "163"
    }

    fn can_handle(&self, doc: &Document) -> bool {
        metadata::extract_metadata(doc).canonical_starts_with("https://www.163.com")
    }

    fn article_container(&self) -> &[ContainerTemplate] {
        const CONTAINERS: &[ContainerTemplate] =
            &[ContainerTemplate::with_attrs("div", &[("class", "post_content")])];
        CONTAINERS
    }
}

/// Jianshu (简书). Uses the generic containers but publishes
/// protocol-relative canonical URLs.
#[derive(Debug, Clone, Copy, Default)]
pub struct JianshuExtractor;

impl Extractor for JianshuExtractor {
    fn name(&self) -> &'static str {
        "jianshu"
    }

    fn can_handle(&self, doc: &Document) -> bool {
        site_name_is(&metadata::extract_metadata(doc), "简书")
    }

    fn article_container(&self) -> &[ContainerTemplate] {
        ARTICLE_CONTAINERS
    }

    fn extract_url(&self, doc: &Document) -> Option<String> {
        metadata::extract_metadata(doc)
            .best_url()
            .map(|url| url_utils::force_scheme(&url, "https"))
    }
}
