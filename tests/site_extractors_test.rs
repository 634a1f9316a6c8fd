use article_md::dom;
use article_md::extractor::sites::{
    CloudflareBlogExtractor, FreediumExtractor, HugoExtractor, JianshuExtractor,
    Netease163Extractor, QuantaExtractor, ToutiaoExtractor, WechatExtractor, ZhihuExtractor,
};
use article_md::extractor::{Extractor, ExtractorRegistry};
use article_md::{convert, convert_with_options, Options};

fn page(head: &str, body: &str) -> String {
    format!("<html><head>{head}</head><body>{body}</body></html>")
}

#[test]
fn freedium_article() {
    let html = page(
        "<title>How Rust Works - Freedium</title>",
        r#"<div class="container"><div class="main-content">
            <h1>How Rust Works</h1>
            <h2>Ownership in practice</h2>
            <p>Borrowing <em>rules</em>.</p>
        </div></div>"#,
    );

    let result = convert(&html).unwrap();
    assert_eq!(result.title, "How Rust Works");
    assert_eq!(
        result.markdown,
        "# How Rust Works\n\n> Ownership in practice\n\n## Ownership in practice\n\nBorrowing *rules*."
    );
}

#[test]
fn wechat_article() {
    let html = page(
        r#"<meta property="og:site_name" content="微信公众平台">
           <meta property="og:title" content="标题">"#,
        r#"<div id="page-content">
            <div id="meta_content">作者 2024-01-01</div>
            <div id="js_content"><p>正文内容</p></div>
        </div>"#,
    );

    let result = convert(&html).unwrap();
    assert_eq!(result.markdown, "# 标题\n\n正文内容");
}

#[test]
fn hugo_blog() {
    let html = page(
        r#"<meta name="generator" content="Hugo 0.121.0"><title>Post</title>"#,
        r#"<article><header>Site</header><div class="post-content"><p>Hugo body</p></div>
           <div class="post-footer">Tags</div></article>"#,
    );

    let result = convert(&html).unwrap();
    assert_eq!(result.markdown, "# Post\n\nHugo body");
}

#[test]
fn toutiao_article() {
    let html = page(
        "<title>新闻标题 - 今日头条</title>",
        r#"<div class="article-content"><p>头条正文</p></div><div class="comments">评论</div>"#,
    );

    let doc = dom::parse(&html);
    assert!(ToutiaoExtractor.can_handle(&doc));
    assert!(convert(&html).unwrap().markdown.ends_with("头条正文"));
}

#[test]
fn zhihu_column() {
    let html = page(
        r#"<link rel="canonical" href="https://zhuanlan.zhihu.com/p/123"><title>专栏</title>"#,
        r#"<div class="Post-RichText ztext"><p>知乎正文</p><figure><img data-src="https://pic.zhimg.com/a.jpg"><figcaption>图注</figcaption></figure></div>"#,
    );

    let result = convert(&html).unwrap();
    assert_eq!(
        result.markdown,
        "# 专栏\n\n知乎正文\n\n![](https://pic.zhimg.com/a.jpg)\n\n*图注*"
    );
}

#[test]
fn quanta_article() {
    let html = page(
        r#"<link rel="canonical" href="https://www.quantamagazine.org/a-story/">"#,
        r#"<div id="postBody"><p>Quanta body</p></div><div id="related">Related</div>"#,
    );

    let doc = dom::parse(&html);
    let article = QuantaExtractor.extract(&doc).unwrap();
    assert_eq!(dom::text_content(&article.body), "Quanta body");
}

#[test]
fn cloudflare_blog_post() {
    let html = page(
        r#"<link rel="canonical" href="https://blog.cloudflare.com/some-post/">"#,
        r#"<section class="post-full-content"><p>See <a href="/other-post/">other</a>.</p></section>"#,
    );

    let options = Options {
        include_title: false,
        ..Options::default()
    };
    let result = convert_with_options(&html, &options).unwrap();
    assert_eq!(result.markdown, "See [other](https://blog.cloudflare.com/other-post/).");
}

#[test]
fn netease_article() {
    let html = page(
        r#"<link rel="canonical" href="https://www.163.com/news/article/ABC.html">"#,
        r#"<div class="post_content"><p>网易正文</p></div>"#,
    );

    let doc = dom::parse(&html);
    assert!(Netease163Extractor.extract(&doc).is_some());
}

#[test]
fn jianshu_resolves_against_https() {
    let html = page(
        r#"<meta property="og:site_name" content="简书">
           <meta property="og:url" content="//www.jianshu.com/p/abc">"#,
        r#"<article><p><img src="/upload/x.png" alt="x"></p></article>"#,
    );

    let doc = dom::parse(&html);
    let article = JianshuExtractor.extract(&doc).unwrap();
    assert_eq!(article.url.as_deref(), Some("https://www.jianshu.com/p/abc"));

    let result = convert(&html).unwrap();
    assert!(result.markdown.ends_with("![x](https://www.jianshu.com/upload/x.png)"));
}

#[test]
fn unrecognized_sites_decline() {
    let doc = dom::parse(&page("<title>Plain blog</title>", "<article><p>x</p></article>"));
    let extractors: [&dyn Extractor; 9] = [
        &FreediumExtractor,
        &WechatExtractor,
        &HugoExtractor,
        &ToutiaoExtractor,
        &ZhihuExtractor,
        &QuantaExtractor,
        &CloudflareBlogExtractor,
        &Netease163Extractor,
        &JianshuExtractor,
    ];

    for extractor in extractors {
        assert!(!extractor.can_handle(&doc), "{} claimed a plain page", extractor.name());
    }
    assert!(ExtractorRegistry::with_builtin().extract(&doc).is_some());
}
