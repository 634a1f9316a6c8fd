//! URL Utility Functions
//!
//! Resolution of relative link and image URLs against the article's base URL,
//! plus small helpers used by site extractors when normalizing canonical URLs.

use url::Url;

/// URL schemes that are emitted unchanged and never resolved.
const OPAQUE_PREFIXES: &[&str] = &["data:", "javascript:", "mailto:", "tel:"];

/// Check if a string is a valid absolute HTTP(S) URL.
///
/// # Returns
/// * `(is_absolute, parsed_url)` - Whether URL is absolute and the parsed URL if valid
#[must_use]
pub fn is_absolute_url(s: &str) -> (bool, Option<Url>) {
    let s = s.trim();

    if !s.starts_with("http://") && !s.starts_with("https://") {
        return (false, None);
    }

    match Url::parse(s) {
        Ok(url) if url.host().is_some() => (true, Some(url)),
        _ => (false, None),
    }
}

/// Parse a base URL for resolution.
///
/// Empty strings and anything that is not an absolute HTTP(S) URL yield `None`,
/// which disables resolution instead of failing the conversion.
#[must_use]
pub fn parse_base_url(url_str: &str) -> Option<Url> {
    let (is_abs, parsed) = is_absolute_url(url_str);
    if is_abs {
        parsed
    } else {
        None
    }
}

/// Convert a relative or absolute URL to absolute form.
///
/// Handles scheme-relative (`//cdn.example.com/x.png`), root-relative
/// (`/images/x.png`) and path-relative (`../images/x.png`) forms. Opaque URLs
/// (`data:`, `mailto:`, ...) and in-page fragments are returned unchanged, as is
/// anything the URL parser rejects.
#[must_use]
pub fn create_absolute_url(url_str: &str, base: &Url) -> String {
    let url_str = url_str.trim();

    if url_str.is_empty() || url_str.starts_with('#') {
        return url_str.to_string();
    }

    let lower = url_str.to_ascii_lowercase();
    if OPAQUE_PREFIXES.iter().any(|prefix| lower.starts_with(prefix)) {
        return url_str.to_string();
    }

    if is_absolute_url(url_str).0 {
        return url_str.to_string();
    }

    match base.join(url_str) {
        Ok(resolved) => resolved.to_string(),
        Err(_) => url_str.to_string(),
    }
}

/// Resolve `url_str` against an optional base, returning it unchanged when no
/// base is known.
#[must_use]
pub fn resolve(url_str: &str, base: Option<&Url>) -> String {
    match base {
        Some(base) => create_absolute_url(url_str, base),
        None => url_str.trim().to_string(),
    }
}

/// Prefix a scheme onto protocol-relative URLs (`//host/path`).
///
/// Other URLs are returned unchanged.
#[must_use]
pub fn force_scheme(url_str: &str, scheme: &str) -> String {
    let url_str = url_str.trim();
    if url_str.starts_with("//") {
        format!("{scheme}:{url_str}")
    } else {
        url_str.to_string()
    }
}
