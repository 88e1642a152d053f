//! HTML link extraction
//!
//! Collects the `href` of every `<a>` element whose value starts with the
//! literal text `http`. That prefix check is the only filter: relative links,
//! fragments, and other schemes are dropped, but so is nothing else. A value
//! such as `httpfoo://x` passes, and links are neither resolved, normalized,
//! nor deduplicated. The attribute is matched by local name, so an SVG
//! `<a xlink:href>` is collected too.

use scraper::{Html, Selector};

/// Literal prefix a link must start with to be collected
pub const LINK_PREFIX: &str = "http";

/// Extracts links from a raw response body
///
/// Invalid UTF-8 is replaced rather than rejected, so this never fails.
pub fn extract_links_from_bytes(body: &[u8]) -> Vec<String> {
    extract_links(&String::from_utf8_lossy(body))
}

/// Extracts links from an HTML document
///
/// The parser is as tolerant as a browser's, so malformed markup still
/// yields whatever anchors could be recovered. Output is in document order.
///
/// # Example
///
/// ```
/// use link_harvest::scrape::extract_links;
///
/// let html = r#"<a href="http://a.com">a</a><a href="/relative">r</a><a href="ftp://x">f</a>"#;
/// assert_eq!(extract_links(html), vec!["http://a.com".to_string()]);
/// ```
pub fn extract_links(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    let mut links = Vec::new();

    let Ok(anchor) = Selector::parse("a") else {
        return links;
    };

    // select() walks the tree in pre-order, which is document order
    for element in document.select(&anchor) {
        // attrs() yields local names, so SVG's xlink:href counts as href
        for (name, value) in element.value().attrs() {
            if name == "href" && value.starts_with(LINK_PREFIX) {
                links.push(value.to_string());
            }
        }
    }

    links
}
