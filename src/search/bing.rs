//! Bing image search result scraping.

use std::sync::OnceLock;

use regex::Regex;
use scraper::{Html, Selector};

use super::ImageResult;

/// Bing image search endpoint.
pub const BING_IMAGE_SEARCH_URL: &str = "https://www.bing.com/images/search";

/// Attribute Bing uses for the lazily-loaded thumbnail URL.
const THUMBNAIL_ATTR: &str = "src2";

fn size_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?i)&w=[0-9]*&h=[0-9]*").expect("thumbnail size regex is valid")
    })
}

/// Rewrite the `&w=..&h=..` thumbnail size in a Bing URL.
///
/// Every occurrence is replaced; URLs without a size are returned unchanged.
pub fn rewrite_thumbnail_size(url: &str, size: u32) -> String {
    let replacement = format!("&w={}&h={}", size, size);
    size_pattern()
        .replace_all(url, regex::NoExpand(&replacement))
        .into_owned()
}

/// Extract image results from a Bing image search page.
///
/// Only `<img>` elements carrying a `src2` attribute are results; the rest
/// are logos and UI chrome. Document order is preserved.
pub fn parse_results(html: &str, thumbnail_size: u32) -> Vec<ImageResult> {
    let document = Html::parse_document(html);
    let Ok(selector) = Selector::parse("img") else {
        return Vec::new();
    };

    document
        .select(&selector)
        .filter_map(|img| {
            let src = img.value().attr(THUMBNAIL_ATTR)?;
            Some(ImageResult {
                title: img.value().attr("alt").unwrap_or_default().to_string(),
                url: rewrite_thumbnail_size(src, thumbnail_size),
            })
        })
        .collect()
}
