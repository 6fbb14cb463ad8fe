//! Outbound link harvesting from HTML documents.

use std::sync::LazyLock;

use scraper::{Html, Selector};
use url::Url;

static ANCHORS: LazyLock<Selector> = LazyLock::new(|| Selector::parse("a[href]").expect("invalid selector"));

/// Harvest absolute http(s) link targets in document order.
///
/// Relative hrefs are resolved against `base_url`. Duplicates are kept; the
/// reference collector decides what counts.
pub fn outbound_links(document: &Html, base_url: &Url) -> Vec<String> {
    document
        .select(&ANCHORS)
        .filter_map(|element| element.value().attr("href"))
        .filter_map(|href| base_url.join(href.trim()).ok())
        .filter(|url| matches!(url.scheme(), "http" | "https"))
        .map(String::from)
        .collect()
}
