//! Page snapshots from static HTML.
//!
//! Materializes a [`PageSnapshot`] with plain DOM queries:
//!
//! - **title**: first non-empty `h1`, else the `<title>` element.
//! - **container**: first match of `article`, `main`, `[role='main']`,
//!   `div.prose`, `div[class*='content']`.
//! - **container elements**: `h1`..`h6` and `p` inside the container (or the
//!   body when there is no container) in document order. Heading text is
//!   collapsed to a single line.
//! - **elements**: the container elements, or the same query across the whole
//!   document when the container has none.
//! - **text**: one line per block element, whitespace collapsed, blank lines
//!   dropped. `script`, `style`, `noscript` and `template` are invisible.
//! - **links**: every `a[href]` on the page, resolved, http(s) only.

pub mod links;

pub use links::outbound_links;

use std::sync::LazyLock;

use folio_core::{PageElement, PageSnapshot};
use scraper::{ElementRef, Html, Selector};
use url::Url;

/// Content container candidates, most specific first.
pub const CONTAINER_SELECTORS: [&str; 5] = ["article", "main", "[role='main']", "div.prose", "div[class*='content']"];

static CONTAINERS: LazyLock<Vec<Selector>> = LazyLock::new(|| {
    CONTAINER_SELECTORS
        .iter()
        .map(|s| Selector::parse(s).expect("invalid selector"))
        .collect()
});

static ELEMENTS: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("h1, h2, h3, h4, h5, h6, p").expect("invalid selector"));

static H1: LazyLock<Selector> = LazyLock::new(|| Selector::parse("h1").expect("invalid selector"));

static TITLE: LazyLock<Selector> = LazyLock::new(|| Selector::parse("title").expect("invalid selector"));

static BODY: LazyLock<Selector> = LazyLock::new(|| Selector::parse("body").expect("invalid selector"));

const HIDDEN_TAGS: [&str; 4] = ["script", "style", "noscript", "template"];

const BLOCK_TAGS: [&str; 34] = [
    "address", "article", "aside", "blockquote", "br", "dd", "details", "div", "dl", "dt", "figcaption", "figure",
    "footer", "form", "h1", "h2", "h3", "h4", "h5", "h6", "header", "hr", "li", "main", "nav", "ol", "p", "pre",
    "section", "summary", "table", "td", "tr", "ul",
];

/// Build a snapshot of the page at `page_url` from its HTML.
pub fn snapshot_from_html(html: &str, page_url: &Url) -> PageSnapshot {
    let document = Html::parse_document(html);

    let container = find_container(&document);
    if container.is_none() {
        tracing::debug!(url = %page_url, "no content container found, using body");
    }

    let body = document.select(&BODY).next().unwrap_or_else(|| document.root_element());

    let container_elements = collect_elements(container.unwrap_or(body));
    let elements = if container_elements.is_empty() {
        collect_elements(document.root_element())
    } else {
        container_elements.clone()
    };

    let body_text = block_text(body);

    let snapshot = PageSnapshot {
        title: find_title(&document),
        url: page_url.to_string(),
        elements,
        container_elements,
        container_text: container.map(block_text),
        body_text,
        links: outbound_links(&document, page_url),
    };

    tracing::debug!(
        url = %snapshot.url,
        elements = snapshot.elements.len(),
        links = snapshot.links.len(),
        has_container = snapshot.container_text.is_some(),
        "built page snapshot"
    );

    snapshot
}

fn find_title(document: &Html) -> Option<String> {
    let h1 = document
        .select(&H1)
        .next()
        .map(|el| collapse_whitespace(&block_text(el)));

    h1.filter(|t| !t.is_empty()).or_else(|| {
        document
            .select(&TITLE)
            .next()
            .map(|el| collapse_whitespace(&el.text().collect::<String>()))
            .filter(|t| !t.is_empty())
    })
}

fn find_container(document: &Html) -> Option<ElementRef<'_>> {
    CONTAINERS
        .iter()
        .find_map(|selector| document.select(selector).next())
}

fn collect_elements(scope: ElementRef<'_>) -> Vec<PageElement> {
    scope
        .select(&ELEMENTS)
        .enumerate()
        .map(|(order, el)| {
            let name = el.value().name();
            let text = if name == "p" { block_text(el) } else { collapse_whitespace(&block_text(el)) };
            PageElement::new(name, text, order)
        })
        .collect()
}

/// Visible text of `element`, one line per block.
pub fn block_text(element: ElementRef<'_>) -> String {
    let mut raw = String::new();
    push_text(element, &mut raw);

    raw.lines()
        .map(collapse_whitespace)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

fn push_text(element: ElementRef<'_>, out: &mut String) {
    let name = element.value().name();
    if HIDDEN_TAGS.contains(&name) {
        return;
    }

    let block = BLOCK_TAGS.contains(&name);
    if block {
        out.push('\n');
    }

    for child in element.children() {
        if let Some(child_element) = ElementRef::wrap(child) {
            push_text(child_element, out);
        } else if let Some(text) = child.value().as_text() {
            out.push_str(text);
        }
    }

    if block {
        out.push('\n');
    }
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
