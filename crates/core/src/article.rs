//! Article data model.
//!
//! [`PageSnapshot`] is everything the extraction pipeline reads about a page;
//! [`ExtractionResult`] is everything it produces.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Title reported when the page exposes none.
pub const UNTITLED: &str = "Title not found";

/// A raw heading or paragraph record in document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PageElement {
    /// Tag name as reported by the document layer (`h1`..`h6`, `p`).
    pub tag: String,
    /// Visible text of the element.
    pub text: String,
    /// Document-encounter index, strictly increasing.
    pub order: usize,
}

impl PageElement {
    pub fn new(tag: impl Into<String>, text: impl Into<String>, order: usize) -> Self {
        Self { tag: tag.into(), text: text.into(), order }
    }
}

/// Materialized view of a rendered page.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct PageSnapshot {
    /// Main title, if the page has one.
    pub title: Option<String>,
    /// Final URL of the page.
    pub url: String,
    /// Heading and paragraph elements the grouper reads, in document order.
    /// Taken from the whole document when the container holds none.
    pub elements: Vec<PageElement>,
    /// Heading and paragraph elements inside the content container only
    /// (the body when no container was found).
    pub container_elements: Vec<PageElement>,
    /// Full text of the content container; `None` when no container was found.
    pub container_text: Option<String>,
    /// Full text of the whole document body.
    pub body_text: String,
    /// Absolute outbound link targets in document order.
    pub links: Vec<String>,
}

/// A heading with the paragraphs that follow it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Section {
    pub title: String,
    pub level: u8,
    #[serde(rename = "content")]
    pub paragraphs: Vec<String>,
}

/// A numbered outbound reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Reference {
    /// 1-based, assigned in first-seen order.
    pub number: usize,
    pub url: String,
}

/// The reconstructed article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ExtractionResult {
    pub title: String,
    pub url: String,
    pub content_text: String,
    pub word_count: usize,
    pub char_count: usize,
    pub references_count: usize,
    pub references: Vec<Reference>,
    /// Present iff at least one section was realized.
    pub structured_content: Option<Vec<Section>>,
    /// Heading titles observed when no section was realized.
    pub section_titles: Option<Vec<String>>,
}
