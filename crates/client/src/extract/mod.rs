//! Structured article extraction.
//!
//! Rebuilds a sectioned article from a [`PageSnapshot`].
//!
//! ### Pipeline
//! - Classify raw elements into headings and prose paragraphs.
//! - Group paragraphs under the nearest preceding heading.
//! - If the grouped text is too short, degrade through the fallback chain
//!   (paragraph list, container text, body text).
//! - If no section was realized but headings were seen, reinsert section
//!   boundaries into the flat text by matching heading titles.
//! - Number outbound references and measure the final text.
//!
//! ### Stable Abstraction
//! - Uses the `Extractor` trait so tools do not depend on the pipeline directly.
//!
//! Every run owns its state; nothing is shared between runs.

pub mod assemble;
pub mod classify;
pub mod fallback;
pub mod format;
pub mod references;
pub mod sections;

pub use assemble::{ArticleParts, TextMetrics, assemble, measure};
pub use classify::{ClassifiedElement, classify};
pub use fallback::{FallbackOutcome, Tier, TierInput, run_chain};
pub use format::{format_with_sections, section_titles};
pub use references::{MAX_REFERENCES, collect_references};
pub use sections::{DELIMITER_WIDTH, Grouping, delimiter_block, group_sections};

use folio_core::article::UNTITLED;
use folio_core::{AppConfig, Error, ExtractionResult, PageSnapshot};
use url::Url;

use crate::document::snapshot_from_html;

/// Configuration for article extraction.
#[derive(Debug, Clone)]
pub struct ExtractConfig {
    /// Links containing this token are same-site and never references (default: "grokipedia.com")
    pub site_domain: Option<String>,

    /// Maximum number of references kept (default: 100, clamped to 100)
    pub max_references: usize,

    /// Minimum character count for the structured tier (default: 100)
    pub structured_min_chars: usize,

    /// Minimum character count for the paragraph-list tier (default: 50)
    pub paragraph_min_chars: usize,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            site_domain: Some("grokipedia.com".to_string()),
            max_references: MAX_REFERENCES,
            structured_min_chars: 100,
            paragraph_min_chars: 50,
        }
    }
}

impl From<&AppConfig> for ExtractConfig {
    fn from(config: &AppConfig) -> Self {
        Self {
            site_domain: Some(config.site_domain.clone()).filter(|d| !d.is_empty()),
            max_references: config.max_references.min(MAX_REFERENCES),
            structured_min_chars: config.structured_min_chars,
            paragraph_min_chars: config.paragraph_min_chars,
        }
    }
}

/// Stable extractor trait for article reconstruction.
pub trait Extractor: Send + Sync {
    /// Rebuild the article held in `snapshot`.
    fn extract(&self, snapshot: &PageSnapshot, config: &ExtractConfig) -> Result<ExtractionResult, Error>;
}

/// Heading/paragraph section extractor.
#[derive(Debug, Default)]
pub struct SectionExtractor;

impl SectionExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Extractor for SectionExtractor {
    fn extract(&self, snapshot: &PageSnapshot, config: &ExtractConfig) -> Result<ExtractionResult, Error> {
        ExtractionRun::new(snapshot, config).execute()
    }
}

/// State of a single extraction, built and dropped per call.
struct ExtractionRun<'a> {
    snapshot: &'a PageSnapshot,
    config: &'a ExtractConfig,
    title: Option<String>,
    elements: Vec<ClassifiedElement>,
    /// Classified container elements; feed the paragraph tier and section titles.
    scoped: Vec<ClassifiedElement>,
}

impl<'a> ExtractionRun<'a> {
    fn new(snapshot: &'a PageSnapshot, config: &'a ExtractConfig) -> Self {
        let title = snapshot
            .title
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string);

        Self {
            snapshot,
            config,
            title,
            elements: classify(&snapshot.elements),
            scoped: classify(&snapshot.container_elements),
        }
    }

    fn execute(self) -> Result<ExtractionResult, Error> {
        let grouping = group_sections(&self.elements);

        let outcome = run_chain(
            &TierInput {
                structured: &grouping.content_text,
                elements: &self.scoped,
                container_text: self.snapshot.container_text.as_deref(),
                body_text: &self.snapshot.body_text,
            },
            self.config,
        );

        if outcome.tier != Tier::Structured {
            tracing::warn!(tier = %outcome.tier, url = %self.snapshot.url, "structured content insufficient, fell back");
        }

        let document_title = self.title.as_deref().unwrap_or(UNTITLED);
        let titles = section_titles(self.headings(), document_title);

        let content_text = if grouping.is_empty() && !titles.is_empty() {
            format_with_sections(&outcome.text, &titles)
        } else {
            outcome.text
        };

        let references = collect_references(
            self.snapshot.links.iter().map(String::as_str),
            self.config.site_domain.as_deref(),
            self.config.max_references,
        );

        let result = assemble(ArticleParts {
            title: self.title,
            url: self.snapshot.url.clone(),
            content_text,
            references,
            sections: grouping.sections,
            section_titles: titles,
        })?;

        tracing::info!(
            url = %result.url,
            tier = %outcome.tier,
            sections = result.structured_content.as_ref().map_or(0, Vec::len),
            words = result.word_count,
            chars = result.char_count,
            references = result.references_count,
            "extracted article"
        );

        Ok(result)
    }

    fn headings(&self) -> impl Iterator<Item = &str> {
        self.scoped
            .iter()
            .filter(|element| element.is_heading())
            .map(ClassifiedElement::text)
    }
}

/// Extract an article from HTML using the default extractor.
///
/// This is a convenience function that builds the snapshot with the document
/// layer and runs the [`SectionExtractor`].
pub fn extract_article(html: &str, page_url: &Url, config: &ExtractConfig) -> Result<ExtractionResult, Error> {
    if html.trim().is_empty() {
        return Err(Error::InvalidInput("html cannot be empty".into()));
    }

    let snapshot = snapshot_from_html(html, page_url);
    SectionExtractor::new().extract(&snapshot, config)
}
