//! Client code for folio.
//!
//! This crate provides the article extraction pipeline, the HTML document
//! layer that feeds it, and the HTTP fetch used by the server.

pub mod document;
pub mod extract;
pub mod fetch;

pub use document::snapshot_from_html;

pub use extract::{ExtractConfig, Extractor, SectionExtractor, Tier, extract_article};

pub use fetch::{FetchClient, FetchConfig, FetchResponse, article_url};
