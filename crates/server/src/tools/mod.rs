//! MCP tool implementations.
//!
//! This module contains all tools exposed by the folio server.

pub mod article_extract;
pub mod article_scrape;

pub use article_extract::ArticleExtractParams;
pub use article_scrape::ArticleScrapeParams;
