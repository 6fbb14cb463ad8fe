//! article_scrape tool implementation.
//!
//! Resolves a query to its article page, fetches it, and extracts the article.
//! The page is fetched once; failures are reported, never retried.

use chrono::Utc;
use folio_client::{ExtractConfig, FetchClient, FetchConfig, article_url, extract_article};
use folio_core::{AppConfig, Error, ExtractionResult};
use rmcp::{ErrorData as McpError, model::*};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Input parameters for article_scrape tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ArticleScrapeParams {
    /// Article name to look up (e.g. "rust programming language").
    pub query: String,

    /// Site base URL override. Defaults to the configured site.
    #[serde(default)]
    pub base_url: Option<String>,
}

/// Output structure for article_scrape tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ArticleScrapeOutput {
    #[serde(flatten)]
    pub article: ExtractionResult,
    /// RFC 3339 timestamp of when the article was scraped.
    pub timestamp: String,
    /// The query as given.
    pub query: String,
}

/// Implementation of the article_scrape tool.
pub async fn scrape_impl(config: &AppConfig, params: ArticleScrapeParams) -> Result<CallToolResult, McpError> {
    let output = scrape_article(config, params).await.inspect_err(|e| {
        tracing::error!(error = %e, "article scrape failed");
    })?;

    Ok(CallToolResult::success(vec![Content::text(
        serde_json::to_string_pretty(&output).unwrap_or_default(),
    )]))
}

async fn scrape_article(config: &AppConfig, params: ArticleScrapeParams) -> Result<ArticleScrapeOutput, Error> {
    if params.query.trim().is_empty() {
        return Err(Error::InvalidInput("Query cannot be empty".into()));
    }

    let base = params.base_url.as_deref().unwrap_or(&config.site_base_url);
    let page_url = article_url(base, &params.query).map_err(|e| Error::InvalidUrl(e.to_string()))?;

    tracing::info!(query = %params.query, url = %page_url, "scraping article");

    let client = FetchClient::new(FetchConfig::from(config))?;
    let response = client.fetch(page_url.as_str()).await?;

    let article = extract_article(&response.text(), &response.final_url, &ExtractConfig::from(config))?;

    Ok(ArticleScrapeOutput {
        article,
        timestamp: Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true),
        query: params.query,
    })
}
