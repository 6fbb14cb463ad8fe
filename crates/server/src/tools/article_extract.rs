//! article_extract tool implementation.
//!
//! Rebuilds a sectioned article from HTML supplied by the client.
//! No network I/O is performed.

use folio_client::{ExtractConfig, extract_article};
use folio_core::{AppConfig, Error, ExtractionResult};
use rmcp::{ErrorData as McpError, model::*};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use url::Url;

/// Input parameters for article_extract tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ArticleExtractParams {
    /// The rendered HTML of the article page.
    pub html: String,

    /// URL the HTML was loaded from, used to resolve relative links.
    /// Defaults to the configured site base URL.
    #[serde(default)]
    pub url: Option<String>,
}

/// Run the extraction and return the article.
pub fn extract_article_output(config: &AppConfig, params: &ArticleExtractParams) -> Result<ExtractionResult, Error> {
    if params.html.trim().is_empty() {
        return Err(Error::InvalidInput("html cannot be empty".into()));
    }

    let page_url = params.url.as_deref().unwrap_or(&config.site_base_url);
    let page_url = Url::parse(page_url).map_err(|e| Error::InvalidUrl(format!("{page_url}: {e}")))?;

    extract_article(&params.html, &page_url, &ExtractConfig::from(config))
}

/// Implementation of the article_extract tool.
pub async fn extract_impl(config: &AppConfig, params: ArticleExtractParams) -> Result<CallToolResult, McpError> {
    let output = extract_article_output(config, &params)?;

    Ok(CallToolResult::success(vec![Content::text(
        serde_json::to_string_pretty(&output).unwrap_or_default(),
    )]))
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_HTML: &str = r#"
        <!DOCTYPE html>
        <html>
        <head><title>Rust (programming language)</title></head>
        <body>
            <header><a href="/">Grokipedia</a></header>
            <article>
                <h1>Rust</h1>
                <h2>Overview</h2>
                <p>Rust is a general-purpose programming language emphasizing performance,
                   type safety, and concurrency.</p>
                <h2>History</h2>
                <p>The language grew out of a personal project begun in 2006 by Mozilla
                   employee Graydon Hoare.</p>
                <p>Mozilla began sponsoring the project in 2009.</p>
                <h2>See also</h2>
                <a href="https://www.rust-lang.org/">Official website</a>
                <a href="https://www.rust-lang.org/">Official website again</a>
                <a href="/page/Go">Go</a>
            </article>
        </body>
        </html>
    "#;

    fn params(html: &str) -> ArticleExtractParams {
        ArticleExtractParams { html: html.into(), url: Some("https://grokipedia.com/page/Rust".into()) }
    }

    #[test]
    fn test_extract_structured_article() {
        let output = extract_article_output(&AppConfig::default(), &params(TEST_HTML)).unwrap();

        assert_eq!(output.title, "Rust");
        assert_eq!(output.url, "https://grokipedia.com/page/Rust");

        let sections = output.structured_content.expect("sections should be present");
        let titles: Vec<&str> = sections.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["Overview", "History"]);
        assert_eq!(sections[1].paragraphs.len(), 2);
        assert!(output.section_titles.is_none());

        assert_eq!(output.references_count, 1);
        assert_eq!(output.references[0].url, "https://www.rust-lang.org/");
    }

    #[test]
    fn test_extract_flat_article_gets_section_markers() {
        let html = r#"
            <main>
                <h1>Rust</h1>
                <h2>History</h2>
                <div>Rust began as a personal project.</div>
                <h2>Design</h2>
                <div>Ownership governs memory.</div>
            </main>
        "#;
        let output = extract_article_output(&AppConfig::default(), &params(html)).unwrap();

        assert!(output.structured_content.is_none());
        assert_eq!(output.section_titles, Some(vec!["History".to_string(), "Design".to_string()]));
        assert!(output.content_text.contains(&format!("{}\nDesign\n", "=".repeat(70))));
        assert_eq!(output.char_count, output.content_text.chars().count());
    }

    #[test]
    fn test_extract_defaults_url_to_site_base() {
        let input = ArticleExtractParams { html: TEST_HTML.into(), url: None };
        let output = extract_article_output(&AppConfig::default(), &input).unwrap();
        assert_eq!(output.url, "https://grokipedia.com/");
    }

    #[test]
    fn test_extract_invalid_url_fails() {
        let input = ArticleExtractParams { html: TEST_HTML.into(), url: Some("not a url".into()) };
        let result = extract_article_output(&AppConfig::default(), &input);
        assert!(matches!(result, Err(Error::InvalidUrl(_))));
    }

    #[tokio::test]
    async fn test_extract_impl_success() {
        let result = extract_impl(&AppConfig::default(), params(TEST_HTML)).await;
        assert!(result.is_ok(), "extraction should succeed");
        assert!(!result.unwrap().is_error.unwrap_or(false));
    }

    #[tokio::test]
    async fn test_extract_empty_html_fails() {
        let result = extract_impl(&AppConfig::default(), params("")).await;
        let err = result.unwrap_err();
        assert_eq!(err.code.0, -32602);
    }
}
