//! MCP server handler implementation.
//!
//! This module defines the main server handler that
//! routes tool calls to the appropriate implementations.
use std::sync::Arc;

use crate::tools::{ArticleExtractParams, ArticleScrapeParams, article_extract::extract_impl, article_scrape::scrape_impl};

use folio_core::AppConfig;
use rmcp::{
    ErrorData as McpError, ServerHandler,
    handler::server::{
        tool::{ToolCallContext, ToolRouter},
        wrapper::Parameters,
    },
    model::{
        CallToolRequestParam, CallToolResult, Implementation, ListToolsResult, PaginatedRequestParam, ProtocolVersion,
        ServerCapabilities, ServerInfo,
    },
    service::{RequestContext, RoleServer},
    tool, tool_router,
};

/// The main MCP server handler for folio.
#[derive(Clone)]
pub struct FolioServer {
    config: Arc<AppConfig>,
    tool_router: ToolRouter<Self>,
}

/// Tool router implementation using the #[tool_router] macro.
///
/// This macro generates the routing logic that maps tool names to handler methods.
#[tool_router]
impl FolioServer {
    /// Create a new server handler.
    pub fn new(config: AppConfig) -> Self {
        Self { config: Arc::new(config), tool_router: Self::tool_router() }
    }

    /// Rebuild a sectioned article from HTML.
    ///
    /// No network requests are made.
    #[tool(
        description = "Extract a structured article from HTML. Returns title, sections, flat content text, word/char counts and numbered references."
    )]
    async fn article_extract(&self, params: Parameters<ArticleExtractParams>) -> Result<CallToolResult, McpError> {
        extract_impl(&self.config, params.0).await
    }

    /// Fetch the article page for a query and extract it.
    #[tool(
        description = "Look up an encyclopedia article by name, fetch its page and extract a structured article with a timestamp."
    )]
    async fn article_scrape(&self, params: Parameters<ArticleScrapeParams>) -> Result<CallToolResult, McpError> {
        scrape_impl(&self.config, params.0).await
    }
}

impl ServerHandler for FolioServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            server_info: Implementation {
                name: "mcp-folio".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                ..Default::default()
            },
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }

    async fn list_tools(
        &self, _request: Option<PaginatedRequestParam>, _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, rmcp::model::ErrorData> {
        Ok(ListToolsResult { meta: None, tools: self.tool_router.list_all(), next_cursor: None })
    }

    async fn call_tool(
        &self, request: CallToolRequestParam, context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, rmcp::model::ErrorData> {
        self.tool_router
            .call(ToolCallContext::new(self, request, context))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_lists_both_tools() {
        let server = FolioServer::new(AppConfig::default());
        let mut names: Vec<String> = server
            .tool_router
            .list_all()
            .into_iter()
            .map(|t| t.name.to_string())
            .collect();
        names.sort();
        assert_eq!(names, vec!["article_extract", "article_scrape"]);
    }

    #[test]
    fn test_server_info_name() {
        let server = FolioServer::new(AppConfig::default());
        assert_eq!(server.get_info().server_info.name, "mcp-folio");
    }
}
