// crates/ethica-server/src/mcp/handler.rs
// MCP ServerHandler implementation — protocol lifecycle methods

use super::{EthicaServer, thought_tool};

use rmcp::{
    ErrorData, ServerHandler,
    model::{
        CallToolRequestParams, CallToolResult, ListToolsResult, PaginatedRequestParams,
        ServerCapabilities, ServerInfo,
    },
    service::{RequestContext, RoleServer},
};

impl ServerHandler for EthicaServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: rmcp::model::Implementation {
                name: "ethica".into(),
                title: Some("Ethica - Ethical Thinking".into()),
                version: env!("CARGO_PKG_VERSION").into(),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Ethica records step-by-step ethical analysis, alternating deontological and consequentialist reasoning, and reports a running judgment.".into(),
            ),
        }
    }

    fn list_tools(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> impl std::future::Future<Output = Result<ListToolsResult, ErrorData>> + Send + '_ {
        std::future::ready(Ok(ListToolsResult {
            tools: vec![thought_tool()],
            next_cursor: None,
            meta: None,
        }))
    }

    #[allow(clippy::manual_async_fn)]
    fn call_tool(
        &self,
        request: CallToolRequestParams,
        _context: RequestContext<RoleServer>,
    ) -> impl std::future::Future<Output = Result<CallToolResult, ErrorData>> + Send + '_ {
        async move {
            let start = std::time::Instant::now();
            let result = self.handle_call(&request.name, request.arguments).await;

            tracing::debug!(
                tool = %request.name,
                duration_ms = start.elapsed().as_millis() as u64,
                is_error = result.as_ref().map(|r| r.is_error == Some(true)).unwrap_or(true),
                "Tool call finished"
            );

            result
        }
    }
}
