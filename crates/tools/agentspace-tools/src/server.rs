//! MCP server handler backed by [`ToolRegistry`].

use std::sync::Arc;

use rmcp::model as m;
use rmcp::service::RequestContext;
use rmcp::{RoleServer, ServerHandler};

use crate::registry::ToolRegistry;

const INSTRUCTIONS: &str = "Tools for querying an Agentspace (Discovery Engine) app. \
Use get_search_response for quick factual lookups and get_deep_research_response for \
multi-step research reports. Research turns continue the current session unless \
start_new_session is set.";

/// MCP server exposing the Agentspace tools.
///
/// Tool failures are returned as JSON-RPC errors: bad arguments and unknown
/// tools as `invalid_params`, everything else as `internal_error`.
pub struct AgentspaceServer {
    registry: Arc<ToolRegistry>,
    name: String,
    version: String,
}

impl AgentspaceServer {
    /// Create a new server from a registry.
    pub fn new(registry: Arc<ToolRegistry>) -> Self {
        Self {
            registry,
            name: "agentspace".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    /// Set the server name and version.
    #[must_use]
    pub fn with_info(mut self, name: &str, version: &str) -> Self {
        self.name = name.to_string();
        self.version = version.to_string();
        self
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Tool descriptors for every registered tool.
    pub fn tools(&self) -> Vec<m::Tool> {
        self.registry
            .list_names()
            .into_iter()
            .filter_map(|name| self.registry.get(name))
            .map(|erased| m::Tool {
                name: erased.name().into(),
                title: Some(erased.name().to_string()),
                description: Some(erased.description().into()),
                input_schema: Arc::new(erased.input_schema()),
                annotations: None,
                output_schema: None,
                icons: None,
                meta: None,
            })
            .collect()
    }

    /// Run the named tool with `arguments` and wrap its text as a tool result.
    ///
    /// # Errors
    /// Returns the tool failure mapped to a JSON-RPC error.
    pub async fn dispatch(
        &self,
        name: &str,
        arguments: Option<m::JsonObject>,
    ) -> Result<m::CallToolResult, m::ErrorData> {
        let args = serde_json::Value::Object(arguments.unwrap_or_default());
        tracing::debug!(tool = name, "call_tool");

        match self.registry.dispatch_json(name, args).await {
            Ok(text) => Ok(m::CallToolResult::success(vec![m::Content::text(text)])),
            Err(e) => {
                tracing::warn!(tool = name, error = %e, "tool call failed");
                Err(e.into())
            }
        }
    }
}

// Allow manual_async_fn because the trait signature uses `impl Future` return types
#[expect(clippy::manual_async_fn)]
impl ServerHandler for AgentspaceServer {
    fn get_info(&self) -> m::ServerInfo {
        m::ServerInfo {
            server_info: m::Implementation {
                name: self.name.clone(),
                title: self.name.clone().into(),
                version: self.version.clone(),
                website_url: None,
                icons: None,
            },
            capabilities: m::ServerCapabilities::builder().enable_tools().build(),
            instructions: Some(INSTRUCTIONS.to_string()),
            ..Default::default()
        }
    }

    fn list_tools(
        &self,
        _req: Option<m::PaginatedRequestParam>,
        _ctx: RequestContext<RoleServer>,
    ) -> impl std::future::Future<Output = Result<m::ListToolsResult, m::ErrorData>> + Send + '_
    {
        async move {
            Ok(m::ListToolsResult {
                tools: self.tools(),
                next_cursor: None,
                meta: None,
            })
        }
    }

    fn call_tool(
        &self,
        req: m::CallToolRequestParam,
        _ctx: RequestContext<RoleServer>,
    ) -> impl std::future::Future<Output = Result<m::CallToolResult, m::ErrorData>> + Send + '_
    {
        async move { self.dispatch(&req.name, req.arguments).await }
    }
}
