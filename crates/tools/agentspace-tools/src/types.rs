//! Tool argument types.

use schemars::JsonSchema;
use serde::Deserialize;

/// Input for the `get_search_response` tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SearchInput {
    /// The search query string.
    pub search_query: String,
}

/// Input for the `get_deep_research_response` tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct DeepResearchInput {
    /// The query string users can chat with the research agent.
    pub query: String,
    /// Whether to start a new session or continue an existing one.
    #[serde(default)]
    pub start_new_session: bool,
}
