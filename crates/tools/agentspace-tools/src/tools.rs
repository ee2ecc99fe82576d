//! Tool wrappers for agentspace-tools.
//!
//! Each tool delegates to the corresponding method on [`AgentspaceTools`].

use std::sync::Arc;

use futures::future::BoxFuture;

use crate::AgentspaceTools;
use crate::error::ToolError;
use crate::registry::{Tool, ToolRegistry};
use crate::types::{DeepResearchInput, SearchInput};

// ============================================================================
// Search Tool
// ============================================================================

/// Tool returning the top extractive answer for a query.
#[derive(Clone)]
pub struct SearchTool {
    agentspace: Arc<AgentspaceTools>,
}

impl SearchTool {
    pub fn new(agentspace: Arc<AgentspaceTools>) -> Self {
        Self { agentspace }
    }
}

impl Tool for SearchTool {
    type Input = SearchInput;
    const NAME: &'static str = "get_search_response";
    const DESCRIPTION: &'static str = "Retrieves search results from the Agentspace (Discovery Engine) search app. \
Returns the top extractive answer of the best-ranked document.";

    fn call(&self, input: Self::Input) -> BoxFuture<'static, Result<String, ToolError>> {
        let agentspace = Arc::clone(&self.agentspace);
        Box::pin(async move { agentspace.search(&input.search_query).await })
    }
}

// ============================================================================
// Deep Research Tool
// ============================================================================

/// Tool running one turn of the deep-research assistant.
#[derive(Clone)]
pub struct DeepResearchTool {
    agentspace: Arc<AgentspaceTools>,
}

impl DeepResearchTool {
    pub fn new(agentspace: Arc<AgentspaceTools>) -> Self {
        Self { agentspace }
    }
}

impl Tool for DeepResearchTool {
    type Input = DeepResearchInput;
    const NAME: &'static str = "get_deep_research_response";
    const DESCRIPTION: &'static str = "Deep Research is a premade Google agent for users who need to gather, \
analyze, and understand internal and external information. Returns a text report with citations in \
markdown. Set start_new_session to begin a fresh research session instead of continuing the current one.";

    fn call(&self, input: Self::Input) -> BoxFuture<'static, Result<String, ToolError>> {
        let agentspace = Arc::clone(&self.agentspace);
        Box::pin(async move {
            agentspace
                .deep_research(&input.query, input.start_new_session)
                .await
        })
    }
}

// ============================================================================
// Registry Builder
// ============================================================================

/// Build a registry with every Agentspace tool.
pub fn build_registry(agentspace: Arc<AgentspaceTools>) -> ToolRegistry {
    ToolRegistry::builder()
        .register(SearchTool::new(Arc::clone(&agentspace)))
        .register(DeepResearchTool::new(agentspace))
        .finish()
}
