//! Agentspace search and deep-research tools, served over MCP.

pub mod answer;
pub mod error;
pub mod registry;
pub mod research;
pub mod search;
pub mod server;
pub mod session;
pub mod tools;
pub mod types;

use std::sync::Arc;

use discoveryengine_async::{Client, DiscoveryEngineError};

use crate::session::{ProcessSessionStore, SessionStore};

/// Shared state for Agentspace tools.
///
/// Wraps the Discovery Engine client and the session store that deep
/// research turns read from and write to.
pub struct AgentspaceTools {
    pub(crate) client: Client,
    pub(crate) sessions: Arc<dyn SessionStore>,
}

impl AgentspaceTools {
    /// Create tools over an existing client and session store.
    #[must_use]
    pub fn new(client: Client, sessions: Arc<dyn SessionStore>) -> Self {
        Self { client, sessions }
    }

    /// Build from environment configuration, application-default
    /// credentials and a `SESSION`-seeded store.
    ///
    /// # Errors
    /// Returns an error if no credentials can be found or the HTTP client
    /// cannot be built.
    pub fn from_env() -> Result<Self, DiscoveryEngineError> {
        Ok(Self::new(
            Client::from_env()?,
            Arc::new(ProcessSessionStore::from_env()),
        ))
    }

    /// The underlying Discovery Engine client.
    #[must_use]
    pub const fn client(&self) -> &Client {
        &self.client
    }

    /// The session store used by deep research.
    #[must_use]
    pub fn sessions(&self) -> &Arc<dyn SessionStore> {
        &self.sessions
    }
}

pub use error::ToolError;
pub use registry::ToolRegistry;
pub use server::AgentspaceServer;
pub use tools::build_registry;
pub use rmcp::transport::stdio;
pub use rmcp::{ServerHandler, service::ServiceExt};
