#![expect(dead_code, reason = "each test binary uses a subset of these helpers")]

use std::sync::Arc;

use agentspace_tools::AgentspaceTools;
use agentspace_tools::session::{ProcessSessionStore, SessionStore};
use discoveryengine_async::{Client, DiscoveryEngineConfig, StaticTokenProvider};
use wiremock::MockServer;

pub const ENGINE: &str =
    "/projects/p/locations/global/collections/default_collection/engines/e";

pub fn search_path() -> String {
    format!("/v1{ENGINE}/servingConfigs/default_config:search")
}

pub fn answer_path() -> String {
    format!("/v1{ENGINE}/servingConfigs/default_serving_config:answer")
}

pub fn assist_path() -> String {
    format!("/v1alpha{ENGINE}/assistants/default_assistant:streamAssist")
}

pub fn config(server: &MockServer) -> DiscoveryEngineConfig {
    DiscoveryEngineConfig::new()
        .with_api_base(server.uri())
        .with_project_id("p")
        .with_location("global")
        .with_engine_id("e")
        .with_assistant_id("default_assistant")
}

pub fn tools_with(
    config: DiscoveryEngineConfig,
    session: Option<&str>,
) -> (Arc<AgentspaceTools>, Arc<dyn SessionStore>) {
    let client = Client::new(config, Arc::new(StaticTokenProvider::new("test-token"))).unwrap();
    let sessions: Arc<dyn SessionStore> =
        Arc::new(ProcessSessionStore::new(session.map(String::from)));
    let tools = Arc::new(AgentspaceTools::new(client, Arc::clone(&sessions)));
    (tools, sessions)
}

pub fn tools(
    server: &MockServer,
    session: Option<&str>,
) -> (Arc<AgentspaceTools>, Arc<dyn SessionStore>) {
    tools_with(config(server), session)
}

pub fn grounded(text: &str) -> serde_json::Value {
    serde_json::json!({"groundedContent": {"content": {"text": text}}})
}
