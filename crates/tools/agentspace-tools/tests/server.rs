mod common;

use agentspace_tools::{AgentspaceServer, build_registry};
use std::sync::Arc;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn args(v: serde_json::Value) -> Option<serde_json::Map<String, serde_json::Value>> {
    v.as_object().cloned()
}

fn text_of(result: &rmcp::model::CallToolResult) -> String {
    let v = serde_json::to_value(&result.content[0]).unwrap();
    v["text"].as_str().unwrap().to_string()
}

#[test]
fn lists_both_tools_with_schemas() {
    let config = discoveryengine_async::DiscoveryEngineConfig::new()
        .with_api_base("http://127.0.0.1:1");
    let (tools, _) = common::tools_with(config, None);
    let server = AgentspaceServer::new(Arc::new(build_registry(tools)));

    let listed = server.tools();
    let names: Vec<&str> = listed.iter().map(|t| &*t.name).collect();
    assert_eq!(
        names,
        vec!["get_deep_research_response", "get_search_response"]
    );

    let research = &listed[0];
    let props = research.input_schema["properties"].as_object().unwrap();
    assert!(props.contains_key("query"));
    assert!(props.contains_key("start_new_session"));
    let required = research.input_schema["required"].as_array().unwrap();
    assert_eq!(required, &vec![serde_json::json!("query")]);

    let search = &listed[1];
    assert!(search.input_schema["properties"]["search_query"].is_object());
}

#[tokio::test]
async fn search_call_returns_text_content() {
    let mock = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(common::search_path()))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "results": [{"document": {"derivedStructData": {
                "extractive_answers": [{"content": "Answer text"}]
            }}}]
        })))
        .mount(&mock)
        .await;

    let (tools, _) = common::tools(&mock, None);
    let server = AgentspaceServer::new(Arc::new(build_registry(tools)));

    let result = server
        .dispatch(
            "get_search_response",
            args(serde_json::json!({"search_query": "q"})),
        )
        .await
        .unwrap();
    assert_eq!(result.is_error, Some(false));
    assert_eq!(text_of(&result), "Answer text");
}

#[tokio::test]
async fn research_call_defaults_start_new_session() {
    let mock = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(common::assist_path()))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"answer": {"replies": [common::grounded("report body")]}}
        ])))
        .mount(&mock)
        .await;

    let (tools, sessions) = common::tools(&mock, None);
    let server = AgentspaceServer::new(Arc::new(build_registry(tools)));

    let result = server
        .dispatch(
            "get_deep_research_response",
            args(serde_json::json!({"query": "q"})),
        )
        .await
        .unwrap();
    assert_eq!(text_of(&result), "# Reserach Plan\nreport body\n");
    assert!(sessions.get().is_none());
}

#[tokio::test]
async fn backend_failure_is_internal_error() {
    let mock = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(common::search_path()))
        .respond_with(ResponseTemplate::new(500).set_body_string("backend down"))
        .mount(&mock)
        .await;

    let (tools, _) = common::tools(&mock, None);
    let server = AgentspaceServer::new(Arc::new(build_registry(tools)));

    let err = server
        .dispatch(
            "get_search_response",
            args(serde_json::json!({"search_query": "q"})),
        )
        .await
        .unwrap_err();
    assert_eq!(err.code.0, -32603);
    assert!(err.message.starts_with("Unexpected error: "), "{}", err.message);
    assert!(err.message.contains("backend down"));
}

#[tokio::test]
async fn bad_arguments_are_invalid_params() {
    let mock = MockServer::start().await;
    let (tools, _) = common::tools(&mock, None);
    let server = AgentspaceServer::new(Arc::new(build_registry(tools)));

    let err = server
        .dispatch("get_search_response", args(serde_json::json!({"query": "q"})))
        .await
        .unwrap_err();
    assert_eq!(err.code.0, -32602);

    let err = server
        .dispatch("get_deep_research_response", None)
        .await
        .unwrap_err();
    assert_eq!(err.code.0, -32602);

    assert!(mock.received_requests().await.unwrap().is_empty());
}
