//! Grounded answers from the answer serving config.
//!
//! Available to library callers; not registered as an MCP tool.

use discoveryengine_async::types::answer::{
    AnswerGenerationSpec, AnswerModelSpec, AnswerQueryRequest, AnswerQueryResponse, PromptSpec,
    QueryClassificationSpec, QueryClassificationType, QueryRephraserSpec, QueryUnderstandingSpec,
};

use crate::AgentspaceTools;
use crate::error::ToolError;

/// Serving config queried for answers
pub const SERVING_CONFIG: &str = "default_serving_config";

const MODEL_VERSION: &str = "gemini-2.0-flash-001/answer_gen/v1";
const PREAMBLE: &str = "Give a detailed answer.";

/// Build the fixed answer request for `query`. No session is attached.
#[must_use]
pub fn build_request(query: &str) -> AnswerQueryRequest {
    AnswerQueryRequest::new(query)
        .with_query_understanding(QueryUnderstandingSpec {
            query_rephraser_spec: Some(QueryRephraserSpec {
                disable: false,
                max_rephrase_steps: Some(1),
            }),
            query_classification_spec: Some(QueryClassificationSpec {
                types: vec![
                    QueryClassificationType::AdversarialQuery,
                    QueryClassificationType::NonAnswerSeekingQuery,
                ],
            }),
        })
        .with_answer_generation(AnswerGenerationSpec {
            ignore_adversarial_query: Some(false),
            ignore_non_answer_seeking_query: Some(false),
            ignore_low_relevant_content: Some(false),
            model_spec: Some(AnswerModelSpec {
                model_version: MODEL_VERSION.into(),
            }),
            prompt_spec: Some(PromptSpec {
                preamble: PREAMBLE.into(),
            }),
            include_citations: Some(true),
            answer_language_code: Some("en".into()),
        })
}

/// Pull `answer.answerText` out of the response.
///
/// # Errors
/// Returns an internal error if the response has no answer text.
pub fn answer_text(resp: AnswerQueryResponse) -> Result<String, ToolError> {
    resp.answer
        .and_then(|a| a.answer_text)
        .ok_or_else(|| ToolError::internal("answer response carried no answer text"))
}

impl AgentspaceTools {
    /// Ask the engine for a grounded answer.
    ///
    /// # Errors
    /// Returns `InvalidParams` for unencodable request values and `Internal`
    /// for everything else.
    pub async fn answer(&self, query: &str) -> Result<String, ToolError> {
        let req = build_request(query);
        let resp = self.client.answer().create(SERVING_CONFIG, &req).await?;
        answer_text(resp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_carries_fixed_options() {
        let v = serde_json::to_value(build_request("q")).unwrap();
        assert_eq!(
            v,
            serde_json::json!({
                "query": {"text": "q"},
                "queryUnderstandingSpec": {
                    "queryRephraserSpec": {"disable": false, "maxRephraseSteps": 1},
                    "queryClassificationSpec": {
                        "types": ["ADVERSARIAL_QUERY", "NON_ANSWER_SEEKING_QUERY"]
                    }
                },
                "answerGenerationSpec": {
                    "ignoreAdversarialQuery": false,
                    "ignoreNonAnswerSeekingQuery": false,
                    "ignoreLowRelevantContent": false,
                    "modelSpec": {"modelVersion": "gemini-2.0-flash-001/answer_gen/v1"},
                    "promptSpec": {"preamble": "Give a detailed answer."},
                    "includeCitations": true,
                    "answerLanguageCode": "en"
                }
            })
        );
    }

    #[test]
    fn missing_answer_is_internal() {
        let err = answer_text(AnswerQueryResponse::default()).unwrap_err();
        assert!(matches!(err, ToolError::Internal(_)));
    }
}
