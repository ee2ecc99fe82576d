//! Types for the `servingConfigs.answer` endpoint (non-streaming)

use serde::{Deserialize, Serialize};

use super::common::Query;

/// Request body for `POST /v1/{servingConfig}:answer`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerQueryRequest {
    /// The user query
    pub query: Query,

    /// Previous session to continue, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session: Option<String>,

    /// Query rephrasing and classification options
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query_understanding_spec: Option<QueryUnderstandingSpec>,

    /// Answer generation options
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer_generation_spec: Option<AnswerGenerationSpec>,
}

impl AnswerQueryRequest {
    /// Create a new answer request for `query`
    #[must_use]
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: Query::text(query),
            ..Default::default()
        }
    }

    /// Continue an existing session
    #[must_use]
    pub fn with_session(mut self, session: impl Into<String>) -> Self {
        self.session = Some(session.into());
        self
    }

    /// Set query understanding options
    #[must_use]
    pub fn with_query_understanding(mut self, spec: QueryUnderstandingSpec) -> Self {
        self.query_understanding_spec = Some(spec);
        self
    }

    /// Set answer generation options
    #[must_use]
    pub fn with_answer_generation(mut self, spec: AnswerGenerationSpec) -> Self {
        self.answer_generation_spec = Some(spec);
        self
    }
}

/// Query phase options
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryUnderstandingSpec {
    /// Rephraser options
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query_rephraser_spec: Option<QueryRephraserSpec>,
    /// Classification options
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query_classification_spec: Option<QueryClassificationSpec>,
}

/// Query rephraser options
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryRephraserSpec {
    /// Disable rephrasing entirely
    pub disable: bool,
    /// Number of rephrase steps
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_rephrase_steps: Option<u32>,
}

/// Query classification options
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QueryClassificationSpec {
    /// Query types to detect
    pub types: Vec<QueryClassificationType>,
}

/// Query classes the backend can detect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QueryClassificationType {
    /// Adversarial query
    AdversarialQuery,
    /// Query that does not seek an answer
    NonAnswerSeekingQuery,
}

/// Answer phase options
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerGenerationSpec {
    /// Return a fallback instead of answering adversarial queries
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ignore_adversarial_query: Option<bool>,
    /// Return a fallback instead of answering non-answer-seeking queries
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ignore_non_answer_seeking_query: Option<bool>,
    /// Return a fallback when retrieved content is not relevant
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ignore_low_relevant_content: Option<bool>,
    /// Answer model
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_spec: Option<AnswerModelSpec>,
    /// Prompt customisation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt_spec: Option<PromptSpec>,
    /// Include citations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_citations: Option<bool>,
    /// Answer language (BCP-47)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer_language_code: Option<String>,
}

/// Answer model selection
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerModelSpec {
    /// e.g. `gemini-2.0-flash-001/answer_gen/v1`
    pub model_version: String,
}

/// Prompt customisation for answers
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PromptSpec {
    /// Natural-language instructions
    pub preamble: String,
}

/// Response from `POST /v1/{servingConfig}:answer`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerQueryResponse {
    /// The generated answer
    #[serde(default)]
    pub answer: Option<Answer>,
    /// Session state, when sessions are in use
    #[serde(default)]
    pub session: Option<serde_json::Value>,
    /// Token for follow-up feedback
    #[serde(default)]
    pub answer_query_token: Option<String>,
}

/// A generated answer
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    /// Full resource name
    #[serde(default)]
    pub name: Option<String>,
    /// `IN_PROGRESS`, `FAILED`, `SUCCEEDED`, ...
    #[serde(default)]
    pub state: Option<String>,
    /// Answer text
    #[serde(default)]
    pub answer_text: Option<String>,
    /// Citations, left untyped
    #[serde(default)]
    pub citations: Vec<serde_json::Value>,
}
