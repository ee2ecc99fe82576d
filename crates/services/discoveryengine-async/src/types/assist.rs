//! Types for the `assistants.streamAssist` endpoint (v1alpha).
//!
//! The endpoint streams a JSON array of rows. Rows are heterogeneous: some
//! carry grounded replies, others only progress or session metadata. Each row
//! is classified into [`AssistRow::Research`] or [`AssistRow::Unrecognized`]
//! instead of being probed field by field.

use serde::{Deserialize, Serialize};

use super::common::Query;

/// `answerGenerationMode` value that runs the deep-research agent
pub const RESEARCH_MODE: &str = "research";

/// Request body for `POST /v1alpha/{assistant}:streamAssist`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreamAssistRequest {
    /// The user query
    pub query: Query,

    /// Generation mode, e.g. [`RESEARCH_MODE`]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer_generation_mode: Option<String>,

    /// Session to continue; omitted entirely when starting fresh
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session: Option<String>,
}

impl StreamAssistRequest {
    /// Create a new request for `query`
    #[must_use]
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: Query::text(query),
            ..Default::default()
        }
    }

    /// Set the answer generation mode
    #[must_use]
    pub fn with_answer_generation_mode(mut self, mode: impl Into<String>) -> Self {
        self.answer_generation_mode = Some(mode.into());
        self
    }

    /// Continue `session`
    #[must_use]
    pub fn with_session(mut self, session: impl Into<String>) -> Self {
        self.session = Some(session.into());
        self
    }
}

/// Buffered `:streamAssist` response body
pub type StreamAssistResponse = Vec<AssistRow>;

/// One row of the streamed response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AssistRow {
    /// Row carrying `answer.replies`
    Research(ResearchRow),
    /// Any other row shape (progress markers, errors, metadata-only rows)
    Unrecognized(serde_json::Value),
}

impl AssistRow {
    /// `sessionInfo.session`, whatever the row shape
    #[must_use]
    pub fn session(&self) -> Option<&str> {
        match self {
            Self::Research(row) => row
                .session_info
                .as_ref()
                .and_then(|info| info.session.as_deref()),
            Self::Unrecognized(value) => value
                .pointer("/sessionInfo/session")
                .and_then(serde_json::Value::as_str),
        }
    }

    /// Grounded text fragments in reply order.
    ///
    /// Reading stops at the first reply without `groundedContent.content.text`;
    /// unrecognized rows yield nothing.
    pub fn fragments(&self) -> impl Iterator<Item = &str> {
        let replies: &[Reply] = match self {
            Self::Research(row) => &row.answer.replies,
            Self::Unrecognized(_) => &[],
        };
        replies.iter().map_while(Reply::text)
    }
}

/// Row with an assistant answer
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResearchRow {
    /// The (partial) answer
    pub answer: AssistAnswer,
    /// Session metadata
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_info: Option<SessionInfo>,
}

/// Assistant answer payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssistAnswer {
    /// Replies in generation order
    pub replies: Vec<Reply>,
    /// `IN_PROGRESS`, `SUCCEEDED`, ...
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

/// One reply within an answer
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Reply {
    /// Model text with grounding
    Grounded(GroundedReply),
    /// Anything else (thoughts, tool calls, citations-only replies)
    Unrecognized(serde_json::Value),
}

impl Reply {
    /// The grounded text, if this is a grounded reply
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Grounded(reply) => Some(&reply.grounded_content.content.text),
            Self::Unrecognized(_) => None,
        }
    }
}

/// Reply carrying grounded content
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroundedReply {
    /// Grounded content
    pub grounded_content: GroundedContent,
}

/// Grounded content wrapper
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroundedContent {
    /// Content body
    pub content: TextContent,
}

/// Text body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextContent {
    /// Markdown text
    pub text: String,
}

/// Session metadata returned with the first row
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionInfo {
    /// Session resource name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session: Option<String>,
}
