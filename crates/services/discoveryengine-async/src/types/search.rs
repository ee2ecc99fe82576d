//! Types for the `servingConfigs.search` endpoint
//!
//! Only the fields this client sets or reads are modelled; unknown response
//! fields are ignored.

use serde::{Deserialize, Serialize};

/// Request body for `POST /v1/{servingConfig}:search`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    /// Raw search query
    pub query: String,

    /// Maximum number of results to return
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,

    /// Snippet, summary and extractive content options
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_search_spec: Option<ContentSearchSpec>,

    /// When the backend may expand the query
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query_expansion_spec: Option<QueryExpansionSpec>,

    /// Spell correction behaviour
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spell_correction_spec: Option<SpellCorrectionSpec>,
}

impl SearchRequest {
    /// Create a new search request for `query`
    #[must_use]
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Default::default()
        }
    }

    /// Set the page size
    #[must_use]
    pub fn with_page_size(mut self, n: u32) -> Self {
        self.page_size = Some(n);
        self
    }

    /// Set content search options
    #[must_use]
    pub fn with_content_search_spec(mut self, spec: ContentSearchSpec) -> Self {
        self.content_search_spec = Some(spec);
        self
    }

    /// Set the query expansion condition
    #[must_use]
    pub fn with_query_expansion(mut self, condition: QueryExpansionCondition) -> Self {
        self.query_expansion_spec = Some(QueryExpansionSpec { condition });
        self
    }

    /// Set the spell correction mode
    #[must_use]
    pub fn with_spell_correction(mut self, mode: SpellCorrectionMode) -> Self {
        self.spell_correction_spec = Some(SpellCorrectionSpec { mode });
        self
    }
}

/// Content search options (unstructured data only)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentSearchSpec {
    /// Snippet options
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snippet_spec: Option<SnippetSpec>,
    /// Search summary options
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary_spec: Option<SummarySpec>,
    /// Extractive answer/segment options
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extractive_content_spec: Option<ExtractiveContentSpec>,
}

/// Snippet options
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnippetSpec {
    /// Return a snippet per result
    pub return_snippet: bool,
}

/// Search summary options
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummarySpec {
    /// Number of top results the summary is generated from
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary_result_count: Option<u32>,
    /// Include citations in the summary
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_citations: Option<bool>,
    /// Skip summaries for adversarial queries
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ignore_adversarial_query: Option<bool>,
    /// Skip summaries for non-summary-seeking queries
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ignore_non_summary_seeking_query: Option<bool>,
    /// Prompt customisation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_prompt_spec: Option<ModelPromptSpec>,
    /// Summarization model
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_spec: Option<SummaryModelSpec>,
}

/// Prompt customisation for summaries
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelPromptSpec {
    /// Natural-language preamble
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preamble: Option<String>,
}

/// Summarization model selection
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryModelSpec {
    /// `stable` or `preview`
    pub version: String,
}

/// Extractive content options
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractiveContentSpec {
    /// Max extractive segments per result
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_extractive_segment_count: Option<u32>,
    /// Max extractive answers per result
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_extractive_answer_count: Option<u32>,
    /// Include a relevance score per segment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_extractive_segment_score: Option<bool>,
}

/// Query expansion options
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryExpansionSpec {
    /// When to expand
    pub condition: QueryExpansionCondition,
}

/// Query expansion condition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QueryExpansionCondition {
    /// Never expand
    Disabled,
    /// Let the backend decide
    Auto,
}

/// Spell correction options
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpellCorrectionSpec {
    /// Correction mode
    pub mode: SpellCorrectionMode,
}

/// Spell correction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SpellCorrectionMode {
    /// Only suggest corrections
    Suggestion,
    /// Apply corrections automatically
    Auto,
}

/// Response from `POST /v1/{servingConfig}:search`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    /// Ranked results; omitted by the API when empty
    #[serde(default)]
    pub results: Vec<SearchResult>,
    /// Estimated total number of matches
    #[serde(default)]
    pub total_size: Option<i64>,
    /// Token for attributing follow-up events
    #[serde(default)]
    pub attribution_token: Option<String>,
    /// Token for the next page
    #[serde(default)]
    pub next_page_token: Option<String>,
    /// Spell-corrected query, if corrected
    #[serde(default)]
    pub corrected_query: Option<String>,
    /// Generated summary
    #[serde(default)]
    pub summary: Option<Summary>,
}

/// A single search result
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    /// Document ID
    #[serde(default)]
    pub id: Option<String>,
    /// Matched document
    #[serde(default)]
    pub document: Option<Document>,
}

/// A matched document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Full resource name
    #[serde(default)]
    pub name: Option<String>,
    /// Document ID
    #[serde(default)]
    pub id: Option<String>,
    /// Backend-derived data (snippets, extractive answers, link)
    #[serde(default)]
    pub derived_struct_data: Option<DerivedStructData>,
}

/// Backend-derived document data.
///
/// This is a free-form `Struct` on the wire; its keys are snake_case. Only the
/// extractive answers are typed, everything else is kept as raw JSON.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DerivedStructData {
    /// Verbatim answer spans
    #[serde(default)]
    pub extractive_answers: Option<Vec<ExtractiveAnswer>>,
    /// Remaining keys (link, title, snippets, segments, ...)
    #[serde(flatten)]
    pub other: serde_json::Map<String, serde_json::Value>,
}

/// A verbatim answer span
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExtractiveAnswer {
    /// Answer text
    #[serde(default)]
    pub content: Option<String>,
    /// Remaining keys (`pageNumber`, ...)
    #[serde(flatten)]
    pub other: serde_json::Map<String, serde_json::Value>,
}

/// Generated search summary
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    /// Summary text
    #[serde(default)]
    pub summary_text: Option<String>,
}
