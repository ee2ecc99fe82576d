//! `get_search_response`: top extractive answer from the search serving config.

use discoveryengine_async::types::search::{
    ContentSearchSpec, ExtractiveContentSpec, ModelPromptSpec, QueryExpansionCondition,
    SearchRequest, SearchResponse, SnippetSpec, SpellCorrectionMode, SummaryModelSpec,
    SummarySpec,
};

use crate::AgentspaceTools;
use crate::error::ToolError;

/// Serving config queried by search
pub const SERVING_CONFIG: &str = "default_config";

const PAGE_SIZE: u32 = 10;
const SUMMARY_RESULT_COUNT: u32 = 5;
const MAX_EXTRACTIVE_COUNT: u32 = 2;

/// Build the fixed search request for `query`.
///
/// The query is passed through untouched; empty strings are the backend's problem.
#[must_use]
pub fn build_request(query: &str) -> SearchRequest {
    SearchRequest::new(query)
        .with_page_size(PAGE_SIZE)
        .with_content_search_spec(ContentSearchSpec {
            snippet_spec: Some(SnippetSpec {
                return_snippet: true,
            }),
            summary_spec: Some(SummarySpec {
                summary_result_count: Some(SUMMARY_RESULT_COUNT),
                include_citations: Some(true),
                ignore_adversarial_query: Some(true),
                ignore_non_summary_seeking_query: Some(true),
                model_prompt_spec: Some(ModelPromptSpec { preamble: None }),
                model_spec: Some(SummaryModelSpec {
                    version: "stable".into(),
                }),
            }),
            extractive_content_spec: Some(ExtractiveContentSpec {
                max_extractive_segment_count: Some(MAX_EXTRACTIVE_COUNT),
                max_extractive_answer_count: Some(MAX_EXTRACTIVE_COUNT),
                return_extractive_segment_score: Some(true),
            }),
        })
        .with_query_expansion(QueryExpansionCondition::Auto)
        .with_spell_correction(SpellCorrectionMode::Auto)
}

/// Pull `extractive_answers[0].content` out of the first result.
///
/// # Errors
/// Returns an internal error if there are no results or the first result
/// carries no extractive answer.
pub fn first_extractive_answer(resp: SearchResponse) -> Result<String, ToolError> {
    let first = resp
        .results
        .into_iter()
        .next()
        .ok_or_else(|| ToolError::internal("search returned no results"))?;

    first
        .document
        .and_then(|d| d.derived_struct_data)
        .and_then(|data| data.extractive_answers)
        .and_then(|answers| answers.into_iter().next())
        .and_then(|answer| answer.content)
        .ok_or_else(|| ToolError::internal("first search result has no extractive answer"))
}

impl AgentspaceTools {
    /// Search the engine and return the top extractive answer.
    ///
    /// # Errors
    /// Returns `InvalidParams` for unencodable request values and `Internal`
    /// for everything else, including an empty result set.
    pub async fn search(&self, query: &str) -> Result<String, ToolError> {
        let req = build_request(query);
        let resp = self.client.search().create(SERVING_CONFIG, &req).await?;
        tracing::debug!(results = resp.results.len(), "search completed");
        first_extractive_answer(resp)
    }
}
