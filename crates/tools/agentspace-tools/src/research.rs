//! `get_deep_research_response`: run the research assistant and render its replies.

use discoveryengine_async::types::assist::{AssistRow, RESEARCH_MODE, StreamAssistRequest};

use crate::AgentspaceTools;
use crate::error::ToolError;

/// First line of every research report.
pub const REPORT_HEADING: &str = "# Reserach Plan\n";

/// Build the research request, continuing `session` when given.
#[must_use]
pub fn build_request(query: &str, session: Option<String>) -> StreamAssistRequest {
    let req = StreamAssistRequest::new(query).with_answer_generation_mode(RESEARCH_MODE);
    match session {
        Some(session) => req.with_session(session),
        None => req,
    }
}

/// Render rows as a markdown report: the heading, then one line per grounded fragment.
#[must_use]
pub fn render_report(rows: &[AssistRow]) -> String {
    let mut report = String::from(REPORT_HEADING);
    for (idx, row) in rows.iter().enumerate() {
        if let AssistRow::Unrecognized(_) = row {
            tracing::debug!(row = idx, "skipping research row without replies");
            continue;
        }
        for text in row.fragments() {
            report.push_str(text);
            report.push('\n');
        }
    }
    report
}

impl AgentspaceTools {
    /// Run one deep-research turn.
    ///
    /// With `start_new_session` the request carries no session and the
    /// session returned on the first row replaces the stored one. Otherwise
    /// the stored session, when present and non-empty, is continued.
    ///
    /// # Errors
    /// Returns `InvalidParams` for unencodable request values and `Internal`
    /// for everything else, including a new-session response that carries no
    /// session.
    pub async fn deep_research(
        &self,
        query: &str,
        start_new_session: bool,
    ) -> Result<String, ToolError> {
        let session = if start_new_session {
            None
        } else {
            self.sessions.get().filter(|s| !s.is_empty())
        };

        let req = build_request(query, session);
        let rows = self.client.assistant().stream_assist(&req).await?;
        tracing::debug!(rows = rows.len(), "research turn completed");

        if start_new_session {
            let session = rows
                .first()
                .and_then(AssistRow::session)
                .ok_or_else(|| ToolError::internal("research response carried no session"))?;
            tracing::info!(%session, "started new research session");
            self.sessions.set(session.to_string());
        }

        Ok(render_report(&rows))
    }
}
