//! Failure categories surfaced to tool callers.

use discoveryengine_async::DiscoveryEngineError;
use thiserror::Error;

/// Error returned by Agentspace tool operations.
///
/// Callers see exactly two categories. Anything that is not a malformed
/// argument or an unencodable request value is `Internal`.
#[derive(Error, Debug)]
pub enum ToolError {
    /// The request could not be built from the given values.
    #[error("{0}")]
    InvalidParams(String),

    /// Any other failure, already prefixed with `Unexpected error: `.
    #[error("{0}")]
    Internal(String),
}

impl ToolError {
    /// Create an invalid-params error.
    pub fn invalid_params<S: ToString>(s: S) -> Self {
        Self::InvalidParams(s.to_string())
    }

    /// Create an internal error, adding the `Unexpected error: ` prefix.
    pub fn internal<S: std::fmt::Display>(cause: S) -> Self {
        Self::Internal(format!("Unexpected error: {cause}"))
    }

    /// The caller-facing message.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::InvalidParams(m) | Self::Internal(m) => m,
        }
    }
}

impl From<DiscoveryEngineError> for ToolError {
    fn from(e: DiscoveryEngineError) -> Self {
        if e.is_invalid_request() {
            Self::invalid_params(e)
        } else {
            Self::internal(e)
        }
    }
}

impl From<ToolError> for rmcp::model::ErrorData {
    fn from(e: ToolError) -> Self {
        match e {
            ToolError::InvalidParams(m) => Self::invalid_params(m, None),
            ToolError::Internal(m) => Self::internal_error(m, None),
        }
    }
}
