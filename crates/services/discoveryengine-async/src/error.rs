use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when using the Discovery Engine client
#[derive(Debug, Error)]
pub enum DiscoveryEngineError {
    /// HTTP request error
    #[error("HTTP error: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// API error returned by Discovery Engine
    #[error("API error: {0}")]
    Api(ApiErrorObject),

    /// Credential acquisition or refresh failed
    #[error("Authentication failed: {0}")]
    Auth(#[from] crate::auth::AuthError),

    /// Configuration error (e.g., unparsable timeout)
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// A request value could not be encoded (header value, resource path)
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serde(String),
}

impl DiscoveryEngineError {
    /// Whether this error stems from a caller-supplied value that could not be
    /// turned into a well-formed request.
    #[must_use]
    pub const fn is_invalid_request(&self) -> bool {
        matches!(self, Self::InvalidRequest(_))
    }
}

/// Google API error object (`{"error": {...}}` envelope payload)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiErrorObject {
    /// HTTP status code
    #[serde(default)]
    pub code: Option<u16>,
    /// Human-readable error message
    #[serde(default)]
    pub message: String,
    /// Canonical status string, e.g. `INVALID_ARGUMENT`
    #[serde(default)]
    pub status: Option<String>,
}

impl std::fmt::Display for ApiErrorObject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.code, &self.status) {
            (Some(code), Some(status)) => write!(f, "{code} {status}: {}", self.message),
            (Some(code), None) => write!(f, "{code}: {}", self.message),
            (None, Some(status)) => write!(f, "{status}: {}", self.message),
            (None, None) => f.write_str(&self.message),
        }
    }
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ApiErrorObject,
}

/// `:streamAssist` wraps errors in a one-element array.
#[derive(Deserialize)]
#[serde(untagged)]
enum ErrorBody {
    Single(ErrorEnvelope),
    Streamed(Vec<ErrorEnvelope>),
}

/// Maps a serde deserialization error to a `DiscoveryEngineError` with context
#[must_use]
pub fn map_deser(e: &serde_json::Error, body: &[u8]) -> DiscoveryEngineError {
    let snippet = String::from_utf8_lossy(&body[..body.len().min(400)]).to_string();
    DiscoveryEngineError::Serde(format!("{e}: {snippet}"))
}

/// Deserializes an API error from the response body
///
/// Attempts to parse the Google error envelope, falling back to plain text on failure.
#[must_use]
pub fn deserialize_api_error(status: StatusCode, body: &[u8]) -> DiscoveryEngineError {
    let parsed = match serde_json::from_slice::<ErrorBody>(body) {
        Ok(ErrorBody::Single(env)) => Some(env.error),
        Ok(ErrorBody::Streamed(envs)) => envs.into_iter().next().map(|env| env.error),
        Err(_) => None,
    };

    if let Some(mut obj) = parsed {
        obj.code = Some(status.as_u16());
        return DiscoveryEngineError::Api(obj);
    }

    // Proxies may return HTML or plain text; cap body to avoid log/memory bloat
    DiscoveryEngineError::Api(ApiErrorObject {
        code: Some(status.as_u16()),
        message: String::from_utf8_lossy(&body[..body.len().min(400)]).into_owned(),
        status: None,
    })
}
