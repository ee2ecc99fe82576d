//! Shared types used across Discovery Engine endpoints

use serde::{Deserialize, Serialize};

/// A user query
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    /// Plain-text query
    pub text: String,
}

impl Query {
    /// Creates a text query
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}
