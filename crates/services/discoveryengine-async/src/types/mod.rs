//! Request and response types for the Discovery Engine API

/// Answer (`:answer`) endpoint types
pub mod answer;
/// Assistant (`:streamAssist`) endpoint types
pub mod assist;
/// Shared types used across endpoints
pub mod common;
/// Search (`:search`) endpoint types
pub mod search;

pub use common::*;
pub use search::{SearchRequest, SearchResponse};
