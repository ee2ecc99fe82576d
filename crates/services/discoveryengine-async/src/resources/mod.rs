//! API resource implementations for the Discovery Engine client

/// Answer API resource
pub mod answer;
/// Assistant API resource
pub mod assistant;
/// Search API resource
pub mod search;

pub use answer::Answer;
pub use assistant::Assistant;
pub use search::Search;
