//! Async Discovery Engine (Agentspace) API client with typed requests/responses,
//! pluggable credentials, and wiremock tests.

/// Credential providers (bearer tokens)
pub mod auth;
/// HTTP client implementation
pub mod client;
/// Configuration types for the client
pub mod config;
/// Error types
pub mod error;
/// API resource implementations
pub mod resources;
/// Test support utilities (for use in tests)
#[doc(hidden)]
pub mod test_support;
/// Request and response types
pub mod types;

pub use crate::auth::{AccessToken, CredentialProvider, StaticTokenProvider};
pub use crate::client::Client;
pub use crate::config::DiscoveryEngineConfig;
pub use crate::error::{ApiErrorObject, DiscoveryEngineError};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::types::*;
    pub use crate::{Client, CredentialProvider, DiscoveryEngineConfig};
}
