use std::time::Duration;

use reqwest::Url;

use crate::error::DiscoveryEngineError;

/// Global Discovery Engine endpoint
pub const DISCOVERYENGINE_DEFAULT_BASE: &str = "https://discoveryengine.googleapis.com";
/// Header naming the project billed for quota
pub const HDR_X_GOOG_USER_PROJECT: &str = "x-goog-user-project";
/// Default Google Cloud project
pub const DEFAULT_PROJECT_ID: &str = "the-foo-bar";
/// Default engine location
pub const DEFAULT_LOCATION: &str = "global";
/// Default search engine (app) ID
pub const DEFAULT_ENGINE_ID: &str = "cymbal-bank_1746202630648";
/// Default assistant attached to the engine
pub const DEFAULT_ASSISTANT_ID: &str = "default_assistant";
/// Default whole-request timeout; research turns can run for minutes
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(300);

/// Collection every engine lives under
const COLLECTION: &str = "default_collection";

/// Configuration for the Discovery Engine client
///
/// Identifies the target engine and where to reach it. Credentials are
/// supplied separately through a [`crate::CredentialProvider`].
#[derive(Clone, Debug)]
pub struct DiscoveryEngineConfig {
    api_base: Option<String>,
    project_id: String,
    location: String,
    engine_id: String,
    assistant_id: String,
    timeout: Duration,
}

fn env_trimmed(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl Default for DiscoveryEngineConfig {
    fn default() -> Self {
        let timeout = match env_trimmed("DISCOVERYENGINE_TIMEOUT_SECS") {
            Some(raw) => match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    tracing::warn!(
                        value = %raw,
                        "ignoring invalid DISCOVERYENGINE_TIMEOUT_SECS; using default"
                    );
                    DEFAULT_TIMEOUT
                }
            },
            None => DEFAULT_TIMEOUT,
        };

        Self {
            api_base: env_trimmed("DISCOVERYENGINE_BASE_URL"),
            project_id: env_trimmed("AGENTSPACE_PROJECT_ID")
                .unwrap_or_else(|| DEFAULT_PROJECT_ID.into()),
            location: env_trimmed("AGENTSPACE_LOCATION").unwrap_or_else(|| DEFAULT_LOCATION.into()),
            engine_id: env_trimmed("AGENTSPACE_ENGINE_ID")
                .unwrap_or_else(|| DEFAULT_ENGINE_ID.into()),
            assistant_id: env_trimmed("AGENTSPACE_ASSISTANT_ID")
                .unwrap_or_else(|| DEFAULT_ASSISTANT_ID.into()),
            timeout,
        }
    }
}

impl DiscoveryEngineConfig {
    /// Creates a new configuration with default settings
    ///
    /// Attempts to read from environment variables:
    /// - `AGENTSPACE_PROJECT_ID`, `AGENTSPACE_LOCATION`, `AGENTSPACE_ENGINE_ID`,
    ///   `AGENTSPACE_ASSISTANT_ID` for the target resource
    /// - `DISCOVERYENGINE_BASE_URL` to override the endpoint derived from the location
    /// - `DISCOVERYENGINE_TIMEOUT_SECS` for the per-request timeout (default 300)
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an explicit API base URL (used instead of the location-derived endpoint)
    #[must_use]
    pub fn with_api_base(mut self, base: impl Into<String>) -> Self {
        self.api_base = Some(base.into());
        self
    }

    /// Sets the Google Cloud project ID
    #[must_use]
    pub fn with_project_id(mut self, project_id: impl Into<String>) -> Self {
        self.project_id = project_id.into();
        self
    }

    /// Sets the engine location (e.g. `global`, `us`, `eu`)
    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    /// Sets the engine ID
    #[must_use]
    pub fn with_engine_id(mut self, engine_id: impl Into<String>) -> Self {
        self.engine_id = engine_id.into();
        self
    }

    /// Sets the assistant ID
    #[must_use]
    pub fn with_assistant_id(mut self, assistant_id: impl Into<String>) -> Self {
        self.assistant_id = assistant_id.into();
        self
    }

    /// Sets the whole-request timeout
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns the configured project ID
    #[must_use]
    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    /// Returns the configured location
    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Returns the configured request timeout
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns the API base URL
    ///
    /// Non-global locations are served from `https://{location}-discoveryengine.googleapis.com`.
    #[must_use]
    pub fn api_base(&self) -> String {
        if let Some(base) = &self.api_base {
            return base.clone();
        }
        if self.location == DEFAULT_LOCATION {
            DISCOVERYENGINE_DEFAULT_BASE.to_string()
        } else {
            format!("https://{}-discoveryengine.googleapis.com", self.location)
        }
    }

    /// `projects/{p}/locations/{l}/collections/default_collection/engines/{e}`
    #[must_use]
    pub fn engine_path(&self) -> String {
        format!(
            "projects/{}/locations/{}/collections/{COLLECTION}/engines/{}",
            self.project_id, self.location, self.engine_id
        )
    }

    /// Full resource name of a serving config under the engine
    #[must_use]
    pub fn serving_config(&self, name: &str) -> String {
        format!("{}/servingConfigs/{name}", self.engine_path())
    }

    /// Full resource name of the configured assistant
    #[must_use]
    pub fn assistant_path(&self) -> String {
        format!("{}/assistants/{}", self.engine_path(), self.assistant_id)
    }

    /// Builds `{base}/{version}/{resource}:{method}`
    ///
    /// # Errors
    ///
    /// Returns [`DiscoveryEngineError::InvalidRequest`] if the result is not a valid URL.
    pub fn url(
        &self,
        version: &str,
        resource: &str,
        method: &str,
    ) -> Result<Url, DiscoveryEngineError> {
        let base = self.api_base();
        let base = base.trim_end_matches('/');
        let resource = resource.trim_start_matches('/');
        let raw = format!("{base}/{version}/{resource}:{method}");
        Url::parse(&raw)
            .map_err(|e| DiscoveryEngineError::InvalidRequest(format!("invalid URL {raw}: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::EnvGuard;
    use serial_test::serial;

    fn clear_env() -> Vec<EnvGuard> {
        vec![
            EnvGuard::remove("AGENTSPACE_PROJECT_ID"),
            EnvGuard::remove("AGENTSPACE_LOCATION"),
            EnvGuard::remove("AGENTSPACE_ENGINE_ID"),
            EnvGuard::remove("AGENTSPACE_ASSISTANT_ID"),
            EnvGuard::remove("DISCOVERYENGINE_BASE_URL"),
            EnvGuard::remove("DISCOVERYENGINE_TIMEOUT_SECS"),
        ]
    }

    #[test]
    #[serial(env)]
    fn defaults_match_deployment_constants() {
        let _env = clear_env();

        let cfg = DiscoveryEngineConfig::new();
        assert_eq!(cfg.project_id(), DEFAULT_PROJECT_ID);
        assert_eq!(cfg.location(), DEFAULT_LOCATION);
        assert_eq!(cfg.api_base(), DISCOVERYENGINE_DEFAULT_BASE);
        assert_eq!(cfg.timeout(), DEFAULT_TIMEOUT);
        assert_eq!(
            cfg.serving_config("default_config"),
            "projects/the-foo-bar/locations/global/collections/default_collection/engines/cymbal-bank_1746202630648/servingConfigs/default_config"
        );
        assert_eq!(
            cfg.assistant_path(),
            "projects/the-foo-bar/locations/global/collections/default_collection/engines/cymbal-bank_1746202630648/assistants/default_assistant"
        );
    }

    #[test]
    #[serial(env)]
    fn config_reads_env_vars() {
        let _env = clear_env();
        let _p = EnvGuard::set("AGENTSPACE_PROJECT_ID", "  proj-1 ");
        let _l = EnvGuard::set("AGENTSPACE_LOCATION", "eu");
        let _e = EnvGuard::set("AGENTSPACE_ENGINE_ID", "engine-9");
        let _t = EnvGuard::set("DISCOVERYENGINE_TIMEOUT_SECS", "42");

        let cfg = DiscoveryEngineConfig::new();
        assert_eq!(cfg.project_id(), "proj-1");
        assert_eq!(cfg.api_base(), "https://eu-discoveryengine.googleapis.com");
        assert_eq!(cfg.timeout(), Duration::from_secs(42));
        assert_eq!(
            cfg.engine_path(),
            "projects/proj-1/locations/eu/collections/default_collection/engines/engine-9"
        );
    }

    #[test]
    #[serial(env)]
    fn invalid_timeout_falls_back_to_default() {
        let _env = clear_env();
        let _t = EnvGuard::set("DISCOVERYENGINE_TIMEOUT_SECS", "soon");

        assert_eq!(DiscoveryEngineConfig::new().timeout(), DEFAULT_TIMEOUT);
    }

    #[test]
    fn explicit_base_wins_over_location() {
        let cfg = DiscoveryEngineConfig::new()
            .with_location("us")
            .with_api_base("http://127.0.0.1:9999/");
        assert_eq!(cfg.api_base(), "http://127.0.0.1:9999/");

        let url = cfg.url("v1", "projects/p/x", "search").unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:9999/v1/projects/p/x:search");
    }

    #[test]
    fn unparsable_url_is_invalid_request() {
        let cfg = DiscoveryEngineConfig::new().with_api_base("not a url");
        let err = cfg.url("v1", "projects/p", "search").unwrap_err();
        assert!(err.is_invalid_request());
    }
}
