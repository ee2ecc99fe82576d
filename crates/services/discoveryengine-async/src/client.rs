use std::sync::Arc;

use reqwest::Url;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::{Serialize, de::DeserializeOwned};

use crate::auth::CredentialProvider;
use crate::config::{DiscoveryEngineConfig, HDR_X_GOOG_USER_PROJECT};
use crate::error::DiscoveryEngineError;

/// Discovery Engine API client
///
/// Holds the target configuration and an injected [`CredentialProvider`].
/// Requests are sent once; there is no retry.
#[derive(Clone)]
pub struct Client {
    http: reqwest::Client,
    config: DiscoveryEngineConfig,
    credentials: Arc<dyn CredentialProvider>,
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Per-request options that vary between endpoints
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct RequestOptions {
    /// Bill the configured project via `X-Goog-User-Project`, overriding the
    /// credentials' quota project
    pub user_project: bool,
}

impl Client {
    /// Creates a client for `config`, authenticating with `credentials`.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(
        config: DiscoveryEngineConfig,
        credentials: Arc<dyn CredentialProvider>,
    ) -> Result<Self, DiscoveryEngineError> {
        let http = reqwest::Client::builder()
            .connect_timeout(std::time::Duration::from_secs(5))
            .timeout(config.timeout())
            .build()?;
        Ok(Self {
            http,
            config,
            credentials,
        })
    }

    /// Creates a client from environment configuration and application-default credentials
    pub fn from_env() -> Result<Self, DiscoveryEngineError> {
        let credentials = crate::auth::default_provider()?;
        Self::new(DiscoveryEngineConfig::new(), credentials)
    }

    /// Replaces the HTTP client with a custom one
    #[must_use]
    pub fn with_http_client(mut self, http: reqwest::Client) -> Self {
        self.http = http;
        self
    }

    /// Returns a reference to the client's configuration
    #[must_use]
    pub const fn config(&self) -> &DiscoveryEngineConfig {
        &self.config
    }

    async fn headers(&self, opts: RequestOptions) -> Result<HeaderMap, DiscoveryEngineError> {
        let token = self.credentials.access_token().await?;

        let mut h = HeaderMap::new();
        h.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", token.secret())).map_err(|_| {
                DiscoveryEngineError::Config("access token is not a valid header value".into())
            })?,
        );
        h.insert(
            CONTENT_TYPE,
            HeaderValue::from_static("application/json; charset=UTF-8"),
        );
        // The configured project wins over the credentials' quota project
        let billed = if opts.user_project {
            Some(self.config.project_id())
        } else {
            self.credentials.quota_project()
        };
        if let Some(project) = billed {
            h.insert(
                HDR_X_GOOG_USER_PROJECT,
                HeaderValue::from_str(project).map_err(|_| {
                    DiscoveryEngineError::InvalidRequest(format!(
                        "project id {project:?} is not a valid header value"
                    ))
                })?,
            );
        }
        Ok(h)
    }

    pub(crate) async fn post<I, O>(
        &self,
        url: Url,
        body: &I,
        opts: RequestOptions,
    ) -> Result<O, DiscoveryEngineError>
    where
        I: Serialize + Sync,
        O: DeserializeOwned,
    {
        let bytes = self.post_raw(url, body, opts).await?;
        serde_json::from_slice(&bytes).map_err(|e| crate::error::map_deser(&e, &bytes))
    }

    async fn post_raw<I>(
        &self,
        url: Url,
        body: &I,
        opts: RequestOptions,
    ) -> Result<bytes::Bytes, DiscoveryEngineError>
    where
        I: Serialize + Sync,
    {
        let headers = self.headers(opts).await?;

        tracing::debug!(%url, "POST");
        let response = self
            .http
            .post(url)
            .headers(headers)
            .json(body)
            .send()
            .await?;

        let status = response.status();
        let bytes = response.bytes().await?;
        tracing::debug!(status = status.as_u16(), len = bytes.len(), "response");

        if status.is_success() {
            return Ok(bytes);
        }

        Err(crate::error::deserialize_api_error(status, &bytes))
    }
}
