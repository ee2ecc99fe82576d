use crate::{
    client::{Client, RequestOptions},
    error::DiscoveryEngineError,
    types::assist::{StreamAssistRequest, StreamAssistResponse},
};

/// API resource for `assistants` (v1alpha)
pub struct Assistant<'c> {
    client: &'c Client,
}

impl<'c> Assistant<'c> {
    /// Creates a new Assistant resource
    #[must_use]
    pub const fn new(client: &'c Client) -> Self {
        Self { client }
    }

    /// Call `:streamAssist` on the configured assistant and buffer every row.
    ///
    /// Sends `X-Goog-User-Project` so the call is billed to the configured project.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the API returns an error, or the
    /// body is not a JSON array.
    pub async fn stream_assist(
        &self,
        req: &StreamAssistRequest,
    ) -> Result<StreamAssistResponse, DiscoveryEngineError> {
        let config = self.client.config();
        let url = config.url("v1alpha", &config.assistant_path(), "streamAssist")?;
        self.client
            .post(url, req, RequestOptions { user_project: true })
            .await
    }
}

impl Client {
    /// Returns the Assistant API resource
    #[must_use]
    pub const fn assistant(&self) -> Assistant<'_> {
        Assistant::new(self)
    }
}
