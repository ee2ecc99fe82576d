use crate::{
    client::{Client, RequestOptions},
    error::DiscoveryEngineError,
    types::answer::{AnswerQueryRequest, AnswerQueryResponse},
};

/// API resource for `servingConfigs.answer` (non-streaming)
pub struct Answer<'c> {
    client: &'c Client,
}

impl<'c> Answer<'c> {
    /// Creates a new Answer resource
    #[must_use]
    pub const fn new(client: &'c Client) -> Self {
        Self { client }
    }

    /// Generate a grounded answer using the named serving config
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn create(
        &self,
        serving_config: &str,
        req: &AnswerQueryRequest,
    ) -> Result<AnswerQueryResponse, DiscoveryEngineError> {
        let config = self.client.config();
        let url = config.url("v1", &config.serving_config(serving_config), "answer")?;
        self.client.post(url, req, RequestOptions::default()).await
    }
}

impl Client {
    /// Returns the Answer API resource
    #[must_use]
    pub const fn answer(&self) -> Answer<'_> {
        Answer::new(self)
    }
}
