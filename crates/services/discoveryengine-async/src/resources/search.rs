use crate::{
    client::{Client, RequestOptions},
    error::DiscoveryEngineError,
    types::search::{SearchRequest, SearchResponse},
};

/// API resource for `servingConfigs.search`
pub struct Search<'c> {
    client: &'c Client,
}

impl<'c> Search<'c> {
    /// Creates a new Search resource
    #[must_use]
    pub const fn new(client: &'c Client) -> Self {
        Self { client }
    }

    /// Execute a search against the named serving config of the configured engine
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn create(
        &self,
        serving_config: &str,
        req: &SearchRequest,
    ) -> Result<SearchResponse, DiscoveryEngineError> {
        let config = self.client.config();
        let url = config.url("v1", &config.serving_config(serving_config), "search")?;
        self.client.post(url, req, RequestOptions::default()).await
    }
}

impl Client {
    /// Returns the Search API resource
    #[must_use]
    pub const fn search(&self) -> Search<'_> {
        Search::new(self)
    }
}
