//! SerpApi search provider
//!
//! Issues `GET {endpoint}?engine=google&q=..&num=..&api_key=..` and decodes
//! the organic results.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, warn};

use super::SearchProvider;
use super::types::{OrganicResult, SearchError, SerpApiResponse};
use crate::utils::SEARCH_ENGINE;

/// SerpApi client sharing the run's HTTP client
pub struct SerpApiClient {
    client: Client,
    endpoint: String,
    api_key: String,
    timeout: Duration,
}

impl SerpApiClient {
    /// Create a new SerpApi client
    ///
    /// # Arguments
    /// * `client` - Shared HTTP client
    /// * `endpoint` - Search endpoint, normally `https://serpapi.com/search`
    /// * `api_key` - SerpApi key
    /// * `timeout` - Timeout for each search call
    #[must_use]
    pub fn new(
        client: Client,
        endpoint: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
            api_key: api_key.into(),
            timeout,
        }
    }

    fn map_reqwest_error(&self, error: reqwest::Error) -> SearchError {
        if error.is_timeout() {
            SearchError::Timeout {
                timeout: self.timeout,
            }
        } else {
            // The request URL carries the API key in its query string
            SearchError::Request(error.without_url())
        }
    }
}

#[async_trait]
impl SearchProvider for SerpApiClient {
    async fn search(
        &self,
        query: &str,
        num_results: usize,
    ) -> Result<Vec<OrganicResult>, SearchError> {
        let num = num_results.to_string();
        let response = self
            .client
            .get(&self.endpoint)
            .timeout(self.timeout)
            .header("Accept", "application/json")
            .query(&[
                ("engine", SEARCH_ENGINE),
                ("q", query),
                ("num", num.as_str()),
                ("api_key", self.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(|e| self.map_reqwest_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(SearchError::ApiError {
                status: status.as_u16(),
                message,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| self.map_reqwest_error(e))?;
        let data: SerpApiResponse =
            serde_json::from_str(&body).map_err(|e| SearchError::Decode(e.to_string()))?;

        if let Some(error) = &data.error {
            warn!("SerpApi reported an error for '{query}': {error}");
        }

        let results = data.organic_results.unwrap_or_default();
        debug!("SerpApi returned {} organic results for '{}'", results.len(), query);
        Ok(results)
    }

    fn name(&self) -> &'static str {
        "serpapi"
    }
}
