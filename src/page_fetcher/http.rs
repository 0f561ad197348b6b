//! reqwest-backed page source

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

use super::{FetchError, PageSource};
use crate::utils::CHROME_USER_AGENT;

/// Fetches pages over HTTP with a shared client and a per-request timeout
#[derive(Debug, Clone)]
pub struct HttpPageFetcher {
    client: Client,
    timeout: Duration,
}

impl HttpPageFetcher {
    /// Create a fetcher on top of an existing client
    ///
    /// The client is cheap to clone and shares its connection pool, so the
    /// search client and the page fetcher can use the same one.
    #[must_use]
    pub fn new(client: Client, timeout: Duration) -> Self {
        Self { client, timeout }
    }

    fn map_reqwest_error(&self, error: reqwest::Error) -> FetchError {
        if error.is_timeout() {
            FetchError::Timeout {
                timeout: self.timeout,
            }
        } else {
            FetchError::Request(error)
        }
    }
}

#[async_trait]
impl PageSource for HttpPageFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let parsed = parse_page_url(url)?;

        // The timeout covers connect, headers and the full body read
        let response = self
            .client
            .get(parsed)
            .timeout(self.timeout)
            .header("User-Agent", CHROME_USER_AGENT)
            .header(
                "Accept",
                "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
            )
            .send()
            .await
            .map_err(|e| self.map_reqwest_error(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| self.map_reqwest_error(e))?;

        debug!("Fetched {} bytes from {}", body.len(), url);
        Ok(body)
    }
}

/// Validate a result link before spending a request on it
pub(crate) fn parse_page_url(url: &str) -> Result<url::Url, FetchError> {
    let trimmed = url.trim();
    if trimmed.is_empty() {
        return Err(FetchError::EmptyUrl);
    }

    let parsed = url::Url::parse(trimmed).map_err(|source| FetchError::InvalidUrl {
        url: trimmed.to_string(),
        source,
    })?;

    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        other => Err(FetchError::UnsupportedScheme(other.to_string())),
    }
}
