//! Data structures for search API responses

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// A single organic (non-ad) search result
///
/// Every field is optional in the SerpApi payload; the runner substitutes
/// placeholders where a value is missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganicResult {
    /// Page title
    #[serde(default)]
    pub title: Option<String>,

    /// Description snippet shown by the search engine
    #[serde(default)]
    pub snippet: Option<String>,

    /// Target page URL
    #[serde(default)]
    pub link: Option<String>,
}

impl OrganicResult {
    /// Convenience constructor with all three fields present
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        snippet: impl Into<String>,
        link: impl Into<String>,
    ) -> Self {
        Self {
            title: Some(title.into()),
            snippet: Some(snippet.into()),
            link: Some(link.into()),
        }
    }
}

/// Subset of the SerpApi response body that the harvester reads
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SerpApiResponse {
    /// Absent or `null` when the engine returned nothing
    #[serde(default)]
    pub organic_results: Option<Vec<OrganicResult>>,

    /// SerpApi reports some failures in-band with a 2xx status
    #[serde(default)]
    pub error: Option<String>,
}

/// Errors that can occur during a search API call
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// Search request timed out
    #[error("Search timeout after {timeout:?}")]
    Timeout { timeout: Duration },

    /// Connection-level failure
    #[error("Search request failed: {0}")]
    Request(#[source] reqwest::Error),

    /// Non-success HTTP status from the search API
    #[error("Search API error: {status} - {message}")]
    ApiError { status: u16, message: String },

    /// Body was not the expected JSON
    #[error("Search response could not be decoded: {0}")]
    Decode(String),
}
