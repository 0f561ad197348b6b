//! Web search through a third-party search API
//!
//! The harvester only needs one thing from a search backend: the organic
//! results for a query. [`SearchProvider`] is that seam; [`SerpApiClient`]
//! is the production implementation.

mod serpapi;
mod types;

// Re-export public types
pub use serpapi::SerpApiClient;
pub use types::{OrganicResult, SearchError, SerpApiResponse};

use async_trait::async_trait;

/// Trait for search backends
#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// Return the organic results for `query`, asking for `num_results` of them
    async fn search(
        &self,
        query: &str,
        num_results: usize,
    ) -> Result<Vec<OrganicResult>, SearchError>;

    /// Provider name for logs
    fn name(&self) -> &'static str;
}

/// Build the query phrase for one place type: `"{place_type} in {city}"`
#[must_use]
pub fn place_query(place_type: &str, city: &str) -> String {
    format!("{place_type} in {city}")
}
