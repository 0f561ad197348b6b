//! Core configuration type for a harvesting run
//!
//! `ScrapeConfig` is immutable once built and is passed explicitly into the
//! query runner. There is no process-wide configuration state.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for a single harvesting run
#[derive(Clone, Serialize, Deserialize)]
pub struct ScrapeConfig {
    /// SerpApi key.
    ///
    /// Never serialized, so a dumped config cannot leak the secret.
    #[serde(skip_serializing, default)]
    pub(crate) api_key: String,
    pub(crate) city: String,
    /// Place-type phrases, queried in this order
    pub(crate) place_types: Vec<String>,
    /// Value of the `num` parameter sent with every search call
    pub(crate) results_limit: usize,
    /// Pause after each merged batch before the next search call
    pub(crate) query_delay_secs: u64,
    pub(crate) output_path: PathBuf,
    /// Maximum characters kept from a linked page's text
    pub(crate) detail_char_limit: usize,
    /// Per-page fetch timeout
    ///
    /// Default: 10 seconds
    pub(crate) fetch_timeout_secs: u64,
    /// Timeout for one search API call
    ///
    /// Default: 30 seconds
    pub(crate) search_timeout_secs: u64,
    /// Search API endpoint, overridable for tests and proxies
    pub(crate) search_endpoint: String,
}

// Hand-written so the API key never reaches a log line.
impl std::fmt::Debug for ScrapeConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScrapeConfig")
            .field("api_key", &"<redacted>")
            .field("city", &self.city)
            .field("place_types", &self.place_types)
            .field("results_limit", &self.results_limit)
            .field("query_delay_secs", &self.query_delay_secs)
            .field("output_path", &self.output_path)
            .field("detail_char_limit", &self.detail_char_limit)
            .field("fetch_timeout_secs", &self.fetch_timeout_secs)
            .field("search_timeout_secs", &self.search_timeout_secs)
            .field("search_endpoint", &self.search_endpoint)
            .finish()
    }
}

/// Default output file name for a city: `Coffee_Shops_<City>.xlsx`
///
/// Whitespace in the city name becomes `_`.
#[must_use]
pub fn default_output_path(city: &str) -> PathBuf {
    let city: String = city
        .trim()
        .chars()
        .map(|c| if c.is_whitespace() { '_' } else { c })
        .collect();
    PathBuf::from(format!("Coffee_Shops_{city}.xlsx"))
}
