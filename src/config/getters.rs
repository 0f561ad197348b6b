//! Getter methods for `ScrapeConfig`

use std::path::Path;
use std::time::Duration;

use super::types::ScrapeConfig;

impl ScrapeConfig {
    #[must_use]
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    #[must_use]
    pub fn city(&self) -> &str {
        &self.city
    }

    #[must_use]
    pub fn place_types(&self) -> &[String] {
        &self.place_types
    }

    #[must_use]
    pub fn results_limit(&self) -> usize {
        self.results_limit
    }

    #[must_use]
    pub fn query_delay_secs(&self) -> u64 {
        self.query_delay_secs
    }

    #[must_use]
    pub fn query_delay(&self) -> Duration {
        Duration::from_secs(self.query_delay_secs)
    }

    #[must_use]
    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    #[must_use]
    pub fn detail_char_limit(&self) -> usize {
        self.detail_char_limit
    }

    #[must_use]
    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }

    #[must_use]
    pub fn search_timeout(&self) -> Duration {
        Duration::from_secs(self.search_timeout_secs)
    }

    #[must_use]
    pub fn search_endpoint(&self) -> &str {
        &self.search_endpoint
    }
}
