//! Builder methods available for all states
//!
//! Optional settings can be applied at any point of the builder chain.

use std::path::PathBuf;

use super::builder::ScrapeConfigBuilder;

impl<State> ScrapeConfigBuilder<State> {
    /// Replace the list of place-type phrases
    ///
    /// Queries run in the order given. Blank entries are rejected by `build()`.
    #[must_use]
    pub fn place_types<I, S>(mut self, place_types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.place_types = place_types.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn results_limit(mut self, limit: usize) -> Self {
        self.results_limit = limit;
        self
    }

    /// Seconds to pause between place-type queries
    ///
    /// Zero disables throttling, which is mainly useful in tests.
    #[must_use]
    pub fn query_delay_secs(mut self, secs: u64) -> Self {
        self.query_delay_secs = secs;
        self
    }

    /// Output spreadsheet path
    ///
    /// Defaults to `Coffee_Shops_<City>.xlsx` in the working directory.
    #[must_use]
    pub fn output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = Some(path.into());
        self
    }

    #[must_use]
    pub fn detail_char_limit(mut self, limit: usize) -> Self {
        self.detail_char_limit = limit;
        self
    }

    #[must_use]
    pub fn fetch_timeout_secs(mut self, secs: u64) -> Self {
        self.fetch_timeout_secs = secs;
        self
    }

    #[must_use]
    pub fn search_timeout_secs(mut self, secs: u64) -> Self {
        self.search_timeout_secs = secs;
        self
    }

    /// Override the search endpoint
    ///
    /// # Example
    ///
    /// ```rust
    /// # use placescrape::config::ScrapeConfig;
    /// # fn main() -> anyhow::Result<()> {
    /// let config = ScrapeConfig::builder()
    ///     .api_key("secret")
    ///     .city("Lahore")
    ///     .search_endpoint("http://127.0.0.1:8080/search")
    ///     .build()?;
    /// assert_eq!(config.search_endpoint(), "http://127.0.0.1:8080/search");
    /// # Ok(())
    /// # }
    /// ```
    #[must_use]
    pub fn search_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.search_endpoint = endpoint.into();
        self
    }
}
