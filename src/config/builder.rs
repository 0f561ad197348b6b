//! Type-safe builder for `ScrapeConfig` using the typestate pattern
//!
//! The API key and the city are required; `build()` only exists once both
//! have been provided, in that order.

use crate::utils::{
    DEFAULT_DETAIL_CHAR_LIMIT, DEFAULT_FETCH_TIMEOUT_SECS, DEFAULT_PLACE_TYPE,
    DEFAULT_QUERY_DELAY_SECS, DEFAULT_RESULTS_LIMIT, DEFAULT_SEARCH_TIMEOUT_SECS,
    SERPAPI_SEARCH_URL, XLSX_MAX_CELL_CHARS,
};
use anyhow::{Context, Result, anyhow, bail};
use std::marker::PhantomData;
use std::path::PathBuf;

use super::types::{ScrapeConfig, default_output_path};

// Type states for the builder
pub struct WithApiKey;
pub struct WithCity;

pub struct ScrapeConfigBuilder<State = ()> {
    pub(crate) api_key: Option<String>,
    pub(crate) city: Option<String>,
    pub(crate) place_types: Vec<String>,
    pub(crate) results_limit: usize,
    pub(crate) query_delay_secs: u64,
    pub(crate) output_path: Option<PathBuf>,
    pub(crate) detail_char_limit: usize,
    pub(crate) fetch_timeout_secs: u64,
    pub(crate) search_timeout_secs: u64,
    pub(crate) search_endpoint: String,
    pub(crate) _phantom: PhantomData<State>,
}

impl Default for ScrapeConfigBuilder<()> {
    fn default() -> Self {
        Self {
            api_key: None,
            city: None,
            place_types: vec![DEFAULT_PLACE_TYPE.to_string()],
            results_limit: DEFAULT_RESULTS_LIMIT,
            query_delay_secs: DEFAULT_QUERY_DELAY_SECS,
            output_path: None,
            detail_char_limit: DEFAULT_DETAIL_CHAR_LIMIT,
            fetch_timeout_secs: DEFAULT_FETCH_TIMEOUT_SECS,
            search_timeout_secs: DEFAULT_SEARCH_TIMEOUT_SECS,
            search_endpoint: SERPAPI_SEARCH_URL.to_string(),
            _phantom: PhantomData,
        }
    }
}

impl ScrapeConfig {
    /// Create a builder for configuring a `ScrapeConfig` with a fluent interface
    #[must_use]
    pub fn builder() -> ScrapeConfigBuilder<()> {
        ScrapeConfigBuilder::default()
    }
}

impl<State> ScrapeConfigBuilder<State> {
    fn into_state<Next>(self) -> ScrapeConfigBuilder<Next> {
        ScrapeConfigBuilder {
            api_key: self.api_key,
            city: self.city,
            place_types: self.place_types,
            results_limit: self.results_limit,
            query_delay_secs: self.query_delay_secs,
            output_path: self.output_path,
            detail_char_limit: self.detail_char_limit,
            fetch_timeout_secs: self.fetch_timeout_secs,
            search_timeout_secs: self.search_timeout_secs,
            search_endpoint: self.search_endpoint,
            _phantom: PhantomData,
        }
    }
}

impl ScrapeConfigBuilder<()> {
    pub fn api_key(mut self, key: impl Into<String>) -> ScrapeConfigBuilder<WithApiKey> {
        self.api_key = Some(key.into());
        self.into_state()
    }
}

impl ScrapeConfigBuilder<WithApiKey> {
    pub fn city(mut self, city: impl Into<String>) -> ScrapeConfigBuilder<WithCity> {
        self.city = Some(city.into().trim().to_string());
        self.into_state()
    }
}

// Build method only available when all required fields are set
impl ScrapeConfigBuilder<WithCity> {
    pub fn build(self) -> Result<ScrapeConfig> {
        let api_key = self
            .api_key
            .ok_or_else(|| anyhow!("api_key is required"))?;
        if api_key.trim().is_empty() {
            bail!("api_key must not be empty");
        }

        let city = self.city.ok_or_else(|| anyhow!("city is required"))?;
        if city.is_empty() {
            bail!("city must not be empty");
        }

        if self.place_types.is_empty() {
            bail!("at least one place type is required");
        }
        let place_types = self
            .place_types
            .into_iter()
            .map(|p| {
                let trimmed = p.trim().to_string();
                if trimmed.is_empty() {
                    Err(anyhow!("place types must not be blank"))
                } else {
                    Ok(trimmed)
                }
            })
            .collect::<Result<Vec<_>>>()?;

        if self.results_limit == 0 {
            bail!("results_limit must be at least 1");
        }
        if self.detail_char_limit == 0 {
            bail!("detail_char_limit must be at least 1");
        }
        if self.detail_char_limit > XLSX_MAX_CELL_CHARS {
            bail!(
                "detail_char_limit {} exceeds the spreadsheet cell limit of {}",
                self.detail_char_limit,
                XLSX_MAX_CELL_CHARS
            );
        }
        if self.fetch_timeout_secs == 0 {
            bail!("fetch_timeout_secs must be at least 1");
        }
        if self.search_timeout_secs == 0 {
            bail!("search_timeout_secs must be at least 1");
        }

        let endpoint = url::Url::parse(&self.search_endpoint)
            .with_context(|| format!("Invalid search endpoint '{}'", self.search_endpoint))?;
        if !matches!(endpoint.scheme(), "http" | "https") {
            bail!(
                "search endpoint must be http or https, got '{}'",
                endpoint.scheme()
            );
        }

        let output_path = self
            .output_path
            .unwrap_or_else(|| default_output_path(&city));

        Ok(ScrapeConfig {
            api_key,
            city,
            place_types,
            results_limit: self.results_limit,
            query_delay_secs: self.query_delay_secs,
            output_path,
            detail_char_limit: self.detail_char_limit,
            fetch_timeout_secs: self.fetch_timeout_secs,
            search_timeout_secs: self.search_timeout_secs,
            search_endpoint: self.search_endpoint,
        })
    }
}
