pub mod config;
pub mod exporter;
pub mod harvest_engine;
pub mod page_extractor;
pub mod page_fetcher;
pub mod record;
pub mod utils;
pub mod web_search;

pub use config::ScrapeConfig;
pub use exporter::{ExportError, ExportOutcome, export_records};
pub use harvest_engine::{
    NoOpProgress, ProgressReporter, RunReport, harvest_place_type, harvest_places,
    resolve_detail, resolve_details,
};
pub use page_extractor::extract_details;
pub use page_fetcher::{FetchError, FetchOutcome, HttpPageFetcher, PageSource, fetch_page};
pub use record::{COLUMNS, PlaceRecord};
pub use web_search::{OrganicResult, SearchError, SearchProvider, SerpApiClient};

use anyhow::{Context, Result};
use tracing::info;

/// Build the shared HTTP client used for search calls and page fetches
///
/// One client means one connection pool for the whole run.
pub fn build_http_client() -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .build()
        .context("Failed to build HTTP client")
}

/// Run a complete harvest: search every place type, resolve details, export
///
/// Query and fetch failures are logged and absorbed; an export failure is
/// returned as an error.
pub async fn run(config: &ScrapeConfig) -> Result<(RunReport, ExportOutcome)> {
    info!("Starting harvest with {config:?}");

    let client = build_http_client()?;
    let search = SerpApiClient::new(
        client.clone(),
        config.search_endpoint(),
        config.api_key(),
        config.search_timeout(),
    );
    let pages = HttpPageFetcher::new(client, config.fetch_timeout());

    let report = harvest_places(config, &search, &pages, &NoOpProgress).await;

    let outcome = export_records(&report.records, config.output_path())
        .with_context(|| format!("Export to '{}' failed", config.output_path().display()))?;

    Ok((report, outcome))
}
