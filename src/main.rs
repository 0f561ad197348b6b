// placescrape: search a city for place types, fetch each result page and
// export the details to a spreadsheet. Runs once and exits.

use anyhow::Result;
use clap::Parser;
use placescrape::ScrapeConfig;
use placescrape::utils::{
    DEFAULT_CITY, DEFAULT_DETAIL_CHAR_LIMIT, DEFAULT_FETCH_TIMEOUT_SECS, DEFAULT_PLACE_TYPE,
    DEFAULT_QUERY_DELAY_SECS, DEFAULT_RESULTS_LIMIT, SERPAPI_SEARCH_URL,
};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "placescrape", version, about = "Harvest places from search results into a spreadsheet")]
struct Cli {
    /// SerpApi key
    #[arg(long, env = "SERPAPI_API_KEY", hide_env_values = true)]
    api_key: String,

    /// City to search in
    #[arg(long, default_value = DEFAULT_CITY)]
    city: String,

    /// Place type to search for; repeat for several
    #[arg(long = "place-type", default_values_t = vec![DEFAULT_PLACE_TYPE.to_string()])]
    place_types: Vec<String>,

    /// Organic results requested per place type
    #[arg(long, default_value_t = DEFAULT_RESULTS_LIMIT)]
    limit: usize,

    /// Seconds to wait between place-type queries
    #[arg(long, default_value_t = DEFAULT_QUERY_DELAY_SECS)]
    delay_secs: u64,

    /// Output .xlsx path [default: Coffee_Shops_<City>.xlsx]
    #[arg(long, short)]
    output: Option<PathBuf>,

    /// Maximum characters of page text kept per result
    #[arg(long, default_value_t = DEFAULT_DETAIL_CHAR_LIMIT)]
    char_limit: usize,

    /// Per-page fetch timeout in seconds
    #[arg(long, default_value_t = DEFAULT_FETCH_TIMEOUT_SECS)]
    timeout_secs: u64,

    /// Search API endpoint
    #[arg(long, default_value = SERPAPI_SEARCH_URL, hide = true)]
    endpoint: String,
}

impl Cli {
    fn into_config(self) -> Result<ScrapeConfig> {
        let mut builder = ScrapeConfig::builder()
            .api_key(self.api_key)
            .city(self.city)
            .place_types(self.place_types)
            .results_limit(self.limit)
            .query_delay_secs(self.delay_secs)
            .detail_char_limit(self.char_limit)
            .fetch_timeout_secs(self.timeout_secs)
            .search_endpoint(self.endpoint);
        if let Some(output) = self.output {
            builder = builder.output_path(output);
        }
        builder.build()
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let config = Cli::parse().into_config()?;
    let (report, _outcome) = placescrape::run(&config).await?;

    if report.queries_failed > 0 {
        tracing::warn!(
            "{} of {} place-type queries failed",
            report.queries_failed,
            report.total_queries()
        );
    }

    Ok(())
}
