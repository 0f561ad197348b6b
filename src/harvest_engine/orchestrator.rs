//! Main harvesting orchestration logic
//!
//! For every configured place type, in order:
//! 1. search `"{place_type} in {city}"`
//! 2. build one unresolved record per organic result
//! 3. resolve all details of the batch concurrently
//! 4. merge details back by position
//! 5. pause for the configured delay before the next place type
//!
//! Batches never overlap: the next search call is only issued once the
//! current batch has been merged and the delay has elapsed.

use tracing::{error, info};

use super::progress::ProgressReporter;
use super::report::RunReport;
use super::resolver::resolve_details;
use crate::config::ScrapeConfig;
use crate::page_fetcher::PageSource;
use crate::record::PlaceRecord;
use crate::web_search::{SearchError, SearchProvider, place_query};

/// Run every place-type query of `config` and collect the merged records
///
/// A failing search call only drops its own place type; it is logged at ERROR
/// and counted in [`RunReport::queries_failed`].
///
/// # Arguments
/// * `config` - Immutable run configuration
/// * `search` - Search backend
/// * `pages` - Page source used to resolve details
/// * `progress` - Progress reporter (`NoOpProgress` when not needed)
pub async fn harvest_places<S, P, R>(
    config: &ScrapeConfig,
    search: &S,
    pages: &P,
    progress: &R,
) -> RunReport
where
    S: SearchProvider + ?Sized,
    P: PageSource + ?Sized,
    R: ProgressReporter + ?Sized,
{
    let mut report = RunReport::default();
    let place_types = config.place_types();
    let delay = config.query_delay();

    info!(
        "Harvesting {} place type(s) in {} via {}",
        place_types.len(),
        config.city(),
        search.name()
    );

    for (index, place_type) in place_types.iter().enumerate() {
        match harvest_place_type(config, search, pages, place_type, progress).await {
            Ok(batch) => {
                report.queries_succeeded += 1;
                report.records.extend(batch);

                let has_next = index + 1 < place_types.len();
                if has_next && !delay.is_zero() {
                    tokio::time::sleep(delay).await;
                }
            }
            Err(e) => {
                error!("Error fetching {} in {}: {}", place_type, config.city(), e);
                report.queries_failed += 1;
                progress.report_query_failed(place_type, &e);
            }
        }
    }

    info!(
        "Harvest finished: {} record(s), {} of {} queries succeeded, {} detail(s) unavailable",
        report.records.len(),
        report.queries_succeeded,
        report.total_queries(),
        report.details_unavailable()
    );
    progress.report_completed(&report);

    report
}

/// Run a single place-type query and return its fully merged batch
///
/// Either the whole batch is returned or, if the search call fails, nothing.
pub async fn harvest_place_type<S, P, R>(
    config: &ScrapeConfig,
    search: &S,
    pages: &P,
    place_type: &str,
    progress: &R,
) -> Result<Vec<PlaceRecord>, SearchError>
where
    S: SearchProvider + ?Sized,
    P: PageSource + ?Sized,
    R: ProgressReporter + ?Sized,
{
    let query = place_query(place_type, config.city());
    info!("Searching: {query}");
    progress.report_query_started(place_type, &query);

    let results = search.search(&query, config.results_limit()).await?;

    let mut batch: Vec<PlaceRecord> = results
        .iter()
        .map(|result| PlaceRecord::from_result(config.city(), place_type, result))
        .collect();

    let details = resolve_details(
        pages,
        batch.iter().map(|record| record.link.as_str()),
        config.detail_char_limit(),
    )
    .await;

    // join_all preserves submission order, so details[i] belongs to batch[i]
    for (record, detail) in batch.iter_mut().zip(details) {
        record.resolve_details(detail);
    }

    info!("Resolved {} record(s) for '{}'", batch.len(), query);
    progress.report_batch_merged(place_type, batch.len());

    Ok(batch)
}
