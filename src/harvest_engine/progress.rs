//! Progress reporting abstraction for harvesting runs
//!
//! Defines the `ProgressReporter` trait for lifecycle event reporting and
//! provides a no-op implementation for callers that only want the records.

use crate::web_search::SearchError;

use super::report::RunReport;

/// Trait for reporting run progress at key lifecycle events
pub trait ProgressReporter: Send + Sync {
    /// A search call for `query` is about to be issued
    fn report_query_started(&self, place_type: &str, query: &str);

    /// The search call for `place_type` failed; the batch is dropped
    fn report_query_failed(&self, place_type: &str, error: &SearchError);

    /// All details of a batch are resolved and merged
    fn report_batch_merged(&self, place_type: &str, records: usize);

    /// Every place type has been processed
    fn report_completed(&self, report: &RunReport);
}

/// Progress reporter that does nothing
#[derive(Debug, Clone, Copy)]
pub struct NoOpProgress;

impl ProgressReporter for NoOpProgress {
    #[inline(always)]
    fn report_query_started(&self, _place_type: &str, _query: &str) {}

    #[inline(always)]
    fn report_query_failed(&self, _place_type: &str, _error: &SearchError) {}

    #[inline(always)]
    fn report_batch_merged(&self, _place_type: &str, _records: usize) {}

    #[inline(always)]
    fn report_completed(&self, _report: &RunReport) {}
}
