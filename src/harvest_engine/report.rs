//! Summary of a harvesting run

use crate::record::PlaceRecord;
use crate::utils::PLACEHOLDER;

/// Records produced by a run plus counters for the log summary
#[derive(Debug, Clone, Default)]
pub struct RunReport {
    /// All batches concatenated in place-type order
    pub records: Vec<PlaceRecord>,
    pub queries_succeeded: usize,
    pub queries_failed: usize,
}

impl RunReport {
    /// Number of records whose details ended up as the placeholder
    #[must_use]
    pub fn details_unavailable(&self) -> usize {
        self.records
            .iter()
            .filter(|r| r.details() == Some(PLACEHOLDER))
            .count()
    }

    #[must_use]
    pub fn total_queries(&self) -> usize {
        self.queries_succeeded + self.queries_failed
    }
}
