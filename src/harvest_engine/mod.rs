//! Harvest engine
//!
//! Drives the run: one search per place type, concurrent detail resolution
//! within each batch, positional merge and throttling between batches.

// Sub-modules
pub mod orchestrator;
pub mod progress;
pub mod report;
pub mod resolver;

// Re-exports for public API
pub use orchestrator::{harvest_place_type, harvest_places};
pub use progress::{NoOpProgress, ProgressReporter};
pub use report::RunReport;
pub use resolver::{resolve_detail, resolve_details};
