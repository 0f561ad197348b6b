//! Configuration module for place harvesting runs
//!
//! This module provides the `ScrapeConfig` struct and its type-safe builder
//! for configuring a run with validation and sensible defaults.

// Sub-modules
pub mod builder;
pub mod getters;
pub mod methods;
pub mod types;

// Re-exports for public API
pub use builder::{ScrapeConfigBuilder, WithApiKey, WithCity};
pub use types::ScrapeConfig;
