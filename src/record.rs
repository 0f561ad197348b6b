//! The place record produced for every organic search result

use chrono::Local;
use serde::{Deserialize, Serialize};

use crate::utils::{PLACEHOLDER, TIMESTAMP_FORMAT};
use crate::web_search::OrganicResult;

/// Spreadsheet column headers, in output order
pub const COLUMNS: [&str; 7] = [
    "City",
    "Place Type",
    "Name",
    "Description",
    "Details",
    "Link",
    "Fetched On",
];

/// One harvested place
///
/// `details` starts unresolved (`None`) and is set exactly once by
/// [`PlaceRecord::resolve_details`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceRecord {
    #[serde(rename = "City")]
    pub city: String,
    #[serde(rename = "Place Type")]
    pub place_type: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "Details")]
    details: Option<String>,
    #[serde(rename = "Link")]
    pub link: String,
    #[serde(rename = "Fetched On")]
    pub fetched_on: String,
}

impl PlaceRecord {
    /// Create an unresolved record from a search result, stamped with the current local time
    #[must_use]
    pub fn from_result(city: &str, place_type: &str, result: &OrganicResult) -> Self {
        Self {
            city: city.to_string(),
            place_type: place_type.to_string(),
            name: result
                .title
                .clone()
                .unwrap_or_else(|| PLACEHOLDER.to_string()),
            description: result
                .snippet
                .clone()
                .unwrap_or_else(|| PLACEHOLDER.to_string()),
            details: None,
            link: result.link.clone().unwrap_or_default(),
            fetched_on: Local::now().format(TIMESTAMP_FORMAT).to_string(),
        }
    }

    /// Resolved details, or `None` while still unresolved
    #[must_use]
    pub fn details(&self) -> Option<&str> {
        self.details.as_deref()
    }

    #[must_use]
    pub fn is_resolved(&self) -> bool {
        self.details.is_some()
    }

    /// Set the details once
    ///
    /// Returns `false` and leaves the record untouched if it was already resolved.
    pub fn resolve_details(&mut self, details: String) -> bool {
        if self.details.is_some() {
            return false;
        }
        self.details = Some(details);
        true
    }

    /// Cell values in [`COLUMNS`] order
    ///
    /// An unresolved record exports its details as an empty cell.
    #[must_use]
    pub fn row(&self) -> [&str; 7] {
        [
            &self.city,
            &self.place_type,
            &self.name,
            &self.description,
            self.details.as_deref().unwrap_or_default(),
            &self.link,
            &self.fetched_on,
        ]
    }
}
