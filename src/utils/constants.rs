//! Shared configuration constants for placescrape
//!
//! Default values used by the config builder, the fetch pipeline and the
//! exporter, kept in one place to avoid magic numbers.

/// SerpApi search endpoint
pub const SERPAPI_SEARCH_URL: &str = "https://serpapi.com/search";

/// Search engine requested from SerpApi
pub const SEARCH_ENGINE: &str = "google";

/// Placeholder written wherever a value is unavailable
///
/// Used for missing titles/snippets in search results and for details
/// whose page could not be fetched or was empty.
pub const PLACEHOLDER: &str = "N/A";

/// Default city to search in
pub const DEFAULT_CITY: &str = "Lahore";

/// Default place type query
pub const DEFAULT_PLACE_TYPE: &str = "coffee shops";

/// Default number of organic results requested per place type
pub const DEFAULT_RESULTS_LIMIT: usize = 5;

/// Default pause between place-type queries, in seconds
///
/// Throttles calls against the search API. Applied after a batch has been
/// fully merged and before the next place type is queried.
pub const DEFAULT_QUERY_DELAY_SECS: u64 = 1;

/// Default maximum length of an extracted detail snippet, in characters
pub const DEFAULT_DETAIL_CHAR_LIMIT: usize = 600;

/// Default timeout for a single page fetch, in seconds
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 10;

/// Default timeout for a search API call, in seconds
pub const DEFAULT_SEARCH_TIMEOUT_SECS: u64 = 30;

/// Timestamp format for the "Fetched On" column
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Chrome user agent string sent with page fetches
///
/// Plenty of sites serve an empty shell or a 403 to the default reqwest agent.
pub const CHROME_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/132.0.6834.160 Safari/537.36";

/// Longest string a single xlsx cell accepts
pub const XLSX_MAX_CELL_CHARS: usize = 32_767;
