//! Error types for page fetching

use std::time::Duration;

/// Why a single page fetch produced no body
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// Search result carried no link
    #[error("URL is empty")]
    EmptyUrl,

    /// Link could not be parsed as an absolute URL
    #[error("Invalid URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// Link uses a scheme other than http or https
    #[error("Unsupported URL scheme '{0}'")]
    UnsupportedScheme(String),

    /// Request or body read exceeded the fetch timeout
    #[error("Request timed out after {timeout:?}")]
    Timeout { timeout: Duration },

    /// Server answered with a non-success status
    #[error("HTTP status {status}")]
    Status { status: u16 },

    /// Connection, TLS, redirect or body decoding failure
    #[error("Request failed: {0}")]
    Request(#[source] reqwest::Error),
}
