//! Page fetching with a fail-soft policy
//!
//! One dead link must not abort a batch. [`fetch_page`] never returns an
//! error: failures are logged at WARN with the URL and the reason and come
//! back as [`FetchOutcome::Failed`], whose body is empty.

mod errors;
mod http;

pub use errors::FetchError;
pub use http::HttpPageFetcher;

use async_trait::async_trait;
use tracing::warn;

/// Anything that can turn a URL into a page body
///
/// Implemented by [`HttpPageFetcher`] for real runs; tests plug in their own
/// sources to control latency and failures.
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Fetch the full body of `url` as text
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

/// Result of a fail-soft fetch
#[derive(Debug)]
pub enum FetchOutcome {
    /// Page body as text
    Fetched(String),
    /// The fetch failed; already logged
    Failed(FetchError),
}

impl FetchOutcome {
    /// Page body, or `""` when the fetch failed
    #[must_use]
    pub fn body(&self) -> &str {
        match self {
            Self::Fetched(body) => body,
            Self::Failed(_) => "",
        }
    }

    #[must_use]
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

/// Fetch `url`, logging and absorbing any failure
pub async fn fetch_page<S>(source: &S, url: &str) -> FetchOutcome
where
    S: PageSource + ?Sized,
{
    match source.fetch(url).await {
        Ok(body) => FetchOutcome::Fetched(body),
        Err(e) => {
            warn!("Failed to fetch URL {url}: {e}");
            FetchOutcome::Failed(e)
        }
    }
}
