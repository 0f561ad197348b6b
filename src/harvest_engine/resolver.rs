//! Detail resolution: fetch a result's page, then reduce it to a snippet

use futures::future::join_all;

use crate::page_extractor::extract_details;
use crate::page_fetcher::{PageSource, fetch_page};

/// Resolve the detail snippet for one link
///
/// Has no failure mode of its own: a failed fetch yields an empty body and
/// the extractor turns that into the placeholder.
pub async fn resolve_detail<P>(pages: &P, link: &str, char_limit: usize) -> String
where
    P: PageSource + ?Sized,
{
    let outcome = fetch_page(pages, link).await;
    extract_details(outcome.body(), char_limit)
}

/// Resolve every link of a batch concurrently
///
/// All fetches are issued before any is awaited. The returned vector is in
/// the same order as `links`, whatever order the fetches complete in, so
/// element `i` belongs to link `i`.
pub async fn resolve_details<'a, P, I>(pages: &P, links: I, char_limit: usize) -> Vec<String>
where
    P: PageSource + ?Sized,
    I: IntoIterator<Item = &'a str>,
{
    join_all(
        links
            .into_iter()
            .map(|link| resolve_detail(pages, link, char_limit)),
    )
    .await
}
