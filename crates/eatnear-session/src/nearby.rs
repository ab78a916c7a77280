//! Nearby-search paging.
//!
//! [`nearby_pages`] turns the provider's page-token protocol into a lazy
//! stream; [`run_nearby_search`] drains it into a [`Store`], holding the
//! loading flag for the duration of the sequence.

use std::pin::pin;
use std::time::Duration;

use eatnear_core::NearbyRequest;
use eatnear_places::{NearbyPage, PlacesError, PlacesProvider, MAX_PAGES};
use futures::stream::{self, Stream, StreamExt};

use crate::store::Store;

/// How a paging sequence ended.
#[derive(Debug)]
pub enum PagingEnd {
    /// The last page carried no continuation token.
    Exhausted,
    /// A page request failed; pages already appended are kept.
    Failed(PlacesError),
    /// [`MAX_PAGES`] pages were fetched and the provider still offered more.
    PageLimit,
}

#[derive(Debug)]
pub struct NearbySummary {
    /// Successful pages appended to the store.
    pub pages: usize,
    /// Results appended across those pages.
    pub appended: usize,
    pub end: PagingEnd,
}

enum Cursor {
    First,
    Next(String),
    Done,
}

/// Lazy, finite sequence of nearby-search pages.
///
/// The first page is requested on the first poll. Each later page is only
/// requested when polled, after `page_delay`, using the previous page's
/// token. The stream ends after a page without a token, after the first
/// error (which is yielded), or after [`MAX_PAGES`] pages.
pub fn nearby_pages<'a, P>(
    provider: &'a P,
    request: &'a NearbyRequest,
    page_delay: Duration,
) -> impl Stream<Item = Result<NearbyPage, PlacesError>> + 'a
where
    P: PlacesProvider,
{
    stream::unfold((Cursor::First, 0usize), move |(cursor, fetched)| async move {
        let token = match cursor {
            Cursor::Done => return None,
            Cursor::First => None,
            Cursor::Next(_) if fetched >= MAX_PAGES => return None,
            Cursor::Next(token) => {
                if !page_delay.is_zero() {
                    tokio::time::sleep(page_delay).await;
                }
                Some(token)
            }
        };

        match provider.nearby_page(request, token.as_deref()).await {
            Ok(page) => {
                let next = page
                    .next_page_token
                    .clone()
                    .map_or(Cursor::Done, Cursor::Next);
                Some((Ok(page), (next, fetched + 1)))
            }
            Err(e) => Some((Err(e), (Cursor::Done, fetched + 1))),
        }
    })
}

/// Runs one full nearby-search sequence into `store`.
///
/// Sets the loading flag, appends every successful page in arrival order,
/// stops at the first failed page without retrying, and clears the loading
/// flag once the sequence ends for any reason.
pub async fn run_nearby_search<P>(
    store: &mut Store,
    provider: &P,
    request: &NearbyRequest,
    page_delay: Duration,
) -> NearbySummary
where
    P: PlacesProvider,
{
    store.set_loading(true);

    let mut pages = pin!(nearby_pages(provider, request, page_delay));
    let mut summary = NearbySummary {
        pages: 0,
        appended: 0,
        end: PagingEnd::Exhausted,
    };
    let mut more_offered = false;

    while let Some(page) = pages.next().await {
        match page {
            Ok(page) => {
                summary.pages += 1;
                summary.appended += page.results.len();
                more_offered = page.has_more();
                tracing::debug!(
                    page = summary.pages,
                    count = page.results.len(),
                    has_more = more_offered,
                    "nearby page received"
                );
                store.append_search_results(page.results);
            }
            Err(e) => {
                tracing::warn!(
                    page = summary.pages + 1,
                    error = %e,
                    "nearby page failed, ending search with partial results"
                );
                summary.end = PagingEnd::Failed(e);
                more_offered = false;
                break;
            }
        }
    }

    if more_offered {
        tracing::warn!(max_pages = MAX_PAGES, "nearby search stopped at page limit");
        summary.end = PagingEnd::PageLimit;
    }

    store.set_loading(false);
    tracing::info!(
        pages = summary.pages,
        results = summary.appended,
        total = store.state().search_results().len(),
        "nearby search finished"
    );
    summary
}
