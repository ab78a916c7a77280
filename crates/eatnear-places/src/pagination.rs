//! Nearby-search page tokens.
//!
//! Nearby search returns at most 20 results per page. When more exist, the
//! response body carries a `next_page_token`; the follow-up request sends only
//! that token (plus the key) and none of the original search parameters.
//! The provider stops issuing tokens after the third page, but callers still
//! cap the sequence at [`MAX_PAGES`] in case a token keeps reappearing.

use eatnear_core::SearchResult;

/// Upper bound on pages followed in one search sequence.
pub const MAX_PAGES: usize = 10;

/// One page of nearby-search results.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NearbyPage {
    pub results: Vec<SearchResult>,
    /// Continuation handle for the following page, `None` on the last page.
    pub next_page_token: Option<String>,
}

impl NearbyPage {
    #[must_use]
    pub fn has_more(&self) -> bool {
        self.next_page_token.is_some()
    }
}

/// Normalizes a raw token: blank tokens mean "no further page".
#[must_use]
pub fn next_page_token(raw: Option<String>) -> Option<String> {
    raw.map(|t| t.trim().to_owned()).filter(|t| !t.is_empty())
}
