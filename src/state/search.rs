//! Search view state.
//!
//! The page keeps its input, the last result set and a loading flag here so
//! the transitions (clear on blank input, replace on new results) are plain
//! functions that can be tested without a DOM.

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

use crate::net::api::{self, ApiClient};
use crate::net::error::ApiError;
use crate::net::transport::Transport;
use crate::net::types::{SearchResponse, SearchResult};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchState {
    /// Text currently in the search box.
    pub input: String,
    /// `None` until a search completes; `Some(vec![])` means "no results".
    pub results: Option<Vec<SearchResult>>,
    pub loading: bool,
}

impl SearchState {
    /// Drop results, e.g. after a blank submission.
    pub fn clear(&mut self) {
        self.results = None;
        self.loading = false;
    }

    pub fn begin(&mut self) {
        self.loading = true;
    }

    /// Record the outcome of the latest search. On error the previous results
    /// stay on screen.
    pub fn finish(&mut self, response: Option<SearchResponse>) {
        self.loading = false;
        if let Some(response) = response {
            self.results = Some(response.data);
        }
    }
}

/// The trimmed query, or `None` when there is nothing to search for.
#[must_use]
pub fn normalize_query(input: &str) -> Option<&str> {
    let trimmed = input.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

/// In-app location reflecting `query`, so the search can be shared or reloaded.
#[must_use]
pub fn search_href(query: Option<&str>) -> String {
    match query {
        Some(q) => format!("/?q={}", urlencoding::encode(q)),
        None => "/".to_owned(),
    }
}

/// Run a search for `input`. Blank input resolves to `Ok(None)` without
/// touching the network.
///
/// # Errors
///
/// Propagates the request client's error for the caller to report.
pub async fn run_search<T: Transport>(
    api: &ApiClient<T>,
    input: &str,
    language: Option<&str>,
) -> Result<Option<SearchResponse>, ApiError> {
    let Some(query) = normalize_query(input) else {
        return Ok(None);
    };
    api::search(api, query, language).await.map(Some)
}
