use super::*;
use crate::config::ApiConfig;
use crate::net::fake::FakeTransport;
use crate::storage::{ConsentStore, MemoryStore, TokenStore};
use futures::executor::block_on;

fn api() -> (ApiClient<FakeTransport>, FakeTransport) {
    let tokens = TokenStore::new(MemoryStore::shared(), ConsentStore::new(MemoryStore::shared()));
    let transport = FakeTransport::new();
    (
        ApiClient::new(ApiConfig::new("http://api.test/api"), tokens, transport.clone()),
        transport,
    )
}

fn result(title: &str) -> SearchResult {
    SearchResult {
        title: title.to_owned(),
        url: format!("https://example.com/{title}"),
        content: None,
    }
}

// =============================================================
// SearchState transitions
// =============================================================

#[test]
fn search_state_default_has_no_results() {
    let state = SearchState::default();
    assert!(state.results.is_none());
    assert!(!state.loading);
}

#[test]
fn finish_replaces_results() {
    let mut state = SearchState { results: Some(vec![result("old")]), ..SearchState::default() };
    state.begin();
    state.finish(Some(SearchResponse { data: vec![result("new")] }));
    assert!(!state.loading);
    assert_eq!(state.results, Some(vec![result("new")]));
}

#[test]
fn finish_without_response_keeps_previous_results() {
    let mut state = SearchState { results: Some(vec![result("old")]), ..SearchState::default() };
    state.begin();
    state.finish(None);
    assert!(!state.loading);
    assert_eq!(state.results, Some(vec![result("old")]));
}

#[test]
fn clear_drops_results() {
    let mut state = SearchState { results: Some(vec![result("old")]), loading: true, ..SearchState::default() };
    state.clear();
    assert_eq!(state, SearchState { input: String::new(), results: None, loading: false });
}

// =============================================================
// Query handling
// =============================================================

#[test]
fn normalize_query_trims_and_rejects_blank() {
    assert_eq!(normalize_query("  rust "), Some("rust"));
    assert_eq!(normalize_query(""), None);
    assert_eq!(normalize_query(" \t\n"), None);
}

#[test]
fn search_href_encodes_query() {
    assert_eq!(search_href(Some("c# basics")), "/?q=c%23%20basics");
    assert_eq!(search_href(None), "/");
}

#[test]
fn blank_search_issues_no_request() {
    let (api, transport) = api();
    assert_eq!(block_on(run_search(&api, "   ", None)).unwrap(), None);
    assert_eq!(transport.request_count(), 0);
}

#[test]
fn search_sends_trimmed_query() {
    let (api, transport) = api();
    transport.respond(200, "OK", r#"{"data":[]}"#);
    let resp = block_on(run_search(&api, "  rust  ", None)).unwrap();
    assert_eq!(resp, Some(SearchResponse { data: vec![] }));
    assert_eq!(transport.last_request().unwrap().url, "http://api.test/api/search?q=rust");
}

#[test]
fn search_error_is_returned_to_caller() {
    let (api, transport) = api();
    transport.respond(400, "Bad Request", "Search query (q) is required");
    let err = block_on(run_search(&api, "rust", None)).unwrap_err();
    assert_eq!(err.to_string(), "Bad Request");
}
