//! Search page (`/`).
//!
//! DESIGN
//! ======
//! The query lives in the URL (`/?q=...`) so a search can be shared or
//! reloaded. On mount the `q` parameter is read once and, when present,
//! searched; later submissions push a new URL and search directly instead of
//! reacting to URL changes. Only the newest search may write results.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::components::loading_spinner::LoadingSpinner;
use crate::components::page_layout::PageLayout;
use crate::net::types::SearchResult;
use crate::state::search::{SearchState, normalize_query, run_search, search_href};
use crate::state::session::Session;
use crate::state::toast::{ToastState, notify_error};
use crate::util::highlight::{Segment, highlight_segments};
use crate::util::in_flight::InFlight;

#[component]
pub fn SearchPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();
    let query = use_query_map();
    let guard = InFlight::for_owner();

    let state = RwSignal::new(SearchState::default());
    // Query that produced the visible results; drives highlighting.
    let searched = RwSignal::new(String::new());
    let language = query.with_untracked(|params| params.get("language"));

    let start_search = move |input: String| {
        let ticket = guard.begin();
        let Some(trimmed) = normalize_query(&input).map(str::to_owned) else {
            state.update(SearchState::clear);
            searched.set(String::new());
            return;
        };
        state.update(SearchState::begin);

        let session = session.clone();
        let guard = guard.clone();
        let language = language.clone();
        leptos::task::spawn_local(async move {
            let result = run_search(session.api(), &trimmed, language.as_deref()).await;
            if !guard.is_current(ticket) {
                log::debug!("dropping stale search response for {trimmed:?}");
                return;
            }
            match result {
                Ok(response) => {
                    searched.set(trimmed);
                    state.update(|s| s.finish(response));
                }
                Err(err) => {
                    state.update(|s| s.finish(None));
                    notify_error(toasts, format!("Search failed: {err}"));
                }
            }
        });
    };

    let initial = query.with_untracked(|params| params.get("q")).unwrap_or_default();
    if normalize_query(&initial).is_some() {
        state.update(|s| s.input.clone_from(&initial));
        start_search(initial);
    }

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let input = state.with_untracked(|s| s.input.clone());
        navigate(&search_href(normalize_query(&input)), NavigateOptions::default());
        start_search(input);
    };

    view! {
        <PageLayout>
            <form class="search-form" on:submit=on_submit>
                <input
                    id="search"
                    class="search-form__input"
                    type="search"
                    placeholder="Search..."
                    autofocus=true
                    prop:value=move || state.with(|s| s.input.clone())
                    on:input=move |ev| state.update(|s| s.input = event_target_value(&ev))
                />
                <button id="search-button" class="btn btn--primary" type="submit">
                    "Search"
                </button>
            </form>
            <div id="search-results" class="search-results">
                {move || {
                    if state.with(|s| s.loading) {
                        return view! { <LoadingSpinner size=48 /> }.into_any();
                    }
                    match state.with(|s| s.results.clone()) {
                        None => view! { <p class="search-results__empty">"Search for something..."</p> }.into_any(),
                        Some(results) if results.is_empty() => {
                            view! { <p class="search-results__empty">"No results found..."</p> }.into_any()
                        }
                        Some(results) => {
                            let needle = searched.get();
                            results
                                .into_iter()
                                .map(|result| view! { <ResultItem result=result needle=needle.clone() /> })
                                .collect_view()
                                .into_any()
                        }
                    }
                }}
            </div>
        </PageLayout>
    }
}

#[component]
fn ResultItem(result: SearchResult, needle: String) -> impl IntoView {
    let snippet = result.content.as_deref().map(|content| {
        highlight_segments(content, &needle)
            .into_iter()
            .map(|segment| match segment {
                Segment::Plain(text) => text.to_owned().into_any(),
                Segment::Match(text) => view! { <mark>{text.to_owned()}</mark> }.into_any(),
            })
            .collect_view()
    });

    view! {
        <article class="search-result">
            <h2 class="search-result__title">
                <a href=result.url.clone()>{result.title}</a>
            </h2>
            <p class="search-result__url">{result.url}</p>
            {snippet.map(|snippet| view! { <p class="search-result__content">{snippet}</p> })}
        </article>
    }
}
