//! Indeterminate progress indicator.

use leptos::prelude::*;

/// Spinning ring `size` pixels wide.
#[component]
pub fn LoadingSpinner(#[prop(default = 100)] size: u32) -> impl IntoView {
    let style = format!("width: {size}px; height: {size}px;");
    view! {
        <div class="spinner" style=style role="status" aria-label="Loading"></div>
    }
}
