//! Security notice shown above every page until dismissed.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn DataLeakBanner(on_close: Callback<()>) -> impl IntoView {
    view! {
        <div class="leak-banner" role="alert">
            <span class="leak-banner__text">
                "On 31 October 2024 we discovered a data leak affecting user passwords. Please "
                <A href="/change-password" attr:class="leak-banner__link">"change your password"</A>
                "."
            </span>
            <button class="leak-banner__close" title="Dismiss" on:click=move |_| on_close.run(())>
                "✕"
            </button>
        </div>
    }
}
