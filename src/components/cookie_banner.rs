//! Cookie consent prompt.

use leptos::prelude::*;

/// Bottom banner asking whether cookies may be stored. `on_choice` receives
/// `true` for Accept and `false` for Decline.
#[component]
pub fn CookieBanner(on_choice: Callback<bool>) -> impl IntoView {
    view! {
        <div class="cookie-banner" role="dialog" aria-live="polite">
            <p class="cookie-banner__text">
                "We use a cookie to keep you logged in. Without it you can still search, but logging in will not persist."
            </p>
            <div class="cookie-banner__actions">
                <button class="btn btn--primary" on:click=move |_| on_choice.run(true)>
                    "Accept"
                </button>
                <button class="btn" on:click=move |_| on_choice.run(false)>
                    "Decline"
                </button>
            </div>
        </div>
    }
}
