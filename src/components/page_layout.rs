//! Common page frame.

use leptos::prelude::*;

/// Centers page content below the nav bar, with an optional heading.
#[component]
pub fn PageLayout(#[prop(optional, into)] title: Option<String>, children: Children) -> impl IntoView {
    view! {
        <main class="page">
            {title.map(|title| view! { <h1 class="page__title">{title}</h1> })}
            <div class="page__content">{children()}</div>
        </main>
    }
}
