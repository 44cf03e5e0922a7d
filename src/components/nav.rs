//! Top navigation bar.
//!
//! The right-most link doubles as the log-out control: while a session is
//! active it reads "Log out" and ends the session instead of opening the
//! login page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::state::session::Session;
use crate::state::toast::{ToastState, notify_error};

#[component]
pub fn Nav() -> impl IntoView {
    let session = expect_context::<Session>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    let auth_label = {
        let session = session.clone();
        move || if session.is_logged_in() { "Log out" } else { "Log in" }
    };

    let on_auth_click = move |ev: leptos::ev::MouseEvent| {
        if !session.is_logged_in_untracked() {
            return;
        }
        ev.prevent_default();
        let cleanup = session.log_out();
        leptos::task::spawn_local(async move {
            if let Err(err) = cleanup.await {
                notify_error(toasts, format!("Logout failed: {err}"));
            }
        });
        navigate("/login", NavigateOptions::default());
    };

    view! {
        <nav class="nav">
            <div class="nav__group">
                <A href="/" attr:class="nav__link">"Search"</A>
                <A href="/weather" attr:class="nav__link">"Weather"</A>
            </div>
            <div class="nav__group">
                <A href="/register" attr:class="nav__link">"Register"</A>
                <a id="login-logout-nav" class="nav__link" href="/login" on:click=on_auth_click>
                    {auth_label}
                </a>
            </div>
        </nav>
    }
}
