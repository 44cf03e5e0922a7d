//! Username + password login page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api;
use crate::state::session::{LoginOutcome, Session};
use crate::state::toast::{ToastState, notify_error, notify_success};
use crate::util::in_flight::InFlight;
use crate::util::validation::LoginForm;

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();
    let guard = InFlight::for_owner();

    let form = RwSignal::new(LoginForm::default());
    let busy = RwSignal::new(false);
    let error = RwSignal::new(None::<&'static str>);
    let can_submit = move || !busy.get() && form.with(|f| f.validate().is_ok());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let request = match form.with_untracked(LoginForm::validate) {
            Ok(request) => request,
            Err(message) => {
                error.set(Some(message));
                return;
            }
        };
        error.set(None);
        busy.set(true);

        let session = session.clone();
        let navigate = navigate.clone();
        let guard = guard.clone();
        leptos::task::spawn_local(async move {
            let outcome = api::login(session.api(), &request)
                .await
                .map(|response| session.complete_login(&response));
            if !guard.is_alive() {
                return;
            }
            busy.set(false);
            match outcome {
                Ok(LoginOutcome::LoggedIn) => {
                    notify_success(toasts, "You were logged in");
                    navigate("/", NavigateOptions::default());
                }
                Ok(LoginOutcome::PasswordChangeRequired) => {
                    notify_error(toasts, "You must change your password before logging in");
                    navigate("/change-password", NavigateOptions::default());
                }
                Err(err) => notify_error(toasts, format!("Login failed: {err}")),
            }
        });
    };

    view! {
        <div class="auth-page">
            <form class="auth-card" on:submit=on_submit>
                <h1>"Log in"</h1>
                <label for="login-username">"Username"</label>
                <input
                    id="login-username"
                    class="form-input"
                    type="text"
                    autocomplete="username"
                    prop:value=move || form.with(|f| f.username.clone())
                    on:input=move |ev| form.update(|f| f.username = event_target_value(&ev))
                />
                <label for="login-password">"Password"</label>
                <input
                    id="login-password"
                    class="form-input"
                    type="password"
                    autocomplete="current-password"
                    prop:value=move || form.with(|f| f.password.clone())
                    on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                />
                <Show when=move || error.get().is_some()>
                    <p class="form-error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <button id="login-button" class="btn btn--primary" type="submit" disabled=move || !can_submit()>
                    {move || if busy.get() { "Logging in..." } else { "Log in" }}
                </button>
            </form>
        </div>
    }
}
