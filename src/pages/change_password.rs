//! Password rotation page.
//!
//! Reached from the data-leak banner or from a login that the server refused
//! until the password is changed. On success any running session is ended and
//! the user logs in again with the new password.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api;
use crate::state::session::Session;
use crate::state::toast::{ToastState, notify_error, notify_success};
use crate::util::in_flight::InFlight;
use crate::util::validation::{
    ChangePasswordForm, PASSWORD_LENGTH_MESSAGE, PASSWORD_MISMATCH_MESSAGE, field_class, is_valid_password,
};

#[component]
pub fn ChangePasswordPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();
    let guard = InFlight::for_owner();

    let form = RwSignal::new(ChangePasswordForm::default());
    let busy = RwSignal::new(false);

    let new_ok = move || form.with(|f| is_valid_password(&f.new_password));
    let can_submit = move || !busy.get() && form.with(|f| f.validate().is_ok());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let request = match form.with_untracked(ChangePasswordForm::validate) {
            Ok(request) => request,
            Err(message) => {
                notify_error(toasts, message);
                return;
            }
        };
        busy.set(true);

        let session = session.clone();
        let navigate = navigate.clone();
        let guard = guard.clone();
        leptos::task::spawn_local(async move {
            if let Err(err) = api::change_password(session.api(), &request).await {
                if guard.is_alive() {
                    busy.set(false);
                }
                notify_error(toasts, format!("Password change failed: {err}"));
                return;
            }
            notify_success(toasts, "Password changed, please log in again");

            if let Some(cleanup) = session.log_out_if_logged_in() {
                leptos::task::spawn_local(async move {
                    if let Err(err) = cleanup.await {
                        notify_error(toasts, format!("Logout failed: {err}"));
                    }
                });
            }
            if guard.is_alive() {
                busy.set(false);
                navigate("/login", NavigateOptions::default());
            }
        });
    };

    view! {
        <div class="auth-page">
            <form class="auth-card" on:submit=on_submit>
                <h1>"Change password"</h1>

                <label for="change-username">"Username"</label>
                <input
                    id="change-username"
                    class="form-input"
                    type="text"
                    autocomplete="username"
                    prop:value=move || form.with(|f| f.username.clone())
                    on:input=move |ev| form.update(|f| f.username = event_target_value(&ev))
                />

                <label for="change-old-password">"Current password"</label>
                <input
                    id="change-old-password"
                    class="form-input"
                    type="password"
                    autocomplete="current-password"
                    prop:value=move || form.with(|f| f.old_password.clone())
                    on:input=move |ev| form.update(|f| f.old_password = event_target_value(&ev))
                />

                <label for="change-new-password">"New password"</label>
                <input
                    id="change-new-password"
                    type="password"
                    autocomplete="new-password"
                    class=move || form.with(|f| field_class(&f.new_password, is_valid_password(&f.new_password)))
                    prop:value=move || form.with(|f| f.new_password.clone())
                    on:input=move |ev| form.update(|f| f.new_password = event_target_value(&ev))
                />
                <Show when=move || form.with(|f| !f.new_password.is_empty()) && !new_ok()>
                    <p class="form-hint">{PASSWORD_LENGTH_MESSAGE}</p>
                </Show>

                <label for="change-repeat-password">"Repeat new password"</label>
                <input
                    id="change-repeat-password"
                    type="password"
                    autocomplete="new-password"
                    class=move || form.with(|f| field_class(&f.repeat_new_password, is_valid_password(&f.repeat_new_password) && f.passwords_match()))
                    prop:value=move || form.with(|f| f.repeat_new_password.clone())
                    on:input=move |ev| form.update(|f| f.repeat_new_password = event_target_value(&ev))
                />
                <Show when=move || form.with(|f| !f.repeat_new_password.is_empty() && !f.passwords_match())>
                    <p class="form-hint">{PASSWORD_MISMATCH_MESSAGE}</p>
                </Show>

                <button id="change-password-button" class="btn btn--primary" type="submit" disabled=move || !can_submit()>
                    {move || if busy.get() { "Saving..." } else { "Change password" }}
                </button>
            </form>
        </div>
    }
}
