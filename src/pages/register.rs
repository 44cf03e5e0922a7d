//! Account registration page.
//!
//! Fields are validated on every keystroke and the submit button stays
//! disabled until the whole form passes. A successful registration logs the
//! new account in straight away.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::register::{RegisterOutcome, register_and_log_in};
use crate::state::session::Session;
use crate::state::toast::{ToastState, notify_error, notify_success};
use crate::util::in_flight::InFlight;
use crate::util::validation::{
    EMAIL_MESSAGE, PASSWORD_LENGTH_MESSAGE, PASSWORD_MISMATCH_MESSAGE, RegisterForm,
    USERNAME_LENGTH_MESSAGE, field_class, is_valid_email, is_valid_password, is_valid_username,
};

fn repeat_valid(form: &RegisterForm) -> bool {
    is_valid_password(&form.repeat_password) && form.passwords_match()
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();
    let guard = InFlight::for_owner();

    let form = RwSignal::new(RegisterForm::default());
    let busy = RwSignal::new(false);

    let username_ok = move || form.with(|f| is_valid_username(&f.username));
    let email_ok = move || form.with(|f| is_valid_email(&f.email));
    let password_ok = move || form.with(|f| is_valid_password(&f.password));
    let can_submit = move || !busy.get() && form.with(|f| f.validate().is_ok());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let request = match form.with_untracked(RegisterForm::validate) {
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
            let outcome = register_and_log_in(&session, request).await;
            if !guard.is_alive() {
                return;
            }
            busy.set(false);
            let outcome = match outcome {
                Ok(outcome) => outcome,
                Err(err) => {
                    notify_error(toasts, format!("Registration failed: {err}"));
                    return;
                }
            };
            notify_success(toasts, "User registered successfully.");
            match outcome {
                RegisterOutcome::LoggedIn => {
                    notify_success(toasts, "You were logged in");
                    navigate("/", NavigateOptions::default());
                }
                RegisterOutcome::PasswordChangeRequired => {
                    notify_error(toasts, "You must change your password before logging in");
                    navigate("/change-password", NavigateOptions::default());
                }
                RegisterOutcome::LoginFailed(err) => {
                    notify_error(toasts, format!("Login failed: {err}"));
                    navigate("/login", NavigateOptions::default());
                }
            }
        });
    };

    view! {
        <div class="auth-page">
            <form class="auth-card" on:submit=on_submit>
                <h1>"Register"</h1>

                <label for="register-username">"Username"</label>
                <input
                    id="register-username"
                    type="text"
                    autocomplete="username"
                    class=move || form.with(|f| field_class(&f.username, is_valid_username(&f.username)))
                    prop:value=move || form.with(|f| f.username.clone())
                    on:input=move |ev| form.update(|f| f.username = event_target_value(&ev))
                />
                <Show when=move || form.with(|f| !f.username.is_empty()) && !username_ok()>
                    <p class="form-hint">{USERNAME_LENGTH_MESSAGE}</p>
                </Show>

                <label for="register-email">"Email"</label>
                <input
                    id="register-email"
                    type="email"
                    autocomplete="email"
                    class=move || form.with(|f| field_class(&f.email, is_valid_email(&f.email)))
                    prop:value=move || form.with(|f| f.email.clone())
                    on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                />
                <Show when=move || form.with(|f| !f.email.is_empty()) && !email_ok()>
                    <p class="form-hint">{EMAIL_MESSAGE}</p>
                </Show>

                <label for="register-password">"Password"</label>
                <input
                    id="register-password"
                    type="password"
                    autocomplete="new-password"
                    class=move || form.with(|f| field_class(&f.password, is_valid_password(&f.password)))
                    prop:value=move || form.with(|f| f.password.clone())
                    on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                />
                <Show when=move || form.with(|f| !f.password.is_empty()) && !password_ok()>
                    <p class="form-hint">{PASSWORD_LENGTH_MESSAGE}</p>
                </Show>

                <label for="register-password2">"Repeat password"</label>
                <input
                    id="register-password2"
                    type="password"
                    autocomplete="new-password"
                    class=move || form.with(|f| field_class(&f.repeat_password, repeat_valid(f)))
                    prop:value=move || form.with(|f| f.repeat_password.clone())
                    on:input=move |ev| form.update(|f| f.repeat_password = event_target_value(&ev))
                />
                <Show when=move || form.with(|f| !f.repeat_password.is_empty() && !f.passwords_match())>
                    <p class="form-hint">{PASSWORD_MISMATCH_MESSAGE}</p>
                </Show>

                <button id="register-button" class="btn btn--primary" type="submit" disabled=move || !can_submit()>
                    {move || if busy.get() { "Registering..." } else { "Register" }}
                </button>
            </form>
        </div>
    }
}
