//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` wires the browser stores into one [`Session`] and provides it, with
//! the toast queue, to every page through Leptos context.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::{
    cookie_banner::CookieBanner, data_leak_banner::DataLeakBanner, nav::Nav, toast_host::ToastHost,
};
use crate::config::ApiConfig;
use crate::net::{ApiClient, FetchTransport};
use crate::pages::{
    change_password::ChangePasswordPage, login::LoginPage, register::RegisterPage, search::SearchPage,
    weather::WeatherPage,
};
use crate::state::session::{Session, SessionController};
use crate::state::toast::ToastState;
use crate::storage::{Consent, ConsentStore, CookieJar, LocalStorage, TokenStore};

/// Build the session from the browser's local storage and cookies.
fn browser_session(consent: ConsentStore) -> Session {
    let tokens = TokenStore::new(Arc::new(CookieJar), consent);
    let api = ApiClient::new(ApiConfig::from_env(), tokens, FetchTransport);
    SessionController::initialize(api)
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let consent_store = ConsentStore::new(Arc::new(LocalStorage));
    let consent = RwSignal::new(consent_store.consent());
    let show_leak_banner = RwSignal::new(true);

    provide_context(browser_session(consent_store.clone()));
    provide_context(RwSignal::new(ToastState::default()));

    let on_consent = Callback::new(move |accepted: bool| {
        consent_store.set_consent(accepted);
        consent.set(consent_store.consent());
    });

    view! {
        <Title text="¿Who Knows?"/>

        <Router>
            <Show when=move || show_leak_banner.get()>
                <DataLeakBanner on_close=Callback::new(move |()| show_leak_banner.set(false))/>
            </Show>
            <Nav/>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=SearchPage/>
                <Route path=StaticSegment("weather") view=WeatherPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("change-password") view=ChangePasswordPage/>
            </Routes>
            <Show when=move || consent.get() == Consent::Unset>
                <CookieBanner on_choice=on_consent/>
            </Show>
            <ToastHost/>
        </Router>
    }
}
