//! Client session state: is this browser currently authenticated?
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` builds one [`SessionController`] at startup and provides it through
//! Leptos context; the nav bar, login, register and change-password pages
//! read and mutate it. There is no ambient global.
//!
//! DESIGN
//! ======
//! `logged_in` is derived, never authoritative. It is computed from token
//! *presence* at startup and updated optimistically by log-in / log-out.
//! The server is never asked whether the token is still valid, so a revoked
//! token keeps the client "logged in" until the user logs out.
//!
//! Log-out is two-phase. Phase one flips local state synchronously inside
//! [`SessionController::log_out`]. Phase two, the returned future, notifies the
//! server and then removes the token whatever the server said. A failed
//! notification is returned for reporting but never restores phase one.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::future::Future;

use leptos::prelude::*;

use crate::net::api::{self, ApiClient};
use crate::net::error::ApiError;
use crate::net::transport::{FetchTransport, Transport};
use crate::net::types::LoginResponse;
use crate::storage::TokenStore;

/// What the caller should do after a successful `/login` response.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Token stored, session started.
    LoggedIn,
    /// The account must rotate its password first; no session was started.
    PasswordChangeRequired,
}

/// Owner of the `logged_in` flag and of the transitions that change it.
#[derive(Clone)]
pub struct SessionController<T: Transport = FetchTransport> {
    api: ApiClient<T>,
    tokens: TokenStore,
    logged_in: ArcRwSignal<bool>,
}

/// The controller type used by the browser app.
pub type Session = SessionController<FetchTransport>;

impl<T: Transport> SessionController<T> {
    /// Derive the initial state from whatever token the store holds now.
    pub fn initialize(api: ApiClient<T>) -> Self {
        let tokens = api.tokens().clone();
        let logged_in = tokens.has_token();
        log::debug!("session initialized, logged_in={logged_in}");
        Self {
            api,
            tokens,
            logged_in: ArcRwSignal::new(logged_in),
        }
    }

    /// Reactive read; re-runs the surrounding effect or view on change.
    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.logged_in.get()
    }

    #[must_use]
    pub fn is_logged_in_untracked(&self) -> bool {
        self.logged_in.get_untracked()
    }

    /// Client for calls made on behalf of this session.
    #[must_use]
    pub fn api(&self) -> &ApiClient<T> {
        &self.api
    }

    /// Persist `token` and mark the session logged in. The token must already
    /// come from a successful login response; nothing is sent to the server.
    pub fn log_in(&self, token: &str) {
        self.tokens.set_token(token);
        self.logged_in.set(true);
        log::debug!("session logged in");
    }

    /// Start a session from a `/login` response unless the server demands a
    /// password change first.
    pub fn complete_login(&self, response: &LoginResponse) -> LoginOutcome {
        if response.require_password_change {
            log::info!("login requires a password change; session not started");
            return LoginOutcome::PasswordChangeRequired;
        }
        self.log_in(&response.token);
        LoginOutcome::LoggedIn
    }

    /// Mark the session logged out now and return the server-side cleanup.
    ///
    /// The returned future calls `GET /logout` with the current token and
    /// then removes the token unconditionally. Its error is the notification
    /// failure, for the caller to report.
    pub fn log_out(&self) -> impl Future<Output = Result<(), ApiError>> + use<T> {
        self.logged_in.set(false);
        log::debug!("session logged out locally");

        let api = self.api.clone();
        let tokens = self.tokens.clone();
        async move {
            let notified = api::logout(&api).await;
            tokens.remove_token();
            if let Err(err) = &notified {
                log::warn!("logout notification failed: {err}");
            }
            notified
        }
    }

    /// [`log_out`](Self::log_out) when a session is active, `None` otherwise.
    ///
    /// Phase one has already happened when this returns, so the caller can
    /// navigate away and leave the returned cleanup running in the background.
    pub fn log_out_if_logged_in(&self) -> Option<impl Future<Output = Result<(), ApiError>> + use<T>> {
        self.is_logged_in_untracked().then(|| self.log_out())
    }
}
