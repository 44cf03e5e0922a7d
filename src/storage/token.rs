//! Session token persistence, gated on cookie consent.
//!
//! SYSTEM CONTEXT
//! ==============
//! The token is the only credential this client holds. It lives in a cookie
//! named [`TOKEN_COOKIE`] and is read fresh by the request client on every
//! authenticated call. Until the user accepts cookies, all three operations
//! behave as if no cookie jar existed.

#[cfg(test)]
#[path = "token_test.rs"]
mod token_test;

use super::{ConsentStore, SharedStore};

/// Cookie name holding the session token.
pub const TOKEN_COOKIE: &str = "jwt_authorization";

/// Owner of the persisted session token.
#[derive(Clone)]
pub struct TokenStore {
    cookies: SharedStore,
    consent: ConsentStore,
}

impl TokenStore {
    pub fn new(cookies: SharedStore, consent: ConsentStore) -> Self {
        Self { cookies, consent }
    }

    /// The stored token, or `""` when consent is missing or nothing is stored.
    #[must_use]
    pub fn token(&self) -> String {
        if !self.consent.is_accepted() {
            return String::new();
        }
        self.cookies.get(TOKEN_COOKIE).unwrap_or_default()
    }

    pub fn set_token(&self, token: &str) {
        if !self.consent.is_accepted() {
            log::warn!("cookies not accepted; session token will not be persisted");
            return;
        }
        self.cookies.set(TOKEN_COOKIE, token);
    }

    pub fn remove_token(&self) {
        if !self.consent.is_accepted() {
            return;
        }
        self.cookies.remove(TOKEN_COOKIE);
    }

    /// An empty token counts as no token.
    #[must_use]
    pub fn has_token(&self) -> bool {
        !self.token().is_empty()
    }
}
