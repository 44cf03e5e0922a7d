//! Cookie-usage consent, persisted in local storage.
//!
//! The flag is stored as `"true"` / `"false"` under [`CONSENT_KEY`] and is
//! independent of the session token itself.

#[cfg(test)]
#[path = "consent_test.rs"]
mod consent_test;

use super::SharedStore;

/// Local-storage key holding the user's cookie choice.
pub const CONSENT_KEY: &str = "user_cookie_accept";

/// The user's answer to the cookie prompt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Consent {
    Accepted,
    Declined,
    /// Never answered; the prompt should be shown.
    Unset,
}

impl Consent {
    /// Interpret a raw stored value. Missing or empty means unset; anything
    /// other than `"true"` counts as declined.
    #[must_use]
    pub fn from_stored(raw: Option<&str>) -> Self {
        match raw {
            None | Some("") => Self::Unset,
            Some("true") => Self::Accepted,
            Some(_) => Self::Declined,
        }
    }
}

/// Durable consent flag.
#[derive(Clone)]
pub struct ConsentStore {
    store: SharedStore,
}

impl ConsentStore {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    /// Persist the choice, replacing any earlier answer.
    pub fn set_consent(&self, accepted: bool) {
        log::debug!("cookie consent set to {accepted}");
        self.store.set(CONSENT_KEY, if accepted { "true" } else { "false" });
    }

    #[must_use]
    pub fn consent(&self) -> Consent {
        Consent::from_stored(self.store.get(CONSENT_KEY).as_deref())
    }

    #[must_use]
    pub fn is_accepted(&self) -> bool {
        self.consent() == Consent::Accepted
    }
}
