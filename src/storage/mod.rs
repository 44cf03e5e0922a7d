//! Durable client-side key-value storage.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser offers two durable stores this client uses: `localStorage`
//! (consent flag) and `document.cookie` (session token). Both are exposed
//! through [`KeyValueStore`] so the consent and token stores can be built on
//! an in-memory fake in tests.
//!
//! Every operation is synchronous and atomic at the call granularity, so no
//! locking discipline is needed beyond what `MemoryStore` does internally.

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

pub mod browser;
pub mod consent;
pub mod token;

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

pub use browser::{CookieJar, LocalStorage};
pub use consent::{Consent, ConsentStore};
pub use token::TokenStore;

/// Read / write / delete capability over one storage kind.
pub trait KeyValueStore: Send + Sync {
    /// Value stored under `key`, or `None` if absent or storage is unavailable.
    fn get(&self, key: &str) -> Option<String>;
    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str);
    /// Delete `key`. Removing a missing key is not an error.
    fn remove(&self, key: &str);
}

/// Shared handle injected into the stores that need persistence.
pub type SharedStore = Arc<dyn KeyValueStore>;

/// Process-local store backed by a `HashMap`.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Convenience for building a [`SharedStore`] in one call.
    #[must_use]
    pub fn shared() -> SharedStore {
        Arc::new(Self::new())
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        let entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.insert(key.to_owned(), value.to_owned());
    }

    fn remove(&self, key: &str) {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.remove(key);
    }
}
