//! API origin configuration.
//!
//! The base URL is the only externally configurable behavior. It is read at
//! compile time from `WHOKNOWS_API_URL` because the WASM bundle has no process
//! environment at runtime.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Used when `WHOKNOWS_API_URL` is not set at build time.
pub const DEFAULT_API_URL: &str = "http://localhost:3001/api";

/// Selects which API origin every request is sent to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Build a config for `base_url`. A trailing `/` is dropped so that
    /// `base_url + "/path"` never doubles the separator.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    /// Read the base URL baked in at compile time.
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(option_env!("WHOKNOWS_API_URL").unwrap_or(DEFAULT_API_URL))
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_env()
    }
}
