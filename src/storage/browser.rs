//! Browser-backed [`KeyValueStore`] implementations.
//!
//! Both stores look up `window` on every call instead of caching a handle, so
//! they stay `Send + Sync` and can live inside Leptos context. Outside the
//! `csr` build they read as empty and ignore writes.
//!
//! TRADE-OFFS
//! ==========
//! Storage failures (private mode, disabled cookies) are swallowed: reads
//! return `None` and writes become no-ops. The rest of the client treats that
//! exactly like "nothing stored".

#[cfg(test)]
#[path = "browser_test.rs"]
mod browser_test;

use super::KeyValueStore;

/// `window.localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
            storage.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) {
        #[cfg(feature = "csr")]
        {
            let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
                return;
            };
            if storage.set_item(key, value).is_err() {
                log::warn!("localStorage write failed for {key}");
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
        }
    }

    fn remove(&self, key: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
                if storage.remove_item(key).is_err() {
                    log::warn!("localStorage remove failed for {key}");
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
        }
    }
}

/// `document.cookie`, one cookie per key, scoped to the whole site.
#[derive(Clone, Copy, Debug, Default)]
pub struct CookieJar;

#[cfg(feature = "csr")]
fn html_document() -> Option<web_sys::HtmlDocument> {
    use wasm_bindgen::JsCast;

    web_sys::window()?.document()?.dyn_into::<web_sys::HtmlDocument>().ok()
}

impl KeyValueStore for CookieJar {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            let header = html_document()?.cookie().ok()?;
            find_cookie(&header, key)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) {
        #[cfg(feature = "csr")]
        {
            let Some(doc) = html_document() else {
                return;
            };
            if doc.set_cookie(&set_cookie_value(key, value)).is_err() {
                log::warn!("cookie write failed for {key}");
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
        }
    }

    fn remove(&self, key: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(doc) = html_document() {
                if doc.set_cookie(&expire_cookie_value(key)).is_err() {
                    log::warn!("cookie remove failed for {key}");
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
        }
    }
}

/// Pull `name` out of a `document.cookie` header string, percent-decoded.
#[cfg(any(test, feature = "csr"))]
fn find_cookie(header: &str, name: &str) -> Option<String> {
    header.split(';').find_map(|pair| {
        let (key, value) = pair.trim().split_once('=')?;
        if key != name {
            return None;
        }
        Some(urlencoding::decode(value).map_or_else(|_| value.to_owned(), |v| v.into_owned()))
    })
}

#[cfg(any(test, feature = "csr"))]
fn set_cookie_value(name: &str, value: &str) -> String {
    format!("{name}={}; path=/; SameSite=Strict", urlencoding::encode(value))
}

#[cfg(any(test, feature = "csr"))]
fn expire_cookie_value(name: &str) -> String {
    format!("{name}=; path=/; expires=Thu, 01 Jan 1970 00:00:00 GMT")
}
