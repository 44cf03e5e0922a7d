//! Networking modules for the WhoKnows REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` owns request composition and endpoint helpers, `transport` is the
//! seam to the browser's `fetch`, `types` defines the wire schema and `error`
//! the failure taxonomy.

pub mod api;
pub mod error;
#[cfg(test)]
pub(crate) mod fake;
pub mod transport;
pub mod types;

pub use api::ApiClient;
pub use error::ApiError;
pub use transport::{FetchTransport, Method, Transport};
