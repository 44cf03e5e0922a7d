//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `session` is the process-wide authentication flag, `toast` the
//! notification queue, `search` the search page's view model, and
//! `register` the register-then-login flow. Each is provided or owned
//! explicitly; nothing here is a global.

pub mod register;
pub mod search;
pub mod session;
pub mod toast;
