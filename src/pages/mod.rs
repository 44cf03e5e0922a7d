//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (form state, requests, toasts,
//! navigation) and delegates validation and formatting to `util`.

pub mod change_password;
pub mod login;
pub mod register;
pub mod search;
pub mod weather;
