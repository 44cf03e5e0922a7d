//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the chrome shared by every page and read the session
//! and toast state from Leptos context providers set up by `App`.

pub mod cookie_banner;
pub mod data_leak_banner;
pub mod loading_spinner;
pub mod nav;
pub mod page_layout;
pub mod toast_host;
