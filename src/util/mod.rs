//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure helpers live here so pages stay thin and the logic is testable
//! without a browser.

pub mod highlight;
pub mod in_flight;
pub mod validation;
pub mod weather;
