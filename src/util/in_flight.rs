//! Guards for responses that resolve after they stop mattering.
//!
//! Requests are never cancelled. A view instead takes a [`Ticket`] before
//! each call and checks it when the response arrives. The ticket is stale
//! once a newer request began or the owning view was unmounted, and a stale
//! response is dropped without touching view state.

#[cfg(test)]
#[path = "in_flight_test.rs"]
mod in_flight_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

/// Identifies one request issued through an [`InFlight`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug, Default)]
struct Inner {
    latest: AtomicU64,
    disposed: AtomicBool,
}

/// Latest-request and liveness tracker for one view.
#[derive(Clone, Debug, Default)]
pub struct InFlight {
    inner: Arc<Inner>,
}

impl InFlight {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Tracker that is disposed together with the current reactive owner.
    #[must_use]
    pub fn for_owner() -> Self {
        let tracker = Self::new();
        let on_unmount = tracker.clone();
        leptos::prelude::on_cleanup(move || on_unmount.dispose());
        tracker
    }

    /// Register a new request; earlier tickets become stale.
    pub fn begin(&self) -> Ticket {
        Ticket(self.inner.latest.fetch_add(1, Ordering::Relaxed) + 1)
    }

    /// True if `ticket` is the newest request and the view is still mounted.
    #[must_use]
    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.is_alive() && self.inner.latest.load(Ordering::Relaxed) == ticket.0
    }

    #[must_use]
    pub fn is_alive(&self) -> bool {
        !self.inner.disposed.load(Ordering::Relaxed)
    }

    /// Mark the owning view as gone. Every ticket is stale afterwards.
    pub fn dispose(&self) {
        self.inner.disposed.store(true, Ordering::Relaxed);
    }
}
