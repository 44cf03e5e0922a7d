use super::*;

#[test]
fn latest_ticket_is_current() {
    let guard = InFlight::new();
    let ticket = guard.begin();
    assert!(guard.is_current(ticket));
}

#[test]
fn newer_request_makes_older_ticket_stale() {
    let guard = InFlight::new();
    let first = guard.begin();
    let second = guard.begin();
    assert!(!guard.is_current(first));
    assert!(guard.is_current(second));
}

#[test]
fn dispose_makes_every_ticket_stale() {
    let guard = InFlight::new();
    let ticket = guard.begin();
    guard.dispose();
    assert!(!guard.is_alive());
    assert!(!guard.is_current(ticket));
}

#[test]
fn clones_share_state() {
    let guard = InFlight::new();
    let ticket = guard.begin();
    let other = guard.clone();
    other.begin();
    assert!(!guard.is_current(ticket));
    other.dispose();
    assert!(!guard.is_alive());
}
