use super::*;
use crate::config::ApiConfig;
use crate::net::fake::FakeTransport;
use crate::storage::{ConsentStore, MemoryStore};
use futures::executor::block_on;

struct Fixture {
    transport: FakeTransport,
    tokens: TokenStore,
    consent: ConsentStore,
}

impl Fixture {
    fn new(consent_accepted: bool) -> Self {
        let consent = ConsentStore::new(MemoryStore::shared());
        consent.set_consent(consent_accepted);
        let tokens = TokenStore::new(MemoryStore::shared(), consent.clone());
        Self { transport: FakeTransport::new(), tokens, consent }
    }

    fn session(&self) -> SessionController<FakeTransport> {
        let api = ApiClient::new(
            ApiConfig::new("http://api.test/api"),
            self.tokens.clone(),
            self.transport.clone(),
        );
        SessionController::initialize(api)
    }
}

fn login_response(token: &str, require_password_change: bool) -> LoginResponse {
    LoginResponse { token: token.to_owned(), require_password_change }
}

// =============================================================
// initialize
// =============================================================

#[test]
fn initialize_without_token_is_logged_out() {
    let fx = Fixture::new(true);
    assert!(!fx.session().is_logged_in_untracked());
}

#[test]
fn initialize_with_token_is_logged_in() {
    let fx = Fixture::new(true);
    fx.tokens.set_token("abc123");
    assert!(fx.session().is_logged_in_untracked());
}

#[test]
fn initialize_with_empty_token_is_logged_out() {
    let fx = Fixture::new(true);
    fx.tokens.set_token("");
    assert!(!fx.session().is_logged_in_untracked());
}

#[test]
fn initialize_without_consent_is_logged_out() {
    let fx = Fixture::new(true);
    fx.tokens.set_token("abc123");
    fx.consent.set_consent(false);
    assert!(!fx.session().is_logged_in_untracked());
}

#[test]
fn initialize_does_not_contact_server() {
    let fx = Fixture::new(true);
    fx.tokens.set_token("abc123");
    let _ = fx.session();
    assert_eq!(fx.transport.request_count(), 0);
}

// =============================================================
// log_in / complete_login
// =============================================================

#[test]
fn log_in_stores_token_and_sets_state() {
    let fx = Fixture::new(true);
    let session = fx.session();
    session.log_in("t1");
    assert!(session.is_logged_in_untracked());
    assert_eq!(fx.tokens.token(), "t1");
    assert_eq!(fx.transport.request_count(), 0);
}

#[test]
fn log_in_without_consent_still_marks_session() {
    let fx = Fixture::new(false);
    let session = fx.session();
    session.log_in("t1");
    assert!(session.is_logged_in_untracked());
    assert_eq!(fx.tokens.token(), "");
}

#[test]
fn complete_login_starts_session() {
    let fx = Fixture::new(true);
    let session = fx.session();
    assert_eq!(session.complete_login(&login_response("t1", false)), LoginOutcome::LoggedIn);
    assert!(session.is_logged_in_untracked());
    assert_eq!(fx.tokens.token(), "t1");
}

#[test]
fn complete_login_with_password_change_does_not_log_in() {
    let fx = Fixture::new(true);
    let session = fx.session();
    assert_eq!(
        session.complete_login(&login_response("t1", true)),
        LoginOutcome::PasswordChangeRequired
    );
    assert!(!session.is_logged_in_untracked());
    assert_eq!(fx.tokens.token(), "");
}

#[test]
fn clones_share_state() {
    let fx = Fixture::new(true);
    let session = fx.session();
    let view_copy = session.clone();
    session.log_in("t1");
    assert!(view_copy.is_logged_in_untracked());
}

// =============================================================
// log_out
// =============================================================

#[test]
fn log_out_flips_state_before_notification_runs() {
    let fx = Fixture::new(true);
    fx.tokens.set_token("t1");
    let session = fx.session();
    fx.transport.respond(200, "OK", "Logged out successfully");

    let cleanup = session.log_out();
    assert!(!session.is_logged_in_untracked());
    assert_eq!(fx.transport.request_count(), 0);
    assert_eq!(fx.tokens.token(), "t1");

    block_on(cleanup).unwrap();
    assert_eq!(fx.tokens.token(), "");
}

#[test]
fn log_out_notifies_with_current_token() {
    let fx = Fixture::new(true);
    fx.tokens.set_token("t1");
    let session = fx.session();
    fx.transport.respond(200, "OK", "");
    block_on(session.log_out()).unwrap();

    let req = fx.transport.last_request().unwrap();
    assert_eq!(req.url, "http://api.test/api/logout");
    assert_eq!(req.header("Authorization"), Some("Bearer t1"));
}

#[test]
fn failed_notification_still_removes_token() {
    let fx = Fixture::new(true);
    fx.tokens.set_token("t1");
    let session = fx.session();
    fx.transport.respond(500, "Internal Server Error", "Failed to revoke token");

    let err = block_on(session.log_out()).unwrap_err();
    assert_eq!(err.to_string(), "Internal Server Error");
    assert_eq!(fx.tokens.token(), "");
    assert!(!session.is_logged_in_untracked());
}

#[test]
fn network_failure_still_removes_token() {
    let fx = Fixture::new(true);
    fx.tokens.set_token("t1");
    let session = fx.session();
    fx.transport.fail("offline");

    assert!(block_on(session.log_out()).is_err());
    assert_eq!(fx.tokens.token(), "");
    assert!(!session.is_logged_in_untracked());
}

#[test]
fn log_out_without_token_sends_empty_bearer() {
    let fx = Fixture::new(true);
    let session = fx.session();
    fx.transport.respond(401, "Unauthorized", "");
    let _ = block_on(session.log_out());
    assert_eq!(
        fx.transport.last_request().unwrap().header("Authorization"),
        Some("Bearer ")
    );
}

#[test]
fn log_out_if_logged_in_returns_cleanup_without_sending_it() {
    let fx = Fixture::new(true);
    fx.tokens.set_token("t1");
    let session = fx.session();
    fx.transport.respond(200, "OK", "");

    let cleanup = session.log_out_if_logged_in().expect("session was active");
    assert!(!session.is_logged_in_untracked());
    assert_eq!(fx.transport.request_count(), 0);

    block_on(cleanup).unwrap();
    assert_eq!(fx.transport.request_count(), 1);
    assert_eq!(fx.tokens.token(), "");
}

#[test]
fn log_out_if_logged_in_is_none_without_session() {
    let fx = Fixture::new(true);
    let session = fx.session();
    assert!(session.log_out_if_logged_in().is_none());
    assert_eq!(fx.transport.request_count(), 0);
}
