//! Registration followed by an automatic login.
//!
//! The two calls are reported separately: once `/register` succeeds the
//! account exists, so a failing follow-up login must not read as a failed
//! registration.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use crate::net::api;
use crate::net::error::ApiError;
use crate::net::transport::Transport;
use crate::net::types::{LoginRequest, RegisterRequest};
use crate::state::session::{LoginOutcome, SessionController};

/// Result of the login step after a successful registration.
#[derive(Debug)]
pub enum RegisterOutcome {
    /// Account created and session started.
    LoggedIn,
    /// Account created; the server wants a new password before logging in.
    PasswordChangeRequired,
    /// Account created but logging in with the new credentials failed.
    LoginFailed(ApiError),
}

/// Register `request`, then log in with the same credentials.
///
/// # Errors
///
/// Only the registration call itself; login failures are reported as
/// [`RegisterOutcome::LoginFailed`].
pub async fn register_and_log_in<T: Transport>(
    session: &SessionController<T>,
    request: RegisterRequest,
) -> Result<RegisterOutcome, ApiError> {
    api::register(session.api(), &request).await?;
    log::debug!("registered {}", request.username);

    let login = LoginRequest {
        username: request.username,
        password: request.password,
    };
    let outcome = match api::login(session.api(), &login).await {
        Ok(response) => match session.complete_login(&response) {
            LoginOutcome::LoggedIn => RegisterOutcome::LoggedIn,
            LoginOutcome::PasswordChangeRequired => RegisterOutcome::PasswordChangeRequired,
        },
        Err(err) => RegisterOutcome::LoginFailed(err),
    };
    Ok(outcome)
}
