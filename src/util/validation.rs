//! Client-side form validation.
//!
//! Validation is advisory and re-derived on every keystroke. A form whose
//! fields do not validate keeps its submit button disabled, so invalid input
//! never reaches the server.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use crate::net::types::{ChangePasswordRequest, LoginRequest, RegisterRequest};

pub const USERNAME_MIN_LEN: usize = 3;
pub const USERNAME_MAX_LEN: usize = 100;
pub const PASSWORD_MIN_LEN: usize = 6;

pub const USERNAME_LENGTH_MESSAGE: &str = "Username must be between 3 and 100 characters";
pub const EMAIL_MESSAGE: &str = "Invalid email address";
pub const PASSWORD_LENGTH_MESSAGE: &str = "Password must be at least 6 characters";
pub const PASSWORD_MISMATCH_MESSAGE: &str = "Passwords do not match";
pub const INCOMPLETE_MESSAGE: &str = "Please fill out all fields";

#[must_use]
pub fn is_valid_username(username: &str) -> bool {
    (USERNAME_MIN_LEN..=USERNAME_MAX_LEN).contains(&username.chars().count())
}

#[must_use]
pub fn is_valid_password(password: &str) -> bool {
    password.chars().count() >= PASSWORD_MIN_LEN
}

/// Shape check only: one `@`, non-empty local part, dotted domain without
/// empty labels. The server remains the authority.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    if email.len() < 3 || email.len() > 254 {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') || !domain.contains('.') {
        return false;
    }
    let local_ok = local
        .chars()
        .all(|c| c.is_alphanumeric() || matches!(c, '.' | '-' | '+' | '_'));
    let domain_ok = domain
        .split('.')
        .all(|label| !label.is_empty() && label.chars().all(|c| c.is_alphanumeric() || c == '-'));
    local_ok && domain_ok
}

/// CSS modifier for an input: neutral while empty, then valid / invalid.
#[must_use]
pub fn field_class(value: &str, valid: bool) -> &'static str {
    if value.is_empty() {
        "form-input"
    } else if valid {
        "form-input form-input--valid"
    } else {
        "form-input form-input--invalid"
    }
}

/// Login form contents.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

impl LoginForm {
    /// # Errors
    ///
    /// Returns the message to show when a field is empty.
    pub fn validate(&self) -> Result<LoginRequest, &'static str> {
        let username = self.username.trim();
        if username.is_empty() || self.password.is_empty() {
            return Err(INCOMPLETE_MESSAGE);
        }
        Ok(LoginRequest {
            username: username.to_owned(),
            password: self.password.clone(),
        })
    }
}

/// Registration form contents.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub repeat_password: String,
}

impl RegisterForm {
    #[must_use]
    pub fn passwords_match(&self) -> bool {
        self.password == self.repeat_password
    }

    /// # Errors
    ///
    /// Returns the first failing rule's message.
    pub fn validate(&self) -> Result<RegisterRequest, &'static str> {
        if !is_valid_username(&self.username) {
            return Err(USERNAME_LENGTH_MESSAGE);
        }
        if !is_valid_email(&self.email) {
            return Err(EMAIL_MESSAGE);
        }
        if !is_valid_password(&self.password) {
            return Err(PASSWORD_LENGTH_MESSAGE);
        }
        if !self.passwords_match() {
            return Err(PASSWORD_MISMATCH_MESSAGE);
        }
        Ok(RegisterRequest {
            username: self.username.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
            password2: self.repeat_password.clone(),
        })
    }
}

/// Change-password form contents.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChangePasswordForm {
    pub username: String,
    pub old_password: String,
    pub new_password: String,
    pub repeat_new_password: String,
}

impl ChangePasswordForm {
    #[must_use]
    pub fn passwords_match(&self) -> bool {
        self.new_password == self.repeat_new_password
    }

    /// # Errors
    ///
    /// Returns the first failing rule's message.
    pub fn validate(&self) -> Result<ChangePasswordRequest, &'static str> {
        if self.username.is_empty() || self.old_password.is_empty() {
            return Err(INCOMPLETE_MESSAGE);
        }
        if !is_valid_password(&self.new_password) {
            return Err(PASSWORD_LENGTH_MESSAGE);
        }
        if !self.passwords_match() {
            return Err(PASSWORD_MISMATCH_MESSAGE);
        }
        Ok(ChangePasswordRequest {
            username: self.username.clone(),
            old_password: self.old_password.clone(),
            new_password: self.new_password.clone(),
            repeat_new_password: self.repeat_new_password.clone(),
        })
    }
}
