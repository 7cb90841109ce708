//! Credential pre-validator
//!
//! Syntactic sanity checks on a username/password pair, run before any
//! request reaches the backend. Passing is necessary but not sufficient:
//! nothing here checks e-mail syntax, password strength, or whether the
//! account exists.

use log::debug;

use super::credentials::CredentialPair;
use crate::config::LoginRules;
use crate::error::{Field, LoginError};
use crate::utils::validation::{char_len, has_min_chars};

/// Returns `true` if the pair is well-formed enough to submit.
///
/// Uses the default thresholds: at least 10 characters of username and 3 of
/// password, neither empty. Never panics, whatever the input length.
pub fn validate_login(username: &str, password: &str) -> bool {
    check_login(username, password, &LoginRules::default()).is_ok()
}

/// Applies the login rules in order and reports the first one that fails.
pub fn check_login(username: &str, password: &str, rules: &LoginRules) -> Result<(), LoginError> {
    let result = first_failure(username, password, rules);
    if let Err(e) = &result {
        debug!("Login pre-check rejected: {}", e);
    }
    result
}

fn first_failure(username: &str, password: &str, rules: &LoginRules) -> Result<(), LoginError> {
    if username.is_empty() {
        return Err(LoginError::MissingField(Field::Username));
    }
    if password.is_empty() {
        return Err(LoginError::MissingField(Field::Password));
    }

    if !has_min_chars(username, rules.min_username_length) {
        return Err(LoginError::UsernameTooShort {
            min: rules.min_username_length,
            actual: char_len(username),
        });
    }

    if !has_min_chars(password, rules.min_password_length) {
        return Err(LoginError::PasswordTooShort {
            min: rules.min_password_length,
            actual: char_len(password),
        });
    }

    Ok(())
}

impl LoginRules {
    /// Checks a [`CredentialPair`] against these rules
    pub fn validate(&self, pair: &CredentialPair) -> Result<(), LoginError> {
        check_login(&pair.username, &pair.password, self)
    }
}

/// [`validate_login`] over a [`CredentialPair`]
pub fn validate_credentials(pair: &CredentialPair) -> bool {
    validate_login(&pair.username, &pair.password)
}
