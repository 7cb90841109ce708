//! Pre-check result types
//!
//! Outcome records for callers that need more than a boolean.

use super::credentials::CredentialPair;
use crate::config::LoginRules;
use crate::error::LoginError;

/// Result of checking one credential pair. Does not carry the password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginCheck {
    pub accepted: bool,
    pub username: String,
    pub reason: Option<LoginError>,
}

impl LoginCheck {
    pub fn evaluate(pair: &CredentialPair, rules: &LoginRules) -> Self {
        let reason = rules.validate(pair).err();
        Self {
            accepted: reason.is_none(),
            username: pair.username.clone(),
            reason,
        }
    }
}
