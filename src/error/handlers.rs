//! Error handlers
//!
//! Maps rejections to log output and short user-facing messages.

use crate::error::types::{FormError, LoginError, PrecheckError};
use log::debug;

/// Log a rejection
pub fn handle_error(err: &PrecheckError) {
    debug!("Pre-check failed: {}", err);
}

/// Short message suitable for showing next to a form.
///
/// Never echoes password material back.
pub fn user_message(err: &PrecheckError) -> String {
    match err {
        PrecheckError::Login(LoginError::MissingField(field)) => {
            format!("Please enter your {}", field)
        }
        PrecheckError::Login(LoginError::UsernameTooShort { min, .. }) => {
            format!("Username must be at least {} characters", min)
        }
        PrecheckError::Login(LoginError::PasswordTooShort { min, .. }) => {
            format!("Password must be at least {} characters", min)
        }
        PrecheckError::Form(FormError::InvalidEmail(_)) => {
            "Please enter a valid email address".to_string()
        }
        PrecheckError::Form(FormError::InvalidRole(_)) => {
            "Please choose admin, developer or user".to_string()
        }
        PrecheckError::Form(FormError::LengthOutOfRange { field, min, max, .. }) => {
            format!("The {} must be between {} and {} characters", field, min, max)
        }
        PrecheckError::Form(e) => e.to_string(),
        PrecheckError::Config(_) => "Validation is unavailable".to_string(),
    }
}
