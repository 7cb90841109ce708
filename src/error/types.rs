//! Error types
//!
//! Defines the rejection reasons reported by the pre-validators.

use std::fmt;

/// Form field a rejection refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Username,
    Password,
    ConfirmPassword,
    CurrentPassword,
    NewPassword,
    Name,
    Email,
    Role,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Username => "username",
            Field::Password => "password",
            Field::ConfirmPassword => "confirm_password",
            Field::CurrentPassword => "current_password",
            Field::NewPassword => "new_password",
            Field::Name => "name",
            Field::Email => "email",
            Field::Role => "role",
        };
        f.write_str(name)
    }
}

/// Credential pair rejections
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginError {
    MissingField(Field),
    UsernameTooShort { min: usize, actual: usize },
    PasswordTooShort { min: usize, actual: usize },
}

impl fmt::Display for LoginError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoginError::MissingField(field) => write!(f, "Missing {}", field),
            LoginError::UsernameTooShort { min, actual } => write!(
                f,
                "Username too short: {} characters, need at least {}",
                actual, min
            ),
            LoginError::PasswordTooShort { min, actual } => write!(
                f,
                "Password too short: {} characters, need at least {}",
                actual, min
            ),
        }
    }
}

impl std::error::Error for LoginError {}

/// Login and registration form rejections
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    MissingField(Field),
    InvalidEmail(String),
    LengthOutOfRange {
        field: Field,
        min: usize,
        max: usize,
        actual: usize,
    },
    PasswordMismatch,
    PasswordUnchanged,
    InvalidRole(String),
    NothingToUpdate,
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormError::MissingField(field) => write!(f, "Missing {}", field),
            FormError::InvalidEmail(e) => write!(f, "Invalid email address: {}", e),
            FormError::LengthOutOfRange {
                field,
                min,
                max,
                actual,
            } => write!(
                f,
                "{} must be {}-{} characters, got {}",
                field, min, max, actual
            ),
            FormError::PasswordMismatch => write!(f, "Passwords do not match"),
            FormError::PasswordUnchanged => {
                write!(f, "New password must be different from current password")
            }
            FormError::InvalidRole(r) => write!(f, "Invalid role: {}", r),
            FormError::NothingToUpdate => write!(f, "No fields to update"),
        }
    }
}

impl std::error::Error for FormError {}

/// General error covering every failure the crate can report
#[derive(Debug)]
pub enum PrecheckError {
    Login(LoginError),
    Form(FormError),
    Config(config::ConfigError),
}

impl fmt::Display for PrecheckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrecheckError::Login(e) => write!(f, "Login rejected: {}", e),
            PrecheckError::Form(e) => write!(f, "Form rejected: {}", e),
            PrecheckError::Config(e) => write!(f, "Configuration error: {}", e),
        }
    }
}

impl std::error::Error for PrecheckError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PrecheckError::Login(e) => Some(e),
            PrecheckError::Form(e) => Some(e),
            PrecheckError::Config(e) => Some(e),
        }
    }
}

impl From<LoginError> for PrecheckError {
    fn from(error: LoginError) -> Self {
        PrecheckError::Login(error)
    }
}

impl From<FormError> for PrecheckError {
    fn from(error: FormError) -> Self {
        PrecheckError::Form(error)
    }
}

impl From<config::ConfigError> for PrecheckError {
    fn from(error: config::ConfigError) -> Self {
        PrecheckError::Config(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_error_display() {
        assert_eq!(
            LoginError::MissingField(Field::Username).to_string(),
            "Missing username"
        );
        assert_eq!(
            LoginError::UsernameTooShort { min: 10, actual: 2 }.to_string(),
            "Username too short: 2 characters, need at least 10"
        );
    }

    #[test]
    fn test_conversions() {
        let err: PrecheckError = FormError::PasswordMismatch.into();
        assert!(matches!(err, PrecheckError::Form(FormError::PasswordMismatch)));
        assert_eq!(err.to_string(), "Form rejected: Passwords do not match");

        let err: PrecheckError = config::ConfigError::Message("bad".into()).into();
        assert!(matches!(err, PrecheckError::Config(_)));
    }
}
