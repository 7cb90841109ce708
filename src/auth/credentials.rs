//! Credential value types
//!
//! The username/password pair submitted with a login attempt, and the
//! account roles the backend accepts.

use std::fmt;
use std::str::FromStr;

use crate::error::FormError;

/// Username and password submitted together during a login attempt.
///
/// Transient: built for one validation call and dropped afterwards.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct CredentialPair {
    pub username: String,
    pub password: String,
}

impl CredentialPair {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Build a pair from possibly absent values; absent is treated as empty
    pub fn from_optional(username: Option<&str>, password: Option<&str>) -> Self {
        Self::new(username.unwrap_or_default(), password.unwrap_or_default())
    }
}

// Keeps the password out of log output.
impl fmt::Debug for CredentialPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialPair")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Account role
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Role {
    Admin,
    Developer,
    #[default]
    User,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Developer => "developer",
            Role::User => "user",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = FormError;

    /// Case-sensitive, matching the backend's accepted literals
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Role::Admin),
            "developer" => Ok(Role::Developer),
            "user" => Ok(Role::User),
            other => Err(FormError::InvalidRole(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_optional_treats_absent_as_empty() {
        let pair = CredentialPair::from_optional(None, Some("123"));
        assert_eq!(pair, CredentialPair::new("", "123"));
    }

    #[test]
    fn test_debug_redacts_password() {
        let pair = CredentialPair::new("dev123@gmail.com", "hunter2");
        let out = format!("{:?}", pair);
        assert!(out.contains("dev123@gmail.com"));
        assert!(!out.contains("hunter2"));
    }

    #[test]
    fn test_role_parsing() {
        assert_eq!("admin".parse::<Role>(), Ok(Role::Admin));
        assert_eq!("developer".parse::<Role>(), Ok(Role::Developer));
        assert_eq!("user".parse::<Role>(), Ok(Role::User));
        assert_eq!(
            "Admin".parse::<Role>(),
            Err(FormError::InvalidRole("Admin".to_string()))
        );
        assert_eq!(Role::default(), Role::User);
    }
}
