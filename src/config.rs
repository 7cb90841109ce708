//! Configuration management for the Bugify pre-check
//!
//! Thresholds are read from an optional `config.toml` and `BUGIFY_*`
//! environment variables. Every value has a default, so an empty
//! configuration reproduces the built-in rules.

use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;

/// Default minimum username length for the login pre-check
pub const DEFAULT_MIN_USERNAME_LENGTH: usize = 10;

/// Default minimum password length for the login pre-check
pub const DEFAULT_MIN_PASSWORD_LENGTH: usize = 3;

/// Complete pre-check configuration
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct PrecheckConfig {
    pub login: LoginRules,
    pub registration: RegistrationRules,
}

/// Thresholds for the credential pair pre-check
/// Environment: BUGIFY_LOGIN__MIN_USERNAME_LENGTH, BUGIFY_LOGIN__MIN_PASSWORD_LENGTH
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct LoginRules {
    pub min_username_length: usize,
    pub min_password_length: usize,
}

impl Default for LoginRules {
    fn default() -> Self {
        Self {
            min_username_length: DEFAULT_MIN_USERNAME_LENGTH,
            min_password_length: DEFAULT_MIN_PASSWORD_LENGTH,
        }
    }
}

/// Length bounds for the registration form
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct RegistrationRules {
    pub min_name_length: usize,
    pub max_name_length: usize,
    pub min_password_length: usize,
    pub max_password_length: usize,
}

impl Default for RegistrationRules {
    fn default() -> Self {
        Self {
            min_name_length: 2,
            max_name_length: 100,
            min_password_length: 6,
            max_password_length: 100,
        }
    }
}

impl PrecheckConfig {
    /// Load configuration from ./config.toml with environment overrides
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from `path` (extension optional) with environment
    /// overrides. A missing file is not an error.
    pub fn load_from(path: &str) -> Result<Self, config::ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name(path).required(false))
            .add_source(
                Environment::with_prefix("BUGIFY")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: PrecheckConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from a TOML string, without environment overrides
    pub fn from_toml_str(toml: &str) -> Result<Self, config::ConfigError> {
        let settings = Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?;

        let config: PrecheckConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validation for all configuration values
    fn validate(&self) -> Result<(), config::ConfigError> {
        if self.login.min_username_length == 0 || self.login.min_password_length == 0 {
            return Err(config::ConfigError::Message(
                "login minimum lengths must be greater than 0".into(),
            ));
        }

        let reg = &self.registration;

        if reg.max_name_length == 0 || reg.max_password_length == 0 {
            return Err(config::ConfigError::Message(
                "registration maximum lengths must be greater than 0".into(),
            ));
        }

        if reg.min_name_length > reg.max_name_length {
            return Err(config::ConfigError::Message(
                "min_name_length must not exceed max_name_length".into(),
            ));
        }

        if reg.min_password_length > reg.max_password_length {
            return Err(config::ConfigError::Message(
                "min_password_length must not exceed max_password_length".into(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PrecheckConfig::default();
        assert_eq!(config.login.min_username_length, 10);
        assert_eq!(config.login.min_password_length, 3);
        assert_eq!(config.registration.min_name_length, 2);
        assert_eq!(config.registration.max_password_length, 100);
    }

    #[test]
    fn test_empty_toml_yields_defaults() {
        let config = PrecheckConfig::from_toml_str("").unwrap();
        assert_eq!(config, PrecheckConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let config = PrecheckConfig::from_toml_str(
            r#"
            [login]
            min_password_length = 8
            "#,
        )
        .unwrap();
        assert_eq!(config.login.min_username_length, 10);
        assert_eq!(config.login.min_password_length, 8);
        assert_eq!(config.registration, RegistrationRules::default());
    }

    #[test]
    fn test_rejects_inverted_bounds() {
        let err = PrecheckConfig::from_toml_str(
            r#"
            [registration]
            min_password_length = 50
            max_password_length = 10
            "#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("min_password_length"));
    }

    #[test]
    fn test_rejects_zero_maximum() {
        assert!(
            PrecheckConfig::from_toml_str(
                r#"
                [registration]
                min_name_length = 0
                max_name_length = 0
                "#,
            )
            .is_err()
        );
    }

    #[test]
    fn test_rejects_zero_login_minimum() {
        let err = PrecheckConfig::from_toml_str(
            r#"
            [login]
            min_username_length = 0
            "#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("login minimum lengths"));
    }

    // Only test in the crate that touches BUGIFY_* variables.
    #[test]
    fn test_load_from_missing_file_with_env_override() {
        let var = "BUGIFY_LOGIN__MIN_USERNAME_LENGTH";
        unsafe {
            std::env::remove_var(var);
            std::env::remove_var("BUGIFY_LOGIN__MIN_PASSWORD_LENGTH");
        }

        let config = PrecheckConfig::load_from("no/such/dir/bugify").unwrap();
        assert_eq!(config.login, LoginRules::default());

        unsafe { std::env::set_var(var, "4") };
        let result = PrecheckConfig::load_from("no/such/dir/bugify");
        unsafe { std::env::remove_var(var) };

        let config = result.unwrap();
        assert_eq!(config.login.min_username_length, 4);
        assert_eq!(config.login.min_password_length, DEFAULT_MIN_PASSWORD_LENGTH);
    }
}
