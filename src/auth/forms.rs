//! Account form pre-validation
//!
//! Mirrors the field constraints the Bugify backend enforces on its login,
//! register, password-change and profile-update requests, so obviously bad
//! submissions are caught client-side.

use log::debug;

use super::credentials::Role;
use crate::config::RegistrationRules;
use crate::error::{Field, FormError};
use crate::utils::validation::{char_len, char_len_within, is_valid_email};

/// Login form: e-mail, password and the role the user signs in as
#[derive(Clone, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub role: String,
}

/// Registration form
#[derive(Clone, PartialEq, Eq)]
pub struct RegistrationForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    /// Empty means the default role (`user`)
    pub role: String,
}

/// Password change form
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordChangeForm {
    pub current_password: String,
    pub new_password: String,
    pub confirm_password: String,
}

/// Profile update form. Empty values count as absent.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ProfileUpdateForm {
    pub name: Option<String>,
    pub email: Option<String>,
}

fn check_email(email: &str) -> Result<(), FormError> {
    if is_valid_email(email) {
        Ok(())
    } else {
        Err(FormError::InvalidEmail(email.to_string()))
    }
}

fn check_length(field: Field, value: &str, min: usize, max: usize) -> Result<(), FormError> {
    if char_len_within(value, min, max) {
        Ok(())
    } else {
        Err(FormError::LengthOutOfRange {
            field,
            min,
            max,
            actual: char_len(value),
        })
    }
}

fn log_rejection<T>(form: &str, result: &Result<T, FormError>) {
    if let Err(e) = result {
        debug!("{} form rejected: {}", form, e);
    }
}

impl LoginForm {
    pub fn new(
        email: impl Into<String>,
        password: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            role: role.into(),
        }
    }

    /// Validates the form and returns the parsed role
    pub fn validate(&self) -> Result<Role, FormError> {
        let result = self.first_failure();
        log_rejection("Login", &result);
        result
    }

    fn first_failure(&self) -> Result<Role, FormError> {
        if self.email.is_empty() {
            return Err(FormError::MissingField(Field::Email));
        }
        check_email(&self.email)?;
        if self.password.is_empty() {
            return Err(FormError::MissingField(Field::Password));
        }
        if self.role.is_empty() {
            return Err(FormError::MissingField(Field::Role));
        }
        self.role.parse()
    }

    /// Lowercased e-mail, the form the backend matches on
    pub fn normalized_email(&self) -> String {
        self.email.to_lowercase()
    }
}

impl RegistrationForm {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        confirm_password: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
            confirm_password: confirm_password.into(),
            role: role.into(),
        }
    }

    /// Validates the form against `rules` and returns the resolved role
    pub fn validate(&self, rules: &RegistrationRules) -> Result<Role, FormError> {
        let result = self.first_failure(rules);
        log_rejection("Registration", &result);
        result
    }

    fn first_failure(&self, rules: &RegistrationRules) -> Result<Role, FormError> {
        check_length(
            Field::Name,
            &self.name,
            rules.min_name_length,
            rules.max_name_length,
        )?;
        check_email(&self.email)?;
        check_length(
            Field::Password,
            &self.password,
            rules.min_password_length,
            rules.max_password_length,
        )?;
        check_length(
            Field::ConfirmPassword,
            &self.confirm_password,
            rules.min_password_length,
            rules.max_password_length,
        )?;
        if self.confirm_password != self.password {
            return Err(FormError::PasswordMismatch);
        }

        if self.role.is_empty() {
            Ok(Role::default())
        } else {
            self.role.parse()
        }
    }

    /// Lowercased e-mail, the form the backend stores
    pub fn normalized_email(&self) -> String {
        self.email.to_lowercase()
    }
}

impl PasswordChangeForm {
    pub fn new(
        current_password: impl Into<String>,
        new_password: impl Into<String>,
        confirm_password: impl Into<String>,
    ) -> Self {
        Self {
            current_password: current_password.into(),
            new_password: new_password.into(),
            confirm_password: confirm_password.into(),
        }
    }

    /// Validates the form; password bounds come from `rules`
    pub fn validate(&self, rules: &RegistrationRules) -> Result<(), FormError> {
        let result = self.first_failure(rules);
        log_rejection("Password change", &result);
        result
    }

    fn first_failure(&self, rules: &RegistrationRules) -> Result<(), FormError> {
        if self.current_password.is_empty() {
            return Err(FormError::MissingField(Field::CurrentPassword));
        }
        check_length(
            Field::NewPassword,
            &self.new_password,
            rules.min_password_length,
            rules.max_password_length,
        )?;
        if self.confirm_password != self.new_password {
            return Err(FormError::PasswordMismatch);
        }
        if self.new_password == self.current_password {
            return Err(FormError::PasswordUnchanged);
        }
        Ok(())
    }
}

impl ProfileUpdateForm {
    pub fn new(name: Option<&str>, email: Option<&str>) -> Self {
        Self {
            name: name.map(str::to_string),
            email: email.map(str::to_string),
        }
    }

    fn present(value: &Option<String>) -> Option<&str> {
        value.as_deref().filter(|v| !v.is_empty())
    }

    /// Validates whichever fields are present; at least one is required
    pub fn validate(&self, rules: &RegistrationRules) -> Result<(), FormError> {
        let result = self.first_failure(rules);
        log_rejection("Profile update", &result);
        result
    }

    fn first_failure(&self, rules: &RegistrationRules) -> Result<(), FormError> {
        let name = Self::present(&self.name);
        let email = Self::present(&self.email);

        if name.is_none() && email.is_none() {
            return Err(FormError::NothingToUpdate);
        }
        if let Some(name) = name {
            check_length(Field::Name, name, rules.min_name_length, rules.max_name_length)?;
        }
        if let Some(email) = email {
            check_email(email)?;
        }
        Ok(())
    }

    /// Lowercased e-mail if one is being set
    pub fn normalized_email(&self) -> Option<String> {
        Self::present(&self.email).map(str::to_lowercase)
    }
}
