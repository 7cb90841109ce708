//! Credential pre-validation
//!
//! Client-side checks on login credentials and account forms, performed
//! before any call to the backend.

pub mod credentials;
pub mod forms;
pub mod results;
pub mod validator;

pub use credentials::{CredentialPair, Role};
pub use forms::{LoginForm, PasswordChangeForm, ProfileUpdateForm, RegistrationForm};
pub use results::LoginCheck;
pub use validator::{check_login, validate_credentials, validate_login};
