pub mod auth;
pub mod config;
pub mod error;
pub mod smoke;
pub mod utils;

pub use auth::{CredentialPair, check_login, validate_login};
pub use config::{LoginRules, PrecheckConfig, RegistrationRules};
pub use error::PrecheckError;
