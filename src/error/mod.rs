//! Error handling
//!
//! Defines error types and handling for the pre-validators.

pub mod handlers;
pub mod types;

pub use types::*;
