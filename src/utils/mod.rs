//! Utility functions
//!
//! Logging setup and shared input checks.

pub mod logging;
pub mod validation;
