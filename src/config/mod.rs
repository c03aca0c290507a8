//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (timeouts, limits, etc.)
//! - The accepted status code set
//! - CLI option types and parsing

mod constants;
mod status_codes;
mod types;

// Re-export all constants
pub use constants::*;
pub use status_codes::StatusCodes;
pub use types::{Config, LogFormat, LogLevel};
