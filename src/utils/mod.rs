//! Utility functions shared by the pipeline stages.
//!
//! This module provides:
//! - Attempt-bounded retry logic
//! - Domain list parsing

mod input;
mod retry;

pub use input::parse_domains;
pub use retry::retry_with_attempts;
