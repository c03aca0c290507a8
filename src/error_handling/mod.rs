//! Error handling and processing statistics.
//!
//! This module provides:
//! - Error type definitions for initialization, probing and output
//! - The reasons a domain is classified inactive
//! - Processing statistics tracking

mod stats;
mod types;

// Re-export public API
pub use stats::ProcessingStats;
pub use types::{
    ConfigError, InactiveReason, InitializationError, ProbeError, SinkError, StatusCodeError,
};
