//! Application initialization and resource setup.
//!
//! This module provides functions to initialize the shared resources:
//! - HTTP client (timeouts, redirect cap, TLS policy)
//! - DNS resolver
//! - Admission semaphore
//! - Logger

mod client;
mod logger;
mod resolver;

use std::sync::Arc;

use tokio::sync::Semaphore;

// Re-export public API
pub use client::init_client;
pub use logger::init_logger_with;
pub use resolver::init_resolver;

/// Initializes the admission semaphore that caps in-flight evaluations.
///
/// # Arguments
///
/// * `count` - Maximum number of concurrent evaluations allowed
pub fn init_semaphore(count: usize) -> Arc<Semaphore> {
    Arc::new(Semaphore::new(count))
}
