//! DNS resolver initialization.
//!
//! This module provides functions to initialize the DNS resolver with proper
//! timeout configuration.

use std::sync::Arc;
use std::time::Duration;

use hickory_resolver::config::{ResolverConfig, ResolverOpts};
use hickory_resolver::system_conf::read_system_conf;
use hickory_resolver::TokioAsyncResolver;

use crate::config::{DNS_ATTEMPTS, DNS_TIMEOUT_SECS};

/// Initializes the DNS resolver for hostname lookups.
///
/// Uses the system resolver configuration (`/etc/resolv.conf`) so lookups
/// behave like the host's own resolver. Falls back to the library default
/// (Google DNS) when the system configuration cannot be read.
///
/// Timeouts are tightened so a dead nameserver cannot stall an evaluation.
pub fn init_resolver() -> Arc<TokioAsyncResolver> {
    let (config, mut opts) = match read_system_conf() {
        Ok(system) => system,
        Err(e) => {
            log::warn!("Failed to read system DNS configuration, using defaults: {e}");
            (ResolverConfig::default(), ResolverOpts::default())
        }
    };

    opts.timeout = Duration::from_secs(DNS_TIMEOUT_SECS);
    opts.attempts = DNS_ATTEMPTS;
    // Domains are checked as given; never append search domains
    opts.ndots = 0;

    Arc::new(TokioAsyncResolver::tokio(config, opts))
}
