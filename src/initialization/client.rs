//! HTTP client initialization.
//!
//! This module builds the `reqwest::Client` shared by every probe.

use std::sync::Arc;
use std::time::Duration;

use reqwest::redirect::Policy;
use reqwest::ClientBuilder;

use crate::config::{Config, MAX_REDIRECT_HOPS, TCP_CONNECT_TIMEOUT_SECS};

/// Initializes the HTTP client used by the prober.
///
/// Creates a `reqwest::Client` configured with:
/// - User-Agent header from the config
/// - Per-request timeout from the config
/// - Redirect following, stopping after `MAX_REDIRECT_HOPS` requests and
///   returning the response reached at that point
/// - TLS certificate validation disabled unless `verify_tls` is set
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub fn init_client(config: &Config) -> Result<Arc<reqwest::Client>, reqwest::Error> {
    let connect_timeout = config
        .timeout()
        .min(Duration::from_secs(TCP_CONNECT_TIMEOUT_SECS));

    let client = ClientBuilder::new()
        .timeout(config.timeout())
        .connect_timeout(connect_timeout)
        .user_agent(config.user_agent.clone())
        .redirect(capped_redirect_policy(MAX_REDIRECT_HOPS))
        .danger_accept_invalid_certs(!config.verify_tls)
        .build()?;
    Ok(Arc::new(client))
}

/// Follows redirects until `max_hops` requests have been made, then hands
/// back the last response as final instead of failing.
pub(crate) fn capped_redirect_policy(max_hops: usize) -> Policy {
    Policy::custom(move |attempt| {
        if attempt.previous().len() >= max_hops {
            attempt.stop()
        } else {
            attempt.follow()
        }
    })
}
