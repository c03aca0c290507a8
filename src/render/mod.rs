//! Render verification.
//!
//! A domain only counts as active once a real browser engine managed to load
//! the page. The engine is reached through the `RenderVerifier` seam so the
//! evaluator can be exercised without launching a browser.

mod chrome;

use std::time::Duration;

use async_trait::async_trait;

pub use chrome::ChromeRenderVerifier;

/// Loads a URL in an isolated browser and reports whether a page rendered.
///
/// Implementations must return within `timeout` (plus teardown), must fold
/// every navigation error, crash or timeout into `false`, and must not share
/// browser state between calls.
#[async_trait]
pub trait RenderVerifier: Send + Sync {
    async fn verify(&self, url: &str, timeout: Duration) -> bool;
}
