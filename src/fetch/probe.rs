//! HTTP probing with attempt-bounded retries.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Url;

use crate::error_handling::ProbeError;
use crate::models::ProbeResult;
use crate::utils::retry_with_attempts;

/// Issues a GET for a URL and reports where it ended up.
///
/// Any received HTTP response, whatever its status, is a `ProbeResult`; only
/// transport-level failures surface as `ProbeError`.
#[async_trait]
pub trait Prober: Send + Sync {
    async fn probe(&self, url: &str) -> Result<ProbeResult, ProbeError>;
}

/// `Prober` backed by a shared `reqwest::Client`.
///
/// Timeout, user-agent, redirect cap and TLS policy live on the client (see
/// `initialization::init_client`); this type adds the retry loop.
#[derive(Clone)]
pub struct HttpProber {
    client: Arc<reqwest::Client>,
    attempts: usize,
    retry_delay_ms: u64,
}

impl HttpProber {
    /// # Arguments
    ///
    /// * `client` - Configured HTTP client
    /// * `attempts` - Total attempts per URL, initial attempt included
    /// * `retry_delay_ms` - Delay before the first retry (doubles afterwards)
    pub fn new(client: Arc<reqwest::Client>, attempts: usize, retry_delay_ms: u64) -> Self {
        Self {
            client,
            attempts,
            retry_delay_ms,
        }
    }

    async fn send_once(&self, url: Url) -> Result<ProbeResult, reqwest::Error> {
        let response = self.client.get(url).send().await?;
        let final_url = response.url();
        Ok(ProbeResult {
            status_code: response.status().as_u16(),
            final_url: final_url.to_string(),
            final_hostname: hostname(final_url),
        })
    }
}

#[async_trait]
impl Prober for HttpProber {
    async fn probe(&self, url: &str) -> Result<ProbeResult, ProbeError> {
        let parsed = Url::parse(url).map_err(|source| ProbeError::InvalidUrl {
            url: url.to_string(),
            source,
        })?;

        let (result, attempts) = retry_with_attempts(
            self.attempts,
            self.retry_delay_ms,
            || self.send_once(parsed.clone()),
            |e: &reqwest::Error| {
                log::debug!("Transport failure for {url}, may retry: {e}");
                true
            },
        )
        .await;

        match result {
            Ok(probe) => {
                log::debug!(
                    "{url} -> {} ({}) after {attempts} attempt(s)",
                    probe.final_url,
                    probe.status_code
                );
                Ok(probe)
            }
            Err(source) => Err(ProbeError::Transport {
                url: url.to_string(),
                attempts,
                source,
            }),
        }
    }
}

/// Hostname of a URL without IPv6 brackets; empty when the URL has no host.
pub(crate) fn hostname(url: &Url) -> String {
    url.host_str()
        .map(|h| h.trim_start_matches('[').trim_end_matches(']').to_string())
        .unwrap_or_default()
}
