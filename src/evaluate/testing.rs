//! Test doubles for the evaluator's collaborators.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use crate::config::StatusCodes;
use crate::dns::Resolver;
use crate::error_handling::ProbeError;
use crate::fetch::Prober;
use crate::models::ProbeResult;
use crate::render::RenderVerifier;

use super::DomainEvaluator;

/// Resolves only the listed names, or everything when `resolve_all` is set.
#[derive(Default)]
pub struct FakeResolver {
    pub resolve_all: bool,
    pub resolvable: Vec<String>,
    pub calls: Mutex<Vec<String>>,
}

impl FakeResolver {
    pub fn all() -> Self {
        Self {
            resolve_all: true,
            ..Default::default()
        }
    }

    pub fn only(names: &[&str]) -> Self {
        Self {
            resolvable: names.iter().map(|n| n.to_string()).collect(),
            ..Default::default()
        }
    }
}

#[async_trait]
impl Resolver for FakeResolver {
    async fn resolve(&self, domain: &str) -> bool {
        self.calls.lock().unwrap().push(domain.to_string());
        self.resolve_all || self.resolvable.iter().any(|n| n == domain)
    }
}

/// Answers from a fixed table of URL -> (status, final URL); unknown URLs
/// fail like an unreachable host.
#[derive(Default)]
pub struct FakeProber {
    pub responses: HashMap<String, (u16, String)>,
    pub calls: Mutex<Vec<String>>,
}

impl FakeProber {
    pub fn with(mut self, url: &str, status: u16, final_url: &str) -> Self {
        self.responses
            .insert(url.to_string(), (status, final_url.to_string()));
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Prober for FakeProber {
    async fn probe(&self, url: &str) -> Result<ProbeResult, ProbeError> {
        self.calls.lock().unwrap().push(url.to_string());
        match self.responses.get(url) {
            Some((status, final_url)) => {
                let parsed = reqwest::Url::parse(final_url).unwrap();
                Ok(ProbeResult {
                    status_code: *status,
                    final_url: final_url.clone(),
                    final_hostname: parsed.host_str().unwrap_or_default().to_string(),
                })
            }
            None => Err(ProbeError::InvalidUrl {
                url: url.to_string(),
                source: url::ParseError::EmptyHost,
            }),
        }
    }
}

/// Renders successfully unless the URL is listed in `failing`. Records the
/// timeout each call was given.
#[derive(Default)]
pub struct FakeVerifier {
    pub failing: Vec<String>,
    pub calls: Mutex<Vec<String>>,
    pub timeouts: Mutex<Vec<Duration>>,
    pub count: AtomicUsize,
}

impl FakeVerifier {
    pub fn failing(urls: &[&str]) -> Self {
        Self {
            failing: urls.iter().map(|u| u.to_string()).collect(),
            ..Default::default()
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn timeouts(&self) -> Vec<Duration> {
        self.timeouts.lock().unwrap().clone()
    }
}

#[async_trait]
impl RenderVerifier for FakeVerifier {
    async fn verify(&self, url: &str, timeout: Duration) -> bool {
        self.count.fetch_add(1, Ordering::SeqCst);
        self.timeouts.lock().unwrap().push(timeout);
        self.calls.lock().unwrap().push(url.to_string());
        !self.failing.iter().any(|u| u == url)
    }
}

/// Builds an evaluator accepting `{200}` over the given doubles.
pub fn evaluator(
    resolver: Arc<FakeResolver>,
    prober: Arc<FakeProber>,
    verifier: Arc<FakeVerifier>,
) -> DomainEvaluator {
    DomainEvaluator::new(
        resolver,
        prober,
        verifier,
        StatusCodes::default(),
        Duration::from_secs(1),
    )
}
