// Shared test doubles for the pipeline seams.
//
// Each integration test file pulls these in with `mod helpers;`.

#![allow(dead_code)] // Not every test file uses every helper

use std::collections::HashMap;
use std::io::Write;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use tempfile::NamedTempFile;

use domain_checker::{
    CheckContext, Classification, DomainEvaluator, ProbeError, ProbeResult, Prober,
    RenderVerifier, Resolver, ResultSink, SinkError, StatusCodes,
};

/// Resolves exactly the listed names.
#[derive(Default)]
pub struct StaticResolver {
    pub resolvable: Vec<String>,
}

impl StaticResolver {
    pub fn new(names: &[&str]) -> Self {
        Self {
            resolvable: names.iter().map(|n| n.to_string()).collect(),
        }
    }
}

#[async_trait]
impl Resolver for StaticResolver {
    async fn resolve(&self, domain: &str) -> bool {
        self.resolvable.iter().any(|n| n == domain)
    }
}

/// Answers from a table of URL -> (status, final URL); anything else fails
/// like an unreachable host. Counts every call.
#[derive(Default)]
pub struct TableProber {
    pub responses: HashMap<String, (u16, String)>,
    pub calls: AtomicUsize,
}

impl TableProber {
    pub fn with(mut self, url: &str, status: u16, final_url: &str) -> Self {
        self.responses
            .insert(url.to_string(), (status, final_url.to_string()));
        self
    }
}

#[async_trait]
impl Prober for TableProber {
    async fn probe(&self, url: &str) -> Result<ProbeResult, ProbeError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.responses.get(url) {
            Some((status, final_url)) => {
                let host = url::Url::parse(final_url)
                    .ok()
                    .and_then(|u| u.host_str().map(str::to_string))
                    .unwrap_or_default();
                Ok(ProbeResult {
                    status_code: *status,
                    final_url: final_url.clone(),
                    final_hostname: host,
                })
            }
            None => Err(ProbeError::InvalidUrl {
                url: url.to_string(),
                source: url::ParseError::EmptyHost,
            }),
        }
    }
}

/// Always renders; counts calls.
#[derive(Default)]
pub struct AlwaysRenders {
    pub calls: AtomicUsize,
}

#[async_trait]
impl RenderVerifier for AlwaysRenders {
    async fn verify(&self, _url: &str, _timeout: Duration) -> bool {
        self.calls.fetch_add(1, Ordering::SeqCst);
        true
    }
}

/// Keeps every record in memory.
#[derive(Default)]
pub struct MemorySink {
    pub records: Mutex<Vec<(String, Classification)>>,
}

impl MemorySink {
    pub fn records(&self) -> Vec<(String, Classification)> {
        self.records.lock().unwrap().clone()
    }
}

#[async_trait]
impl ResultSink for MemorySink {
    async fn record(&self, domain: &str, classification: &Classification) -> Result<(), SinkError> {
        self.records
            .lock()
            .unwrap()
            .push((domain.to_string(), classification.clone()));
        Ok(())
    }
}

/// Builds a context accepting `{200}` with a short render budget.
pub fn context(
    resolver: Arc<dyn Resolver>,
    prober: Arc<dyn Prober>,
    verifier: Arc<dyn RenderVerifier>,
    sink: Arc<dyn ResultSink>,
) -> Arc<CheckContext> {
    let evaluator = DomainEvaluator::new(
        resolver,
        prober,
        verifier,
        StatusCodes::default(),
        Duration::from_secs(2),
    );
    Arc::new(CheckContext::new(evaluator, sink))
}

/// Writes `lines` to a temporary input file, one per line.
pub fn write_input(lines: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    for line in lines {
        writeln!(file, "{}", line).expect("Failed to write line");
    }
    file.flush().expect("Failed to flush file");
    file
}
