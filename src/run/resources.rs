//! Shared state handed to every per-domain task.

use std::io::{self, Write};
use std::sync::atomic::AtomicUsize;
use std::sync::Arc;

use tokio::sync::OwnedSemaphorePermit;

use crate::error_handling::ProcessingStats;
use crate::evaluate::DomainEvaluator;
use crate::sink::ResultSink;

/// Writes one console line for an active domain.
pub type ConsoleWriter = Box<dyn Fn(&str) -> io::Result<()> + Send + Sync>;

/// Everything a task needs to classify and record one domain.
///
/// Read-only apart from the atomic counters in `stats`, so a single instance
/// is shared by all tasks through an `Arc`.
pub struct CheckContext {
    /// Runs the resolve, probe and render checks
    pub evaluator: DomainEvaluator,
    /// Receives exactly one record per domain
    pub sink: Arc<dyn ResultSink>,
    /// Classification counters for the final summary
    pub stats: Arc<ProcessingStats>,
    /// Destination of the `Active: ...` lines, stdout unless replaced
    pub console: ConsoleWriter,
}

impl CheckContext {
    pub fn new(evaluator: DomainEvaluator, sink: Arc<dyn ResultSink>) -> Self {
        Self {
            evaluator,
            sink,
            stats: Arc::new(ProcessingStats::new()),
            console: Box::new(stdout_line),
        }
    }

    /// Replaces the console writer.
    pub fn with_console(
        mut self,
        console: impl Fn(&str) -> io::Result<()> + Send + Sync + 'static,
    ) -> Self {
        self.console = Box::new(console);
        self
    }
}

/// Writes `line` to stdout, returning the error instead of panicking when
/// stdout is closed (e.g. piped into `head`).
fn stdout_line(line: &str) -> io::Result<()> {
    let mut out = io::stdout().lock();
    writeln!(out, "{line}")?;
    out.flush()
}

/// Parameters for one spawned domain task.
pub struct DomainTaskParams {
    /// Domain as read from the input file, already trimmed
    pub domain: String,
    pub ctx: Arc<CheckContext>,
    /// Held for the lifetime of the task; dropping it admits the next domain
    pub permit: OwnedSemaphorePermit,
    /// Domains that reached a terminal state, for progress logging
    pub completed: Arc<AtomicUsize>,
}
