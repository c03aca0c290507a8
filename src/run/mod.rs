//! Check orchestration.
//!
//! `run_check` is the library entry point: it validates the configuration,
//! reads the input file, builds the production components and hands the
//! domains to `run_all`, the concurrency controller.

mod init;
mod resources;
mod task;

use std::sync::atomic::AtomicUsize;
use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use futures::stream::FuturesUnordered;
use futures::StreamExt;
use log::{info, warn};
use tokio_util::sync::CancellationToken;

use crate::app::{log_progress, print_classification_statistics, shutdown_gracefully};
use crate::config::{Config, LOGGING_INTERVAL};
use crate::initialization::init_semaphore;
use crate::utils::parse_domains;

pub use init::init_check_context;
pub use resources::CheckContext;

use resources::DomainTaskParams;
use task::process_domain_task;

/// Results of a check run.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckReport {
    /// Non-blank domains read from the input file
    pub total_domains: usize,
    /// Domains recorded as active
    pub active: usize,
    /// Domains recorded as inactive
    pub inactive: usize,
    /// Domains never started because the run was cancelled
    pub skipped: usize,
    /// Records that could not be written to an output file
    pub sink_failures: usize,
    /// Elapsed time in seconds
    pub elapsed_seconds: f64,
}

/// Runs a full check with the provided configuration.
///
/// # Errors
///
/// This function will return an error if:
/// - The configuration is invalid
/// - The input file cannot be read
/// - The HTTP client or output files cannot be initialized
///
/// Per-domain failures never surface here; they are recorded as inactive.
///
/// # Example
///
/// ```no_run
/// use domain_checker::{run_check, Config};
/// use std::path::PathBuf;
///
/// # async fn example() -> anyhow::Result<()> {
/// let config = Config {
///     file: PathBuf::from("domains.txt"),
///     max_concurrency: 20,
///     ..Default::default()
/// };
/// let report = run_check(config).await?;
/// println!("{} active, {} inactive", report.active, report.inactive);
/// # Ok(())
/// # }
/// ```
pub async fn run_check(config: Config) -> Result<CheckReport> {
    config
        .validate()
        .context("Configuration validation failed")?;

    // Read everything up front: a missing file must fail before any work starts
    let contents = tokio::fs::read(&config.file)
        .await
        .with_context(|| format!("Failed to read input file {}", config.file.display()))?;
    let domains = parse_domains(&contents);
    info!("Total domains in file: {}", domains.len());

    let ctx = init_check_context(&config)
        .await
        .context("Failed to initialize check resources")?;

    let cancel = CancellationToken::new();
    let interrupt_task = spawn_interrupt_handler(cancel.clone());

    let report = run_all(domains, Arc::new(ctx), config.max_concurrency, cancel).await;

    interrupt_task.abort();
    Ok(report)
}

/// Evaluates every domain with at most `max_concurrency` evaluations in flight.
///
/// Each domain gets its own task, admitted only once it holds a semaphore
/// permit. Returns after every admitted task has classified and recorded its
/// domain. Cancelling `cancel` stops admission; domains not yet admitted are
/// reported as skipped and produce no record.
pub async fn run_all(
    domains: Vec<String>,
    ctx: Arc<CheckContext>,
    max_concurrency: usize,
    cancel: CancellationToken,
) -> CheckReport {
    let start_time = Instant::now();
    let total_domains = domains.len();
    let semaphore = init_semaphore(max_concurrency);
    let completed = Arc::new(AtomicUsize::new(0));
    let mut tasks = FuturesUnordered::new();
    let mut admitted = 0usize;

    let stop_logging = CancellationToken::new();
    let logging_task = spawn_progress_logger(
        start_time,
        Arc::clone(&completed),
        total_domains,
        stop_logging.child_token(),
    );

    for domain in domains {
        let permit = tokio::select! {
            biased;
            _ = cancel.cancelled() => break,
            permit = Arc::clone(&semaphore).acquire_owned() => match permit {
                Ok(permit) => permit,
                Err(e) => {
                    log::error!("Admission semaphore closed: {e}");
                    break;
                }
            },
        };

        admitted += 1;
        tasks.push(tokio::spawn(process_domain_task(DomainTaskParams {
            domain,
            ctx: Arc::clone(&ctx),
            permit,
            completed: Arc::clone(&completed),
        })));
    }

    let skipped = total_domains - admitted;
    if skipped > 0 {
        warn!(
            "Run cancelled: {} domain(s) were not checked, waiting for {} in flight",
            skipped,
            admitted - completed.load(std::sync::atomic::Ordering::SeqCst)
        );
    }

    while let Some(task_result) = tasks.next().await {
        if let Err(join_error) = task_result {
            warn!("Task failed: {:?}", join_error);
        }
    }

    shutdown_gracefully(stop_logging, Some(logging_task)).await;
    log_progress(start_time, &completed, total_domains);
    print_classification_statistics(&ctx.stats);

    CheckReport {
        total_domains,
        active: ctx.stats.active_count(),
        inactive: ctx.stats.total_inactive(),
        skipped,
        sink_failures: ctx.stats.sink_failure_count(),
        elapsed_seconds: start_time.elapsed().as_secs_f64(),
    }
}

fn spawn_progress_logger(
    start_time: Instant,
    completed: Arc<AtomicUsize>,
    total: usize,
    cancel: CancellationToken,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(std::time::Duration::from_secs(LOGGING_INTERVAL));
        // The first tick fires immediately
        interval.tick().await;
        loop {
            tokio::select! {
                _ = interval.tick() => log_progress(start_time, &completed, total),
                _ = cancel.cancelled() => break,
            }
        }
    })
}

/// Cancels `cancel` on Ctrl-C so the controller stops admitting domains.
fn spawn_interrupt_handler(cancel: CancellationToken) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                warn!("Interrupt received, finishing in-flight domains");
                cancel.cancel();
            }
            Err(e) => warn!("Failed to listen for Ctrl-C: {e}"),
        }
    })
}
