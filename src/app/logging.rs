//! Progress logging utilities.

use log::info;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Logs how many domains have been classified so far and the current rate.
///
/// # Arguments
///
/// * `start_time` - The start time of processing
/// * `completed` - Counter of domains that reached a terminal state
/// * `total` - Number of domains admitted from the input file
pub fn log_progress(start_time: std::time::Instant, completed: &AtomicUsize, total: usize) {
    let elapsed_secs = start_time.elapsed().as_secs_f64();
    let completed = completed.load(Ordering::SeqCst);
    let rate = if elapsed_secs > 0.0 {
        completed as f64 / elapsed_secs
    } else {
        0.0
    };
    info!(
        "Checked {}/{} domains in {:.2} seconds (~{:.2} domains/sec)",
        completed, total, elapsed_secs, rate
    );
}
