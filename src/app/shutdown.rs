//! Graceful shutdown handling.

use tokio_util::sync::CancellationToken;

/// Stops the background progress logger and waits for it to exit.
///
/// Output files are flushed on every write, so nothing else needs draining.
pub async fn shutdown_gracefully(
    cancel: CancellationToken,
    logging_task: Option<tokio::task::JoinHandle<()>>,
) {
    cancel.cancel();
    if let Some(logging_task) = logging_task {
        let _ = logging_task.await;
    }
}
