//! Attempt-bounded retry logic.

use std::future::Future;
use std::time::Duration;

use tokio_retry::strategy::ExponentialBackoff;
use tokio_retry::RetryIf;

use crate::config::{RETRY_FACTOR, RETRY_MAX_DELAY_SECS};

/// Builds the delay sequence between attempts.
///
/// Yields `attempts - 1` delays so that, together with the initial attempt,
/// exactly `attempts` calls are made. The first delay is roughly
/// `initial_delay_ms` and each following one is `RETRY_FACTOR` times longer.
/// An initial delay of 0 retries immediately.
pub fn retry_strategy(attempts: usize, initial_delay_ms: u64) -> impl Iterator<Item = Duration> {
    ExponentialBackoff::from_millis(RETRY_FACTOR)
        .factor(initial_delay_ms.div_ceil(RETRY_FACTOR))
        .max_delay(Duration::from_secs(RETRY_MAX_DELAY_SECS))
        .take(attempts.saturating_sub(1))
}

/// Runs `action` up to `attempts` times, retrying only while `is_retriable`
/// approves the error.
///
/// Returns the final result together with the number of calls made.
pub async fn retry_with_attempts<T, E, A, Fut, C>(
    attempts: usize,
    initial_delay_ms: u64,
    mut action: A,
    is_retriable: C,
) -> (Result<T, E>, usize)
where
    A: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    C: FnMut(&E) -> bool,
{
    let mut made = 0usize;
    let result = RetryIf::start(
        retry_strategy(attempts, initial_delay_ms),
        || {
            made += 1;
            action()
        },
        is_retriable,
    )
    .await;
    (result, made)
}
