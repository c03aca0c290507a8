//! Per-domain task processing.

use std::panic::AssertUnwindSafe;
use std::sync::atomic::Ordering;

use futures::FutureExt;

use crate::error_handling::InactiveReason;
use crate::models::Classification;
use crate::sink::console_line;

use super::resources::DomainTaskParams;

/// Classifies one domain and records the outcome.
///
/// This function is spawned as a Tokio task for each domain. A panic anywhere
/// in the evaluation is caught here and recorded as an inactive outcome, so
/// every admitted domain still produces exactly one record.
pub async fn process_domain_task(params: DomainTaskParams) {
    let DomainTaskParams {
        domain,
        ctx,
        permit: _permit, // Hold permit until task completes
        completed,
    } = params;

    let classification = match AssertUnwindSafe(ctx.evaluator.evaluate(&domain))
        .catch_unwind()
        .await
    {
        Ok(classification) => classification,
        Err(panic) => {
            log::error!(
                "Evaluation of {} panicked: {}",
                domain,
                panic_message(panic.as_ref())
            );
            Classification::inactive(InactiveReason::EvaluationPanicked)
        }
    };

    // Record first: the output files are the source of truth, the console a convenience
    if let Err(e) = ctx.sink.record(&domain, &classification).await {
        log::warn!("Failed to record result for {}: {}", domain, e);
        ctx.stats.increment_sink_failure();
    }

    match &classification {
        Classification::Active {
            url,
            status_code,
            redirected_to,
            ..
        } => {
            ctx.stats.increment_active(redirected_to.is_some());
            let line = console_line(url, *status_code, redirected_to.as_deref());
            if let Err(e) = (ctx.console)(&line) {
                log::warn!("Failed to write console line for {}: {}", domain, e);
            }
        }
        Classification::Inactive { reason } => {
            log::debug!("Inactive: {} ({})", domain, reason.as_str());
            ctx.stats.increment_inactive(*reason);
        }
    }

    completed.fetch_add(1, Ordering::SeqCst);
}

fn panic_message(panic: &(dyn std::any::Any + Send)) -> &str {
    if let Some(s) = panic.downcast_ref::<&'static str>() {
        s
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.as_str()
    } else {
        "unknown panic payload"
    }
}
