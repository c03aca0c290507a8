//! Final statistics printing.

use log::info;
use strum::IntoEnumIterator;

use crate::error_handling::{InactiveReason, ProcessingStats};

/// Prints classification counts, broken down by inactive reason.
pub fn print_classification_statistics(stats: &ProcessingStats) {
    info!(
        "Active: {} ({} redirected to another host)",
        stats.active_count(),
        stats.redirect_count()
    );

    let total_inactive = stats.total_inactive();
    if total_inactive > 0 {
        info!("Inactive Counts ({} total):", total_inactive);
        for reason in InactiveReason::iter() {
            let count = stats.inactive_count(reason);
            if count > 0 {
                info!("   {}: {}", reason.as_str(), count);
            }
        }
    }

    let sink_failures = stats.sink_failure_count();
    if sink_failures > 0 {
        log::warn!("{} result(s) could not be written to the output files", sink_failures);
    }
}
