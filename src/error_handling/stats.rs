//! Processing statistics tracking.
//!
//! Thread-safe counters for classification outcomes, collected while the
//! controller runs and printed at the end.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use strum::IntoEnumIterator;

use super::types::InactiveReason;

/// Thread-safe processing statistics tracker.
///
/// Every `InactiveReason` is pre-registered so increments never allocate or
/// lock. Shared across tasks through `Arc`.
pub struct ProcessingStats {
    active: AtomicUsize,
    inactive: HashMap<InactiveReason, AtomicUsize>,
    redirects: AtomicUsize,
    sink_failures: AtomicUsize,
}

impl ProcessingStats {
    pub fn new() -> Self {
        let mut inactive = HashMap::new();
        for reason in InactiveReason::iter() {
            inactive.insert(reason, AtomicUsize::new(0));
        }

        ProcessingStats {
            active: AtomicUsize::new(0),
            inactive,
            redirects: AtomicUsize::new(0),
            sink_failures: AtomicUsize::new(0),
        }
    }

    pub fn increment_active(&self, redirected: bool) {
        self.active.fetch_add(1, Ordering::Relaxed);
        if redirected {
            self.redirects.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub fn increment_inactive(&self, reason: InactiveReason) {
        if let Some(counter) = self.inactive.get(&reason) {
            counter.fetch_add(1, Ordering::Relaxed);
        } else {
            log::error!(
                "Attempted to increment inactive counter for {:?} which is not in the map. \
                 This indicates a bug in ProcessingStats initialization.",
                reason
            );
        }
    }

    pub fn increment_sink_failure(&self) {
        self.sink_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn active_count(&self) -> usize {
        self.active.load(Ordering::Relaxed)
    }

    pub fn redirect_count(&self) -> usize {
        self.redirects.load(Ordering::Relaxed)
    }

    pub fn inactive_count(&self, reason: InactiveReason) -> usize {
        self.inactive
            .get(&reason)
            .map(|c| c.load(Ordering::Relaxed))
            .unwrap_or(0)
    }

    pub fn total_inactive(&self) -> usize {
        self.inactive
            .values()
            .map(|c| c.load(Ordering::Relaxed))
            .sum()
    }

    pub fn sink_failure_count(&self) -> usize {
        self.sink_failures.load(Ordering::Relaxed)
    }

    /// Number of domains that reached a terminal state.
    pub fn total_classified(&self) -> usize {
        self.active_count() + self.total_inactive()
    }
}

impl Default for ProcessingStats {
    fn default() -> Self {
        Self::new()
    }
}
