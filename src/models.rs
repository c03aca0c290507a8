//! Data types that flow between the pipeline stages.

use crate::error_handling::InactiveReason;

/// Outcome of one successful HTTP attempt, after redirects were followed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeResult {
    /// Status code of the final response
    pub status_code: u16,
    /// URL of the final request in the redirect chain
    pub final_url: String,
    /// Hostname of the final request (empty if the URL has none)
    pub final_hostname: String,
}

/// Terminal state of one domain's evaluation.
///
/// Written exactly once per domain, to exactly one of the two output files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    Active {
        /// URL that was requested, `<scheme>://<domain>`
        url: String,
        /// Accepted status code of the final response
        status_code: u16,
        /// URL reached after redirects, used for the render check
        final_url: String,
        /// Final hostname when it differs from the requested one
        redirected_to: Option<String>,
    },
    Inactive {
        reason: InactiveReason,
    },
}

impl Classification {
    pub fn inactive(reason: InactiveReason) -> Self {
        Classification::Inactive { reason }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, Classification::Active { .. })
    }
}
