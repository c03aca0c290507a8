//! Per-domain evaluation.
//!
//! One evaluation walks a domain through the checks in a fixed order and ends
//! in exactly one `Classification`:
//!
//! 1. DNS: an unresolvable name is inactive with no further network activity.
//! 2. HTTP, then HTTPS: the first scheme whose final response carries an
//!    accepted status code moves on to the render check; the other scheme is
//!    never tried. If neither is accepted the domain is inactive.
//! 3. Render: the final URL (after redirects) must load in a browser, or the
//!    domain is inactive even though HTTP succeeded.

use std::sync::Arc;
use std::time::Duration;

use crate::config::StatusCodes;
use crate::dns::Resolver;
use crate::error_handling::InactiveReason;
use crate::fetch::{redirect_target, Prober};
use crate::models::Classification;
use crate::render::RenderVerifier;

/// Schemes tried for each domain, in order.
pub const PROTOCOLS: [&str; 2] = ["http", "https"];

/// Runs the resolve, probe and render checks for one domain at a time.
///
/// Holds only shared, read-only state, so one evaluator serves every
/// concurrent task.
pub struct DomainEvaluator {
    resolver: Arc<dyn Resolver>,
    prober: Arc<dyn Prober>,
    verifier: Arc<dyn RenderVerifier>,
    accepted: StatusCodes,
    render_timeout: Duration,
}

impl DomainEvaluator {
    pub fn new(
        resolver: Arc<dyn Resolver>,
        prober: Arc<dyn Prober>,
        verifier: Arc<dyn RenderVerifier>,
        accepted: StatusCodes,
        render_timeout: Duration,
    ) -> Self {
        Self {
            resolver,
            prober,
            verifier,
            accepted,
            render_timeout,
        }
    }

    /// Budget given to each render check.
    pub fn render_timeout(&self) -> Duration {
        self.render_timeout
    }

    /// Classifies `domain`. Never fails: every failure is an inactive outcome.
    pub async fn evaluate(&self, domain: &str) -> Classification {
        if !self.resolver.resolve(domain).await {
            log::debug!("{domain}: not resolvable");
            return Classification::inactive(InactiveReason::Unresolvable);
        }

        for scheme in PROTOCOLS {
            let url = format!("{scheme}://{domain}");
            let result = match self.prober.probe(&url).await {
                Ok(result) => result,
                Err(e) => {
                    log::debug!("{domain}: {e}");
                    continue;
                }
            };

            if !self.accepted.contains(result.status_code) {
                log::debug!(
                    "{domain}: {url} answered {} which is not accepted",
                    result.status_code
                );
                continue;
            }

            let redirected_to = redirect_target(&url, &result);
            if !self
                .verifier
                .verify(&result.final_url, self.render_timeout)
                .await
            {
                log::debug!("{domain}: {} did not render", result.final_url);
                return Classification::inactive(InactiveReason::RenderFailed);
            }

            return Classification::Active {
                url,
                status_code: result.status_code,
                final_url: result.final_url,
                redirected_to,
            };
        }

        Classification::inactive(InactiveReason::NoAcceptedStatus)
    }
}

#[cfg(test)]
pub(crate) mod testing;
