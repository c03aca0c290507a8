//! Check resource initialization.
//!
//! Builds the production resolver, prober, render verifier and output sink
//! from a validated `Config` and wires them into a `CheckContext`.

use std::sync::Arc;

use log::info;

use crate::config::Config;
use crate::dns::DnsResolver;
use crate::error_handling::InitializationError;
use crate::evaluate::DomainEvaluator;
use crate::fetch::HttpProber;
use crate::initialization::{init_client, init_resolver};
use crate::render::ChromeRenderVerifier;
use crate::sink::FileSink;

use super::resources::CheckContext;

/// Initialize all resources needed for a check run.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be built or either output file
/// cannot be opened for appending.
pub async fn init_check_context(config: &Config) -> Result<CheckContext, InitializationError> {
    let client = init_client(config)?;
    let resolver = DnsResolver::new(init_resolver());
    let prober = HttpProber::new(client, config.retry_count, config.retry_delay_ms);
    let verifier = ChromeRenderVerifier::new(config.browser.clone(), config.user_agent.clone());

    let sink = FileSink::open(&config.active_output, &config.inactive_output).await?;
    info!(
        "Appending results to {} and {}",
        config.active_output.display(),
        config.inactive_output.display()
    );

    let evaluator = DomainEvaluator::new(
        Arc::new(resolver),
        Arc::new(prober),
        Arc::new(verifier),
        config.accepted_status_codes.clone(),
        config.timeout(),
    );

    Ok(CheckContext::new(evaluator, Arc::new(sink)))
}
