//! Redirect metadata.

use reqwest::Url;

use super::probe::hostname;
use crate::models::ProbeResult;

/// Returns the final hostname when a probe of `requested_url` ended on a
/// different host.
///
/// Hostnames are compared case-insensitively and without ports, so
/// `http://Example.com` landing on `http://example.com:8080/` is not a
/// redirect to another host while `example.com` landing on `www.example.com`
/// is.
pub fn redirect_target(requested_url: &str, result: &ProbeResult) -> Option<String> {
    let requested_host = Url::parse(requested_url)
        .map(|u| hostname(&u))
        .unwrap_or_default();

    if requested_host.eq_ignore_ascii_case(&result.final_hostname) {
        None
    } else {
        Some(result.final_hostname.clone())
    }
}
