//! Hostname resolvability checks.

use std::sync::Arc;

use async_trait::async_trait;
use hickory_resolver::TokioAsyncResolver;

/// Answers "is this name resolvable".
///
/// Implementations must fold every failure (NXDOMAIN, timeout, network error)
/// into `false` and must not retry; a DNS failure is decisive.
#[async_trait]
pub trait Resolver: Send + Sync {
    async fn resolve(&self, domain: &str) -> bool;
}

/// `Resolver` backed by `hickory-resolver`.
#[derive(Clone)]
pub struct DnsResolver {
    resolver: Arc<TokioAsyncResolver>,
}

impl DnsResolver {
    pub fn new(resolver: Arc<TokioAsyncResolver>) -> Self {
        Self { resolver }
    }
}

#[async_trait]
impl Resolver for DnsResolver {
    async fn resolve(&self, domain: &str) -> bool {
        let host = lookup_host(domain);
        match self.resolver.lookup_ip(host).await {
            Ok(response) => {
                let resolvable = response.iter().next().is_some();
                if !resolvable {
                    log::debug!("DNS lookup for {host} returned no addresses");
                }
                resolvable
            }
            Err(e) => {
                log::debug!("DNS lookup for {host} failed: {e}");
                false
            }
        }
    }
}

/// Strips a trailing `:port` so only the hostname is looked up.
///
/// Bracketed IPv6 literals keep their address without the brackets. Anything
/// that does not look like `host:port` is returned unchanged.
pub(crate) fn lookup_host(domain: &str) -> &str {
    if let Some(rest) = domain.strip_prefix('[') {
        if let Some((addr, _)) = rest.split_once(']') {
            return addr;
        }
        return domain;
    }
    match domain.rsplit_once(':') {
        Some((host, port))
            if !host.contains(':')
                && !port.is_empty()
                && port.bytes().all(|b| b.is_ascii_digit()) =>
        {
            host
        }
        _ => domain,
    }
}
