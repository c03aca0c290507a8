//! DNS resolution.
//!
//! This module provides the resolvability check that gates every domain
//! evaluation, backed by `hickory-resolver`.

mod resolution;

// Re-export public API
pub use resolution::{DnsResolver, Resolver};
