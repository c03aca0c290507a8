//! HTTP(S) probing.
//!
//! This module provides the `Prober` seam used by the evaluator, its
//! `reqwest`-backed implementation, and redirect metadata extraction.

mod probe;
mod redirects;

pub use probe::{HttpProber, Prober};
pub use redirects::redirect_target;

#[cfg(test)]
mod tests;
