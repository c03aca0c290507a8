//! domain_checker library: bulk domain liveness checking
//!
//! Reads a list of domains and decides, for each one, whether it is live: the
//! name must resolve, `http://` or `https://` must answer with an accepted
//! status code (after following redirects), and the final page must render in
//! a headless browser. Live domains are appended to one output file, everything
//! else to another.
//!
//! # Example
//!
//! ```no_run
//! use domain_checker::{run_check, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> anyhow::Result<()> {
//! let config = Config {
//!     file: std::path::PathBuf::from("domains.txt"),
//!     accepted_status_codes: "200,301".parse()?,
//!     max_concurrency: 50,
//!     ..Default::default()
//! };
//!
//! let report = run_check(config).await?;
//! println!(
//!     "Checked {} domains: {} active, {} inactive",
//!     report.total_domains, report.active, report.inactive
//! );
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

mod app;
pub mod config;
mod dns;
mod error_handling;
mod evaluate;
mod fetch;
pub mod initialization;
mod models;
mod render;
mod run;
mod sink;
mod utils;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel, StatusCodes};
pub use dns::{DnsResolver, Resolver};
pub use error_handling::{
    ConfigError, InactiveReason, InitializationError, ProbeError, ProcessingStats, SinkError,
    StatusCodeError,
};
pub use evaluate::{DomainEvaluator, PROTOCOLS};
pub use fetch::{redirect_target, HttpProber, Prober};
pub use models::{Classification, ProbeResult};
pub use render::{ChromeRenderVerifier, RenderVerifier};
pub use run::{init_check_context, run_all, run_check, CheckContext, CheckReport};
pub use sink::{active_line, console_line, inactive_line, FileSink, ResultSink};
pub use utils::parse_domains;
