//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    ACTIVE_OUTPUT_FILE, DEFAULT_BROWSER, DEFAULT_MAX_CONCURRENCY, DEFAULT_RETRY_COUNT,
    DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT, INACTIVE_OUTPUT_FILE, MAX_CONCURRENCY_LIMIT,
};
use crate::config::StatusCodes;
use crate::error_handling::ConfigError;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Checker configuration.
///
/// Built once at startup, either by `clap` from the command line or
/// programmatically, and never mutated afterwards. Every concurrent evaluation
/// reads it through an `Arc`.
///
/// # Examples
///
/// ```bash
/// # Basic usage
/// domain_checker domains.txt
///
/// # Accept redirects as live, lower concurrency
/// domain_checker domains.txt 200,301,302 --max-concurrency 20
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "domain_checker",
    about = "Checks a list of domains for liveness via DNS, HTTP(S) and a headless render check."
)]
pub struct Config {
    /// File with one domain per line
    #[arg(value_parser)]
    pub file: PathBuf,

    /// Comma-separated HTTP status codes treated as success (e.g. 200,301)
    #[arg(default_value = "200")]
    pub accepted_status_codes: StatusCodes,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Maximum number of domains evaluated at the same time
    #[arg(long, default_value_t = DEFAULT_MAX_CONCURRENCY)]
    pub max_concurrency: usize,

    /// Per-request HTTP timeout in seconds, also the render check budget
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// Total HTTP attempts per URL; only transport failures consume an attempt
    #[arg(long, default_value_t = DEFAULT_RETRY_COUNT)]
    pub retry_count: usize,

    /// Initial delay between HTTP attempts in milliseconds (doubles each retry)
    #[arg(long, default_value_t = 0)]
    pub retry_delay_ms: u64,

    /// HTTP User-Agent header value, also used by the headless browser
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Headless browser executable used for the render check
    #[arg(long, default_value = DEFAULT_BROWSER)]
    pub browser: PathBuf,

    /// Validate TLS certificates instead of accepting any certificate
    #[arg(long)]
    pub verify_tls: bool,

    /// File receiving active domains
    #[arg(long, default_value = ACTIVE_OUTPUT_FILE)]
    pub active_output: PathBuf,

    /// File receiving inactive domains
    #[arg(long, default_value = INACTIVE_OUTPUT_FILE)]
    pub inactive_output: PathBuf,
}

impl Config {
    /// Per-request timeout as a `Duration`.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    /// Checks that the configuration can drive a run.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` naming the first offending setting.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_concurrency == 0 || self.max_concurrency > MAX_CONCURRENCY_LIMIT {
            return Err(ConfigError::MaxConcurrency(self.max_concurrency));
        }
        if self.timeout_seconds == 0 {
            return Err(ConfigError::ZeroTimeout);
        }
        if self.retry_count == 0 {
            return Err(ConfigError::ZeroRetryCount);
        }
        if self.accepted_status_codes.is_empty() {
            return Err(ConfigError::NoStatusCodes);
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            file: PathBuf::from("domains.txt"),
            accepted_status_codes: StatusCodes::default(),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            max_concurrency: DEFAULT_MAX_CONCURRENCY,
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            retry_count: DEFAULT_RETRY_COUNT,
            retry_delay_ms: 0,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            browser: PathBuf::from(DEFAULT_BROWSER),
            verify_tls: false,
            active_output: PathBuf::from(ACTIVE_OUTPUT_FILE),
            inactive_output: PathBuf::from(INACTIVE_OUTPUT_FILE),
        }
    }
}
