//! Configuration constants.
//!
//! This module defines the constants used as defaults throughout the application,
//! including timeouts, limits and output locations.

/// Maximum concurrent domain evaluations (semaphore limit)
pub const DEFAULT_MAX_CONCURRENCY: usize = 100;
/// Upper bound accepted by `Config::validate()` for `max_concurrency`
pub const MAX_CONCURRENCY_LIMIT: usize = 10_000;

/// Per-request HTTP timeout and render budget in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Total number of HTTP attempts per URL (initial attempt included)
pub const DEFAULT_RETRY_COUNT: usize = 2;

/// Interval between progress log lines in seconds
pub const LOGGING_INTERVAL: u64 = 5;

// Network operation timeouts
/// DNS query timeout in seconds
/// Most queries complete in well under a second; 3s fails fast on dead servers
pub const DNS_TIMEOUT_SECS: u64 = 3;
/// Number of attempts the resolver makes per query before giving up
pub const DNS_ATTEMPTS: usize = 2;
/// TCP connection timeout in seconds
pub const TCP_CONNECT_TIMEOUT_SECS: u64 = 5;

/// Default User-Agent string for HTTP requests and the render check.
///
/// The same string is sent by the prober and by the headless browser so that a
/// site sees one consistent client across both stages.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (compatible; DomainChecker/1.0)";

/// Default headless browser executable
pub const DEFAULT_BROWSER: &str = "chromium";

// Redirect handling
/// Maximum number of redirect hops to follow
/// When the cap is reached the response at that point is treated as final
pub const MAX_REDIRECT_HOPS: usize = 10;

// Retry strategy
/// Factor by which retry delay is multiplied on each attempt
pub const RETRY_FACTOR: u64 = 2;
/// Maximum delay between retries in seconds
pub const RETRY_MAX_DELAY_SECS: u64 = 15;

/// HTTP status codes accepted when none are configured
pub const DEFAULT_ACCEPTED_STATUS_CODES: &[u16] = &[200];

// Output files
pub const ACTIVE_OUTPUT_FILE: &str = "active_domains.txt";
pub const INACTIVE_OUTPUT_FILE: &str = "inactive_domains.txt";
