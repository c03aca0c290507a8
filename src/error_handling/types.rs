//! Error type definitions.
//!
//! This module defines the error types used at module seams and the reasons a
//! domain ends up inactive.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),

    /// Error opening one of the output files.
    #[error("Output file initialization error: {0}")]
    OutputError(#[from] SinkError),
}

/// Invalid configuration values.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error(
        "max_concurrency must be between 1 and {max}, got {0}",
        max = crate::config::MAX_CONCURRENCY_LIMIT
    )]
    MaxConcurrency(usize),

    #[error("timeout_seconds must be greater than 0")]
    ZeroTimeout,

    #[error("retry_count must be at least 1 (it counts total attempts)")]
    ZeroRetryCount,

    #[error("at least one accepted status code is required")]
    NoStatusCodes,
}

/// Malformed entries in the accepted status code list.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StatusCodeError {
    #[error("empty status code entry")]
    Empty,

    #[error("status code '{0}' is not a number")]
    NotANumber(String),

    #[error("status code {0} is outside 100..=999")]
    OutOfRange(u16),
}

/// Failure of a probe once every attempt has been used up.
#[derive(Error, Debug)]
pub enum ProbeError {
    /// The URL could not be turned into a request.
    #[error("invalid URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// Every attempt failed at the transport level.
    #[error("request to {url} failed after {attempts} attempt(s): {source}")]
    Transport {
        url: String,
        attempts: usize,
        #[source]
        source: ReqwestError,
    },
}

/// Failure to append a classification line to an output file.
#[derive(Error, Debug)]
pub enum SinkError {
    #[error("failed to open {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to append to {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Why a domain was classified inactive.
///
/// Only used for run statistics and logging; the inactive output file carries
/// the bare domain regardless of the reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum InactiveReason {
    /// The hostname did not resolve.
    Unresolvable,
    /// Neither protocol produced an accepted status code.
    NoAcceptedStatus,
    /// An accepted status was seen but the page did not render.
    RenderFailed,
    /// The evaluation task panicked.
    EvaluationPanicked,
}

impl InactiveReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            InactiveReason::Unresolvable => "DNS lookup failed",
            InactiveReason::NoAcceptedStatus => "No accepted HTTP status",
            InactiveReason::RenderFailed => "Render check failed",
            InactiveReason::EvaluationPanicked => "Evaluation panicked",
        }
    }
}
