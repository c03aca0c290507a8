//! Run-time helpers used by the controller.
//!
//! Progress logging, shutdown of background tasks and statistics printing.

pub mod logging;
pub mod shutdown;
pub mod statistics;

// Re-export public API
pub use logging::log_progress;
pub use shutdown::shutdown_gracefully;
pub use statistics::print_classification_statistics;
