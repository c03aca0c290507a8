//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `domain_checker` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::io::Write;
use std::process;

use domain_checker::initialization::init_logger_with;
use domain_checker::{run_check, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments into Config (exits 2 on invalid arguments)
    let config = Config::parse();

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    let active_output = config.active_output.clone();
    let inactive_output = config.inactive_output.clone();

    match run_check(config).await {
        Ok(report) => {
            let summary = format!(
                "✅ Checked {} domain{} ({} active, {} inactive{}) in {:.1}s - see {} and {}",
                report.total_domains,
                if report.total_domains == 1 { "" } else { "s" },
                report.active,
                report.inactive,
                if report.skipped > 0 {
                    format!(", {} skipped", report.skipped)
                } else {
                    String::new()
                },
                report.elapsed_seconds,
                active_output.display(),
                inactive_output.display()
            );
            // A closed stdout (e.g. piped into `head`) is not a failed run
            if let Err(e) = writeln!(std::io::stdout().lock(), "{summary}") {
                log::warn!("Failed to write summary: {e}");
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("domain_checker error: {:#}", e);
            process::exit(1);
        }
    }
}
