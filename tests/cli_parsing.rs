//! Tests for command-line parsing through the public `Config` type.

use clap::Parser;
use domain_checker::{Config, StatusCodes};
use std::path::PathBuf;

#[test]
fn test_minimal_command_line() {
    let config = Config::try_parse_from(["domain_checker", "domains.txt"]).unwrap();
    assert_eq!(config.file, PathBuf::from("domains.txt"));
    assert_eq!(config.accepted_status_codes, StatusCodes::default());
    assert_eq!(config.active_output, PathBuf::from("active_domains.txt"));
    assert_eq!(config.inactive_output, PathBuf::from("inactive_domains.txt"));
    assert!(config.validate().is_ok());
}

#[test]
fn test_status_code_override() {
    let config = Config::try_parse_from(["domain_checker", "domains.txt", "200,301"]).unwrap();
    let codes: StatusCodes = "301,200".parse().unwrap();
    assert_eq!(config.accepted_status_codes, codes);
    assert_eq!(config.accepted_status_codes.len(), 2);
}

#[test]
fn test_malformed_status_codes_exit_with_usage_error() {
    for bad in ["abc", "200,,301", "42", ""] {
        let err = Config::try_parse_from(["domain_checker", "domains.txt", bad])
            .expect_err("malformed status code list must be rejected");
        assert_eq!(err.exit_code(), 2, "input {bad:?}");
    }
}

#[test]
fn test_missing_file_argument_is_rejected() {
    let err = Config::try_parse_from(["domain_checker"]).unwrap_err();
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn test_output_paths_and_browser_are_configurable() {
    let config = Config::try_parse_from([
        "domain_checker",
        "domains.txt",
        "--active-output",
        "/tmp/up.txt",
        "--inactive-output",
        "/tmp/down.txt",
        "--browser",
        "/usr/bin/chromium-browser",
        "--timeout-seconds",
        "3",
    ])
    .unwrap();
    assert_eq!(config.active_output, PathBuf::from("/tmp/up.txt"));
    assert_eq!(config.inactive_output, PathBuf::from("/tmp/down.txt"));
    assert_eq!(config.browser, PathBuf::from("/usr/bin/chromium-browser"));
    assert_eq!(config.timeout().as_secs(), 3);
}
