//! Output line formats.
//!
//! These strings are consumed by downstream tooling; keep them byte-for-byte
//! stable.

fn redirect_suffix(redirected_to: Option<&str>) -> String {
    redirected_to
        .map(|host| format!(" (Redirected to: {host})"))
        .unwrap_or_default()
}

/// `<scheme>://<domain>[ (Redirected to: <hostname>)]\n`
pub fn active_line(url: &str, redirected_to: Option<&str>) -> String {
    format!("{url}{}\n", redirect_suffix(redirected_to))
}

/// `<domain>\n`
pub fn inactive_line(domain: &str) -> String {
    format!("{domain}\n")
}

/// `Active: <url> (Status Code: <code>)[ (Redirected to: <hostname>)]`
pub fn console_line(url: &str, status_code: u16, redirected_to: Option<&str>) -> String {
    format!(
        "Active: {url} (Status Code: {status_code}){}",
        redirect_suffix(redirected_to)
    )
}
