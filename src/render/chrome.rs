//! Headless Chromium render check.

use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use tokio::process::Command;

use super::RenderVerifier;

/// Markers present in Chromium's built-in network error page.
const ERROR_PAGE_MARKERS: &[&str] = &["id=\"main-frame-error\"", "class=\"neterror\""];

/// `RenderVerifier` that runs one headless Chromium process per check.
///
/// Each call gets a fresh throw-away profile directory, so cookies, cache and
/// session state never leak from one domain to the next. The browser runs in
/// its own process group; on timeout the whole group (helper processes
/// included) is killed before the profile is deleted.
#[derive(Debug, Clone)]
pub struct ChromeRenderVerifier {
    browser: PathBuf,
    user_agent: String,
}

impl ChromeRenderVerifier {
    pub fn new(browser: impl Into<PathBuf>, user_agent: impl Into<String>) -> Self {
        Self {
            browser: browser.into(),
            user_agent: user_agent.into(),
        }
    }

    fn command(&self, url: &str, profile: &Path) -> Command {
        let mut cmd = Command::new(&self.browser);
        cmd.arg("--headless")
            .arg("--disable-gpu")
            .arg("--no-first-run")
            .arg("--no-default-browser-check")
            .arg("--disable-extensions")
            .arg("--mute-audio")
            .arg("--ignore-certificate-errors")
            .arg(format!("--user-agent={}", self.user_agent))
            .arg(format!("--user-data-dir={}", profile.display()))
            .arg("--dump-dom")
            .arg(url)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .kill_on_drop(true);
        #[cfg(unix)]
        cmd.process_group(0);
        cmd
    }
}

#[async_trait]
impl RenderVerifier for ChromeRenderVerifier {
    async fn verify(&self, url: &str, timeout: Duration) -> bool {
        let profile = match tempfile::Builder::new()
            .prefix("domain_checker-profile-")
            .tempdir()
        {
            Ok(dir) => dir,
            Err(e) => {
                log::warn!("Failed to create browser profile directory: {e}");
                return false;
            }
        };

        let child = match self.command(url, profile.path()).spawn() {
            Ok(child) => child,
            Err(e) => {
                log::warn!("Failed to launch browser {}: {e}", self.browser.display());
                return false;
            }
        };
        let pid = child.id();

        // Dropping the wait future on timeout drops the child, which kills it
        let rendered = match tokio::time::timeout(timeout, child.wait_with_output()).await {
            Ok(Ok(output)) if output.status.success() => {
                page_rendered(&String::from_utf8_lossy(&output.stdout))
            }
            Ok(Ok(output)) => {
                log::debug!("Browser exited with {} for {url}", output.status);
                false
            }
            Ok(Err(e)) => {
                log::debug!("Failed to collect browser output for {url}: {e}");
                false
            }
            Err(_) => {
                log::debug!("Render check for {url} timed out after {timeout:?}");
                kill_process_group(pid);
                false
            }
        };

        drop(profile);
        rendered
    }
}

/// Kills every process in the browser's group, helpers included.
#[cfg(unix)]
fn kill_process_group(pid: Option<u32>) {
    let Some(pgid) = pid.and_then(|p| libc::pid_t::try_from(p).ok()) else {
        return;
    };
    // SAFETY: killpg only sends a signal. The group id is the browser's pid,
    // made a group leader by `process_group(0)`.
    if unsafe { libc::killpg(pgid, libc::SIGKILL) } != 0 {
        log::debug!(
            "Failed to kill browser process group {pgid}: {}",
            std::io::Error::last_os_error()
        );
    }
}

#[cfg(not(unix))]
fn kill_process_group(_pid: Option<u32>) {}

/// True when a dumped DOM is a real document rather than empty output or the
/// browser's own error page.
pub(crate) fn page_rendered(dom: &str) -> bool {
    let dom = dom.trim();
    if dom.is_empty() || !dom.to_ascii_lowercase().contains("<html") {
        return false;
    }
    !ERROR_PAGE_MARKERS.iter().any(|marker| dom.contains(marker))
}
