//! GitHub release creation via the `gh` CLI.
//!
//! The hosting CLI is optional: when it is missing or the operator declines,
//! the workflow prints a manual release URL instead of failing.

use std::process::{Command, Stdio};

use regex::Regex;

use crate::error::{Result, ShipitError};

/// Checks whether the `gh` CLI is available on PATH.
pub fn gh_available() -> bool {
    Command::new("gh")
        .arg("--version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|status| status.success())
        .unwrap_or(false)
}

/// Creates a GitHub release for an already-pushed tag.
///
/// Runs `gh release create <tag> --title <title> --generate-notes` and
/// relies on its exit code. A non-zero exit is fatal, with stderr folded
/// into the error message.
pub fn create_release(tag: &str, title: &str) -> Result<()> {
    let output = Command::new("gh")
        .args(["release", "create", tag, "--title", title, "--generate-notes"])
        .output()
        .map_err(|e| ShipitError::command(format!("failed to execute gh: {}", e)))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(ShipitError::command(format!(
            "gh release create exited with code {}: {}",
            output.status.code().unwrap_or(-1),
            stderr.trim()
        )));
    }

    Ok(())
}

/// Derives the manual "new release" URL from a GitHub remote URL.
///
/// Understands both SSH (`git@github.com:owner/repo.git`) and HTTPS
/// (`https://github.com/owner/repo`) remote forms.
///
/// # Returns
/// * `Some(url)` - `https://github.com/<owner>/<repo>/releases/new?tag=<tag>`
/// * `None` - If the remote does not point at GitHub
pub fn releases_url(remote_url: &str, tag: &str) -> Option<String> {
    let re = Regex::new(r"github\.com[:/]([^/:]+)/([^/]+?)(?:\.git)?/?$").ok()?;
    let caps = re.captures(remote_url)?;
    Some(format!(
        "https://github.com/{}/{}/releases/new?tag={}",
        &caps[1], &caps[2], tag
    ))
}
