//! Startup check for the git binary

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use tracing::debug;

use super::runner::run_git_checked;

const VERSION_TIMEOUT: Duration = Duration::from_secs(10);

/// Fail early when `git` is missing from PATH or cannot run.
pub fn check_git_available() -> Result<()> {
    let git = which::which("git").context("git is not installed or not in PATH")?;

    let version = run_git_checked(&["--version"], Path::new("."), VERSION_TIMEOUT)
        .with_context(|| format!("{} is not working", git.display()))?;

    debug!(path = %git.display(), %version, "found git");
    Ok(())
}
