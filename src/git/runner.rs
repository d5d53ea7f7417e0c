//! Git command runner abstraction
//!
//! Centralizes running git with a timeout so that a hung remote or credential
//! prompt surfaces as an error instead of freezing the interface.

use std::io::Read;
use std::path::Path;
use std::process::{Command, Output, Stdio};
use std::thread;
use std::time::Duration;

use tracing::{debug, warn};
use wait_timeout::ChildExt;

use super::error::{normalize_git_error, GitError};

/// Run a git command and return the raw Output.
///
/// Stdout and stderr are drained on helper threads while waiting so a chatty
/// command cannot fill a pipe and deadlock. On timeout the child is killed.
///
/// # Arguments
/// * `args` - Git command arguments (e.g., `&["worktree", "list"]`)
/// * `repo_root` - Working directory for the git command
/// * `timeout` - Upper bound on the command's runtime
pub fn run_git(args: &[&str], repo_root: &Path, timeout: Duration) -> Result<Output, GitError> {
    let command = format!("git {}", args.join(" "));
    debug!(%command, dir = %repo_root.display(), "running git");

    let mut child = Command::new("git")
        .args(args)
        .current_dir(repo_root)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|source| GitError::Spawn {
            command: command.clone(),
            source,
        })?;

    let stdout = child.stdout.take();
    let stderr = child.stderr.take();
    let stdout_reader = thread::spawn(move || drain(stdout));
    let stderr_reader = thread::spawn(move || drain(stderr));

    let status = match child.wait_timeout(timeout) {
        Ok(Some(status)) => status,
        Ok(None) => {
            let _ = child.kill();
            let _ = child.wait();
            warn!(%command, secs = timeout.as_secs(), "git timed out");
            return Err(GitError::Timeout {
                command,
                secs: timeout.as_secs(),
            });
        }
        Err(source) => return Err(GitError::Spawn { command, source }),
    };

    Ok(Output {
        status,
        stdout: stdout_reader.join().unwrap_or_default(),
        stderr: stderr_reader.join().unwrap_or_default(),
    })
}

/// Run a git command, check for success, and return stdout as a trimmed String.
///
/// On failure, returns `GitError::Failed` carrying the normalized stderr.
pub fn run_git_checked(
    args: &[&str],
    repo_root: &Path,
    timeout: Duration,
) -> Result<String, GitError> {
    run_git_raw(args, repo_root, timeout).map(|stdout| stdout.trim().to_string())
}

/// Like [`run_git_checked`] but returns stdout untouched.
///
/// Needed for `-z` output, where surrounding whitespace belongs to a path.
pub fn run_git_raw(args: &[&str], repo_root: &Path, timeout: Duration) -> Result<String, GitError> {
    let output = run_git(args, repo_root, timeout)?;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        let message = normalize_git_error(&stderr);
        debug!(command = %args.join(" "), %message, "git failed");
        return Err(GitError::Failed { message });
    }
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Run a git command and return true if exit code is 0.
///
/// Silently swallows errors (spawn failures, timeouts and non-zero exits).
pub fn run_git_bool(args: &[&str], repo_root: &Path, timeout: Duration) -> bool {
    run_git(args, repo_root, timeout)
        .map(|output| output.status.success())
        .unwrap_or(false)
}

fn drain<R: Read>(pipe: Option<R>) -> Vec<u8> {
    let mut buf = Vec::new();
    if let Some(mut pipe) = pipe {
        let _ = pipe.read_to_end(&mut buf);
    }
    buf
}
