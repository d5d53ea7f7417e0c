//! Non-interactive entry points behind the `umbrella` binary.
//!
//! `open` picks the screen to launch from the working directory; `list` and
//! `link` are scriptable shortcuts for the same operations the TUI offers.
//! `list` works in any repository, `link` only inside an umbrella.

pub mod link;
pub mod list;
pub mod open;

use std::path::{Path, PathBuf};

use anyhow::{bail, Result};

use crate::git::RepoProvider;

/// Directory whose worktrees `list` prints.
///
/// Prefers the enclosing umbrella, else the enclosing repository. `link`
/// does not use this: it needs the shared store, so it asks for the umbrella
/// root alone.
fn worktree_root<P: RepoProvider + ?Sized>(provider: &P, cwd: &Path) -> Result<PathBuf> {
    if let Some(root) = provider.umbrella_root(cwd) {
        return Ok(root);
    }
    if let Some(info) = provider.repo_info(cwd) {
        return Ok(info.root);
    }
    bail!("Not inside a git repository: {}", cwd.display())
}
