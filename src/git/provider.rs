//! The repository boundary consumed by the workflows
//!
//! Workflows never run git or touch the filesystem directly; they go through
//! this trait so that every transition can be exercised against a scripted
//! implementation in tests.

use std::path::{Path, PathBuf};

use super::error::GitError;
use crate::models::{Branch, Outcome, RepoInfo, Worktree};

/// Queries and commands against git and the filesystem.
///
/// Queries return data or a `GitError`; commands return an `Outcome` whose
/// message is ready to show. Every call may fail.
pub trait RepoProvider {
    /// All worktrees known to the repository at `repo`, bare entry included.
    fn list_worktrees(&self, repo: &Path) -> Result<Vec<Worktree>, GitError>;

    /// Local and remote branches of the repository at `repo`.
    fn list_branches(&self, repo: &Path) -> Result<Vec<Branch>, GitError>;

    /// Untracked files eligible for sharing, relative to `worktree`.
    fn list_untracked_files(&self, worktree: &Path) -> Result<Vec<String>, GitError>;

    fn add_worktree(&self, repo: &Path, path: &Path, branch: &str, create_new: bool) -> Outcome;

    fn remove_worktree(&self, repo: &Path, path: &Path, force: bool) -> Outcome;

    fn prune_worktrees(&self, repo: &Path) -> Outcome;

    fn clone_bare(&self, remote: &str, target: &Path) -> Outcome;

    /// Write the `.git` file at the umbrella root pointing at the bare store.
    fn write_gitdir_pointer(&self, umbrella_root: &Path) -> Outcome;

    /// Make the bare clone track remote branches like a normal clone would.
    fn configure_bare_fetch(&self, bare_dir: &Path) -> Outcome;

    fn fetch_origin(&self, repo: &Path) -> Outcome;

    /// Branch the bare store's HEAD points at.
    fn default_branch(&self, bare_dir: &Path) -> Result<String, GitError>;

    /// Repository surrounding `cwd`, None when `cwd` is not inside one.
    fn repo_info(&self, cwd: &Path) -> Option<RepoInfo>;

    /// Umbrella root when `cwd` is inside an umbrella.
    ///
    /// Detected by the git common dir being a directory named `.bare`; its
    /// parent is the root.
    fn umbrella_root(&self, cwd: &Path) -> Option<PathBuf>;

    /// Create `dir` and any missing parents.
    fn ensure_dir(&self, dir: &Path) -> Outcome;

    fn copy_file(&self, src: &Path, dest: &Path) -> Outcome;

    /// Create a symlink at `link` pointing to `target`, replacing whatever
    /// file or link is already there.
    fn symlink_file(&self, target: &Path, link: &Path) -> Outcome;
}
