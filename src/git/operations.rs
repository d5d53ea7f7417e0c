//! Git-backed implementation of the repository boundary

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use tracing::{debug, info};

use super::error::GitError;
use super::parser::{filter_untracked, parse_branch_list, parse_worktree_list};
use super::provider::RepoProvider;
use super::runner::{run_git_bool, run_git_checked, run_git_raw};
use crate::config::Config;
use crate::models::constants::{
    BARE_DIR, BARE_FETCH_REFSPEC, DEFAULT_ENV_PREFIX, GITDIR_POINTER,
};
use crate::models::{Branch, Outcome, RepoInfo, Worktree};

/// Runs real git commands and filesystem operations.
#[derive(Debug, Clone)]
pub struct GitProvider {
    timeout: Duration,
    env_prefix: String,
}

impl Default for GitProvider {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(300),
            env_prefix: DEFAULT_ENV_PREFIX.to_string(),
        }
    }
}

impl GitProvider {
    pub fn new(timeout: Duration, env_prefix: impl Into<String>) -> Self {
        Self {
            timeout,
            env_prefix: env_prefix.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.git_timeout(), config.env_prefix.clone())
    }

    fn git(&self, args: &[&str], dir: &Path) -> Result<String, GitError> {
        run_git_checked(args, dir, self.timeout)
    }

    fn git_outcome(&self, args: &[&str], dir: &Path, success: String) -> Outcome {
        self.git(args, dir).map(|_| success).into()
    }
}

impl RepoProvider for GitProvider {
    fn list_worktrees(&self, repo: &Path) -> Result<Vec<Worktree>, GitError> {
        let output = self.git(&["worktree", "list", "--porcelain"], repo)?;
        Ok(parse_worktree_list(&output))
    }

    fn list_branches(&self, repo: &Path) -> Result<Vec<Branch>, GitError> {
        let output = self.git(&["branch", "-a", "--no-color"], repo)?;
        Ok(parse_branch_list(&output))
    }

    fn list_untracked_files(&self, worktree: &Path) -> Result<Vec<String>, GitError> {
        let standard = run_git_raw(
            &["ls-files", "-z", "--others", "--exclude-standard"],
            worktree,
            self.timeout,
        )?;
        let ignored = run_git_raw(
            &["ls-files", "-z", "--others", "--ignored", "--exclude-standard"],
            worktree,
            self.timeout,
        )?;
        Ok(filter_untracked(&standard, &ignored, &self.env_prefix))
    }

    fn add_worktree(&self, repo: &Path, path: &Path, branch: &str, create_new: bool) -> Outcome {
        let path_str = path.to_string_lossy().into_owned();
        let args: Vec<&str> = if create_new {
            vec!["worktree", "add", path_str.as_str(), "-b", branch]
        } else {
            vec!["worktree", "add", path_str.as_str(), branch]
        };
        info!(path = %path.display(), branch, create_new, "adding worktree");
        self.git_outcome(&args, repo, format!("Worktree created at {}", path.display()))
    }

    fn remove_worktree(&self, repo: &Path, path: &Path, force: bool) -> Outcome {
        let path_str = path.to_string_lossy().into_owned();
        let mut args = vec!["worktree", "remove"];
        if force {
            args.push("--force");
        }
        args.push(path_str.as_str());
        info!(path = %path.display(), force, "removing worktree");
        self.git_outcome(&args, repo, format!("Worktree removed: {}", path.display()))
    }

    fn prune_worktrees(&self, repo: &Path) -> Outcome {
        self.git_outcome(
            &["worktree", "prune"],
            repo,
            "Stale worktree references pruned".to_string(),
        )
    }

    fn clone_bare(&self, remote: &str, target: &Path) -> Outcome {
        let target_str = target.to_string_lossy().into_owned();
        let dir = existing_ancestor(target);
        info!(remote, target = %target.display(), "cloning bare");
        self.git_outcome(
            &["clone", "--bare", remote, target_str.as_str()],
            &dir,
            format!("Cloned bare repo to {}", target.display()),
        )
    }

    fn write_gitdir_pointer(&self, umbrella_root: &Path) -> Outcome {
        let pointer = umbrella_root.join(".git");
        fs::write(&pointer, GITDIR_POINTER)
            .map(|_| format!("Wrote {}", pointer.display()))
            .map_err(|e| GitError::io(format!("Failed to write {}", pointer.display()), e))
            .into()
    }

    fn configure_bare_fetch(&self, bare_dir: &Path) -> Outcome {
        self.git_outcome(
            &["config", "remote.origin.fetch", BARE_FETCH_REFSPEC],
            bare_dir,
            "Remote fetch config fixed".to_string(),
        )
    }

    fn fetch_origin(&self, repo: &Path) -> Outcome {
        self.git_outcome(
            &["fetch", "origin"],
            repo,
            "Fetched latest from origin".to_string(),
        )
    }

    fn default_branch(&self, bare_dir: &Path) -> Result<String, GitError> {
        self.git(&["symbolic-ref", "--short", "HEAD"], bare_dir)
    }

    fn repo_info(&self, cwd: &Path) -> Option<RepoInfo> {
        let root = self.git(&["rev-parse", "--show-toplevel"], cwd).ok()?;
        let remote = self
            .git(&["remote", "get-url", "origin"], cwd)
            .unwrap_or_default();
        let current_branch = self
            .git(&["branch", "--show-current"], cwd)
            .unwrap_or_default();
        Some(RepoInfo {
            root: PathBuf::from(root),
            remote,
            current_branch,
        })
    }

    fn umbrella_root(&self, cwd: &Path) -> Option<PathBuf> {
        if !run_git_bool(&["rev-parse", "--git-dir"], cwd, self.timeout) {
            return None;
        }
        let common_dir = self.git(&["rev-parse", "--git-common-dir"], cwd).ok()?;
        let resolved = cwd.join(common_dir);
        let resolved = resolved.canonicalize().unwrap_or(resolved);
        debug!(common_dir = %resolved.display(), "resolved git common dir");

        if resolved.file_name().is_some_and(|name| name == BARE_DIR) {
            resolved.parent().map(Path::to_path_buf)
        } else {
            None
        }
    }

    fn ensure_dir(&self, dir: &Path) -> Outcome {
        fs::create_dir_all(dir)
            .map(|_| format!("Created {}", dir.display()))
            .map_err(|e| GitError::io(format!("Failed to create {}", dir.display()), e))
            .into()
    }

    fn copy_file(&self, src: &Path, dest: &Path) -> Outcome {
        fs::copy(src, dest)
            .map(|_| format!("Copied {} to {}", src.display(), dest.display()))
            .map_err(|e| GitError::io(format!("Failed to copy {}", src.display()), e))
            .into()
    }

    fn symlink_file(&self, target: &Path, link: &Path) -> Outcome {
        replace_with_symlink(target, link)
            .map(|_| format!("Symlinked {} -> {}", link.display(), target.display()))
            .into()
    }
}

fn replace_with_symlink(target: &Path, link: &Path) -> Result<(), GitError> {
    if let Ok(meta) = fs::symlink_metadata(link) {
        if meta.is_dir() {
            return Err(GitError::Failed {
                message: format!("{} is a directory", link.display()),
            });
        }
        fs::remove_file(link)
            .map_err(|e| GitError::io(format!("Failed to replace {}", link.display()), e))?;
    }

    std::os::unix::fs::symlink(target, link)
        .map_err(|e| GitError::io(format!("Failed to symlink {}", link.display()), e))
}

/// Closest ancestor of `path` that exists, used as the working directory for
/// commands that create `path`.
fn existing_ancestor(path: &Path) -> PathBuf {
    path.ancestors()
        .skip(1)
        .find(|p| p.is_dir())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."))
}
