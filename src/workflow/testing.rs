//! Scripted repository for workflow tests

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use crate::git::{GitError, RepoProvider};
use crate::models::{Branch, Outcome, RepoInfo, Worktree};

/// In-memory `RepoProvider` that records every mutating call.
///
/// Operations named in `failing` report failure with `"<op> failed"`.
#[derive(Default)]
pub struct FakeProvider {
    pub worktrees: RefCell<Vec<Worktree>>,
    pub branches: Vec<Branch>,
    pub untracked: HashMap<PathBuf, Vec<String>>,
    pub default_branch: Option<String>,
    pub repo: Option<RepoInfo>,
    pub umbrella: Option<PathBuf>,
    pub failing: HashSet<&'static str>,
    pub calls: RefCell<Vec<String>>,
    pub copies: RefCell<Vec<(PathBuf, PathBuf)>>,
    pub links: RefCell<Vec<(PathBuf, PathBuf)>>,
}

impl FakeProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_worktrees(self, worktrees: Vec<Worktree>) -> Self {
        self.worktrees.replace(worktrees);
        self
    }

    pub fn with_branches(mut self, names: &[&str]) -> Self {
        self.branches = names.iter().map(|n| Branch::local(*n)).collect();
        self
    }

    pub fn with_untracked(mut self, worktree: impl Into<PathBuf>, files: &[&str]) -> Self {
        self.untracked.insert(
            worktree.into(),
            files.iter().map(|f| f.to_string()).collect(),
        );
        self
    }

    pub fn failing(mut self, op: &'static str) -> Self {
        self.failing.insert(op);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn record(&self, op: &'static str, detail: String) -> Outcome {
        self.calls.borrow_mut().push(format!("{op} {detail}").trim_end().to_string());
        if self.failing.contains(op) {
            Outcome::failed(format!("{op} failed"))
        } else {
            Outcome::ok(format!("{op} ok"))
        }
    }

    fn query(&self, op: &'static str) -> Result<(), GitError> {
        if self.failing.contains(op) {
            Err(GitError::Failed {
                message: format!("{op} failed"),
            })
        } else {
            Ok(())
        }
    }
}

pub fn worktree(path: &str, branch: Option<&str>) -> Worktree {
    Worktree {
        path: PathBuf::from(path),
        head: "0123456789abcdef".to_string(),
        branch: branch.map(str::to_string),
        bare: false,
        detached: branch.is_none(),
    }
}

pub fn bare(path: &str) -> Worktree {
    Worktree {
        path: PathBuf::from(path),
        head: String::new(),
        branch: None,
        bare: true,
        detached: false,
    }
}

impl RepoProvider for FakeProvider {
    fn list_worktrees(&self, _repo: &Path) -> Result<Vec<Worktree>, GitError> {
        self.query("list_worktrees")?;
        Ok(self.worktrees.borrow().clone())
    }

    fn list_branches(&self, _repo: &Path) -> Result<Vec<Branch>, GitError> {
        self.query("list_branches")?;
        Ok(self.branches.clone())
    }

    fn list_untracked_files(&self, worktree: &Path) -> Result<Vec<String>, GitError> {
        self.query("list_untracked_files")?;
        Ok(self.untracked.get(worktree).cloned().unwrap_or_default())
    }

    fn add_worktree(&self, _repo: &Path, path: &Path, branch: &str, create_new: bool) -> Outcome {
        let outcome = self.record(
            "add_worktree",
            format!("{} {branch} {create_new}", path.display()),
        );
        if outcome.success {
            self.worktrees
                .borrow_mut()
                .push(worktree(&path.to_string_lossy(), Some(branch)));
            return Outcome::ok(format!("Worktree created at {}", path.display()));
        }
        outcome
    }

    fn remove_worktree(&self, _repo: &Path, path: &Path, force: bool) -> Outcome {
        let outcome = self.record("remove_worktree", format!("{} {force}", path.display()));
        if outcome.success {
            self.worktrees.borrow_mut().retain(|wt| wt.path != path);
            return Outcome::ok(format!("Worktree removed: {}", path.display()));
        }
        outcome
    }

    fn prune_worktrees(&self, _repo: &Path) -> Outcome {
        let outcome = self.record("prune_worktrees", String::new());
        if outcome.success {
            return Outcome::ok("Stale worktree references pruned");
        }
        outcome
    }

    fn clone_bare(&self, remote: &str, target: &Path) -> Outcome {
        self.record("clone_bare", format!("{remote} {}", target.display()))
    }

    fn write_gitdir_pointer(&self, umbrella_root: &Path) -> Outcome {
        self.record("write_gitdir_pointer", umbrella_root.display().to_string())
    }

    fn configure_bare_fetch(&self, bare_dir: &Path) -> Outcome {
        self.record("configure_bare_fetch", bare_dir.display().to_string())
    }

    fn fetch_origin(&self, repo: &Path) -> Outcome {
        self.record("fetch_origin", repo.display().to_string())
    }

    fn default_branch(&self, _bare_dir: &Path) -> Result<String, GitError> {
        self.query("default_branch")?;
        self.default_branch.clone().ok_or_else(|| GitError::Failed {
            message: "no HEAD".to_string(),
        })
    }

    fn repo_info(&self, _cwd: &Path) -> Option<RepoInfo> {
        self.repo.clone()
    }

    fn umbrella_root(&self, _cwd: &Path) -> Option<PathBuf> {
        self.umbrella.clone()
    }

    fn ensure_dir(&self, _dir: &Path) -> Outcome {
        Outcome::ok("")
    }

    fn copy_file(&self, src: &Path, dest: &Path) -> Outcome {
        let outcome = self.record("copy_file", src.display().to_string());
        if outcome.success {
            self.copies
                .borrow_mut()
                .push((src.to_path_buf(), dest.to_path_buf()));
        }
        outcome
    }

    fn symlink_file(&self, target: &Path, link: &Path) -> Outcome {
        let outcome = self.record("symlink_file", link.display().to_string());
        if outcome.success {
            self.links
                .borrow_mut()
                .push((target.to_path_buf(), link.to_path_buf()));
        }
        outcome
    }
}
