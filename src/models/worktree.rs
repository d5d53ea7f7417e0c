use std::collections::HashSet;
use std::path::PathBuf;

/// A git worktree as reported by `git worktree list --porcelain`.
///
/// Never patched in place: any add or remove re-fetches the whole list.
/// Identity is `path`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Worktree {
    /// Absolute path to the worktree directory
    pub path: PathBuf,
    /// Commit the worktree HEAD points at
    pub head: String,
    /// Short branch name (e.g., "feature/login"), None when detached or bare
    pub branch: Option<String>,
    pub bare: bool,
    pub detached: bool,
}

impl Worktree {
    /// Branch name for display, `(detached)` when there is none.
    pub fn branch_label(&self) -> &str {
        self.branch.as_deref().unwrap_or("(detached)")
    }

    /// First eight characters of the HEAD commit.
    pub fn short_head(&self) -> &str {
        let end = self
            .head
            .char_indices()
            .nth(8)
            .map(|(idx, _)| idx)
            .unwrap_or(self.head.len());
        &self.head[..end]
    }
}

/// A branch as reported by `git branch -a`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Branch {
    /// Branch name; remote branches keep their remote prefix (e.g., "origin/main")
    pub name: String,
    pub is_remote: bool,
    /// Whether this is the branch checked out where the listing ran
    pub current: bool,
}

impl Branch {
    pub fn local(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_remote: false,
            current: false,
        }
    }
}

/// Facts about the repository surrounding the start directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoInfo {
    pub root: PathBuf,
    /// URL of the `origin` remote, empty when there is none
    pub remote: String,
    pub current_branch: String,
}

/// Local branches not checked out by any known worktree.
///
/// Must be recomputed whenever either list changes.
pub fn available_branches(worktrees: &[Worktree], branches: &[Branch]) -> Vec<Branch> {
    let checked_out: HashSet<&str> = worktrees
        .iter()
        .filter_map(|wt| wt.branch.as_deref())
        .collect();

    branches
        .iter()
        .filter(|b| !b.is_remote && !checked_out.contains(b.name.as_str()))
        .cloned()
        .collect()
}
