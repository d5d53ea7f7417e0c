//! Git output parsing
//!
//! Turns porcelain and plain-text git output into structured data.

use std::path::PathBuf;

use crate::models::constants::DS_STORE;
use crate::models::{Branch, Worktree};

/// Parse git worktree list --porcelain output
///
/// Example input:
/// ```text
/// worktree /home/user/app-worktrees/.bare
/// bare
///
/// worktree /home/user/app-worktrees/main
/// HEAD abc123def456
/// branch refs/heads/main
///
/// worktree /home/user/app-worktrees/spike
/// HEAD def789abc012
/// detached
/// ```
pub fn parse_worktree_list(output: &str) -> Vec<Worktree> {
    let mut worktrees = Vec::new();
    let mut current: Option<Worktree> = None;

    for line in output.lines() {
        if let Some(path) = line.strip_prefix("worktree ") {
            if let Some(wt) = current.take() {
                worktrees.push(wt);
            }
            current = Some(Worktree {
                path: PathBuf::from(path),
                head: String::new(),
                branch: None,
                bare: false,
                detached: false,
            });
        } else if let Some(head) = line.strip_prefix("HEAD ") {
            if let Some(ref mut wt) = current {
                wt.head = head.to_string();
            }
        } else if let Some(branch_line) = line.strip_prefix("branch ") {
            if let Some(ref mut wt) = current {
                let branch_name = branch_line
                    .strip_prefix("refs/heads/")
                    .unwrap_or(branch_line);
                wt.branch = Some(branch_name.to_string());
            }
        } else if line == "bare" {
            if let Some(ref mut wt) = current {
                wt.bare = true;
            }
        } else if line == "detached" {
            if let Some(ref mut wt) = current {
                wt.detached = true;
            }
        }
    }

    if let Some(wt) = current {
        worktrees.push(wt);
    }

    worktrees
}

/// Parse `git branch -a --no-color` output
///
/// The current branch is marked with `* ` (branches checked out in another
/// worktree get `+ `), remote branches carry a `remotes/` prefix. Symbolic
/// `HEAD -> ...` aliases and `(HEAD detached at ...)` entries are dropped.
pub fn parse_branch_list(output: &str) -> Vec<Branch> {
    output
        .lines()
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| {
            let current = line.starts_with("* ");
            let name = line.trim_start_matches(['*', '+']).trim();
            if name.contains("HEAD ->") || name.starts_with('(') {
                return None;
            }
            let (name, is_remote) = match name.strip_prefix("remotes/") {
                Some(remote) => (remote, true),
                None => (name, false),
            };
            Some(Branch {
                name: name.to_string(),
                is_remote,
                current,
            })
        })
        .collect()
}

/// Combine the two untracked listings into the set of files offered for sharing.
///
/// Both listings are `git ls-files -z` output: NUL-separated and unquoted.
/// From the standard listing (`--others --exclude-standard`) only non-hidden
/// files are kept. From the ignored listing only files whose basename starts
/// with `env_prefix` are kept, so local env files make it in while build
/// output stays out.
pub fn filter_untracked(standard: &str, ignored: &str, env_prefix: &str) -> Vec<String> {
    let standard = nul_entries(standard).filter(|f| {
        let name = basename(f);
        !name.starts_with('.') && name != DS_STORE
    });

    let env_files = nul_entries(ignored).filter(|f| basename(f).starts_with(env_prefix));

    standard.chain(env_files).map(String::from).collect()
}

fn nul_entries(output: &str) -> impl Iterator<Item = &str> {
    output.split('\0').filter(|f| !f.is_empty())
}

fn basename(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}
