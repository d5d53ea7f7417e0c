//! Git plumbing for worktree umbrellas
//!
//! This module provides:
//! - The `RepoProvider` boundary every workflow talks to
//! - `GitProvider`, the implementation that shells out to `git`
//! - Porcelain output parsing and error normalization
//! - A timeout-bounded command runner

mod checks;
mod error;
mod operations;
mod parser;
mod provider;
mod runner;

pub use checks::check_git_available;
pub use error::{normalize_git_error, GitError};
pub use operations::GitProvider;
pub use parser::{filter_untracked, parse_branch_list, parse_worktree_list};
pub use provider::RepoProvider;
pub use runner::{run_git, run_git_bool, run_git_checked, run_git_raw};
