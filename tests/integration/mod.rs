//! Integration tests for umbrella
//!
//! These run the real `git` binary against temporary repositories to check
//! umbrella setup, worktree management and shared-file syncing end to end.

pub mod helpers;
pub mod setup_flow;
pub mod sharing;
pub mod worktrees;
