//! Print the worktrees of the current umbrella or repository.
//! Usage: umbrella list

use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;

use super::worktree_root;
use crate::config::Config;
use crate::git::{GitProvider, RepoProvider};
use crate::models::Worktree;
use crate::share::list_shared;
use crate::utils::{display_path, pluralize};

/// Execute the list command
pub fn execute(cwd: &Path, config: &Config) -> Result<()> {
    let provider = GitProvider::from_config(config);
    let root = worktree_root(&provider, cwd)?;
    let worktrees = provider
        .list_worktrees(&root)
        .with_context(|| format!("Failed to list worktrees in {}", root.display()))?;

    println!("Worktrees in {}:", display_path(&root));
    println!("{}", "─".repeat(50).dimmed());

    let visible: Vec<&Worktree> = worktrees.iter().filter(|wt| !wt.bare).collect();
    if visible.is_empty() {
        println!("(no worktrees found)");
    }
    for line in visible.iter().map(|wt| format_worktree(wt)) {
        println!("{line}");
    }

    let shared = list_shared(&root);
    if !shared.is_empty() {
        println!();
        println!(
            "{}",
            format!("{} in the shared store", pluralize(shared.len(), "file")).dimmed()
        );
    }
    Ok(())
}

fn format_worktree(wt: &Worktree) -> String {
    let label = format!("{:<24}", wt.branch_label());
    let label = if wt.detached {
        label.yellow()
    } else {
        label.green().bold()
    };
    format!(
        "  {label} {}  {}",
        wt.short_head().dimmed(),
        display_path(&wt.path)
    )
}
