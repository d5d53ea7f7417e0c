//! Symlink every shared file into a worktree.
//! Usage: umbrella link <WORKTREE>

use std::path::Path;

use anyhow::{bail, Result};
use colored::Colorize;

use crate::config::Config;
use crate::git::{GitProvider, RepoProvider};
use crate::share::{list_shared, symlink_from_shared};
use crate::utils::{display_path, pluralize};

/// Execute the link command
///
/// `worktree` is resolved against `cwd` and must sit inside an umbrella.
pub fn execute(worktree: &Path, cwd: &Path, config: &Config) -> Result<()> {
    let worktree = cwd.join(worktree);
    if !worktree.is_dir() {
        bail!("Worktree directory not found: {}", worktree.display());
    }

    let provider = GitProvider::from_config(config);
    let Some(root) = provider.umbrella_root(&worktree) else {
        bail!("{} is not inside a worktree umbrella", worktree.display());
    };

    let expected = list_shared(&root).len();
    let linked = symlink_from_shared(&provider, &root, &worktree, None);

    println!(
        "{} Linked {} into {}",
        "✓".green().bold(),
        pluralize(linked, "file"),
        display_path(&worktree)
    );
    if linked < expected {
        println!(
            "{} {} could not be linked (see log)",
            "!".yellow().bold(),
            pluralize(expected - linked, "file")
        );
    }
    Ok(())
}
