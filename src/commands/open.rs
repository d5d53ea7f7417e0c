//! Launch the TUI for whatever the working directory turns out to be.
//! Usage: umbrella [open]

use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use tracing::info;

use crate::config::Config;
use crate::git::{GitProvider, RepoProvider};
use crate::tui::{run_setup, run_umbrella};
use crate::workflow::SetupSource;

pub const NO_REMOTE_MESSAGE: &str =
    "No remote found. An origin remote is required to set up a worktree umbrella.";

/// What the working directory calls for.
#[derive(Debug, PartialEq, Eq)]
pub enum Launch {
    /// Inside an existing umbrella
    Umbrella(PathBuf),
    /// Offer to build an umbrella
    Setup(SetupSource),
    /// Inside a repository without an `origin` remote
    NoRemote,
}

/// Umbrella first, then plain repository, then an empty directory.
pub fn detect<P: RepoProvider + ?Sized>(provider: &P, cwd: &Path) -> Launch {
    if let Some(root) = provider.umbrella_root(cwd) {
        return Launch::Umbrella(root);
    }
    match provider.repo_info(cwd) {
        Some(info) if info.remote.is_empty() => Launch::NoRemote,
        Some(info) => Launch::Setup(SetupSource::FromRepo {
            remote: info.remote,
            repo_root: info.root,
        }),
        None => Launch::Setup(SetupSource::Fresh {
            cwd: cwd.to_path_buf(),
        }),
    }
}

/// Execute the open command
pub fn execute(cwd: &Path, config: &Config) -> Result<()> {
    let provider = GitProvider::from_config(config);
    let launch = detect(&provider, cwd);
    info!(cwd = %cwd.display(), ?launch, "starting");

    match launch {
        Launch::Umbrella(root) => run_umbrella(&root, &provider, config.selector_height),
        Launch::Setup(source) => run_setup(source, &provider, config.selector_height),
        Launch::NoRemote => bail!(NO_REMOTE_MESSAGE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RepoInfo;
    use crate::workflow::testing::FakeProvider;

    fn repo(remote: &str) -> RepoInfo {
        RepoInfo {
            root: PathBuf::from("/code/app"),
            remote: remote.to_string(),
            current_branch: "main".to_string(),
        }
    }

    #[test]
    fn test_umbrella_wins_over_repository() {
        let provider = FakeProvider {
            umbrella: Some(PathBuf::from("/code/app-worktrees")),
            repo: Some(repo("git@host:org/app.git")),
            ..FakeProvider::default()
        };
        assert_eq!(
            detect(&provider, Path::new("/code/app-worktrees/main")),
            Launch::Umbrella(PathBuf::from("/code/app-worktrees"))
        );
    }

    #[test]
    fn test_repository_with_remote_offers_conversion() {
        let provider = FakeProvider {
            repo: Some(repo("git@host:org/app.git")),
            ..FakeProvider::default()
        };
        assert_eq!(
            detect(&provider, Path::new("/code/app/src")),
            Launch::Setup(SetupSource::FromRepo {
                remote: "git@host:org/app.git".to_string(),
                repo_root: PathBuf::from("/code/app"),
            })
        );
    }

    #[test]
    fn test_repository_without_remote_is_refused() {
        let provider = FakeProvider {
            repo: Some(repo("")),
            ..FakeProvider::default()
        };
        assert_eq!(detect(&provider, Path::new("/code/app")), Launch::NoRemote);
    }

    #[test]
    fn test_outside_git_starts_fresh() {
        let provider = FakeProvider::new();
        assert_eq!(
            detect(&provider, Path::new("/tmp/empty")),
            Launch::Setup(SetupSource::Fresh {
                cwd: PathBuf::from("/tmp/empty"),
            })
        );
    }
}
