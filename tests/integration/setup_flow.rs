//! Umbrella creation against a real remote

use serial_test::serial;
use std::fs;

use umbrella::git::{GitProvider, RepoProvider};
use umbrella::workflow::setup::create_umbrella;

use super::helpers::*;

#[test]
#[serial]
fn test_umbrella_layout() {
    let (_remote, _workspace, root) = init_test_umbrella();

    assert!(root.join(".bare").is_dir());
    assert_eq!(
        fs::read_to_string(root.join(".git")).unwrap(),
        "gitdir: ./.bare\n"
    );
    assert!(root.join("main").join("README.md").is_file());
    assert_eq!(git(&["branch", "--show-current"], &root.join("main")), "main");
}

#[test]
#[serial]
fn test_bare_store_tracks_remote_branches() {
    let (_remote, _workspace, root) = init_test_umbrella();

    let refspec = git(&["config", "remote.origin.fetch"], &root.join(".bare"));
    assert_eq!(refspec, "+refs/heads/*:refs/remotes/origin/*");

    let branches = GitProvider::default()
        .list_branches(&root.join("main"))
        .unwrap();
    assert!(branches
        .iter()
        .any(|b| b.is_remote && b.name == "origin/feature-a"));
    assert!(branches.iter().any(|b| !b.is_remote && b.name == "feature-a"));
}

#[test]
#[serial]
fn test_umbrella_root_detected_from_worktree() {
    let (_remote, _workspace, root) = init_test_umbrella();
    let provider = GitProvider::default();

    assert_eq!(provider.umbrella_root(&root.join("main")), Some(root.clone()));
    assert_eq!(provider.umbrella_root(&root), Some(root.clone()));
}

#[test]
#[serial]
fn test_plain_repository_is_not_an_umbrella() {
    let repo = init_test_repo();
    let provider = GitProvider::default();

    assert_eq!(provider.umbrella_root(repo.path()), None);

    let info = provider.repo_info(repo.path()).unwrap();
    assert_eq!(info.root, canonical(repo.path()));
    assert_eq!(info.remote, "");
    assert_eq!(info.current_branch, "main");
}

#[test]
#[serial]
fn test_outside_git_has_no_repo_info() {
    let dir = tempfile::TempDir::new().unwrap();
    let provider = GitProvider::default();

    assert!(provider.repo_info(dir.path()).is_none());
    assert!(provider.umbrella_root(dir.path()).is_none());
}

#[test]
#[serial]
fn test_unreachable_remote_stops_setup() {
    let workspace = tempfile::TempDir::new().unwrap();
    let root = workspace.path().join("ghost-worktrees");
    let missing = workspace.path().join("no-such-remote");

    let outcome = create_umbrella(
        &GitProvider::default(),
        &missing.to_string_lossy(),
        &root,
    );

    assert!(!outcome.success);
    assert!(!outcome.message.is_empty());
    assert!(!root.join(".git").exists());
    assert!(!root.join("main").exists());
}
