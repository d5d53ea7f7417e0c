//! Worktree add, list, remove and prune inside an umbrella

use serial_test::serial;
use std::fs;

use umbrella::git::{GitProvider, RepoProvider};

use super::helpers::*;

#[test]
#[serial]
fn test_listing_includes_bare_entry_and_main() {
    let (_remote, _workspace, root) = init_test_umbrella();

    let worktrees = GitProvider::default().list_worktrees(&root).unwrap();

    assert_eq!(worktrees.iter().filter(|wt| wt.bare).count(), 1);
    let main = worktrees.iter().find(|wt| !wt.bare).unwrap();
    assert_eq!(main.path, root.join("main"));
    assert_eq!(main.branch.as_deref(), Some("main"));
    assert_eq!(main.head.len(), 40);
}

#[test]
#[serial]
fn test_add_existing_and_new_branch() {
    let (_remote, _workspace, root) = init_test_umbrella();
    let provider = GitProvider::default();

    let existing = provider.add_worktree(&root, &root.join("feature-a"), "feature-a", false);
    assert!(existing.success, "{}", existing.message);

    let created = provider.add_worktree(&root, &root.join("feature-b"), "feature-b", true);
    assert!(created.success, "{}", created.message);

    let branches: Vec<Option<String>> = provider
        .list_worktrees(&root)
        .unwrap()
        .into_iter()
        .filter(|wt| !wt.bare)
        .map(|wt| wt.branch)
        .collect();
    assert!(branches.contains(&Some("feature-a".to_string())));
    assert!(branches.contains(&Some("feature-b".to_string())));
}

#[test]
#[serial]
fn test_add_checked_out_branch_fails_with_git_message() {
    let (_remote, _workspace, root) = init_test_umbrella();

    let outcome =
        GitProvider::default().add_worktree(&root, &root.join("again"), "main", false);

    assert!(!outcome.success);
    assert!(!outcome.message.contains('\n'));
    assert!(!outcome.message.starts_with("fatal:"));
}

#[test]
#[serial]
fn test_remove_then_prune() {
    let (_remote, _workspace, root) = init_test_umbrella();
    let provider = GitProvider::default();
    let path = root.join("feature-a");
    assert!(provider.add_worktree(&root, &path, "feature-a", false).success);

    let removed = provider.remove_worktree(&root, &path, false);
    assert!(removed.success, "{}", removed.message);
    assert!(!path.exists());

    // A worktree deleted behind git's back leaves a stale entry.
    let stale = root.join("stale");
    assert!(provider.add_worktree(&root, &stale, "feature-c", true).success);
    fs::remove_dir_all(&stale).unwrap();

    assert!(provider.prune_worktrees(&root).success);
    let remaining = provider.list_worktrees(&root).unwrap();
    assert!(remaining.iter().all(|wt| wt.path != stale));
}

#[test]
#[serial]
fn test_remove_dirty_worktree_fails_without_force() {
    let (_remote, _workspace, root) = init_test_umbrella();
    let provider = GitProvider::default();
    let path = root.join("dirty");
    assert!(provider.add_worktree(&root, &path, "dirty", true).success);
    fs::write(path.join("scratch.txt"), "wip").unwrap();

    assert!(!provider.remove_worktree(&root, &path, false).success);
    assert!(provider.remove_worktree(&root, &path, true).success);
}
