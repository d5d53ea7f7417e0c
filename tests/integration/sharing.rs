//! Untracked-file discovery and the shared store

use serial_test::serial;
use std::fs;

use umbrella::git::{GitProvider, RepoProvider};
use umbrella::share::{copy_to_shared, list_shared, shared_dir, symlink_from_shared};

use super::helpers::*;

#[test]
#[serial]
fn test_untracked_files_offered_for_sharing() {
    let repo = init_test_repo();
    let root = repo.path();
    fs::write(root.join("notes.txt"), "notes").unwrap();
    fs::write(root.join(".env"), "KEY=1").unwrap();
    fs::create_dir_all(root.join("config")).unwrap();
    fs::write(root.join("config/.env.local"), "KEY=2").unwrap();
    fs::write(root.join(".hidden"), "x").unwrap();
    fs::create_dir_all(root.join("target")).unwrap();
    fs::write(root.join("target/out.o"), "bin").unwrap();

    let mut files = GitProvider::default().list_untracked_files(root).unwrap();
    files.sort();

    assert_eq!(files, vec![".env", "config/.env.local", "notes.txt"]);
}

#[test]
#[serial]
fn test_non_ascii_names_are_shared_unquoted() {
    let (_remote, _workspace, root) = init_test_umbrella();
    let provider = GitProvider::default();
    let main = root.join("main");
    fs::write(main.join("caf\u{e9}.txt"), "menu").unwrap();
    fs::write(main.join("with space.txt"), "x").unwrap();

    let mut files = provider.list_untracked_files(&main).unwrap();
    files.sort();
    assert_eq!(files, vec!["caf\u{e9}.txt", "with space.txt"]);

    assert_eq!(copy_to_shared(&provider, &main, &files, &root), 2);
    assert_eq!(
        fs::read_to_string(shared_dir(&root).join("caf\u{e9}.txt")).unwrap(),
        "menu"
    );
}

#[test]
#[serial]
fn test_clean_repository_has_nothing_to_share() {
    let repo = init_test_repo();
    let files = GitProvider::default()
        .list_untracked_files(repo.path())
        .unwrap();
    assert!(files.is_empty());
}

#[test]
#[serial]
fn test_share_into_new_worktree() {
    let (_remote, _workspace, root) = init_test_umbrella();
    let provider = GitProvider::default();
    let main = root.join("main");
    fs::write(main.join(".env"), "SECRET=1").unwrap();
    fs::create_dir_all(main.join("config")).unwrap();
    fs::write(main.join("config/local.toml"), "debug = true").unwrap();

    let files = provider.list_untracked_files(&main).unwrap();
    assert_eq!(files.len(), 2);

    assert_eq!(copy_to_shared(&provider, &main, &files, &root), 2);
    assert_eq!(list_shared(&root), vec![".env", "config/local.toml"]);

    let feature = root.join("feature-a");
    assert!(provider.add_worktree(&root, &feature, "feature-a", false).success);
    assert_eq!(symlink_from_shared(&provider, &root, &feature, None), 2);

    let link = feature.join("config/local.toml");
    assert_eq!(
        fs::read_link(&link).unwrap(),
        shared_dir(&root).join("config/local.toml")
    );
    assert_eq!(fs::read_to_string(feature.join(".env")).unwrap(), "SECRET=1");

    // Edits through one link are visible through the store.
    fs::write(&link, "debug = false").unwrap();
    assert_eq!(
        fs::read_to_string(shared_dir(&root).join("config/local.toml")).unwrap(),
        "debug = false"
    );
}

#[test]
#[serial]
fn test_linked_env_file_stays_a_link() {
    let (_remote, _workspace, root) = init_test_umbrella();
    let provider = GitProvider::default();
    let main = root.join("main");
    fs::write(main.join(".env"), "SECRET=1").unwrap();
    copy_to_shared(&provider, &main, &[".env".to_string()], &root);
    symlink_from_shared(&provider, &root, &main, None);

    // Symlinked .env is still ignored, so it is listed, but stays a link.
    let files = provider.list_untracked_files(&main).unwrap();
    assert_eq!(files, vec![".env"]);
    assert!(fs::symlink_metadata(main.join(".env"))
        .unwrap()
        .file_type()
        .is_symlink());
}
