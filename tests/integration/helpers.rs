//! Shared test helpers for git-backed integration tests

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

use umbrella::git::GitProvider;
use umbrella::models::Outcome;
use umbrella::workflow::setup::create_umbrella;

/// Test helper: Run git in `dir`, panicking on failure
pub fn git(args: &[&str], dir: &Path) -> String {
    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .expect("Failed to run git");
    assert!(
        output.status.success(),
        "git {} failed: {}",
        args.join(" "),
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

/// Test helper: Create a temporary git repository with initial commit on `main`
pub fn init_test_repo() -> TempDir {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let repo_root = temp_dir.path();

    git(&["init"], repo_root);
    git(&["config", "user.email", "test@test.com"], repo_root);
    git(&["config", "user.name", "Test User"], repo_root);

    fs::write(repo_root.join("README.md"), "# Test Repository\n")
        .expect("Failed to write README.md");
    fs::write(repo_root.join(".gitignore"), ".env*\ntarget/\n")
        .expect("Failed to write .gitignore");

    git(&["add", "."], repo_root);
    git(&["commit", "-m", "Initial commit"], repo_root);
    git(&["branch", "-M", "main"], repo_root);

    temp_dir
}

/// Test helper: Create a branch in `repo_root` without checking it out
pub fn create_branch(name: &str, repo_root: &Path) {
    git(&["branch", name], repo_root);
}

/// Test helper: Build an umbrella next to a fresh "remote" repository.
///
/// Returns the temp dirs (remote, workspace) and the umbrella root.
pub fn init_test_umbrella() -> (TempDir, TempDir, PathBuf) {
    let remote = init_test_repo();
    create_branch("feature-a", remote.path());

    let workspace = TempDir::new().expect("Failed to create workspace");
    let umbrella_root = canonical(workspace.path()).join("app-worktrees");

    let outcome: Outcome = create_umbrella(
        &GitProvider::default(),
        &remote.path().to_string_lossy(),
        &umbrella_root,
    );
    assert!(outcome.success, "umbrella setup failed: {}", outcome.message);

    (remote, workspace, umbrella_root)
}

/// Test helper: Resolve symlinks in a temp path (macOS /var vs /private/var)
pub fn canonical(path: &Path) -> PathBuf {
    path.canonicalize().expect("Failed to canonicalize path")
}
