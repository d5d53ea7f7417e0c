//! Shared-file synchronization
//!
//! Untracked files worth keeping across worktrees (`.env` and friends) live
//! once under `<umbrella>/.shared/` and every worktree links to that copy.
//! All operations here are best effort per file: a failing file is logged
//! and left out of the returned count, never aborting the rest.

use std::path::{Path, PathBuf};

use glob::{glob_with, MatchOptions, Pattern};
use tracing::{debug, warn};

use crate::git::RepoProvider;
use crate::models::constants::SHARED_DIR;

/// Directory holding the canonical copies for `umbrella_root`.
pub fn shared_dir(umbrella_root: &Path) -> PathBuf {
    umbrella_root.join(SHARED_DIR)
}

/// Copy `paths` (relative to `source_root`) into the shared store.
///
/// Returns how many files were copied.
pub fn copy_to_shared<P: RepoProvider + ?Sized>(
    provider: &P,
    source_root: &Path,
    paths: &[String],
    umbrella_root: &Path,
) -> usize {
    copied_to_shared(provider, source_root, paths, umbrella_root).len()
}

/// [`copy_to_shared`], returning the paths that made it into the store.
pub fn copied_to_shared<P: RepoProvider + ?Sized>(
    provider: &P,
    source_root: &Path,
    paths: &[String],
    umbrella_root: &Path,
) -> Vec<String> {
    let store = shared_dir(umbrella_root);
    let mut copied = Vec::with_capacity(paths.len());

    for path in paths {
        let src = source_root.join(path);
        let dest = store.join(path);

        if let Some(parent) = dest.parent() {
            let outcome = provider.ensure_dir(parent);
            if !outcome.success {
                warn!(file = %path, error = %outcome.message, "could not create shared directory");
                continue;
            }
        }

        let outcome = provider.copy_file(&src, &dest);
        if outcome.success {
            copied.push(path.clone());
        } else {
            warn!(file = %path, error = %outcome.message, "could not copy file to shared store");
        }
    }

    debug!(copied = copied.len(), requested = paths.len(), "copied files to shared store");
    copied
}

/// Link shared files into `worktree`, replacing whatever is at each destination.
///
/// With `paths` of `None` the whole shared store is linked. Returns how many
/// links were created; running it again yields the same links and count.
pub fn symlink_from_shared<P: RepoProvider + ?Sized>(
    provider: &P,
    umbrella_root: &Path,
    worktree: &Path,
    paths: Option<&[String]>,
) -> usize {
    let store = shared_dir(umbrella_root);
    let listed;
    let paths = match paths {
        Some(paths) => paths,
        None => {
            listed = list_shared(umbrella_root);
            &listed[..]
        }
    };

    let mut count = 0;
    for path in paths {
        let target = store.join(path);
        let link = worktree.join(path);

        if let Some(parent) = link.parent() {
            let outcome = provider.ensure_dir(parent);
            if !outcome.success {
                warn!(file = %path, error = %outcome.message, "could not create link directory");
            }
        }

        let outcome = provider.symlink_file(&target, &link);
        if outcome.success {
            count += 1;
        } else {
            warn!(file = %path, error = %outcome.message, "could not link shared file");
        }
    }

    debug!(linked = count, worktree = %worktree.display(), "linked shared files");
    count
}

/// Relative paths of every file in the shared store, sorted.
///
/// A missing store is simply empty.
pub fn list_shared(umbrella_root: &Path) -> Vec<String> {
    let store = shared_dir(umbrella_root);
    if !store.is_dir() {
        return Vec::new();
    }

    // The store path is literal; only the trailing components are a pattern.
    let pattern = format!("{}/**/*", Pattern::escape(&store.to_string_lossy()));
    let options = MatchOptions {
        require_literal_leading_dot: false,
        ..MatchOptions::new()
    };
    let entries = match glob_with(&pattern, options) {
        Ok(entries) => entries,
        Err(e) => {
            warn!(store = %store.display(), error = %e, "invalid shared store pattern");
            return Vec::new();
        }
    };

    let mut files: Vec<String> = entries
        .filter_map(|entry| entry.ok())
        .filter(|path| path.is_file())
        .filter_map(|path| {
            let rel = path.strip_prefix(&store).ok()?;
            let parts: Vec<String> = rel
                .components()
                .map(|c| c.as_os_str().to_string_lossy().into_owned())
                .collect();
            Some(parts.join("/"))
        })
        .collect();
    files.sort();
    files.dedup();
    files
}
