/// Directory holding the bare clone, relative to the umbrella root.
pub const BARE_DIR: &str = ".bare";

/// Directory holding the canonical copies of shared files, relative to the umbrella root.
pub const SHARED_DIR: &str = ".shared";

/// Directory name of the first worktree created by setup.
pub const MAIN_WORKTREE: &str = "main";

/// Branch checked out into the first worktree when the bare store has no usable HEAD.
pub const FALLBACK_BRANCH: &str = "main";

/// Suffix appended to the project name to form the umbrella directory.
pub const UMBRELLA_SUFFIX: &str = "-worktrees";

/// Contents of the `.git` pointer file written at the umbrella root.
pub const GITDIR_POINTER: &str = "gitdir: ./.bare\n";

/// Fetch refspec installed on the bare clone so remote branches are tracked.
pub const BARE_FETCH_REFSPEC: &str = "+refs/heads/*:refs/remotes/origin/*";

/// Default basename prefix for ignored files that are still offered for sharing.
pub const DEFAULT_ENV_PREFIX: &str = ".env";

/// macOS metadata file that is never worth sharing.
pub const DS_STORE: &str = "DS_Store";
