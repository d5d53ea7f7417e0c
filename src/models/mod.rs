pub mod constants;
pub mod outcome;
pub mod worktree;

pub use outcome::Outcome;
pub use worktree::{available_branches, Branch, RepoInfo, Worktree};
