//! Guided workflows
//!
//! Each workflow is an explicit phase plus a `handle` transition taking one
//! input event and returning a signal for the surrounding application. All
//! repository access goes through a [`RepoProvider`](crate::git::RepoProvider).
//!
//! ## Module structure
//!
//! - `add`: Add-worktree form and the file-sharing follow-up
//! - `setup`: Umbrella creation from a remote or an existing repository
//! - `list`: Worktree list with confirm-gated remove and prune

pub mod add;
pub mod list;
pub mod setup;

#[cfg(test)]
pub(crate) mod testing;

pub use add::{AddEvent, AddPhase, AddSignal, AddWorkflow, Field, ShareSelection, ValidationError};
pub use list::{ListEvent, ListSignal, ListWorkflow, PendingAction};
pub use setup::{SetupEvent, SetupPhase, SetupSignal, SetupSource, SetupWorkflow};
