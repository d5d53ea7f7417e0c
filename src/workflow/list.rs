//! Worktree list with confirm-gated remove and prune

use std::path::PathBuf;

use tracing::{info, warn};

use crate::git::RepoProvider;
use crate::models::Worktree;

/// A mutating action waiting for a yes/no answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingAction {
    Remove { path: PathBuf, branch: String },
    Prune,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListEvent {
    Up,
    Down,
    Open,
    Refresh,
    RequestRemove,
    RequestPrune,
    Yes,
    No,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListSignal {
    None,
    Status(String),
    ClearStatus,
    /// The worktree list changed on disk
    Changed(String),
    /// Open a session in this worktree
    Open(PathBuf),
}

#[derive(Debug, Clone)]
pub struct ListWorkflow {
    repo: PathBuf,
    /// Every worktree git reports, bare entry included
    all: Vec<Worktree>,
    selected: usize,
    pending: Option<PendingAction>,
}

impl ListWorkflow {
    pub fn new(repo: impl Into<PathBuf>) -> Self {
        Self {
            repo: repo.into(),
            all: Vec::new(),
            selected: 0,
            pending: None,
        }
    }

    /// Re-fetch the whole worktree list.
    pub fn refresh(&mut self, provider: &dyn RepoProvider) {
        self.all = provider.list_worktrees(&self.repo).unwrap_or_else(|e| {
            warn!(error = %e, "could not list worktrees");
            Vec::new()
        });
        let len = self.worktrees().count();
        self.selected = self.selected.min(len.saturating_sub(1));
    }

    pub fn handle(&mut self, provider: &dyn RepoProvider, event: ListEvent) -> ListSignal {
        if let Some(action) = self.pending.clone() {
            return match event {
                ListEvent::Yes => self.perform(provider, action),
                ListEvent::No => {
                    self.pending = None;
                    ListSignal::ClearStatus
                }
                _ => ListSignal::None,
            };
        }

        match event {
            ListEvent::Up => {
                self.selected = self.selected.saturating_sub(1);
            }
            ListEvent::Down => {
                let last = self.worktrees().count().saturating_sub(1);
                self.selected = (self.selected + 1).min(last);
            }
            ListEvent::Open => {
                if let Some(wt) = self.selected_worktree() {
                    return ListSignal::Open(wt.path.clone());
                }
            }
            ListEvent::Refresh => {
                self.refresh(provider);
                return ListSignal::Changed("Refreshed worktree list".to_string());
            }
            ListEvent::RequestRemove => {
                if let Some(wt) = self.selected_worktree() {
                    self.pending = Some(PendingAction::Remove {
                        path: wt.path.clone(),
                        branch: wt.branch_label().to_string(),
                    });
                }
            }
            ListEvent::RequestPrune => self.pending = Some(PendingAction::Prune),
            ListEvent::Yes | ListEvent::No => {}
        }
        ListSignal::None
    }

    fn perform(&mut self, provider: &dyn RepoProvider, action: PendingAction) -> ListSignal {
        self.pending = None;
        let outcome = match &action {
            PendingAction::Remove { path, .. } => provider.remove_worktree(&self.repo, path, false),
            PendingAction::Prune => provider.prune_worktrees(&self.repo),
        };
        if outcome.success {
            info!(?action, "{}", outcome.message);
        } else {
            warn!(?action, error = %outcome.message, "worktree action failed");
        }

        self.refresh(provider);
        ListSignal::Changed(outcome.status_line())
    }

    /// Non-bare worktrees, in git's order.
    pub fn worktrees(&self) -> impl Iterator<Item = &Worktree> {
        self.all.iter().filter(|wt| !wt.bare)
    }

    pub fn all_worktrees(&self) -> &[Worktree] {
        &self.all
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_worktree(&self) -> Option<&Worktree> {
        self.worktrees().nth(self.selected)
    }

    pub fn pending(&self) -> Option<&PendingAction> {
        self.pending.as_ref()
    }
}
