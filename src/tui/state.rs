//! State types for the TUI application.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::git::RepoProvider;
use crate::utils::display_path;
use crate::workflow::{AddSignal, AddWorkflow, ListSignal, ListWorkflow, SetupWorkflow};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Worktrees,
    Add,
    Help,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Worktrees, Tab::Add, Tab::Help];

    pub fn title(self) -> &'static str {
        match self {
            Tab::Worktrees => "Worktrees",
            Tab::Add => "Add",
            Tab::Help => "Help",
        }
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|t| *t == self).unwrap_or(0)
    }

    pub fn next(self) -> Tab {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Tab {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Everything shown once an umbrella is open.
pub struct MainState {
    pub root: PathBuf,
    pub tab: Tab,
    pub status: Option<String>,
    pub list: ListWorkflow,
    pub add: AddWorkflow,
    pub help_scroll: u16,
}

impl MainState {
    pub fn new(root: &Path, selector_height: usize, provider: &dyn RepoProvider) -> Self {
        let mut state = Self {
            root: root.to_path_buf(),
            tab: Tab::Worktrees,
            status: None,
            list: ListWorkflow::new(root),
            add: AddWorkflow::new(root, selector_height),
            help_scroll: 0,
        };
        state.list.refresh(provider);
        state.sync_add_form(provider);
        state
    }

    /// Feed the current worktrees and branches to the add form.
    pub fn sync_add_form(&mut self, provider: &dyn RepoProvider) {
        let branches = provider.list_branches(&self.root).unwrap_or_else(|e| {
            warn!(error = %e, "could not list branches");
            Vec::new()
        });
        self.add
            .set_repo_state(self.list.all_worktrees().to_vec(), branches);
    }

    pub fn apply_list_signal(&mut self, provider: &dyn RepoProvider, signal: ListSignal) {
        match signal {
            ListSignal::None => {}
            ListSignal::Status(message) => self.status = Some(message),
            ListSignal::ClearStatus => self.status = None,
            ListSignal::Changed(message) => {
                self.status = Some(message);
                self.sync_add_form(provider);
            }
            ListSignal::Open(path) => {
                info!(path = %path.display(), "open requested");
                self.status = Some(format!("Open requested for {}", display_path(&path)));
            }
        }
    }

    pub fn apply_add_signal(&mut self, provider: &dyn RepoProvider, signal: AddSignal) {
        match signal {
            AddSignal::None => {}
            AddSignal::Status(message) => self.status = Some(message),
            AddSignal::Created(message) => {
                self.status = Some(message);
                self.list.refresh(provider);
                self.sync_add_form(provider);
                self.tab = Tab::Worktrees;
            }
        }
    }

    /// Label shown next to the logo.
    pub fn repo_label(&self) -> String {
        self.root
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| display_path(&self.root))
    }
}

pub enum Screen {
    Setup(SetupWorkflow),
    Main(Box<MainState>),
}
