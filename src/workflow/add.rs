//! Add-worktree form and its file-sharing follow-up

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{info, warn};

use crate::git::RepoProvider;
use crate::models::{available_branches, Branch, Worktree};
use crate::select::{FileSelector, SelectorEvent, SelectorOutcome};
use crate::share::{copied_to_shared, list_shared, symlink_from_shared};
use crate::utils::pluralize;

/// Problems caught before git is ever invoked.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Path is required")]
    PathRequired,
    #[error("Branch name is required")]
    BranchNameRequired,
    #[error("All local branches already have worktrees")]
    NoAvailableBranches,
    #[error("No branch selected")]
    NoBranchSelected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Mode,
    /// Existing-branch picker
    Branch,
    /// New branch name input
    BranchName,
    Path,
}

const NEW_BRANCH_FIELDS: &[Field] = &[Field::Mode, Field::BranchName, Field::Path];
const EXISTING_BRANCH_FIELDS: &[Field] = &[Field::Mode, Field::Branch, Field::Path];

/// Files offered for linking into a freshly created worktree.
#[derive(Debug, Clone)]
pub struct ShareSelection {
    pub selector: FileSelector,
    pub new_worktree: PathBuf,
    /// Worktree the files are copied from; None when they already live in
    /// the shared store.
    pub source: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub enum AddPhase {
    Form,
    Untracked(ShareSelection),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddEvent {
    NextField,
    PrevField,
    /// Flip between new and existing branch (mode field only)
    ToggleMode,
    /// Leave a text field, back to the mode field
    Escape,
    Input(char),
    Backspace,
    NextBranch,
    PrevBranch,
    Submit,
    Selector(SelectorEvent),
}

/// What the surrounding application should do after an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddSignal {
    None,
    /// Show a status message, stay on the form
    Status(String),
    /// Worktree created and the flow finished; show the message and go back
    /// to the worktree list
    Created(String),
}

#[derive(Debug, Clone)]
pub struct AddWorkflow {
    umbrella_root: PathBuf,
    selector_height: usize,
    worktrees: Vec<Worktree>,
    available: Vec<Branch>,
    create_new: bool,
    branch_name: String,
    selected_branch: usize,
    path: String,
    path_edited: bool,
    field: Field,
    phase: AddPhase,
}

impl AddWorkflow {
    pub fn new(umbrella_root: impl Into<PathBuf>, selector_height: usize) -> Self {
        Self {
            umbrella_root: umbrella_root.into(),
            selector_height,
            worktrees: Vec::new(),
            available: Vec::new(),
            create_new: false,
            branch_name: String::new(),
            selected_branch: 0,
            path: String::new(),
            path_edited: false,
            field: Field::Mode,
            phase: AddPhase::Form,
        }
    }

    /// Replace the known worktrees and branches and recompute which branches
    /// can still be checked out.
    pub fn set_repo_state(&mut self, worktrees: Vec<Worktree>, branches: Vec<Branch>) {
        self.available = available_branches(&worktrees, &branches);
        self.worktrees = worktrees;

        if self.available.is_empty() {
            self.create_new = true;
            if self.field == Field::Branch {
                self.field = Field::Mode;
            }
        }
        self.selected_branch = self
            .selected_branch
            .min(self.available.len().saturating_sub(1));
        self.autofill_path();
    }

    pub fn handle(&mut self, provider: &dyn RepoProvider, event: AddEvent) -> AddSignal {
        if let AddPhase::Untracked(_) = self.phase {
            return match event {
                AddEvent::Selector(event) => self.handle_selector(provider, event),
                _ => AddSignal::None,
            };
        }

        match event {
            AddEvent::NextField => self.cycle_field(1),
            AddEvent::PrevField => self.cycle_field(-1),
            AddEvent::ToggleMode => self.toggle_mode(),
            AddEvent::Escape => {
                if self.input_focused() {
                    self.field = Field::Mode;
                }
            }
            AddEvent::Input(c) => self.edit(|text| text.push(c)),
            AddEvent::Backspace => self.edit(|text| {
                text.pop();
            }),
            AddEvent::NextBranch => self.move_branch(1),
            AddEvent::PrevBranch => self.move_branch(-1),
            AddEvent::Submit => return self.submit(provider),
            AddEvent::Selector(_) => {}
        }
        AddSignal::None
    }

    fn fields(&self) -> &'static [Field] {
        if self.create_new {
            NEW_BRANCH_FIELDS
        } else {
            EXISTING_BRANCH_FIELDS
        }
    }

    fn cycle_field(&mut self, step: isize) {
        let fields = self.fields();
        let len = fields.len() as isize;
        let idx = fields.iter().position(|f| *f == self.field).unwrap_or(0) as isize;
        self.field = fields[(idx + step).rem_euclid(len) as usize];
    }

    fn toggle_mode(&mut self) {
        if self.field != Field::Mode || self.mode_locked() {
            return;
        }
        self.create_new = !self.create_new;
        self.autofill_path();
    }

    fn edit(&mut self, apply: impl FnOnce(&mut String)) {
        match self.field {
            Field::Path => {
                apply(&mut self.path);
                self.path_edited = true;
            }
            Field::BranchName => {
                apply(&mut self.branch_name);
                self.autofill_path();
            }
            Field::Mode | Field::Branch => {}
        }
    }

    fn move_branch(&mut self, step: isize) {
        if self.field != Field::Branch || self.available.is_empty() {
            return;
        }
        let last = self.available.len() - 1;
        self.selected_branch = match step {
            s if s < 0 => self.selected_branch.saturating_sub(1),
            _ => (self.selected_branch + 1).min(last),
        };
        self.autofill_path();
    }

    /// Branch the form currently points at, before trimming checks.
    fn active_branch(&self) -> Option<&str> {
        if self.create_new {
            Some(self.branch_name.trim())
        } else {
            self.available
                .get(self.selected_branch)
                .map(|b| b.name.as_str())
        }
    }

    fn autofill_path(&mut self) {
        if self.path_edited {
            return;
        }
        match self.active_branch().map(path_from_branch) {
            Some(path) => self.path = path,
            None if self.create_new => self.path.clear(),
            None => {}
        }
    }

    /// Resolved path and branch, or the reason the form cannot be submitted.
    pub fn validate(&self) -> Result<(PathBuf, String), ValidationError> {
        let path =
            resolve_path(&self.umbrella_root, &self.path).ok_or(ValidationError::PathRequired)?;

        let branch = self.active_branch().unwrap_or_default().trim();
        if branch.is_empty() {
            return Err(if self.create_new {
                ValidationError::BranchNameRequired
            } else if self.available.is_empty() {
                ValidationError::NoAvailableBranches
            } else {
                ValidationError::NoBranchSelected
            });
        }
        Ok((path, branch.to_string()))
    }

    fn submit(&mut self, provider: &dyn RepoProvider) -> AddSignal {
        let (path, branch) = match self.validate() {
            Ok(resolved) => resolved,
            Err(e) => return AddSignal::Status(format!("Error: {e}")),
        };

        let outcome =
            provider.add_worktree(&self.umbrella_root, &path, &branch, self.create_new);
        if !outcome.success {
            warn!(path = %path.display(), error = %outcome.message, "worktree creation failed");
            return AddSignal::Status(outcome.status_line());
        }
        info!(path = %path.display(), branch = %branch, "worktree created");

        let shared = list_shared(&self.umbrella_root);
        if !shared.is_empty() {
            self.start_sharing(shared, path, None);
            return AddSignal::None;
        }

        let source = self
            .worktrees
            .iter()
            .find(|wt| !wt.bare && !same_path(&wt.path, &path))
            .map(|wt| wt.path.clone());
        if let Some(source) = source {
            let files = provider.list_untracked_files(&source).unwrap_or_else(|e| {
                warn!(worktree = %source.display(), error = %e, "could not list untracked files");
                Vec::new()
            });
            if !files.is_empty() {
                self.start_sharing(files, path, Some(source));
                return AddSignal::None;
            }
        }

        self.reset();
        AddSignal::Created(outcome.message)
    }

    fn start_sharing(&mut self, files: Vec<String>, new_worktree: PathBuf, source: Option<PathBuf>) {
        self.phase = AddPhase::Untracked(ShareSelection {
            selector: FileSelector::new(files, self.selector_height),
            new_worktree,
            source,
        });
    }

    fn handle_selector(&mut self, provider: &dyn RepoProvider, event: SelectorEvent) -> AddSignal {
        let AddPhase::Untracked(share) = &mut self.phase else {
            return AddSignal::None;
        };

        match share.selector.handle(event) {
            SelectorOutcome::Pending => AddSignal::None,
            SelectorOutcome::Skipped => {
                self.reset();
                AddSignal::Created("Worktree created (skipped symlinks)".to_string())
            }
            SelectorOutcome::Confirmed(mut files) => {
                // Only files present in the store get a link.
                if let Some(source) = &share.source {
                    let copied = copied_to_shared(provider, source, &files, &self.umbrella_root);
                    if copied.len() < files.len() {
                        warn!(
                            copied = copied.len(),
                            selected = files.len(),
                            "some selected files were not shared"
                        );
                    }
                    files = copied;
                }
                let count = symlink_from_shared(
                    provider,
                    &self.umbrella_root,
                    &share.new_worktree,
                    Some(&files),
                );
                self.reset();
                AddSignal::Created(format!(
                    "Worktree created, symlinked {}",
                    pluralize(count, "file")
                ))
            }
        }
    }

    fn reset(&mut self) {
        self.path.clear();
        self.path_edited = false;
        self.branch_name.clear();
        self.field = Field::Mode;
        self.phase = AddPhase::Form;
        self.autofill_path();
    }

    pub fn phase(&self) -> &AddPhase {
        &self.phase
    }

    pub fn field(&self) -> Field {
        self.field
    }

    pub fn create_new(&self) -> bool {
        self.create_new
    }

    /// Existing-branch mode is unavailable when every local branch is
    /// already checked out somewhere.
    pub fn mode_locked(&self) -> bool {
        self.available.is_empty()
    }

    pub fn branch_name(&self) -> &str {
        &self.branch_name
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn available(&self) -> &[Branch] {
        &self.available
    }

    pub fn selected_branch(&self) -> usize {
        self.selected_branch
    }

    /// Whether keystrokes go to a text field.
    pub fn input_focused(&self) -> bool {
        matches!(self.phase, AddPhase::Form)
            && matches!(self.field, Field::Path | Field::BranchName)
    }

    /// Where the worktree would be created with the current input.
    pub fn path_preview(&self) -> Option<PathBuf> {
        resolve_path(&self.umbrella_root, &self.path)
    }
}

/// Default worktree directory name for a branch.
pub fn path_from_branch(branch: &str) -> String {
    branch.replace('/', "-")
}

/// Absolute paths are taken as-is, anything else lives under the umbrella root.
pub fn resolve_path(umbrella_root: &Path, input: &str) -> Option<PathBuf> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    let path = Path::new(trimmed);
    if path.is_absolute() {
        Some(path.to_path_buf())
    } else {
        Some(umbrella_root.join(path))
    }
}

fn same_path(a: &Path, b: &Path) -> bool {
    if a == b {
        return true;
    }
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
