//! Umbrella setup: bare clone, gitdir pointer, first worktree

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::git::RepoProvider;
use crate::models::constants::{BARE_DIR, FALLBACK_BRANCH, MAIN_WORKTREE, UMBRELLA_SUFFIX};
use crate::models::Outcome;
use crate::select::{FileSelector, SelectorEvent, SelectorOutcome};
use crate::share::{copy_to_shared, symlink_from_shared};

/// Where the umbrella's contents come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetupSource {
    /// Started inside an existing repository with an `origin` remote
    FromRepo { remote: String, repo_root: PathBuf },
    /// Started outside any repository; the remote is prompted for
    Fresh { cwd: PathBuf },
}

#[derive(Debug, Clone)]
pub enum SetupPhase {
    Prompt,
    Confirm,
    Running,
    Untracked(FileSelector),
    Error(String),
    Done,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupEvent {
    Input(char),
    Backspace,
    Submit,
    Cancel,
    Yes,
    No,
    /// Run the setup steps; sent once the running screen is visible
    Execute,
    Selector(SelectorEvent),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetupSignal {
    Continue,
    /// Leave the program
    Exit,
    /// Umbrella ready at this root
    Done(PathBuf),
}

#[derive(Debug, Clone)]
pub struct SetupWorkflow {
    source: SetupSource,
    remote: String,
    phase: SetupPhase,
    selector_height: usize,
}

impl SetupWorkflow {
    pub fn new(source: SetupSource, selector_height: usize) -> Self {
        let (remote, phase) = match &source {
            SetupSource::FromRepo { remote, .. } => (remote.clone(), SetupPhase::Confirm),
            SetupSource::Fresh { .. } => (String::new(), SetupPhase::Prompt),
        };
        Self {
            source,
            remote,
            phase,
            selector_height,
        }
    }

    pub fn handle(&mut self, provider: &dyn RepoProvider, event: SetupEvent) -> SetupSignal {
        match (&mut self.phase, event) {
            (SetupPhase::Prompt, SetupEvent::Input(c)) => self.remote.push(c),
            (SetupPhase::Prompt, SetupEvent::Backspace) => {
                self.remote.pop();
            }
            (SetupPhase::Prompt, SetupEvent::Submit) => {
                if !self.remote.trim().is_empty() {
                    self.phase = SetupPhase::Confirm;
                }
            }
            (SetupPhase::Prompt, SetupEvent::Cancel) => return SetupSignal::Exit,

            (SetupPhase::Confirm, SetupEvent::Yes) => self.phase = SetupPhase::Running,
            (SetupPhase::Confirm, SetupEvent::No | SetupEvent::Cancel) => match self.source {
                SetupSource::Fresh { .. } => self.phase = SetupPhase::Prompt,
                SetupSource::FromRepo { .. } => return SetupSignal::Exit,
            },

            (SetupPhase::Running, SetupEvent::Execute) => return self.run(provider),

            (SetupPhase::Untracked(selector), SetupEvent::Selector(event)) => {
                match selector.handle(event) {
                    SelectorOutcome::Pending => {}
                    SelectorOutcome::Skipped => return self.finish(),
                    SelectorOutcome::Confirmed(files) => {
                        self.share_files(provider, &files);
                        return self.finish();
                    }
                }
            }

            (SetupPhase::Error(_), SetupEvent::Cancel) => return SetupSignal::Exit,

            _ => {}
        }
        SetupSignal::Continue
    }

    fn run(&mut self, provider: &dyn RepoProvider) -> SetupSignal {
        let umbrella = self.umbrella_dir();
        let outcome = create_umbrella(provider, self.remote.trim(), &umbrella);
        if !outcome.success {
            warn!(umbrella = %umbrella.display(), error = %outcome.message, "setup failed");
            self.phase = SetupPhase::Error(outcome.message);
            return SetupSignal::Continue;
        }
        info!("{}", outcome.message);

        // A fresh clone has nothing local to carry over.
        if let SetupSource::FromRepo { repo_root, .. } = &self.source {
            let files = provider.list_untracked_files(repo_root).unwrap_or_else(|e| {
                warn!(repo = %repo_root.display(), error = %e, "could not list untracked files");
                Vec::new()
            });
            if !files.is_empty() {
                self.phase = SetupPhase::Untracked(FileSelector::new(files, self.selector_height));
                return SetupSignal::Continue;
            }
        }
        self.finish()
    }

    /// Copy the chosen files into the shared store, then link the whole store
    /// into the first worktree.
    fn share_files(&self, provider: &dyn RepoProvider, files: &[String]) {
        let SetupSource::FromRepo { repo_root, .. } = &self.source else {
            return;
        };
        let umbrella = self.umbrella_dir();
        let copied = copy_to_shared(provider, repo_root, files, &umbrella);
        let linked = symlink_from_shared(provider, &umbrella, &umbrella.join(MAIN_WORKTREE), None);
        info!(copied, linked, "shared files from original repository");
    }

    fn finish(&mut self) -> SetupSignal {
        self.phase = SetupPhase::Done;
        SetupSignal::Done(self.umbrella_dir())
    }

    pub fn phase(&self) -> &SetupPhase {
        &self.phase
    }

    pub fn source(&self) -> &SetupSource {
        &self.source
    }

    pub fn remote(&self) -> &str {
        &self.remote
    }

    /// Project name shown in the confirmation.
    pub fn project_name(&self) -> String {
        match &self.source {
            SetupSource::FromRepo { repo_root, .. } => repo_root
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| project_name_from_url(&self.remote)),
            SetupSource::Fresh { .. } => project_name_from_url(&self.remote),
        }
    }

    /// `<parent>/<project>-worktrees`, next to the original repository or
    /// under the start directory.
    pub fn umbrella_dir(&self) -> PathBuf {
        let parent = match &self.source {
            SetupSource::FromRepo { repo_root, .. } => {
                repo_root.parent().unwrap_or(repo_root.as_path())
            }
            SetupSource::Fresh { cwd } => cwd.as_path(),
        };
        parent.join(format!("{}{}", self.project_name(), UMBRELLA_SUFFIX))
    }
}

/// Project name from a remote URL: last path segment without `.git`.
///
/// Handles both `https://host/user/repo.git` and `git@host:repo.git`.
pub fn project_name_from_url(url: &str) -> String {
    let trimmed = url.trim().trim_end_matches('/');
    let last = trimmed.rsplit(['/', ':']).next().unwrap_or_default();
    let name = last.strip_suffix(".git").unwrap_or(last);
    if name.is_empty() {
        "project".to_string()
    } else {
        name.to_string()
    }
}

/// Clone `remote` bare into `<umbrella>/.bare`, point `<umbrella>/.git` at it,
/// make it track remote branches and check out the default branch into
/// `<umbrella>/main`. Stops at the first failing step.
pub fn create_umbrella(provider: &dyn RepoProvider, remote: &str, umbrella: &Path) -> Outcome {
    let bare = umbrella.join(BARE_DIR);

    let steps: [&dyn Fn() -> Outcome; 4] = [
        &|| provider.clone_bare(remote, &bare),
        &|| provider.write_gitdir_pointer(umbrella),
        &|| provider.configure_bare_fetch(&bare),
        &|| provider.fetch_origin(&bare),
    ];
    for step in steps {
        let outcome = step();
        if !outcome.success {
            return outcome;
        }
        info!("{}", outcome.message);
    }

    let branch = provider.default_branch(&bare).unwrap_or_else(|e| {
        warn!(error = %e, fallback = FALLBACK_BRANCH, "could not read default branch");
        FALLBACK_BRANCH.to_string()
    });
    let outcome = provider.add_worktree(umbrella, &umbrella.join(MAIN_WORKTREE), &branch, false);
    if !outcome.success {
        return outcome;
    }

    Outcome::ok(format!("Umbrella created at {}", umbrella.display()))
}
