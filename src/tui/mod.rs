//! Terminal UI for worktree umbrellas.
//!
//! Two screens share one terminal session:
//! - Setup: remote prompt, confirmation, progress, file carry-over
//! - Main: header with tabs (Worktrees, Add, Help) and a status bar
//!
//! Rendering and key mapping live here; every transition is delegated to
//! the workflows in [`crate::workflow`].

mod app;
mod event_handler;
mod renderer;
mod state;
mod theme;

use std::path::Path;

use anyhow::Result;

pub use app::TuiApp;
pub use state::{MainState, Screen, Tab};

use crate::git::RepoProvider;
use crate::workflow::{SetupSource, SetupWorkflow};

/// Open the main screen for an existing umbrella.
pub fn run_umbrella(root: &Path, provider: &dyn RepoProvider, selector_height: usize) -> Result<()> {
    let state = MainState::new(root, selector_height, provider);
    let mut app = TuiApp::new(provider, selector_height, Screen::Main(Box::new(state)))?;
    app.run()
}

/// Walk through umbrella setup, continuing into the main screen when done.
pub fn run_setup(
    source: SetupSource,
    provider: &dyn RepoProvider,
    selector_height: usize,
) -> Result<()> {
    let setup = SetupWorkflow::new(source, selector_height);
    let mut app = TuiApp::new(provider, selector_height, Screen::Setup(setup))?;
    app.run()
}
