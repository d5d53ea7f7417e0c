//! TUI application state and main loop.

use std::io::{self, Stdout};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;

use super::event_handler::{
    add_event, is_quit, list_event, setup_event, HELP_SCROLL_STEP,
};
use super::renderer::{render_main, render_setup};
use super::state::{MainState, Screen, Tab};
use crate::git::RepoProvider;
use crate::workflow::{SetupEvent, SetupPhase, SetupSignal};

/// Poll timeout for event loop (100ms for responsive UI).
const POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// TUI application state.
pub struct TuiApp<'a> {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    running: Arc<AtomicBool>,
    provider: &'a dyn RepoProvider,
    selector_height: usize,
    screen: Screen,
    exiting: bool,
    /// Flag to prevent double cleanup in Drop.
    cleaned_up: bool,
}

impl<'a> TuiApp<'a> {
    /// Enter the alternate screen showing `screen`.
    pub fn new(
        provider: &'a dyn RepoProvider,
        selector_height: usize,
        screen: Screen,
    ) -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;

        crate::utils::install_crossterm_panic_hook();

        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend).context("Failed to create terminal")?;

        Ok(Self {
            terminal,
            running: Arc::new(AtomicBool::new(true)),
            provider,
            selector_height,
            screen,
            exiting: false,
            cleaned_up: false,
        })
    }

    /// Run until the user quits.
    pub fn run(&mut self) -> Result<()> {
        // Install Ctrl+C handler to ensure terminal cleanup on signal
        let running = self.running.clone();
        ctrlc::set_handler(move || {
            running.store(false, Ordering::SeqCst);

            // Drop may not run on process exit
            crate::utils::cleanup_terminal_crossterm();

            std::process::exit(0);
        })
        .context("Failed to set Ctrl+C handler")?;

        let result = self.run_event_loop();
        self.cleanup_terminal();
        result
    }

    fn run_event_loop(&mut self) -> Result<()> {
        while self.running.load(Ordering::SeqCst) && !self.exiting {
            self.render()?;

            // The running screen is on display now; do the blocking work.
            if let Screen::Setup(setup) = &self.screen {
                if matches!(setup.phase(), SetupPhase::Running) {
                    self.dispatch_setup(SetupEvent::Execute);
                    continue;
                }
            }

            if event::poll(POLL_TIMEOUT)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key);
                    }
                }
            }
        }
        Ok(())
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if is_quit(key.code, key.modifiers) {
            self.exiting = true;
            return;
        }

        let event = match &self.screen {
            Screen::Setup(setup) => setup_event(setup.phase(), key.code, key.modifiers),
            Screen::Main(_) => None,
        };
        if let Some(event) = event {
            self.dispatch_setup(event);
            return;
        }

        if let Screen::Main(state) = &mut self.screen {
            handle_main_key(state, self.provider, key);
        }
    }

    fn dispatch_setup(&mut self, event: SetupEvent) {
        let Screen::Setup(setup) = &mut self.screen else {
            return;
        };
        match setup.handle(self.provider, event) {
            SetupSignal::Continue => {}
            SetupSignal::Exit => self.exiting = true,
            SetupSignal::Done(root) => {
                info!(root = %root.display(), "umbrella ready");
                let state = MainState::new(&root, self.selector_height, self.provider);
                self.screen = Screen::Main(Box::new(state));
            }
        }
    }

    /// Cleanup terminal state (leave alternate screen, disable raw mode).
    /// Sets cleaned_up flag to prevent double cleanup in Drop.
    fn cleanup_terminal(&mut self) {
        if self.cleaned_up {
            return;
        }
        self.cleaned_up = true;

        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }

    fn render(&mut self) -> Result<()> {
        let screen = &self.screen;
        self.terminal.draw(|frame| match screen {
            Screen::Setup(setup) => render_setup(frame, setup),
            Screen::Main(state) => render_main(frame, state),
        })?;
        Ok(())
    }
}

fn handle_main_key(state: &mut MainState, provider: &dyn RepoProvider, key: KeyEvent) {
    let text_input = state.tab == Tab::Add && state.add.input_focused();
    match key.code {
        KeyCode::Tab if !text_input => {
            state.tab = state.tab.next();
            return;
        }
        KeyCode::BackTab if !text_input => {
            state.tab = state.tab.prev();
            return;
        }
        _ => {}
    }

    match state.tab {
        Tab::Worktrees => {
            if let Some(event) = list_event(key.code) {
                let signal = state.list.handle(provider, event);
                state.apply_list_signal(provider, signal);
            }
        }
        Tab::Add => {
            if let Some(event) = add_event(&state.add, key.code, key.modifiers) {
                let signal = state.add.handle(provider, event);
                state.apply_add_signal(provider, signal);
            }
        }
        Tab::Help => match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                state.help_scroll = state.help_scroll.saturating_sub(HELP_SCROLL_STEP);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                state.help_scroll = state.help_scroll.saturating_add(HELP_SCROLL_STEP);
            }
            KeyCode::Home => state.help_scroll = 0,
            _ => {}
        },
    }
}

impl Drop for TuiApp<'_> {
    fn drop(&mut self) {
        self.cleanup_terminal();
    }
}
