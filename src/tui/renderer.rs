//! Rendering functions for TUI components.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use super::state::{MainState, Tab};
use super::theme::Theme;
use crate::models::constants::SHARED_DIR;
use crate::select::{FileSelector, Row};
use crate::utils::{display_path, pluralize, truncate};
use crate::workflow::{
    AddPhase, AddWorkflow, Field, ListWorkflow, PendingAction, SetupPhase, SetupSource,
    SetupWorkflow, ShareSelection,
};

/// Header height: logo, then the tab row.
const HEADER_HEIGHT: u16 = 6;

/// Width of the add form's text inputs.
const INPUT_WIDTH: usize = 40;

/// Visible rows of the existing-branch picker.
const BRANCH_PICKER_HEIGHT: usize = 8;

type Shortcut = (&'static str, &'static str);

/// Render the open umbrella: header, active tab, status bar.
pub fn render_main(frame: &mut Frame, state: &MainState) {
    let status_height = if state.status.is_some() { 2 } else { 1 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(5),
            Constraint::Length(status_height),
        ])
        .split(frame.area());

    render_header(frame, chunks[0], state);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Theme::border(false));
    let body = block.inner(chunks[1]);
    frame.render_widget(block, chunks[1]);

    match state.tab {
        Tab::Worktrees => render_worktrees(frame, body, &state.list),
        Tab::Add => render_add(frame, body, &state.add),
        Tab::Help => render_help(frame, body, state.help_scroll),
    }

    render_status_bar(
        frame,
        chunks[2],
        state.status.as_deref(),
        &shortcuts(state),
    );
}

fn render_header(frame: &mut Frame, area: Rect, state: &MainState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(3)])
        .split(area);

    let logo_area = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(30), Constraint::Length(30)])
        .split(chunks[0]);

    let logo: Vec<Line> = crate::LOGO
        .lines()
        .map(|l| Line::from(Span::styled(l, Theme::title())))
        .collect();
    frame.render_widget(Paragraph::new(logo), logo_area[0]);

    let label = Paragraph::new(vec![
        Line::raw(""),
        Line::raw(""),
        Line::from(Span::styled(state.repo_label(), Theme::dimmed())),
    ])
    .alignment(ratatui::layout::Alignment::Right);
    frame.render_widget(label, logo_area[1]);

    let tab_areas = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(
            Tab::ALL
                .iter()
                .map(|t| Constraint::Length(t.title().len() as u16 + 4))
                .chain(std::iter::once(Constraint::Min(0))),
        )
        .split(chunks[1]);

    for (tab, area) in Tab::ALL.iter().zip(tab_areas.iter()) {
        let active = *tab == state.tab;
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Theme::border(active));
        let style = if active { Theme::highlight() } else { Theme::dimmed() };
        let title = Paragraph::new(Span::styled(tab.title(), style))
            .alignment(ratatui::layout::Alignment::Center)
            .block(block);
        frame.render_widget(title, *area);
    }
}

fn shortcuts(state: &MainState) -> Vec<Shortcut> {
    let mut keys = vec![("Tab", "switch tabs")];
    match state.tab {
        Tab::Worktrees if state.list.pending().is_some() => {
            keys.extend([("y", "confirm"), ("n", "cancel")]);
        }
        Tab::Worktrees => keys.extend([
            ("\u{2191}\u{2193}", "navigate"),
            ("Enter", "open"),
            ("d", "remove"),
            ("p", "prune"),
            ("r", "refresh"),
        ]),
        Tab::Add => match state.add.phase() {
            AddPhase::Form => keys.extend([("\u{2191}\u{2193}", "fields"), ("Ctrl+S", "save")]),
            AddPhase::Untracked(_) => keys.extend(selector_shortcuts()),
        },
        Tab::Help => keys.push(("\u{2191}\u{2193}", "scroll")),
    }
    keys.push(("Ctrl+C", "quit"));
    keys
}

fn selector_shortcuts() -> [Shortcut; 5] {
    [
        ("Space", "toggle"),
        ("a", "all"),
        ("n", "none"),
        ("Enter", "confirm"),
        ("Esc", "skip"),
    ]
}

/// Status message (if any) above the key hints.
fn render_status_bar(frame: &mut Frame, area: Rect, status: Option<&str>, keys: &[Shortcut]) {
    let mut lines = Vec::new();
    if let Some(message) = status {
        lines.push(Line::from(Span::styled(
            format!(" {message}"),
            Theme::status(message),
        )));
    }

    let mut spans = vec![Span::raw(" ")];
    for (key, action) in keys {
        spans.push(Span::styled(*key, Theme::key()));
        spans.push(Span::styled(format!(" {action}  "), Theme::text()));
    }
    lines.push(Line::from(spans));

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_worktrees(frame: &mut Frame, area: Rect, list: &ListWorkflow) {
    match list.pending() {
        Some(PendingAction::Remove { path, branch }) => {
            return render_remove_confirm(frame, area, path, branch);
        }
        Some(PendingAction::Prune) => return render_prune_confirm(frame, area),
        None => {}
    }

    if list.worktrees().next().is_none() {
        let empty = Paragraph::new(Span::styled(
            "No worktrees found. Is this a git repository?",
            Theme::dimmed(),
        ))
        .alignment(ratatui::layout::Alignment::Center);
        frame.render_widget(empty, centered_line(area));
        return;
    }

    let width = area.width as usize;
    let mut lines = Vec::new();
    for (idx, wt) in list.worktrees().enumerate() {
        let selected = idx == list.selected();
        let marker = if selected { "\u{25B6} " } else { "  " };
        let name_style = if selected { Theme::highlight() } else { Theme::text() };

        let mut name = vec![
            Span::styled(marker, Theme::key()),
            Span::styled(wt.branch.as_deref().unwrap_or("(no branch)").to_string(), name_style),
        ];
        if wt.detached {
            name.push(Span::styled(" [detached]", Theme::warning()));
        }
        lines.push(Line::from(name));

        let detail = format!("{}  {}", display_path(&wt.path), wt.short_head());
        lines.push(Line::from(Span::styled(
            format!("    {}", truncate(&detail, width.saturating_sub(4))),
            Theme::dimmed(),
        )));
    }

    // Two lines per worktree; keep the selected one in view.
    let visible = (area.height as usize).max(2);
    let cursor_bottom = list.selected() * 2 + 2;
    let scroll = cursor_bottom.saturating_sub(visible) as u16;

    frame.render_widget(Paragraph::new(lines).scroll((scroll, 0)), padded(area));
}

fn render_remove_confirm(frame: &mut Frame, area: Rect, path: &std::path::Path, branch: &str) {
    let lines = vec![
        Line::from(Span::styled("Remove worktree?", Theme::error_bold())),
        Line::raw(""),
        Line::from(vec![
            Span::styled("  Branch: ", Theme::dimmed()),
            Span::styled(branch.to_string(), Theme::text()),
        ]),
        Line::from(vec![
            Span::styled("  Path:   ", Theme::dimmed()),
            Span::styled(display_path(path), Theme::text()),
        ]),
        Line::raw(""),
        Line::from(Span::styled("This will:", Theme::text())),
        Line::from(Span::styled(
            "  - Delete the directory and all its contents",
            Theme::dimmed(),
        )),
        Line::from(Span::styled(
            "  - Unlink the worktree from the bare repo",
            Theme::dimmed(),
        )),
        Line::from(Span::styled(
            "  - The branch itself will NOT be deleted",
            Theme::dimmed(),
        )),
        Line::raw(""),
        Line::from(Span::styled("Proceed? (y/n)", Theme::warning())),
    ];
    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }),
        padded(area),
    );
}

fn render_prune_confirm(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            "Prune stale worktree references?",
            Theme::warning(),
        )),
        Line::raw(""),
        Line::from(Span::styled("This will:", Theme::text())),
        Line::from(Span::styled(
            "  Remove worktree entries whose directories no longer exist on disk.",
            Theme::dimmed(),
        )),
        Line::from(Span::styled(
            "  Only bookkeeping is cleaned up, no files are deleted.",
            Theme::dimmed(),
        )),
        Line::raw(""),
        Line::from(Span::styled("Proceed? (y/n)", Theme::warning())),
    ];
    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }),
        padded(area),
    );
}

fn render_add(frame: &mut Frame, area: Rect, add: &AddWorkflow) {
    if let AddPhase::Untracked(share) = add.phase() {
        return render_add_sharing(frame, area, share);
    }

    let indicator = |field: Field| {
        if add.field() == field {
            Span::styled(" \u{25B6} ", Theme::key())
        } else {
            Span::styled("   ", Theme::faint())
        }
    };

    let mut lines = vec![
        Line::from(Span::styled("Add Worktree", Theme::title())),
        Line::raw(""),
    ];

    let mode = if add.create_new() { "New branch" } else { "Existing branch" };
    let mut mode_line = vec![
        indicator(Field::Mode),
        Span::styled("Mode:   ", Theme::dimmed()),
        Span::styled(
            format!("[ {mode} ]"),
            if add.create_new() { Theme::success() } else { Theme::text() },
        ),
    ];
    if add.field() == Field::Mode && !add.mode_locked() {
        mode_line.push(Span::styled("  (Enter to toggle)", Theme::dimmed()));
    }
    lines.push(Line::from(mode_line));
    lines.push(Line::raw(""));

    if add.create_new() {
        lines.push(Line::from(vec![
            indicator(Field::BranchName),
            Span::styled("Branch: ", Theme::dimmed()),
            input_span(
                add.branch_name(),
                "feature/my-branch",
                add.field() == Field::BranchName,
            ),
        ]));
    } else {
        lines.push(Line::from(vec![
            indicator(Field::Branch),
            Span::styled("Branch:", Theme::dimmed()),
        ]));
        lines.extend(branch_picker(add));
    }
    lines.push(Line::raw(""));

    lines.push(Line::from(vec![
        indicator(Field::Path),
        Span::styled("Path:   ", Theme::dimmed()),
        input_span(add.path(), "feature-cool", add.field() == Field::Path),
    ]));
    if let Some(preview) = add.path_preview() {
        lines.push(Line::from(Span::styled(
            format!("         {}", display_path(&preview)),
            Theme::faint(),
        )));
    }
    lines.push(Line::raw(""));

    let hint = if add.input_focused() {
        "Type to edit  Up/Down: fields  Escape: back  Ctrl+S: save"
    } else if add.field() == Field::Branch {
        "Up/Down: fields  Left/Right: choose branch  Ctrl+S: save"
    } else {
        "Up/Down: navigate  Enter: toggle  Ctrl+S: save"
    };
    lines.push(Line::from(Span::styled(hint, Theme::dimmed())));

    frame.render_widget(Paragraph::new(lines), padded(area));
}

fn input_span(value: &str, placeholder: &str, focused: bool) -> Span<'static> {
    let (text, style) = if value.is_empty() {
        (placeholder.to_string(), Theme::dimmed())
    } else {
        (value.to_string(), Theme::input(focused))
    };
    let cursor = if focused { "_" } else { "" };
    let shown = truncate(&format!("{text}{cursor}"), INPUT_WIDTH);
    Span::styled(format!("{shown:<width$}", width = INPUT_WIDTH), style)
}

fn branch_picker(add: &AddWorkflow) -> Vec<Line<'static>> {
    let branches = add.available();
    if branches.is_empty() {
        return vec![Line::from(Span::styled(
            "      No local branches found",
            Theme::dimmed(),
        ))];
    }

    let selected = add.selected_branch();
    let start = selected
        .saturating_sub(BRANCH_PICKER_HEIGHT / 2)
        .min(branches.len().saturating_sub(BRANCH_PICKER_HEIGHT));
    let focused = add.field() == Field::Branch;

    branches
        .iter()
        .enumerate()
        .skip(start)
        .take(BRANCH_PICKER_HEIGHT)
        .map(|(idx, branch)| {
            let current = if branch.current { " (current)" } else { "" };
            let (marker, style) = match (idx == selected, focused) {
                (true, true) => ("\u{25B6} ", Theme::highlight()),
                (true, false) => ("\u{25B7} ", Theme::text()),
                _ => ("  ", Theme::dimmed()),
            };
            Line::from(vec![
                Span::raw("      "),
                Span::styled(marker, Theme::key()),
                Span::styled(branch.name.clone(), style),
                Span::styled(current, Theme::dimmed()),
            ])
        })
        .collect()
}

fn render_add_sharing(frame: &mut Frame, area: Rect, share: &ShareSelection) {
    let count = share.selector.files().len();
    let intro = match share.source {
        Some(_) => format!(
            "Found {} in existing worktree. Select which to share:",
            pluralize(count, "untracked file")
        ),
        None => format!(
            "Found {} to symlink into the new worktree:",
            pluralize(count, "shared file")
        ),
    };
    let footer = match share.source {
        Some(_) => [
            format!("Selected files will be copied to {SHARED_DIR}/ and symlinked"),
            "into the new worktree. Future worktrees get them automatically.".to_string(),
        ],
        None => [
            format!("These files live in {SHARED_DIR}/ and are symlinked into each"),
            "worktree. A change in one is reflected everywhere.".to_string(),
        ],
    };

    let mut lines = vec![
        Line::from(Span::styled("Worktree created!", Theme::success_bold())),
        Line::raw(""),
        Line::from(Span::styled(intro, Theme::text())),
        Line::raw(""),
    ];
    lines.extend(selector_lines(&share.selector));
    lines.push(Line::raw(""));
    lines.extend(
        footer
            .into_iter()
            .map(|l| Line::from(Span::styled(l, Theme::dimmed()))),
    );

    frame.render_widget(Paragraph::new(lines), padded(area));
}

/// Lines for the file selector window plus its summary.
pub fn selector_lines(selector: &FileSelector) -> Vec<Line<'static>> {
    let rows = selector.rows();
    let selection = selector.selection();
    let range = selector.visible_range();
    let mut lines = Vec::with_capacity(range.len() + 2);

    for idx in range {
        let Some(row) = rows.get(idx) else {
            continue;
        };
        let at_cursor = idx == selector.cursor();
        let marker = if at_cursor { "\u{25B6} " } else { "  " };
        let style = if at_cursor { Theme::highlight() } else { Theme::text() };

        let line = match row {
            Row::Directory { name, children } => {
                let state = selection.dir_state(children);
                Line::from(vec![
                    Span::styled(marker, Theme::key()),
                    Span::styled(format!("{} ", state.checkbox()), Theme::success()),
                    Span::styled(format!("{name}/"), style),
                    Span::styled(format!(" ({})", children.len()), Theme::dimmed()),
                ])
            }
            Row::File {
                name,
                full_path,
                depth,
            } => {
                let checkbox = if selection.contains(full_path) { "[x]" } else { "[ ]" };
                Line::from(vec![
                    Span::styled(marker, Theme::key()),
                    Span::raw("  ".repeat(*depth)),
                    Span::styled(format!("{checkbox} "), Theme::success()),
                    Span::styled(name.clone(), style),
                ])
            }
        };
        lines.push(line);
    }

    let mut summary = vec![Span::styled(selector.summary(), Theme::dimmed())];
    if let Some(indicator) = selector.scroll_indicator() {
        summary.push(Span::styled(format!("  {indicator}"), Theme::faint()));
    }
    lines.push(Line::raw(""));
    lines.push(Line::from(summary));
    lines
}

fn render_help(frame: &mut Frame, area: Rect, scroll: u16) {
    let section = |title: &'static str| {
        vec![
            Line::raw(""),
            Line::from(Span::styled(title, Theme::title())),
        ]
    };
    let command = |cmd: &'static str, what: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {cmd:<40}"), Theme::success()),
            Span::styled(what, Theme::text()),
        ])
    };
    let note = |text: &'static str| Line::from(Span::styled(format!("  {text}"), Theme::text()));
    let example = |text: &'static str| Line::from(Span::styled(format!("     {text}"), Theme::dimmed()));

    let mut lines = vec![Line::from(Span::styled(
        "Git Worktrees Cheatsheet",
        Theme::title(),
    ))];

    lines.extend(section("Common Commands"));
    lines.extend([
        command("git worktree list", "Show all active worktrees"),
        command("git worktree add <path> <branch>", "Create from existing branch"),
        command("git worktree add <path> -b <branch>", "Create with new branch"),
        command("git worktree remove <path>", "Remove a worktree"),
        command("git worktree prune", "Clean up stale references"),
        command("git branch -d <branch>", "Delete branch after removal"),
        command("git fetch origin", "Fetch latest remote branches"),
    ]);

    lines.extend(section("Day to Day Workflow"));
    lines.extend([
        note("1. Create a worktree for your feature"),
        example("git worktree add cool-feature -b feature/cool-feature"),
        note("2. Work in the worktree"),
        example("cd cool-feature"),
        note("3. Push and open a PR"),
        example("git push origin feature/cool-feature"),
        note("4. After merge, clean up"),
        example("git worktree remove cool-feature"),
        example("git branch -d feature/cool-feature"),
    ]);

    lines.extend(section("Tips"));
    lines.extend([
        note("\u{2022} Name worktrees descriptively"),
        note("\u{2022} Short-lived worktrees: create, merge PR, remove"),
        note("\u{2022} A branch cannot be checked out in multiple worktrees"),
    ]);

    lines.extend(section("Umbrella Layout"));
    lines.extend([
        command(".bare/", "Bare clone holding every object and ref"),
        command(".git", "Pointer file so git works from the umbrella root"),
        command("main/", "Worktree for the default branch"),
        command(".shared/", "Canonical copies of untracked files"),
    ]);

    lines.extend(section("Sharing .env Files"));
    lines.extend([
        note("Worktrees share git history but NOT untracked files."),
        note("Files in .shared/ are symlinked into every new worktree,"),
        note("so an edit in one worktree is visible in all of them."),
    ]);

    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((scroll, 0)),
        padded(area),
    );
}

/// Render whichever setup phase is active.
pub fn render_setup(frame: &mut Frame, setup: &SetupWorkflow) {
    let area = padded_by(frame.area(), 2);
    let lines = match setup.phase() {
        SetupPhase::Prompt => vec![
            Line::from(Span::styled("New worktree umbrella", Theme::title())),
            Line::raw(""),
            Line::from(Span::styled(
                "Not inside a git repository. Enter a remote URL to clone:",
                Theme::text(),
            )),
            Line::raw(""),
            Line::from(vec![
                Span::styled("URL: ", Theme::dimmed()),
                input_span(setup.remote(), "git@github.com:user/repo.git", true),
            ]),
            Line::raw(""),
            Line::from(Span::styled("Enter: continue  Escape: exit", Theme::dimmed())),
        ],
        SetupPhase::Confirm => confirm_lines(setup),
        SetupPhase::Running => vec![
            Line::from(Span::styled(
                "Setting up worktree umbrella...",
                Theme::title(),
            )),
            Line::raw(""),
            Line::from(Span::styled("Cloning and configuring bare repo", Theme::dimmed())),
        ],
        SetupPhase::Untracked(selector) => {
            let umbrella = setup.umbrella_dir();
            let mut lines = vec![
                Line::from(Span::styled("Umbrella created!", Theme::success_bold())),
                Line::raw(""),
                Line::from(Span::styled(
                    format!(
                        "Found {} in your original repo.",
                        pluralize(selector.files().len(), "untracked file")
                    ),
                    Theme::text(),
                )),
                Line::from(Span::styled(
                    "Select which to copy into .shared/ and symlink into main/:",
                    Theme::dimmed(),
                )),
                Line::raw(""),
            ];
            lines.extend(selector_lines(selector));
            lines.push(Line::raw(""));
            lines.push(Line::from(Span::styled(
                format!(
                    "Selected files are copied to {}/",
                    display_path(&umbrella.join(SHARED_DIR))
                ),
                Theme::faint(),
            )));
            lines.push(Line::from(Span::styled(
                "and symlinked into each worktree. Future worktrees will",
                Theme::faint(),
            )));
            lines.push(Line::from(Span::styled(
                "also get these symlinks automatically.",
                Theme::faint(),
            )));
            lines
        }
        SetupPhase::Error(message) => vec![
            Line::from(Span::styled("Setup failed", Theme::error_bold())),
            Line::raw(""),
            Line::from(Span::styled(message.clone(), Theme::error())),
            Line::raw(""),
            Line::from(Span::styled("Press Escape to exit", Theme::dimmed())),
        ],
        SetupPhase::Done => Vec::new(),
    };

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}

fn confirm_lines(setup: &SetupWorkflow) -> Vec<Line<'static>> {
    let entry = |name: &'static str, what: &'static str| {
        Line::from(vec![
            Span::styled(format!("    {name:<10}"), Theme::success()),
            Span::styled(what, Theme::dimmed()),
        ])
    };

    let mut lines = vec![
        Line::from(Span::styled(
            format!(
                "Setting up worktree umbrella for \"{}\"",
                setup.project_name()
            ),
            Theme::title(),
        )),
        Line::raw(""),
        Line::from(Span::styled("The following will be created:", Theme::text())),
        entry(".bare/", "bare clone"),
        entry(".git", "gitdir pointer"),
        entry("main/", "initial worktree"),
        Line::raw(""),
        Line::from(Span::styled(
            format!("Location: {}", display_path(&setup.umbrella_dir())),
            Theme::dimmed(),
        )),
        Line::from(Span::styled(
            format!("Source: {}", setup.remote()),
            Theme::dimmed(),
        )),
        Line::raw(""),
    ];
    if let SetupSource::FromRepo { .. } = setup.source() {
        lines.push(Line::from(Span::styled(
            "Your existing repo will not be modified.",
            Theme::dimmed(),
        )));
    }
    lines.extend([
        Line::from(Span::styled(
            "A bare clone stores git objects without a working directory.",
            Theme::dimmed(),
        )),
        Line::from(Span::styled(
            "Each branch gets its own worktree folder, so several branches",
            Theme::dimmed(),
        )),
        Line::from(Span::styled(
            "can be worked on at once without stashing or switching.",
            Theme::dimmed(),
        )),
        Line::raw(""),
        Line::from(Span::styled("Proceed? (y/n)", Theme::warning())),
    ]);
    lines
}

fn padded(area: Rect) -> Rect {
    padded_by(area, 1)
}

fn padded_by(area: Rect, margin: u16) -> Rect {
    Rect {
        x: area.x.saturating_add(margin),
        y: area.y.saturating_add(margin / 2),
        width: area.width.saturating_sub(margin * 2),
        height: area.height.saturating_sub(margin),
    }
}

fn centered_line(area: Rect) -> Rect {
    Rect {
        y: area.y + area.height / 2,
        height: 1.min(area.height),
        ..area
    }
}
