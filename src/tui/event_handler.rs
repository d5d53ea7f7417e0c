//! Key mapping from crossterm events to workflow events.

use crossterm::event::{KeyCode, KeyModifiers};

use crate::select::SelectorEvent;
use crate::workflow::{AddEvent, AddPhase, AddWorkflow, Field, ListEvent, SetupEvent, SetupPhase};

/// Help text scroll step for arrow keys.
pub const HELP_SCROLL_STEP: u16 = 1;

/// Ctrl+C quits from anywhere.
pub fn is_quit(code: KeyCode, modifiers: KeyModifiers) -> bool {
    matches!(code, KeyCode::Char('c')) && modifiers.contains(KeyModifiers::CONTROL)
}

pub fn selector_event(code: KeyCode) -> Option<SelectorEvent> {
    match code {
        KeyCode::Up | KeyCode::Char('k') => Some(SelectorEvent::Up),
        KeyCode::Down | KeyCode::Char('j') => Some(SelectorEvent::Down),
        KeyCode::Char(' ') => Some(SelectorEvent::Toggle),
        KeyCode::Char('a') => Some(SelectorEvent::SelectAll),
        KeyCode::Char('n') => Some(SelectorEvent::SelectNone),
        KeyCode::Enter => Some(SelectorEvent::Confirm),
        KeyCode::Esc | KeyCode::Char('s') => Some(SelectorEvent::Skip),
        _ => None,
    }
}

pub fn setup_event(phase: &SetupPhase, code: KeyCode, modifiers: KeyModifiers) -> Option<SetupEvent> {
    match phase {
        SetupPhase::Prompt => match code {
            KeyCode::Enter => Some(SetupEvent::Submit),
            KeyCode::Esc => Some(SetupEvent::Cancel),
            KeyCode::Backspace => Some(SetupEvent::Backspace),
            KeyCode::Char(c) if !modifiers.contains(KeyModifiers::CONTROL) => {
                Some(SetupEvent::Input(c))
            }
            _ => None,
        },
        SetupPhase::Confirm => match code {
            KeyCode::Char('y') | KeyCode::Char('Y') => Some(SetupEvent::Yes),
            KeyCode::Char('n') | KeyCode::Char('N') => Some(SetupEvent::No),
            KeyCode::Esc => Some(SetupEvent::Cancel),
            _ => None,
        },
        SetupPhase::Untracked(_) => selector_event(code).map(SetupEvent::Selector),
        SetupPhase::Error(_) => match code {
            KeyCode::Esc | KeyCode::Char('q') => Some(SetupEvent::Cancel),
            _ => None,
        },
        SetupPhase::Running | SetupPhase::Done => None,
    }
}

pub fn list_event(code: KeyCode) -> Option<ListEvent> {
    match code {
        KeyCode::Up | KeyCode::Char('k') => Some(ListEvent::Up),
        KeyCode::Down | KeyCode::Char('j') => Some(ListEvent::Down),
        KeyCode::Enter => Some(ListEvent::Open),
        KeyCode::Char('r') => Some(ListEvent::Refresh),
        KeyCode::Char('d') => Some(ListEvent::RequestRemove),
        KeyCode::Char('p') => Some(ListEvent::RequestPrune),
        KeyCode::Char('y') => Some(ListEvent::Yes),
        KeyCode::Char('n') | KeyCode::Esc => Some(ListEvent::No),
        _ => None,
    }
}

pub fn add_event(add: &AddWorkflow, code: KeyCode, modifiers: KeyModifiers) -> Option<AddEvent> {
    if let AddPhase::Untracked(_) = add.phase() {
        return selector_event(code).map(AddEvent::Selector);
    }

    let ctrl = modifiers.contains(KeyModifiers::CONTROL);
    match code {
        KeyCode::Char('s') if ctrl => Some(AddEvent::Submit),
        KeyCode::Up => Some(AddEvent::PrevField),
        KeyCode::Down => Some(AddEvent::NextField),
        KeyCode::Left if add.field() == Field::Branch => Some(AddEvent::PrevBranch),
        KeyCode::Right if add.field() == Field::Branch => Some(AddEvent::NextBranch),
        KeyCode::Enter if add.field() == Field::Mode => Some(AddEvent::ToggleMode),
        KeyCode::Esc => Some(AddEvent::Escape),
        KeyCode::Backspace => Some(AddEvent::Backspace),
        KeyCode::Char(c) if !ctrl => Some(AddEvent::Input(c)),
        _ => None,
    }
}
