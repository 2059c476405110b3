use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ob_forms::Role;

use crate::app::actions::Action;
use crate::state::{Screen, State};

/// Map a terminal event to an action. `None` means quit.
pub fn handle_event(event: &Event, state: &State) -> Option<Action> {
    match event {
        Event::Key(key) => {
            // Windows reports releases too
            if key.kind != KeyEventKind::Press {
                return Some(Action::None);
            }

            let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
            if ctrl && matches!(key.code, KeyCode::Char('q') | KeyCode::Char('c')) {
                return None;
            }

            // An open dialog swallows everything else
            if state.dialog().is_some() {
                return Some(match key.code {
                    KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => Action::DismissDialog,
                    _ => Action::None,
                });
            }

            match state.screen {
                Screen::Roles => handle_roles_key(key),
                Screen::NameEntry => Some(handle_name_key(key)),
                Screen::Forms => handle_forms_key(key),
            }
        }
        Event::Paste(text) if state.screen == Screen::NameEntry && state.dialog().is_none() => {
            Some(Action::NamePaste(text.clone()))
        }
        _ => Some(Action::None),
    }
}

fn handle_roles_key(key: &KeyEvent) -> Option<Action> {
    let action = match key.code {
        KeyCode::Char('q') => return None,
        KeyCode::Up | KeyCode::Char('k') => Action::SelectPrevRole,
        KeyCode::Down | KeyCode::Char('j') => Action::SelectNextRole,
        KeyCode::Enter => Action::ChooseHighlightedRole,
        KeyCode::Char('p') => Action::ChooseRole(Role::Parent),
        KeyCode::Char('s') => Action::ChooseRole(Role::Staff),
        KeyCode::Char('d') => Action::ToggleDebug,
        _ => Action::None,
    };
    Some(action)
}

/// Every printable key is text here, so no letter shortcuts.
fn handle_name_key(key: &KeyEvent) -> Action {
    match key.code {
        KeyCode::Esc => Action::BackToRoles,
        KeyCode::Enter => Action::SubmitName,
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => Action::NameNextField,
        KeyCode::Backspace => Action::NameBackspace,
        KeyCode::Delete => Action::NameDelete,
        KeyCode::Left => Action::NameCursorLeft,
        KeyCode::Right => Action::NameCursorRight,
        KeyCode::Home => Action::NameCursorHome,
        KeyCode::End => Action::NameCursorEnd,
        KeyCode::Char(c)
            if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            Action::NameChar(c)
        }
        _ => Action::None,
    }
}

fn handle_forms_key(key: &KeyEvent) -> Option<Action> {
    let action = match key.code {
        KeyCode::Char('q') => return None,
        KeyCode::Esc => Action::BackToRoles,
        KeyCode::Up | KeyCode::Char('k') => Action::SelectPrevForm,
        KeyCode::Down | KeyCode::Char('j') => Action::SelectNextForm,
        KeyCode::Home | KeyCode::Char('g') => Action::SelectFirstForm,
        KeyCode::End | KeyCode::Char('G') => Action::SelectLastForm,
        KeyCode::Enter => Action::OpenSelectedForm,
        KeyCode::Char('r') => Action::RefreshForms,
        KeyCode::Char('t') => Action::NextTheme,
        KeyCode::Char('T') => Action::PrevTheme,
        KeyCode::Char('d') => Action::ToggleDebug,
        _ => Action::None,
    };
    Some(action)
}
