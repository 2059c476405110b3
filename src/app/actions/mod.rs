//! Action handling split into domain-focused modules.
//!
//! - `session` — role choice, name submission, forms list and opening
//! - `config` — theme and debug panel toggles

pub mod config;
pub mod session;

use ob_forms::Role;

use crate::state::State;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    None,
    Quit,
    DismissDialog,
    // Role screen
    SelectPrevRole,
    SelectNextRole,
    ChooseHighlightedRole,
    ChooseRole(Role),
    // Name entry
    NameChar(char),
    NamePaste(String),
    NameBackspace,
    NameDelete,
    NameCursorLeft,
    NameCursorRight,
    NameCursorHome,
    NameCursorEnd,
    NameNextField,
    SubmitName,
    // Forms list
    SelectPrevForm,
    SelectNextForm,
    SelectFirstForm,
    SelectLastForm,
    OpenSelectedForm,
    RefreshForms,
    BackToRoles,
    // Display
    ToggleDebug,
    NextTheme,
    PrevTheme,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionResult {
    Nothing,
    Quit,
}

pub fn apply_action(state: &mut State, action: Action) -> ActionResult {
    match action {
        Action::None => ActionResult::Nothing,
        Action::Quit => ActionResult::Quit,
        Action::DismissDialog => {
            state.dialogs.pop_front();
            ActionResult::Nothing
        }
        Action::SelectPrevRole => {
            state.role_cursor = if state.role_cursor == 0 { Role::ALL.len() - 1 } else { state.role_cursor - 1 };
            ActionResult::Nothing
        }
        Action::SelectNextRole => {
            state.role_cursor = (state.role_cursor + 1) % Role::ALL.len();
            ActionResult::Nothing
        }
        Action::ChooseHighlightedRole => {
            let role = state.highlighted_role();
            session::handle_choose_role(state, role)
        }
        Action::ChooseRole(role) => session::handle_choose_role(state, role),
        Action::NameChar(c) => {
            state.name_form.insert_char(c);
            ActionResult::Nothing
        }
        Action::NamePaste(text) => {
            // Names are single-line; anything after the first line break is dropped.
            let line = text.lines().next().unwrap_or("");
            line.chars().filter(|c| !c.is_control()).for_each(|c| state.name_form.insert_char(c));
            ActionResult::Nothing
        }
        Action::NameBackspace => {
            state.name_form.backspace();
            ActionResult::Nothing
        }
        Action::NameDelete => {
            state.name_form.delete();
            ActionResult::Nothing
        }
        Action::NameCursorLeft => {
            state.name_form.cursor_left();
            ActionResult::Nothing
        }
        Action::NameCursorRight => {
            state.name_form.cursor_right();
            ActionResult::Nothing
        }
        Action::NameCursorHome => {
            state.name_form.cursor_home();
            ActionResult::Nothing
        }
        Action::NameCursorEnd => {
            state.name_form.cursor_end();
            ActionResult::Nothing
        }
        Action::NameNextField => {
            state.name_form.toggle_focus();
            ActionResult::Nothing
        }
        Action::SubmitName => session::handle_submit_name(state),
        Action::SelectPrevForm => {
            state.selected_form = state.selected_form.saturating_sub(1);
            ActionResult::Nothing
        }
        Action::SelectNextForm => {
            let last = state.tracker.templates().len().saturating_sub(1);
            state.selected_form = (state.selected_form + 1).min(last);
            ActionResult::Nothing
        }
        Action::SelectFirstForm => {
            state.selected_form = 0;
            ActionResult::Nothing
        }
        Action::SelectLastForm => {
            state.selected_form = state.tracker.templates().len().saturating_sub(1);
            ActionResult::Nothing
        }
        Action::OpenSelectedForm => session::handle_open_selected(state),
        Action::RefreshForms => session::handle_refresh_forms(state),
        Action::BackToRoles => session::handle_back_to_roles(state),
        Action::ToggleDebug => config::handle_toggle_debug(state),
        Action::NextTheme => config::handle_next_theme(state),
        Action::PrevTheme => config::handle_prev_theme(state),
    }
}
