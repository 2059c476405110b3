use ob_forms::{FormError, OpenKind, Role};

use crate::state::{Dialog, ListNotice, Screen, State};

use super::ActionResult;

/// Start a session for `role` and move to name entry.
pub fn handle_choose_role(state: &mut State, role: Role) -> ActionResult {
    state.tracker.select_role(role);
    state.role_cursor = Role::ALL.iter().position(|r| *r == role).unwrap_or(0);
    state.name_form.clear();
    state.selected_form = 0;
    state.list_notice = None;
    state.screen = Screen::NameEntry;
    ActionResult::Nothing
}

/// Discard the session and return to role selection.
pub fn handle_back_to_roles(state: &mut State) -> ActionResult {
    state.tracker.back_to_roles();
    state.name_form.clear();
    state.selected_form = 0;
    state.list_notice = None;
    state.screen = Screen::Roles;
    ActionResult::Nothing
}

pub fn handle_submit_name(state: &mut State) -> ActionResult {
    let first = state.name_form.first.clone();
    let last = state.name_form.last.clone();

    match state.tracker.submit_name(&first, &last) {
        Ok(_) => {
            state.screen = Screen::Forms;
            state.selected_form = 0;
            handle_refresh_forms(state)
        }
        Err(e) => {
            if let FormError::Validation { field } = e {
                state.name_form.focus(field);
            }
            state.push_error(&e);
            ActionResult::Nothing
        }
    }
}

/// Re-list the active directory and clamp the selection.
pub fn handle_refresh_forms(state: &mut State) -> ActionResult {
    let result = state.tracker.list_templates().map(|t| t.len());
    match result {
        Ok(0) => state.list_notice = Some(ListNotice::Empty),
        Ok(_) => state.list_notice = None,
        Err(e) => {
            state.list_notice = Some(match e {
                FormError::DirectoryUnavailable(_) => ListNotice::DirectoryMissing,
                _ => ListNotice::Unreadable,
            });
            state.push_error(&e);
        }
    }
    let last = state.tracker.templates().len().saturating_sub(1);
    state.selected_form = state.selected_form.min(last);
    ActionResult::Nothing
}

pub fn handle_open_selected(state: &mut State) -> ActionResult {
    let Some(template) = state.tracker.templates().get(state.selected_form).cloned() else {
        return ActionResult::Nothing;
    };

    match state.tracker.open_template(&template) {
        Ok(outcome) => {
            let user = state.tracker.user_name().unwrap_or_default().to_string();
            let dialog = match outcome.kind {
                OpenKind::New => Dialog::info(
                    "Form Ready",
                    format!(
                        "New copy of '{}' created and opened for '{}'.\n\nPlease fill it out and SAVE IT.",
                        template.name, user
                    ),
                ),
                OpenKind::Reopened => Dialog::info(
                    "Form Reopened",
                    format!(
                        "Existing copy of '{}' for '{}' reopened.\n\nPlease continue filling it out and SAVE IT.",
                        template.name, user
                    ),
                ),
            };
            state.push_dialog(dialog);

            if outcome.all_processed {
                state.push_dialog(Dialog::info(
                    "All Forms Processed",
                    format!(
                        "All forms have been opened for {}.\n\nOnce done with all forms, please return laptop to office staff.",
                        user
                    ),
                ));
            }
        }
        Err(e @ FormError::SessionIncomplete(_)) => {
            state.push_error(&e);
            handle_back_to_roles(state);
        }
        Err(e) => state.push_error(&e),
    }
    ActionResult::Nothing
}
