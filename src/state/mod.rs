mod dialog;
mod name_form;
#[cfg(test)]
pub(crate) mod testing;

pub use dialog::{Dialog, DialogKind};
pub use name_form::NameForm;

use std::collections::VecDeque;

use ob_forms::{FormError, FormTracker, Role};

/// Which full-screen view is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Roles,
    NameEntry,
    Forms,
}

/// What the forms list shows when it has no rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListNotice {
    DirectoryMissing,
    Empty,
    Unreadable,
}

pub struct State {
    pub tracker: FormTracker,
    pub screen: Screen,
    /// Highlighted entry on the role screen
    pub role_cursor: usize,
    pub name_form: NameForm,
    /// Highlighted row in the forms list
    pub selected_form: usize,
    pub list_notice: Option<ListNotice>,
    /// Modal messages, front is showing
    pub dialogs: VecDeque<Dialog>,
    pub show_debug: bool,
    pub active_theme: String,
    /// Whether the UI needs to be redrawn
    pub dirty: bool,
}

impl State {
    pub fn new(tracker: FormTracker, theme_id: &str) -> Self {
        Self {
            tracker,
            screen: Screen::Roles,
            role_cursor: 0,
            name_form: NameForm::default(),
            selected_form: 0,
            list_notice: None,
            dialogs: VecDeque::new(),
            show_debug: false,
            active_theme: theme_id.to_string(),
            dirty: true,
        }
    }

    pub fn highlighted_role(&self) -> Role {
        Role::ALL[self.role_cursor.min(Role::ALL.len() - 1)]
    }

    pub fn dialog(&self) -> Option<&Dialog> {
        self.dialogs.front()
    }

    pub fn push_dialog(&mut self, dialog: Dialog) {
        self.dialogs.push_back(dialog);
    }

    pub fn push_error(&mut self, err: &FormError) {
        self.push_dialog(Dialog::from_error(err));
    }

    /// Window-title style heading for the current screen.
    pub fn title(&self) -> String {
        let app_name = self.tracker.config().app_name();
        match (self.screen, self.tracker.role(), self.tracker.user_name()) {
            (Screen::Forms, Some(role), Some(name)) => format!("{} - {} ({})", app_name, role, name),
            (Screen::NameEntry, Some(role), _) => format!("{} - Enter Name ({})", app_name, role),
            _ => app_name,
        }
    }
}
