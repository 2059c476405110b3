mod debug;
mod dialog;
mod forms;
mod helpers;
mod name_entry;
mod roles;
mod status;

use ratatui::{
    prelude::*,
    widgets::{Block, Paragraph},
};

use crate::infra::config::{chars, theme};
use crate::infra::constants::DEBUG_PANEL_HEIGHT;
use crate::state::{Screen, State};

pub fn render(frame: &mut Frame, state: &State) {
    let area = frame.area();

    // Fill base background
    frame.render_widget(Block::default().style(Style::default().bg(theme::bg_base())), area);

    let debug_height = if state.show_debug { DEBUG_PANEL_HEIGHT.min(area.height / 2) } else { 0 };
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),            // Header
            Constraint::Min(1),               // Body
            Constraint::Length(debug_height), // Debug panel
            Constraint::Length(1),            // Status bar
        ])
        .split(area);

    render_header(frame, state, main_layout[0]);
    match state.screen {
        Screen::Roles => roles::render_roles(frame, state, main_layout[1]),
        Screen::NameEntry => name_entry::render_name_entry(frame, state, main_layout[1]),
        Screen::Forms => forms::render_forms(frame, state, main_layout[1]),
    }
    if state.show_debug {
        debug::render_debug(frame, state, main_layout[2]);
    }
    status::render_status_bar(frame, state, main_layout[3]);

    if let Some(d) = state.dialog() {
        dialog::render_dialog(frame, d, state.dialogs.len());
    }
}

fn render_header(frame: &mut Frame, state: &State, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(format!(" {}", state.title()), Style::default().fg(theme::accent()).bold())),
        Line::from(Span::styled(chars::HORIZONTAL.repeat(area.width as usize), Style::default().fg(theme::border()))),
    ];
    frame.render_widget(Paragraph::new(lines).style(Style::default().bg(theme::bg_base())), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::actions::{Action, apply_action};
    use crate::state::testing::kiosk;
    use ob_forms::Role;
    use ratatui::backend::TestBackend;

    fn screen_text(state: &State) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal.draw(|frame| render(frame, state)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn roles_screen_shows_welcome_and_both_roles() {
        let k = kiosk(&[]);
        let text = screen_text(&k.state);
        assert!(text.contains("Welcome to Test Forms"));
        assert!(text.contains("Parent"));
        assert!(text.contains("Staff"));
    }

    #[test]
    fn forms_screen_marks_opened_templates_and_shows_dialog() {
        let mut k = kiosk(&["Intake.pdf", "Policy.docx"]);
        apply_action(&mut k.state, Action::ChooseRole(Role::Staff));
        apply_action(&mut k.state, Action::NamePaste("Jane".into()));
        apply_action(&mut k.state, Action::NameNextField);
        apply_action(&mut k.state, Action::NamePaste("Doe".into()));
        apply_action(&mut k.state, Action::SubmitName);
        apply_action(&mut k.state, Action::OpenSelectedForm);

        let text = screen_text(&k.state);
        assert!(text.contains("Staff (Jane Doe)"));
        assert!(text.contains("Intake.pdf"));
        assert!(text.contains("Policy.docx"));
        assert!(text.contains("Form Ready"));
        assert!(text.contains("1/2"));
    }

    #[test]
    fn empty_forms_directory_shows_notice() {
        let mut k = kiosk(&[]);
        apply_action(&mut k.state, Action::ChooseRole(Role::Parent));
        apply_action(&mut k.state, Action::NamePaste("Jane".into()));
        apply_action(&mut k.state, Action::NameNextField);
        apply_action(&mut k.state, Action::NamePaste("Doe".into()));
        apply_action(&mut k.state, Action::SubmitName);

        let text = screen_text(&k.state);
        assert!(text.contains("No Parent forms found in"));
    }

    #[test]
    fn debug_panel_renders_when_toggled() {
        let mut k = kiosk(&[]);
        apply_action(&mut k.state, Action::ToggleDebug);
        let text = screen_text(&k.state);
        assert!(text.contains("Daycare: Test"));
    }
}
