use ob_forms::Role;
use ratatui::{prelude::*, widgets::Paragraph};

use crate::infra::config::{icons, theme};
use crate::state::State;

pub fn render_roles(frame: &mut Frame, state: &State, area: Rect) {
    let daycare = &state.tracker.config().daycare_name;
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(format!("Welcome to {} Forms", daycare), Style::default().fg(theme::text()).bold()))
            .centered(),
        Line::from(""),
        Line::from(Span::styled("Please select your role:", Style::default().fg(theme::text_secondary()))).centered(),
        Line::from(""),
    ];

    for (i, role) in Role::ALL.iter().enumerate() {
        let selected = i == state.role_cursor;
        let (pointer, style) = if selected {
            (icons::pointer(), Style::default().fg(theme::accent()).bg(theme::bg_elevated()).bold())
        } else {
            (" ", Style::default().fg(theme::text_secondary()))
        };
        let key = role.as_str().chars().next().unwrap_or(' ').to_ascii_lowercase();
        lines.push(
            Line::from(vec![
                Span::styled(format!(" {} ", pointer), style),
                Span::styled(format!("{:<10}", role.as_str()), style),
                Span::styled(format!(" [{}] ", key), Style::default().fg(theme::accent_dim())),
            ])
            .centered(),
        );
    }

    frame.render_widget(Paragraph::new(lines).style(Style::default().bg(theme::bg_base())), area);
}
