use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::infra::config::{active_theme, theme};
use crate::state::State;

/// Plain-text diagnostics: configuration and the tracker snapshot.
pub fn debug_lines(state: &State) -> Vec<String> {
    let config = state.tracker.config();
    let snapshot = state.tracker.snapshot();
    let or_none = |v: Option<String>| v.unwrap_or_else(|| "-".to_string());
    let active = active_theme();

    vec![
        format!("Daycare: {}", config.daycare_name),
        format!("App dir: {}", config.app_dir.display()),
        format!("Parent forms: {}", config.parent),
        format!("Staff forms: {}", config.staff),
        format!("Role: {}", or_none(snapshot.role.map(|r| r.to_string()))),
        format!("Active dir: {}", or_none(snapshot.active_dir.map(|d| d.display().to_string()))),
        format!("User: {}", or_none(snapshot.user_name)),
        format!("Opened: {}/{}", snapshot.opened, snapshot.listed),
        format!("Completion shown: {}", snapshot.completion_notified),
        format!("Stage: {:?}", state.tracker.stage()),
        format!("Theme: {} ({})", active.name, active.description),
    ]
}

pub fn render_debug(frame: &mut Frame, state: &State, area: Rect) {
    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(theme::border()))
        .title(Span::styled(" Debug ", Style::default().fg(theme::text_muted())))
        .style(Style::default().bg(theme::bg_surface()));

    let lines: Vec<Line> = debug_lines(state)
        .into_iter()
        .map(|l| Line::from(Span::styled(format!(" {}", l), Style::default().fg(theme::text_secondary()))))
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
