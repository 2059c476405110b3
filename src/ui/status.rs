use ratatui::{prelude::*, widgets::Paragraph};

use crate::infra::config::{active_theme, theme};
use crate::state::{Screen, State};

pub fn render_status_bar(frame: &mut Frame, state: &State, area: Rect) {
    let base_style = Style::default().bg(theme::bg_base()).fg(theme::text_muted());
    let badge = |text: String, bg: Color| Span::styled(text, Style::default().fg(theme::bg_base()).bg(bg).bold());

    let mut spans = vec![Span::styled(" ", base_style)];

    match state.tracker.role() {
        Some(role) => spans.push(badge(format!(" {} ", role.as_str().to_uppercase()), theme::accent())),
        None => spans.push(badge(" SELECT ROLE ".to_string(), theme::text_muted())),
    }
    spans.push(Span::styled(" ", base_style));

    if let Some(name) = state.tracker.user_name() {
        spans.push(Span::styled(format!("{} ", name), Style::default().fg(theme::text()).bg(theme::bg_base())));
    }

    if state.screen == Screen::Forms {
        let snapshot = state.tracker.snapshot();
        let color = if snapshot.listed > 0 && snapshot.opened == snapshot.listed { theme::success() } else { theme::warning() };
        spans.push(badge(format!(" {}/{} OPENED ", snapshot.opened, snapshot.listed), color));
        spans.push(Span::styled(" ", base_style));
    }

    spans.push(Span::styled(format!("{} ", active_theme().name), base_style));

    let hints = match state.screen {
        Screen::Roles => "↑↓ select  Enter choose  p/s role  d debug  q quit",
        Screen::NameEntry => "Tab switch field  Enter continue  Esc back",
        Screen::Forms => "Enter open  r refresh  t theme  d debug  Esc back  q quit",
    };

    let used: usize = spans.iter().map(|s| s.width()).sum();
    let padding = (area.width as usize).saturating_sub(used + hints.chars().count() + 1);
    spans.push(Span::styled(" ".repeat(padding), base_style));
    spans.push(Span::styled(format!("{} ", hints), base_style));

    frame.render_widget(Paragraph::new(Line::from(spans)).style(base_style), area);
}
