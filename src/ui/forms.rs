use ratatui::{prelude::*, widgets::Paragraph};

use unicode_width::UnicodeWidthStr;

use crate::infra::config::{icons, theme};
use crate::state::{ListNotice, State};

use super::helpers::truncate_string;

pub fn render_forms(frame: &mut Frame, state: &State, area: Rect) {
    let templates = state.tracker.templates();
    let role = state.tracker.role().map(|r| r.as_str()).unwrap_or_default();

    let mut lines = vec![
        Line::from(Span::styled("Select a form and press Enter to open it:", Style::default().fg(theme::text_secondary()))),
        Line::from(""),
    ];

    if templates.is_empty() {
        let dir = state.tracker.active_dir().map(|d| d.display().to_string()).unwrap_or_default();
        let (text, color) = match state.list_notice {
            Some(ListNotice::DirectoryMissing) => (format!("{} forms directory not found.", role), theme::warning()),
            Some(ListNotice::Unreadable) => (format!("{} forms directory could not be read.", role), theme::error()),
            _ => (format!("No {} forms found in '{}'.", role, dir), theme::text_muted()),
        };
        lines.push(Line::from(Span::styled(text, Style::default().fg(color))));
        frame.render_widget(Paragraph::new(lines).style(Style::default().bg(theme::bg_base())), area.inner(Margin::new(2, 0)));
        return;
    }

    // Keep the selection on screen
    let rows = (area.height as usize).saturating_sub(lines.len()).max(1);
    let start = if state.selected_form >= rows { state.selected_form + 1 - rows } else { 0 };
    let width = area.width.saturating_sub(4) as usize;

    for (i, template) in templates.iter().enumerate().skip(start).take(rows) {
        let selected = i == state.selected_form;
        let opened = state.tracker.is_opened(template);

        let row_style = if selected {
            Style::default().fg(theme::accent()).bg(theme::bg_elevated())
        } else {
            Style::default().fg(theme::text())
        };
        let pointer = if selected { icons::pointer() } else { " " };
        let mark = if opened {
            Span::styled(format!(" {} ", icons::opened()), row_style.fg(theme::success()))
        } else {
            Span::styled("   ", row_style)
        };
        let label = truncate_string(&format!("{} {}", pointer, template.name), width.saturating_sub(3));
        let padding = width.saturating_sub(label.width() + 3);

        lines.push(Line::from(vec![
            Span::styled(label, row_style),
            Span::styled(" ".repeat(padding), row_style),
            mark,
        ]));
    }

    frame.render_widget(Paragraph::new(lines).style(Style::default().bg(theme::bg_base())), area.inner(Margin::new(2, 0)));
}
