use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::infra::config::theme;
use crate::infra::constants::DIALOG_WIDTH;
use crate::state::{Dialog, DialogKind};

use super::helpers::{centered_rect, wrapped_height};

/// Draw the front dialog over everything else. `queued` counts it too.
pub fn render_dialog(frame: &mut Frame, dialog: &Dialog, queued: usize) {
    let area = frame.area();
    let width = DIALOG_WIDTH.min(area.width.saturating_sub(2));
    let inner_width = width.saturating_sub(4) as usize;
    // Borders, message, blank, hint
    let height = wrapped_height(&dialog.message, inner_width) as u16 + 4;
    let rect = centered_rect(area, width, height);

    let accent = match dialog.kind {
        DialogKind::Info => theme::accent(),
        DialogKind::Warning => theme::warning(),
        DialogKind::Error => theme::error(),
    };

    frame.render_widget(Clear, rect);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent))
        .title(Span::styled(format!(" {} ", dialog.title), Style::default().fg(accent).bold()))
        .style(Style::default().bg(theme::bg_surface()));
    let inner = block.inner(rect).inner(Margin::new(1, 0));
    frame.render_widget(block, rect);

    let hint = if queued > 1 {
        format!("Enter to continue ({} more)", queued - 1)
    } else {
        "Enter to close".to_string()
    };

    let mut lines: Vec<Line> =
        dialog.message.lines().map(|l| Line::from(Span::styled(l.to_string(), Style::default().fg(theme::text())))).collect();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(hint, Style::default().fg(theme::text_muted()))).right_aligned());

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}
