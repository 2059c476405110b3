use ob_forms::NameField;
use ratatui::{prelude::*, widgets::Paragraph};

use crate::infra::config::{chars, theme};
use crate::state::State;

const LABEL_WIDTH: usize = 12;

pub fn render_name_entry(frame: &mut Frame, state: &State, area: Rect) {
    let role = state.tracker.role().map(|r| r.as_str()).unwrap_or_default();
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("{} - please enter your name", role),
            Style::default().fg(theme::text()).bold(),
        )),
        Line::from(""),
    ];
    lines.push(field_line(state, NameField::First));
    lines.push(Line::from(""));
    lines.push(field_line(state, NameField::Last));

    let inner = area.inner(Margin::new(2, 0));
    frame.render_widget(Paragraph::new(lines).style(Style::default().bg(theme::bg_base())), inner);
}

fn field_line(state: &State, field: NameField) -> Line<'static> {
    let form = &state.name_form;
    let value = form.field(field);
    let focused = form.focus == field;
    let label = Span::styled(
        format!("{:<width$}", format!("{}:", field.label()), width = LABEL_WIDTH),
        if focused { Style::default().fg(theme::accent()).bold() } else { Style::default().fg(theme::text_secondary()) },
    );
    let value_style = Style::default().fg(theme::text()).bg(theme::bg_surface());

    if !focused {
        return Line::from(vec![label, Span::styled(format!(" {} ", value), value_style)]);
    }

    let (before, after) = value.split_at(form.cursor.min(value.len()));
    Line::from(vec![
        label,
        Span::styled(format!(" {}", before), value_style),
        Span::styled(chars::CURSOR, Style::default().fg(theme::accent()).bg(theme::bg_surface())),
        Span::styled(format!("{} ", after), value_style),
    ])
}
