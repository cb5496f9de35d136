//! Service-profile form view.

use findhelper_api::validate::FormField;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::model::{App, FIELD_ORDER};
use crate::view::theme::colors;

/// Renders the editable profile form.
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let form = &app.form;

    let mut lines = vec![Line::from("")];

    if form.loading {
        lines.push(Line::styled(
            "  Loading profile...",
            Style::default().fg(c.muted),
        ));
        frame.render_widget(Paragraph::new(lines), area);
        return;
    }

    // Banner error above the fields, as in the web form.
    if let Some(ref banner) = form.banner_error {
        lines.push(Line::styled(
            format!("  {banner}"),
            Style::default().fg(c.error).add_modifier(Modifier::BOLD),
        ));
        lines.push(Line::from(""));
    }

    for field in FIELD_ORDER {
        let focused = form.focus == field;
        render_field(app, field, focused, &mut lines);

        if let Some(message) = form.errors.message_for(field) {
            lines.push(Line::styled(
                format!("  {message}"),
                Style::default().fg(c.error),
            ));
        }
        lines.push(Line::from(""));
    }

    lines.push(Line::from(""));
    let submit_hint = if form.submitting {
        Line::styled("  Updating...", Style::default().fg(c.muted))
    } else {
        Line::from(vec![
            Span::styled("  Enter", Style::default().fg(Color::Yellow)),
            Span::styled(" Update", Style::default().fg(c.muted)),
        ])
    };
    lines.push(submit_hint);

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_field(app: &App, field: FormField, focused: bool, lines: &mut Vec<Line<'static>>) {
    let c = colors();
    let form = &app.form;
    let value = form.value(field);
    let is_select = matches!(
        field,
        FormField::AvailabilityTime | FormField::AvailableLocations
    );

    // Label row
    let mut label_spans = vec![Span::styled(
        format!("  {}", field.label()),
        Style::default().fg(Color::Gray),
    )];
    if !field.is_editable() {
        label_spans.push(Span::styled(
            " (read-only)",
            Style::default().fg(Color::DarkGray),
        ));
    } else if is_select && focused {
        label_spans.push(Span::styled(
            " (←→ to Switch)",
            Style::default().fg(Color::DarkGray),
        ));
    }
    lines.push(Line::from(label_spans));

    // Value row
    let value_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(c.fg)
    };

    if is_select {
        let display = if value.is_empty() {
            placeholder(field).to_string()
        } else {
            value.to_string()
        };
        let display_style = if value.is_empty() && !focused {
            Style::default().fg(Color::DarkGray)
        } else {
            value_style
        };
        let select_display = format!(
            "  {} {} {}",
            if focused { "◀" } else { " " },
            display,
            if focused { "▶" } else { " " }
        );
        lines.push(Line::styled(select_display, display_style));
    } else {
        let display = if focused {
            format!("  {value}▎")
        } else {
            format!("  {value}")
        };
        let display_style = if !field.is_editable() {
            Style::default().fg(c.muted)
        } else {
            value_style
        };
        lines.push(Line::styled(display, display_style));
    }
}

fn placeholder(field: FormField) -> &'static str {
    match field {
        FormField::AvailabilityTime => "Select Availability Time",
        FormField::AvailableLocations => "Select Location",
        _ => "",
    }
}
