//! Modal dialogs.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::model::{App, Modal};
use crate::view::theme::colors;

/// Renders the active modal, if any.
pub fn render(app: &App, frame: &mut Frame) {
    let Some(ref modal) = app.modal.active else {
        return;
    };

    match modal {
        Modal::Success { message } => render_success(frame, message),
        Modal::Help => render_help(frame),
    }
}

/// Centered rect of the given size, clamped to the frame.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

fn render_success(frame: &mut Frame, message: &str) {
    let c = colors();
    let area = centered_rect(48, 7, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Success ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.success))
        .style(Style::default().bg(Color::Black));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = vec![
        Line::from(""),
        Line::styled(
            message.to_string(),
            Style::default().fg(c.success).add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::styled("Press Enter to continue", Style::default().fg(c.muted)),
    ];
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, inner);
}

fn render_help(frame: &mut Frame) {
    let c = colors();
    let area = centered_rect(44, 13, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .style(Style::default().bg(Color::Black));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let entry = |key: &'static str, desc: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {key:<12}"), Style::default().fg(Color::Yellow)),
            Span::styled(desc, Style::default().fg(c.fg)),
        ])
    };

    let lines = vec![
        Line::from(""),
        entry("Tab / ↓", "Next field"),
        entry("Shift+Tab / ↑", "Previous field"),
        entry("← →", "Switch select option"),
        entry("Enter", "Validate and update"),
        entry("F5 / Ctrl+R", "Reload profile"),
        entry("F1", "This help"),
        entry("Esc / Ctrl+C", "Quit"),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}
