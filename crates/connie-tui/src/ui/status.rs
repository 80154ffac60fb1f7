//! Status bar
//!
//! Displays the trip phase, session role and the latest status message.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::App;

/// Render the status bar.
pub fn render(frame: &mut Frame, app: &App, simulate: bool, area: Rect) {
    let phase = Span::styled(
        app.phase().to_string(),
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
    );

    let message = app.status_message().map_or_else(String::new, |m| format!(" | {m}"));
    let hints = if simulate { " | n: next phase, q: quit" } else { " | q: quit" };

    let status_line = Line::from(vec![
        Span::raw(" "),
        phase,
        Span::raw(format!(" | {}", app.role())),
        Span::raw(message),
        Span::styled(hints, Style::default().fg(Color::Gray)),
    ]);

    let paragraph =
        Paragraph::new(status_line).style(Style::default().bg(Color::DarkGray).fg(Color::White));

    frame.render_widget(paragraph, area);
}
