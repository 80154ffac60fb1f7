//! Ride action panel
//!
//! Title, destination address, actor avatar and the single action button.

use connie_core::PresentationIntent;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::App;

const SEPARATOR_WIDTH: usize = 24;

/// Render the ride action panel.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(" Connie ");

    let lines = match app.intent() {
        Some(intent) => intent_lines(intent),
        None => vec![Line::from(Span::styled(
            "Waiting for profile...",
            Style::default().fg(Color::DarkGray),
        ))],
    };

    let paragraph = Paragraph::new(lines).block(block).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn intent_lines(intent: &PresentationIntent) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(Span::styled(
        intent.title_text.clone(),
        Style::default().add_modifier(Modifier::BOLD),
    ))];

    if intent.address_visible {
        lines.push(Line::from(Span::styled(
            intent.address_text.clone(),
            Style::default().fg(Color::Gray),
        )));
    }

    lines.push(Line::default());
    lines.push(Line::from(vec![
        Span::styled(
            format!("( {} )", intent.avatar_initial),
            Style::default().fg(Color::Black).bg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::raw(intent.actor_label.clone()),
    ]));
    lines.push(Line::from(Span::styled(
        "─".repeat(SEPARATOR_WIDTH),
        Style::default().fg(Color::DarkGray),
    )));
    lines.push(button_line(intent));
    lines
}

fn button_line(intent: &PresentationIntent) -> Line<'static> {
    let label = format!("[ {} ]", intent.button_label);
    if intent.button_enabled {
        Line::from(Span::styled(
            label,
            Style::default().fg(Color::Black).bg(Color::Green).add_modifier(Modifier::BOLD),
        ))
    } else {
        Line::from(vec![
            Span::styled(label, Style::default().fg(Color::DarkGray)),
            Span::styled(" (disabled)", Style::default().fg(Color::DarkGray)),
        ])
    }
}
