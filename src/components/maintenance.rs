// ABOUTME: Full-screen page shown while the backend reports maintenance mode

use ratatui::{
    prelude::*,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::app::AppState;

pub struct MaintenanceComponent;

impl MaintenanceComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let last_checked = state
            .status
            .last_checked
            .map(|t| t.format("%H:%M:%S").to_string())
            .unwrap_or_else(|| "never".to_string());

        let text = vec![
            Line::from(vec![Span::styled(
                "🔧  Under Maintenance",
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from("The movie service is currently undergoing maintenance."),
            Line::from("This page closes by itself once the service is back."),
            Line::from(""),
            Line::from(format!("Last checked: {last_checked}")),
            Line::from(""),
            Line::from("Options:"),
            Line::from(vec![
                Span::styled(
                    "  r",
                    Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                ),
                Span::raw(" - Check again now"),
            ]),
            Line::from(vec![
                Span::styled(
                    "  q",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                Span::raw(" - Quit application"),
            ]),
        ];

        let paragraph = Paragraph::new(text)
            .block(
                Block::default()
                    .title("Flagdeck")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow)),
            )
            .wrap(Wrap { trim: true })
            .style(Style::default().fg(Color::White));

        frame.render_widget(paragraph, area);
    }
}

impl Default for MaintenanceComponent {
    fn default() -> Self {
        Self::new()
    }
}
