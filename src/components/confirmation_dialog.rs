// ABOUTME: Yes/No confirmation popup for destructive actions such as deleting a flag

use ratatui::{
    prelude::*,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use super::centered_rect;
use crate::app::AppState;

pub struct ConfirmationDialogComponent;

impl ConfirmationDialogComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let Some(dialog) = &state.confirmation_dialog else {
            return;
        };

        let popup_area = centered_rect(50, 30, area);
        frame.render_widget(Clear, popup_area);

        let button = |label: &'static str, selected: bool| {
            if selected {
                Span::styled(
                    format!("[ {label} ]"),
                    Style::default().fg(Color::Black).bg(Color::Yellow).add_modifier(Modifier::BOLD),
                )
            } else {
                Span::styled(format!("  {label}  "), Style::default().fg(Color::Gray))
            }
        };

        let text = vec![
            Line::from(dialog.message.clone()),
            Line::from(""),
            Line::from(vec![
                button("Yes", dialog.selected_option),
                Span::raw("    "),
                button("No", !dialog.selected_option),
            ])
            .alignment(Alignment::Center),
            Line::from(""),
            Line::from(Span::styled(
                "←/→ select  Enter confirm  Esc cancel",
                Style::default().fg(Color::DarkGray),
            ))
            .alignment(Alignment::Center),
        ];

        let paragraph = Paragraph::new(text)
            .block(
                Block::default()
                    .title(dialog.title.clone())
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Red)),
            )
            .wrap(Wrap { trim: true });

        frame.render_widget(paragraph, popup_area);
    }
}

impl Default for ConfirmationDialogComponent {
    fn default() -> Self {
        Self::new()
    }
}
