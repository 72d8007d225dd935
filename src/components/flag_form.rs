// ABOUTME: Create/edit form for a feature flag with inline validation errors

use ratatui::{
    prelude::*,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use super::{centered_rect, Palette};
use crate::app::{AppState, FormField};

pub struct FlagFormComponent;

impl FlagFormComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let Some(form) = &state.flag_form else {
            return;
        };
        let palette = Palette::for_mode(state.is_dark_mode());
        let popup_area = centered_rect(60, 60, area);
        frame.render_widget(Clear, popup_area);

        let field = |label: &'static str, value: String, focused: bool| {
            let style = if focused {
                Style::default().fg(palette.accent).add_modifier(Modifier::BOLD)
            } else {
                palette.base()
            };
            let cursor = if focused { "_" } else { "" };
            Line::from(vec![
                Span::styled(format!("{label:<13}"), style),
                Span::raw(format!("{value}{cursor}")),
            ])
        };

        let mut lines = vec![
            field("Name:", form.name.clone(), form.focus == FormField::Name),
            Line::from(Span::styled(
                "             lowercase letters, digits and underscores",
                Style::default().fg(palette.muted),
            )),
            field(
                "Description:",
                form.description.clone(),
                form.focus == FormField::Description,
            ),
            field(
                "Enabled:",
                if form.enabled { "[x]" } else { "[ ]" }.to_string(),
                form.focus == FormField::Enabled,
            ),
            Line::from(""),
        ];

        for error in &form.errors {
            lines.push(Line::from(Span::styled(
                format!("• {error}"),
                Style::default().fg(Color::Red),
            )));
        }

        let footer = if form.submitting {
            "Saving..."
        } else {
            "Tab: next field  Space: toggle enabled  Enter: save  Esc: cancel"
        };
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(footer, Style::default().fg(palette.muted))));

        let paragraph = Paragraph::new(lines)
            .block(
                Block::default()
                    .title(form.title())
                    .borders(Borders::ALL)
                    .border_style(palette.border()),
            )
            .style(palette.base())
            .wrap(Wrap { trim: false });

        frame.render_widget(paragraph, popup_area);
    }
}

impl Default for FlagFormComponent {
    fn default() -> Self {
        Self::new()
    }
}
