// ABOUTME: Flag list component showing every feature flag with its state and description

use ratatui::{
    prelude::*,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};

use super::Palette;
use crate::app::AppState;
use crate::models::FeatureFlag;

pub struct FlagListComponent {
    list_state: ListState,
}

impl Default for FlagListComponent {
    fn default() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self { list_state }
    }
}

impl FlagListComponent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let palette = Palette::for_mode(state.is_dark_mode());
        self.list_state.select(state.selected_flag_index);

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(area);

        let title = if state.flags_loading {
            "Feature Flags (loading...)".to_string()
        } else {
            format!("Feature Flags ({})", state.flags.len())
        };
        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(palette.border());

        if state.flags.is_empty() {
            let message = match &state.flags_error {
                Some(error) => Line::from(Span::styled(error.clone(), Style::default().fg(Color::Red))),
                None if state.flags_loading => Line::from("Loading flags..."),
                None => Line::from("No feature flags yet. Press 'n' to create one."),
            };
            let empty = Paragraph::new(message)
                .block(block)
                .style(palette.base())
                .wrap(Wrap { trim: true });
            frame.render_widget(empty, chunks[0]);
        } else {
            let items: Vec<ListItem> = state.flags.iter().map(Self::flag_item).collect();
            let list = List::new(items)
                .block(block)
                .style(palette.base())
                .highlight_style(palette.selected())
                .highlight_symbol("▶ ");
            frame.render_stateful_widget(list, chunks[0], &mut self.list_state);
        }

        Self::render_details(frame, chunks[1], state, &palette);
    }

    fn flag_item(flag: &FeatureFlag) -> ListItem<'static> {
        let color = if flag.enabled { Color::Green } else { Color::Red };
        ListItem::new(Line::from(vec![
            Span::styled(format!("{} ", flag.indicator()), Style::default().fg(color)),
            Span::raw(flag.name.clone()),
            Span::styled(
                format!("  {}", flag.status_label()),
                Style::default().fg(color).add_modifier(Modifier::DIM),
            ),
        ]))
    }

    fn render_details(frame: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
        let lines = match state.selected_flag() {
            Some(flag) => {
                let timestamp = |label: &'static str, value: Option<chrono::NaiveDateTime>| {
                    Line::from(vec![
                        Span::styled(label, palette.heading()),
                        Span::raw(
                            value
                                .map(|v| v.format("%Y-%m-%d %H:%M").to_string())
                                .unwrap_or_else(|| "-".to_string()),
                        ),
                    ])
                };
                vec![
                    Line::from(vec![
                        Span::styled("Name:    ", palette.heading()),
                        Span::raw(flag.name.clone()),
                    ]),
                    Line::from(vec![
                        Span::styled("Status:  ", palette.heading()),
                        Span::raw(flag.status_label()),
                    ]),
                    Line::from(vec![
                        Span::styled("ID:      ", palette.heading()),
                        Span::raw(flag.id.to_string()),
                    ]),
                    timestamp("Created: ", flag.created_at),
                    timestamp("Updated: ", flag.updated_at),
                    Line::from(""),
                    Line::from(flag.description.clone().unwrap_or_else(|| "No description".to_string())),
                ]
            }
            None => vec![Line::from("Select a flag to see its details")],
        };

        let details = Paragraph::new(lines)
            .block(
                Block::default()
                    .title("Details")
                    .borders(Borders::ALL)
                    .border_style(palette.border()),
            )
            .style(palette.base())
            .wrap(Wrap { trim: false });

        frame.render_widget(details, area);
    }
}
