// ABOUTME: Movie search screen - query inputs, type filter, and the result list

use ratatui::{
    prelude::*,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};

use super::Palette;
use crate::app::{AppState, SearchField};

#[derive(Default)]
pub struct MovieSearchComponent {
    list_state: ListState,
}

impl MovieSearchComponent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let palette = Palette::for_mode(state.is_dark_mode());
        let search = &state.movie_search;

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .split(area);

        let input = |label: &'static str, value: &str, focused: bool| {
            let style = if focused {
                Style::default().fg(palette.accent).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(palette.muted)
            };
            let cursor = if focused { "_" } else { "" };
            vec![Span::styled(label, style), Span::raw(format!("{value}{cursor}  "))]
        };

        let mut spans = input("Title: ", &search.title, search.focus == SearchField::Title);
        spans.extend(input("Year: ", &search.year, search.focus == SearchField::Year));
        spans.push(Span::styled("Type: ", Style::default().fg(palette.muted)));
        spans.push(Span::raw(search.kind.map_or("any", |k| k.as_str())));

        let inputs = Paragraph::new(Line::from(spans))
            .block(
                Block::default()
                    .title("Movie Search")
                    .borders(Borders::ALL)
                    .border_style(palette.border()),
            )
            .style(palette.base());
        frame.render_widget(inputs, chunks[0]);

        let results_title = match &search.last_title {
            _ if search.loading => "Searching...".to_string(),
            Some(title) => format!("Results for \"{title}\" ({} total)", search.total_results),
            None => "Results".to_string(),
        };
        let block = Block::default()
            .title(results_title)
            .borders(Borders::ALL)
            .border_style(palette.border());

        if search.movies.is_empty() {
            let message = match &search.error {
                Some(error) => Line::from(Span::styled(error.clone(), Style::default().fg(Color::Yellow))),
                None => Line::from("Type a title and press Enter to search"),
            };
            let empty = Paragraph::new(message)
                .block(block)
                .style(palette.base())
                .wrap(Wrap { trim: true });
            frame.render_widget(empty, chunks[1]);
            return;
        }

        self.list_state.select(search.selected_index);
        let items: Vec<ListItem> = search
            .movies
            .iter()
            .map(|movie| {
                ListItem::new(Line::from(vec![
                    Span::raw(movie.title.clone()),
                    Span::styled(format!(" ({})", movie.year), Style::default().fg(palette.muted)),
                    Span::styled(format!("  {}", movie.kind), Style::default().fg(Color::Cyan)),
                    Span::styled(format!("  {}", movie.imdb_id), Style::default().fg(palette.muted)),
                ]))
            })
            .collect();

        let list = List::new(items)
            .block(block)
            .style(palette.base())
            .highlight_style(palette.selected())
            .highlight_symbol("▶ ");
        frame.render_stateful_widget(list, chunks[1], &mut self.list_state);
    }
}
