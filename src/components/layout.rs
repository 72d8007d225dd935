// ABOUTME: Main layout component - status header, active view, bottom menu bar, and overlays

use ratatui::{
    prelude::*,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};

use super::{
    ConfirmationDialogComponent, FlagFormComponent, FlagListComponent, HelpComponent,
    MaintenanceComponent, MovieSearchComponent, Palette, ToastOverlayComponent,
};
use crate::app::{AppState, View};

pub struct LayoutComponent {
    flag_list: FlagListComponent,
    flag_form: FlagFormComponent,
    movie_search: MovieSearchComponent,
    maintenance: MaintenanceComponent,
    help: HelpComponent,
    confirmation_dialog: ConfirmationDialogComponent,
    toasts: ToastOverlayComponent,
}

impl LayoutComponent {
    pub fn new() -> Self {
        Self {
            flag_list: FlagListComponent::new(),
            flag_form: FlagFormComponent::new(),
            movie_search: MovieSearchComponent::new(),
            maintenance: MaintenanceComponent::new(),
            help: HelpComponent::new(),
            confirmation_dialog: ConfirmationDialogComponent::new(),
            toasts: ToastOverlayComponent::new(),
        }
    }

    pub fn render(&mut self, frame: &mut Frame, state: &AppState) {
        let palette = Palette::for_mode(state.is_dark_mode());
        let area = frame.size();
        frame.render_widget(Block::default().style(palette.base()), area);

        // Maintenance takes over the whole screen; toasts still show
        if state.current_view == View::Maintenance {
            self.maintenance.render(frame, area, state);
            self.toasts.render(frame, area, &state.active_toasts);
            return;
        }

        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Status header
                Constraint::Min(0),    // Main content
                Constraint::Length(3), // Bottom menu bar
            ])
            .split(area);

        self.render_header(frame, main_chunks[0], state, &palette);

        match state.current_view {
            View::FlagList | View::FlagForm => {
                self.flag_list.render(frame, main_chunks[1], state);
            }
            View::MovieSearch => self.movie_search.render(frame, main_chunks[1], state),
            View::Maintenance => {}
        }

        self.render_menu_bar(frame, main_chunks[2], state, &palette);

        if state.current_view == View::FlagForm {
            self.flag_form.render(frame, area, state);
        }

        // Render help overlay if visible
        if state.help_visible {
            self.help.render(frame, area);
        }

        // Render confirmation dialog if visible (highest priority overlay)
        if state.confirmation_dialog.is_some() {
            self.confirmation_dialog.render(frame, area, state);
        }

        self.toasts.render(frame, area, &state.active_toasts);
    }

    fn render_header(&self, frame: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
        let (indicator, color) = match &state.status.health {
            Some(health) if health.is_up() => ("● connected", Color::Green),
            Some(_) => ("● degraded", Color::Yellow),
            None if state.status.last_checked.is_none() => ("○ checking", palette.muted),
            None => ("● offline", Color::Red),
        };

        let mut spans = vec![
            Span::styled("Flagdeck", palette.heading()),
            Span::raw("  "),
            Span::styled(indicator, Style::default().fg(color)),
        ];
        if let Some(stats) = &state.status.cache_stats {
            spans.push(Span::styled(
                format!(
                    "  flags {}/{} enabled",
                    stats.enabled_flags, stats.total_flags
                ),
                Style::default().fg(palette.muted),
            ));
        }
        if state.is_dark_mode() {
            spans.push(Span::styled("  ☾ dark", Style::default().fg(palette.accent)));
        }
        if let Some(checked) = state.status.last_checked {
            spans.push(Span::styled(
                format!("  checked {}", checked.format("%H:%M:%S")),
                Style::default().fg(palette.muted),
            ));
        }

        let header = Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(palette.border()),
        );

        frame.render_widget(header, area);
    }

    fn render_menu_bar(&self, frame: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
        let menu_text = match state.current_view {
            View::FlagList => "[n]ew [e]dit [t]oggle [d]elete [f]refresh [m]ovies [x]dismiss [?]help [q]uit",
            View::FlagForm => "[Tab]next field [Enter]save [Esc]cancel",
            View::MovieSearch => "[Enter]search [Tab]field [Ctrl+T]type [↑/↓]select [Esc]back",
            View::Maintenance => "[r]etry [q]uit",
        };

        let menu = Paragraph::new(menu_text)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(palette.border()),
            )
            .style(Style::default().fg(palette.accent))
            .alignment(Alignment::Center);

        frame.render_widget(menu, area);
    }
}

impl Default for LayoutComponent {
    fn default() -> Self {
        Self::new()
    }
}
