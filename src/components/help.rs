// ABOUTME: Help overlay component displaying keyboard shortcuts and commands

use ratatui::{
    prelude::*,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, List, ListItem},
};

use super::centered_rect;

pub struct HelpComponent;

impl HelpComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let popup_area = centered_rect(60, 80, area);

        frame.render_widget(Clear, popup_area);

        let heading = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);
        let help_items = vec![
            ListItem::new("Flags:").style(heading),
            ListItem::new("  j/↓ k/↑    Move down / up"),
            ListItem::new("  g / G      Go to top / bottom"),
            ListItem::new("  n          New flag"),
            ListItem::new("  e/Enter    Edit flag"),
            ListItem::new("  t/Space    Toggle flag"),
            ListItem::new("  d          Delete flag"),
            ListItem::new("  f          Refresh flags"),
            ListItem::new(""),
            ListItem::new("Movie Search:").style(heading),
            ListItem::new("  m          Open movie search"),
            ListItem::new("  Tab        Switch title / year"),
            ListItem::new("  Ctrl+T     Cycle type filter"),
            ListItem::new("  Enter      Search"),
            ListItem::new("  Esc        Back to flags"),
            ListItem::new(""),
            ListItem::new("Notifications:").style(heading),
            ListItem::new("  x/Ctrl+X   Dismiss latest toast"),
            ListItem::new("  c          Clear all toasts"),
            ListItem::new(""),
            ListItem::new("General:").style(heading),
            ListItem::new("  Ctrl+D     Toggle dark mode"),
            ListItem::new("  ?/F1       Toggle this help"),
            ListItem::new("  q/Esc      Quit application"),
            ListItem::new("  Ctrl+C     Force quit"),
        ];

        let help_list = List::new(help_items).block(
            Block::default()
                .title("Help - Press ? or Esc to close")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );

        frame.render_widget(help_list, popup_area);
    }
}

impl Default for HelpComponent {
    fn default() -> Self {
        Self::new()
    }
}
