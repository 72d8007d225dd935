// ABOUTME: UI components for the TUI interface including flag list, forms, movie search, and toasts

pub mod confirmation_dialog;
pub mod flag_form;
pub mod flag_list;
pub mod help;
pub mod layout;
pub mod maintenance;
pub mod movie_search;
pub mod theme;
pub mod toast_overlay;

pub use confirmation_dialog::ConfirmationDialogComponent;
pub use flag_form::FlagFormComponent;
pub use flag_list::FlagListComponent;
pub use help::HelpComponent;
pub use layout::LayoutComponent;
pub use maintenance::MaintenanceComponent;
pub use movie_search::MovieSearchComponent;
pub use theme::Palette;
pub use toast_overlay::ToastOverlayComponent;

use ratatui::prelude::*;

/// A rect of the given percentage size centered inside `r`.
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
