// ABOUTME: Toast stack rendered in the top-right corner over every view
// Oldest toast on top; each box is colored by kind and shows its remaining lifetime

use ratatui::{
    prelude::*,
    style::{Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use super::theme::toast_color;
use crate::toast::Toast;

const TOAST_WIDTH: u16 = 44;
const MAX_MESSAGE_LINES: u16 = 3;

pub struct ToastOverlayComponent;

impl ToastOverlayComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, toasts: &[Toast]) {
        let width = TOAST_WIDTH.min(area.width);
        if width < 8 {
            return;
        }
        let x = area.x + area.width - width;
        let mut y = area.y + 1;

        for toast in toasts {
            let height = Self::toast_height(toast, width);
            if y + height > area.y + area.height {
                break;
            }
            let rect = Rect::new(x, y, width, height);
            self.render_toast(frame, rect, toast);
            y += height;
        }
    }

    fn toast_height(toast: &Toast, width: u16) -> u16 {
        let inner = usize::from(width.saturating_sub(2)).max(1);
        let chars = toast.message().chars().count() + 2;
        let lines = chars.div_ceil(inner).clamp(1, usize::from(MAX_MESSAGE_LINES));
        lines as u16 + 2
    }

    fn render_toast(&self, frame: &mut Frame, rect: Rect, toast: &Toast) {
        let color = toast_color(toast.kind());
        let remaining = toast.remaining().as_millis().div_ceil(1000);
        let title = format!(" {} {} · {}s ", toast.kind().icon(), toast.kind(), remaining);

        frame.render_widget(Clear, rect);
        let paragraph = Paragraph::new(toast.message().to_string())
            .block(
                Block::default()
                    .title(Span::styled(title, Style::default().fg(color).add_modifier(Modifier::BOLD)))
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(color)),
            )
            .wrap(Wrap { trim: true });

        frame.render_widget(paragraph, rect);
    }
}

impl Default for ToastOverlayComponent {
    fn default() -> Self {
        Self::new()
    }
}
