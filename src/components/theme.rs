// ABOUTME: Light and dark color palettes shared by all components

use ratatui::style::{Color, Modifier, Style};

use crate::toast::ToastKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub text: Color,
    pub muted: Color,
    pub border: Color,
    pub accent: Color,
    pub highlight: Color,
}

impl Palette {
    pub const LIGHT: Palette = Palette {
        background: Color::Reset,
        text: Color::White,
        muted: Color::Gray,
        border: Color::Cyan,
        accent: Color::Yellow,
        highlight: Color::DarkGray,
    };

    pub const DARK: Palette = Palette {
        background: Color::Black,
        text: Color::Gray,
        muted: Color::DarkGray,
        border: Color::Blue,
        accent: Color::LightMagenta,
        highlight: Color::Rgb(40, 40, 60),
    };

    pub const fn for_mode(dark: bool) -> Palette {
        if dark {
            Palette::DARK
        } else {
            Palette::LIGHT
        }
    }

    pub fn base(&self) -> Style {
        Style::default().fg(self.text).bg(self.background)
    }

    pub fn border(&self) -> Style {
        Style::default().fg(self.border)
    }

    pub fn heading(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    pub fn selected(&self) -> Style {
        Style::default().bg(self.highlight).add_modifier(Modifier::BOLD)
    }
}

pub const fn toast_color(kind: ToastKind) -> Color {
    match kind {
        ToastKind::Success => Color::Green,
        ToastKind::Error => Color::Red,
        ToastKind::Warning => Color::Yellow,
        ToastKind::Info => Color::Cyan,
    }
}
