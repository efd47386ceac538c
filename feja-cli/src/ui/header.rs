use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::Widget,
};

use feja_core::format_size;

use crate::app::{AppState, Screen};

use super::theme::Theme;

/// Header widget showing title, screen name, and storage status
pub struct Header<'a> {
    state: &'a AppState,
    theme: &'a Theme,
}

impl<'a> Header<'a> {
    pub fn new(state: &'a AppState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }
}

fn screen_name(screen: Screen) -> &'static str {
    match screen {
        Screen::Welcome => "Welcome",
        Screen::Access => "Storage Access",
        Screen::Scanning => "Scanning",
        Screen::ScanComplete => "Scan Complete",
        Screen::Results => "Quick Clean",
        Screen::Menu => "Settings",
        Screen::Settings => "Quick Clean Settings",
        Screen::Issues => "Advanced Issues",
        Screen::Dashboard => "Dashboard",
    }
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 10 || area.height < 1 {
            return;
        }

        // Title
        let title = "FEJA";
        let title_style = Style::default()
            .fg(self.theme.orange)
            .add_modifier(Modifier::BOLD);
        buf.set_string(area.x + 1, area.y, title, title_style);

        // Separator
        buf.set_string(
            area.x + 6,
            area.y,
            "─",
            Style::default().fg(self.theme.border),
        );

        buf.set_string(
            area.x + 8,
            area.y,
            screen_name(self.state.screen),
            Style::default().fg(self.theme.fg),
        );

        // Storage status (right-aligned)
        let status = match &self.state.storage {
            Some(stats) => format!(
                "{} free of {}",
                format_size(stats.free_bytes),
                format_size(stats.total_bytes)
            ),
            None => String::new(),
        };
        if !status.is_empty() && area.width > status.len() as u16 + 20 {
            let status_x = area.x + area.width - status.len() as u16 - 2;
            buf.set_string(
                status_x,
                area.y,
                &status,
                Style::default().fg(self.theme.fg_dim),
            );
        }
    }
}
