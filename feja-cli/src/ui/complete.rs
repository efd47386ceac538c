use feja_core::{format_count, format_size};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::Widget,
};

use crate::app::AppState;

use super::theme::Theme;

/// Post-scan summary screen
pub struct CompleteView<'a> {
    state: &'a AppState,
    theme: &'a Theme,
}

impl<'a> CompleteView<'a> {
    pub fn new(state: &'a AppState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }
}

impl Widget for CompleteView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 8 || area.width < 30 {
            return;
        }

        let x = area.x + 4;
        let mut y = area.y + area.height / 4;

        buf.set_string(
            x,
            y,
            "✓ All set",
            Style::default()
                .fg(self.theme.green)
                .add_modifier(Modifier::BOLD),
        );
        y += 1;
        buf.set_string(
            x,
            y,
            "Your device has been scanned.",
            Style::default().fg(self.theme.fg_dim),
        );
        y += 2;

        let checks = [
            "Junk files located",
            "Cached data analyzed",
            "Duplicate media detected",
        ];
        for check in checks {
            buf.set_string(x, y, "✓", Style::default().fg(self.theme.green));
            buf.set_string(x + 2, y, check, Style::default().fg(self.theme.fg));
            y += 1;
        }
        y += 1;

        let media = format!("{} media files indexed", format_count(self.state.media_count()));
        buf.set_string(x, y, &media, Style::default().fg(self.theme.fg_dim));
        y += 1;

        if let Some(stats) = &self.state.storage {
            let line = format!("{} free right now", format_size(stats.free_bytes));
            buf.set_string(x, y, &line, Style::default().fg(self.theme.fg_dim));
            y += 1;
        }

        y += 1;
        buf.set_string(
            x,
            y,
            "Press Enter to see the results",
            Style::default()
                .fg(self.theme.orange)
                .add_modifier(Modifier::BOLD),
        );
    }
}
