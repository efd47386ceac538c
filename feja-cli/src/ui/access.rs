use feja_core::{FlowState, format_size};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::Widget,
};

use crate::app::AppState;

use super::theme::Theme;

/// Permission gate with the two-step checklist
pub struct AccessView<'a> {
    state: &'a AppState,
    theme: &'a Theme,
}

impl<'a> AccessView<'a> {
    pub fn new(state: &'a AppState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }
}

impl Widget for AccessView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 10 || area.width < 40 {
            return;
        }

        let x = area.x + 4;
        let mut y = area.y + 2;

        buf.set_string(
            x,
            y,
            "Two quick steps before scanning",
            Style::default()
                .fg(self.theme.fg)
                .add_modifier(Modifier::BOLD),
        );
        y += 2;

        let granted = matches!(
            self.state.flow,
            FlowState::PermissionGranted | FlowState::Scanning | FlowState::ScanComplete
        );

        // Step 1: storage access
        let (mark, mark_color) = if granted {
            ("✓", self.theme.green)
        } else {
            ("1", self.theme.orange)
        };
        buf.set_string(x, y, mark, Style::default().fg(mark_color));
        buf.set_string(
            x + 3,
            y,
            "Allow storage access",
            Style::default().fg(self.theme.fg),
        );
        y += 1;
        buf.set_string(
            x + 3,
            y,
            format!("We scan {} for unneeded files.", self.state.media_root.display()),
            Style::default().fg(self.theme.fg_dim),
        );
        y += 2;

        // Step 2: start the scan
        let step2_color = if granted {
            self.theme.orange
        } else {
            self.theme.fg_muted
        };
        buf.set_string(x, y, "2", Style::default().fg(step2_color));
        buf.set_string(x + 3, y, "Start the scan", Style::default().fg(self.theme.fg));
        y += 2;

        // Current disk picture, when available
        if let Some(stats) = &self.state.storage {
            let line = format!(
                "{} used of {} ({:.0}%)",
                format_size(stats.used_bytes()),
                format_size(stats.total_bytes),
                stats.used_percent()
            );
            buf.set_string(x, y, &line, Style::default().fg(self.theme.fg_dim));
            y += 2;
        }

        let prompt = if granted {
            "Press Enter to start the scan"
        } else {
            "Press Enter to allow access"
        };
        buf.set_string(
            x,
            y,
            prompt,
            Style::default()
                .fg(self.theme.orange)
                .add_modifier(Modifier::BOLD),
        );
    }
}
