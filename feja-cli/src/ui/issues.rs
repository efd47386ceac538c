use feja_core::format_gb;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::Widget,
};

use crate::app::AppState;

use super::theme::Theme;

/// Advanced-issues screen shown after a Quick Clean run
pub struct IssuesView<'a> {
    state: &'a AppState,
    theme: &'a Theme,
}

impl<'a> IssuesView<'a> {
    pub fn new(state: &'a AppState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }
}

impl Widget for IssuesView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 10 || area.width < 40 {
            return;
        }

        let x = area.x + 4;
        let mut y = area.y + 1;

        buf.set_string(
            x,
            y,
            "Quick Clean finished",
            Style::default()
                .fg(self.theme.green)
                .add_modifier(Modifier::BOLD),
        );
        y += 1;
        buf.set_string(
            x,
            y,
            "Some issues need advanced cleaning to resolve.",
            Style::default().fg(self.theme.fg_dim),
        );
        y += 2;

        let remaining = self.state.space_breakdown().hidden_bytes;
        let issues = [
            format!("{} GB remaining to be cleaned", format_gb(remaining)),
            "Hidden caches detected".to_string(),
            "Residual files from removed apps".to_string(),
        ];
        for issue in &issues {
            buf.set_string(x, y, "✗", Style::default().fg(self.theme.red));
            buf.set_string(x + 2, y, issue, Style::default().fg(self.theme.fg));
            y += 2;
        }

        buf.set_string(
            x,
            y,
            "Press r to resolve or s to skip for now",
            Style::default()
                .fg(self.theme.orange)
                .add_modifier(Modifier::BOLD),
        );
    }
}
