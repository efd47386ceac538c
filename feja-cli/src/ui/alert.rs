use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Clear, Padding, Widget},
};

use super::layout::centered_rect;
use super::theme::Theme;

/// Blocking dialog shown when storage access was denied
pub struct PermissionAlertView<'a> {
    theme: &'a Theme,
}

impl<'a> PermissionAlertView<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }
}

impl Widget for PermissionAlertView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let dialog_area = centered_rect(54, 9, area);

        Clear.render(dialog_area, buf);

        let block = Block::default()
            .title(" Permission needed ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.red))
            .style(Style::default().bg(self.theme.bg_surface))
            .padding(Padding::uniform(1));

        let inner = block.inner(dialog_area);
        block.render(dialog_area, buf);

        let text_style = Style::default().fg(self.theme.fg);
        let key_style = Style::default()
            .fg(self.theme.green)
            .add_modifier(Modifier::BOLD);

        buf.set_string(
            inner.x,
            inner.y,
            "Storage access is required to scan",
            text_style,
        );
        buf.set_string(
            inner.x,
            inner.y + 1,
            "your device for unneeded files.",
            text_style,
        );

        let hints_y = inner.y + inner.height.saturating_sub(1);
        buf.set_string(inner.x, hints_y, "[Enter]", key_style);
        buf.set_string(inner.x + 8, hints_y, "Dismiss", text_style);
        buf.set_string(inner.x + 18, hints_y, "[o]", key_style);
        buf.set_string(inner.x + 22, hints_y, "Open settings", text_style);
    }
}
