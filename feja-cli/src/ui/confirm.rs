use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Clear, Padding, Widget},
};

use super::layout::centered_rect;
use super::theme::Theme;

/// Clean confirmation dialog widget
pub struct ConfirmCleanView<'a> {
    selected_count: usize,
    theme: &'a Theme,
}

impl<'a> ConfirmCleanView<'a> {
    pub fn new(selected_count: usize, theme: &'a Theme) -> Self {
        Self {
            selected_count,
            theme,
        }
    }
}

impl Widget for ConfirmCleanView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let dialog_area = centered_rect(50, 9, area);

        Clear.render(dialog_area, buf);

        let block = Block::default()
            .title(" Finish cleaning? ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.orange))
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
            "Clear temporary app files?",
            text_style,
        );
        let detail = format!("{} categories selected", self.selected_count);
        buf.set_string(
            inner.x,
            inner.y + 1,
            &detail,
            Style::default().fg(self.theme.fg_dim),
        );

        let hints_y = inner.y + inner.height.saturating_sub(1);
        buf.set_string(inner.x, hints_y, "[y]", key_style);
        buf.set_string(inner.x + 4, hints_y, "Yes, clean", text_style);
        buf.set_string(inner.x + 17, hints_y, "[n]", key_style);
        buf.set_string(inner.x + 21, hints_y, "Cancel", text_style);
    }
}
