use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Clear, Padding, Widget},
};

use super::layout::centered_rect;
use super::theme::Theme;

/// Braille spinner characters
const SPINNER: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

/// Modal spinner shown while the clean runs
pub struct CleaningView<'a> {
    spinner_frame: usize,
    theme: &'a Theme,
}

impl<'a> CleaningView<'a> {
    pub fn new(spinner_frame: usize, theme: &'a Theme) -> Self {
        Self {
            spinner_frame,
            theme,
        }
    }
}

impl Widget for CleaningView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let dialog_area = centered_rect(40, 7, area);

        Clear.render(dialog_area, buf);

        let block = Block::default()
            .title(" Cleaning ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.orange))
            .style(Style::default().bg(self.theme.bg_surface))
            .padding(Padding::uniform(1));

        let inner = block.inner(dialog_area);
        block.render(dialog_area, buf);

        let spinner = SPINNER[self.spinner_frame % SPINNER.len()];
        buf.set_string(
            inner.x,
            inner.y,
            spinner.to_string(),
            Style::default()
                .fg(self.theme.orange)
                .add_modifier(Modifier::BOLD),
        );
        buf.set_string(
            inner.x + 2,
            inner.y,
            "Clearing temporary files...",
            Style::default().fg(self.theme.fg),
        );
    }
}
