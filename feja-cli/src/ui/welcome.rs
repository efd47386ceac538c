use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::Widget,
};

use super::theme::Theme;

/// Welcome screen with the feature pitch
pub struct WelcomeView<'a> {
    theme: &'a Theme,
}

impl<'a> WelcomeView<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }
}

const FEATURES: [(&str, &str); 3] = [
    ("●", "Find junk, caches and leftover files"),
    ("●", "Spot duplicate and forgotten media"),
    ("●", "Free up storage in a couple of keystrokes"),
];

impl Widget for WelcomeView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 8 || area.width < 30 {
            return;
        }

        let x = area.x + 4;
        let mut y = area.y + area.height / 4;

        buf.set_string(
            x,
            y,
            "Clean up your device",
            Style::default()
                .fg(self.theme.fg)
                .add_modifier(Modifier::BOLD),
        );
        y += 1;
        buf.set_string(
            x,
            y,
            "Reclaim space taken by files you no longer need.",
            Style::default().fg(self.theme.fg_dim),
        );
        y += 2;

        for (bullet, text) in FEATURES {
            buf.set_string(x, y, bullet, Style::default().fg(self.theme.orange));
            buf.set_string(x + 2, y, text, Style::default().fg(self.theme.fg));
            y += 1;
        }

        y += 2;
        buf.set_string(
            x,
            y,
            "Press Enter to get started",
            Style::default()
                .fg(self.theme.orange)
                .add_modifier(Modifier::BOLD),
        );
    }
}
