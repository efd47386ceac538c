use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::Widget,
};

use crate::app::{AppState, Overlay, Screen};

use super::theme::Theme;

/// Footer widget showing keyboard hints and the status line
pub struct Footer<'a> {
    state: &'a AppState,
    theme: &'a Theme,
}

impl<'a> Footer<'a> {
    pub fn new(state: &'a AppState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }

    fn hints(&self) -> Vec<(&'static str, &'static str)> {
        if let Some(overlay) = self.state.overlay {
            return match overlay {
                Overlay::PermissionAlert => {
                    vec![("Enter", "Dismiss"), ("o", "Open settings")]
                }
                Overlay::ConfirmClean => vec![("y", "Clean"), ("n", "Cancel")],
                Overlay::Cleaning => vec![],
            };
        }

        match self.state.screen {
            Screen::Welcome => vec![("Enter", "Get started"), ("q", "Quit")],
            Screen::Access => vec![
                ("Enter", "Continue"),
                ("o", "Open settings"),
                ("Esc", "Back"),
                ("q", "Quit"),
            ],
            Screen::Scanning => vec![("q", "Quit")],
            Screen::ScanComplete => vec![("Enter", "See results"), ("q", "Quit")],
            Screen::Results => vec![
                ("↑↓", "Navigate"),
                ("Space", "Select"),
                ("Enter", "Expand"),
                ("f", "Finish cleaning"),
                ("s", "Settings"),
                ("Esc", "Back"),
            ],
            Screen::Menu => vec![("↑↓", "Navigate"), ("Enter", "Open"), ("Esc", "Back")],
            Screen::Settings => vec![
                ("↑↓", "Navigate"),
                ("Space", "Toggle"),
                ("Esc", "Back"),
            ],
            Screen::Issues => vec![("r", "Resolve"), ("s", "Skip"), ("q", "Quit")],
            Screen::Dashboard => vec![
                ("c", "Quick clean"),
                ("s", "Settings"),
                ("m", "Menu"),
                ("q", "Quit"),
            ],
        }
    }
}

impl Widget for Footer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 20 || area.height < 1 {
            return;
        }

        let hints = self.hints();

        let key_style = Style::default()
            .fg(self.theme.fg)
            .add_modifier(Modifier::BOLD);
        let desc_style = Style::default().fg(self.theme.fg_dim);
        let sep_style = Style::default().fg(self.theme.border);

        let mut x = area.x + 1;
        for (i, (key, desc)) in hints.iter().enumerate() {
            buf.set_string(x, area.y, *key, key_style);
            x += key.chars().count() as u16 + 1;

            buf.set_string(x, area.y, *desc, desc_style);
            x += desc.len() as u16;

            if i < hints.len() - 1 {
                buf.set_string(x, area.y, "  │  ", sep_style);
                x += 5;
            }

            if x >= area.x + area.width.saturating_sub(5) {
                break;
            }
        }

        // Status line on the right (e.g. a failed probe)
        if let Some(message) = &self.state.status_message {
            let message_x = area.x + area.width.saturating_sub(message.len() as u16 + 1);
            if message_x > x + 2 {
                buf.set_string(
                    message_x,
                    area.y,
                    message,
                    Style::default().fg(self.theme.yellow),
                );
            }
        }
    }
}
