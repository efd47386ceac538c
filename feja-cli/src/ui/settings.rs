use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::Widget,
};

use crate::app::cards;
use crate::app::{AppState, ViewState};

use super::theme::Theme;

/// Quick Clean settings: the category toggle list
pub struct SettingsView<'a> {
    state: &'a AppState,
    view: ViewState,
    theme: &'a Theme,
}

impl<'a> SettingsView<'a> {
    pub fn new(state: &'a AppState, theme: &'a Theme) -> Self {
        Self {
            state,
            view: state.settings_state,
            theme,
        }
    }
}

impl Widget for SettingsView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 6 || area.width < 30 {
            return;
        }

        let x = area.x + 2;
        let mut y = area.y;
        let bottom = area.y + area.height;

        buf.set_string(
            x,
            y,
            format!("{} categories enabled", self.state.toggles.enabled_count()),
            Style::default().fg(self.theme.fg_dim),
        );
        y += 2;

        let rows = cards::settings_rows();
        for (idx, category) in rows.iter().enumerate().skip(self.view.scroll_offset) {
            if y >= bottom {
                break;
            }

            let selected = idx == self.view.selected_index;
            let row_style = if selected {
                Style::default()
                    .fg(self.theme.selection_fg)
                    .bg(self.theme.selection_bg)
            } else if category.locked {
                Style::default().fg(self.theme.fg_muted)
            } else {
                Style::default().fg(self.theme.fg)
            };

            let switch = if category.locked {
                "  ✗  "
            } else if self.state.toggles.is_on(category.key) {
                " ▣ on "
            } else {
                " ▢ off"
            };
            let switch_style = if selected {
                row_style
            } else if category.locked {
                Style::default().fg(self.theme.fg_muted)
            } else if self.state.toggles.is_on(category.key) {
                Style::default()
                    .fg(self.theme.green)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(self.theme.fg_muted)
            };

            buf.set_string(x, y, switch, switch_style);
            buf.set_string(x + 7, y, category.label, row_style);

            // Description, right of the label, trimmed to fit
            let desc_x = x + 7 + 24;
            if desc_x < area.x + area.width {
                let room = (area.x + area.width - desc_x) as usize;
                let desc: String = category.desc.chars().take(room).collect();
                buf.set_string(desc_x, y, &desc, Style::default().fg(self.theme.fg_dim));
            }
            y += 1;
        }
    }
}
