use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::Widget,
};

use crate::app::cards::MENU_ROWS;
use crate::app::{AppState, ViewState};

use super::theme::Theme;

/// General settings menu
pub struct MenuView<'a> {
    view: ViewState,
    theme: &'a Theme,
}

impl<'a> MenuView<'a> {
    pub fn new(state: &'a AppState, theme: &'a Theme) -> Self {
        Self {
            view: state.menu_state,
            theme,
        }
    }
}

impl Widget for MenuView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 6 || area.width < 30 {
            return;
        }

        let x = area.x + 2;
        let mut y = area.y + 1;
        let bottom = area.y + area.height;

        for (idx, row) in MENU_ROWS.iter().enumerate() {
            if y + 1 >= bottom {
                break;
            }

            let selected = idx == self.view.selected_index;
            let row_style = if selected {
                Style::default()
                    .fg(self.theme.selection_fg)
                    .bg(self.theme.selection_bg)
            } else if row.available {
                Style::default().fg(self.theme.fg)
            } else {
                Style::default().fg(self.theme.fg_muted)
            };

            let marker = if row.available { "▸ " } else { "  " };
            let line = format!("{}{}", marker, row.label);
            let pad = (area.width.saturating_sub(4)) as usize;
            buf.set_string(x, y, format!("{:<pad$}", line), row_style);
            y += 1;

            buf.set_string(
                x + 2,
                y,
                row.desc,
                Style::default().fg(self.theme.fg_dim),
            );
            if !row.available {
                let tag = "not in this build";
                let tag_x = area.x + area.width.saturating_sub(tag.len() as u16 + 2);
                buf.set_string(
                    tag_x,
                    y,
                    tag,
                    Style::default()
                        .fg(self.theme.fg_muted)
                        .add_modifier(Modifier::ITALIC),
                );
            }
            y += 2;
        }
    }
}
