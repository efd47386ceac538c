use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::Widget,
};

use crate::app::cards::{ResultCard, UNNEEDED_SECTION_LEN};
use crate::app::{AppState, ViewState};

use super::theme::Theme;

/// How many item rows an expanded card shows before eliding
const MAX_EXPANDED_ITEMS: usize = 6;

/// Quick Clean results list
pub struct ResultsView<'a> {
    cards: Vec<ResultCard>,
    view: ViewState,
    theme: &'a Theme,
}

impl<'a> ResultsView<'a> {
    pub fn new(state: &'a AppState, theme: &'a Theme) -> Self {
        Self {
            cards: state.result_cards(),
            view: state.results_state,
            theme,
        }
    }
}

impl Widget for ResultsView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 6 || area.width < 30 {
            return;
        }

        let x = area.x + 2;
        let mut y = area.y;
        let bottom = area.y + area.height;

        let selected_count = self
            .cards
            .iter()
            .filter(|c| c.checkbox == Some(true))
            .count();
        buf.set_string(
            x,
            y,
            format!("{} SELECTED", selected_count),
            Style::default()
                .fg(self.theme.orange)
                .add_modifier(Modifier::BOLD),
        );
        y += 2;

        for (idx, card) in self.cards.iter().enumerate().skip(self.view.scroll_offset) {
            if y >= bottom {
                break;
            }

            // Section titles sit above their first card
            if idx == 0 {
                buf.set_string(
                    x,
                    y,
                    "UNNEEDED FILES",
                    Style::default().fg(self.theme.fg_muted),
                );
                y += 1;
            } else if idx == UNNEEDED_SECTION_LEN {
                y += 1;
                if y >= bottom {
                    break;
                }
                buf.set_string(
                    x,
                    y,
                    "FILES TO REVIEW",
                    Style::default().fg(self.theme.fg_muted),
                );
                y += 1;
            }
            if y >= bottom {
                break;
            }

            let selected = idx == self.view.selected_index;
            let row_style = if selected {
                Style::default()
                    .fg(self.theme.selection_fg)
                    .bg(self.theme.selection_bg)
            } else if card.locked {
                Style::default().fg(self.theme.fg_muted)
            } else {
                Style::default().fg(self.theme.fg)
            };

            let prefix = match (card.locked, card.checkbox) {
                (true, _) => " ✗  ",
                (false, Some(true)) => "[x] ",
                (false, Some(false)) => "[ ] ",
                (false, None) => "    ",
            };
            let chevron = if card.locked {
                ""
            } else if card.expanded {
                " ▾"
            } else {
                " ▸"
            };
            let line = format!("{}{}{}", prefix, card.label, chevron);
            let pad = (area.width.saturating_sub(4)) as usize;
            buf.set_string(x, y, format!("{:<pad$}", line), row_style);
            y += 1;
            if y >= bottom {
                break;
            }

            buf.set_string(
                x + 4,
                y,
                &card.desc,
                Style::default().fg(self.theme.fg_dim),
            );
            y += 1;

            if card.expanded {
                for item in card.items.iter().take(MAX_EXPANDED_ITEMS) {
                    if y >= bottom {
                        break;
                    }
                    let name_width = (area.width.saturating_sub(20)) as usize;
                    let name: String = item.name.chars().take(name_width).collect();
                    buf.set_string(x + 6, y, &name, Style::default().fg(self.theme.fg_dim));
                    let size_x =
                        area.x + area.width.saturating_sub(item.size_label.len() as u16 + 2);
                    buf.set_string(
                        size_x,
                        y,
                        &item.size_label,
                        Style::default().fg(self.theme.fg_muted),
                    );
                    y += 1;
                }
                if card.items.len() > MAX_EXPANDED_ITEMS && y < bottom {
                    let more = format!("… and {} more", card.items.len() - MAX_EXPANDED_ITEMS);
                    buf.set_string(x + 6, y, &more, Style::default().fg(self.theme.fg_muted));
                    y += 1;
                }
            }
        }
    }
}
