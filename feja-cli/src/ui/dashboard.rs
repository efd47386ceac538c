use feja_core::{format_count, format_gb, format_size};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::Widget,
};

use crate::app::AppState;

use super::bar_chart::render_bar;
use super::theme::Theme;

/// Storage dashboard with the space-used card and breakdown legend
pub struct DashboardView<'a> {
    state: &'a AppState,
    theme: &'a Theme,
}

impl<'a> DashboardView<'a> {
    pub fn new(state: &'a AppState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }

    fn legend_row(
        &self,
        buf: &mut Buffer,
        x: u16,
        y: u16,
        color: Color,
        label: &str,
        bytes: u64,
    ) {
        buf.set_string(x, y, "■", Style::default().fg(color));
        buf.set_string(x + 2, y, label, Style::default().fg(self.theme.fg));
        let value = format!("{} GB", format_gb(bytes));
        buf.set_string(
            x + 26,
            y,
            &value,
            Style::default().fg(self.theme.fg_dim),
        );
    }
}

impl Widget for DashboardView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 12 || area.width < 40 {
            return;
        }

        let x = area.x + 4;
        let mut y = area.y + 1;

        // Storage card
        match &self.state.storage {
            Some(stats) => {
                let used = stats.used_bytes();
                buf.set_string(
                    x,
                    y,
                    format!("{:.0}% used", stats.used_percent()),
                    Style::default()
                        .fg(self.theme.fg)
                        .add_modifier(Modifier::BOLD),
                );
                let detail = format!(
                    "{} of {}",
                    format_size(used),
                    format_size(stats.total_bytes)
                );
                let detail_x = area.x + area.width.saturating_sub(detail.len() as u16 + 4);
                buf.set_string(detail_x, y, &detail, Style::default().fg(self.theme.fg_dim));
                y += 1;

                let bar_width = area.width.saturating_sub(10) as usize;
                let (bar, _) = render_bar(stats.used_percent(), bar_width, self.theme.orange);
                buf.set_string(x, y, &bar, Style::default().fg(self.theme.orange));
                y += 2;
            }
            None => {
                buf.set_string(
                    x,
                    y,
                    "Storage information unavailable",
                    Style::default().fg(self.theme.fg_muted),
                );
                y += 2;
            }
        }

        // Space breakdown legend
        let breakdown = self.state.space_breakdown();
        buf.set_string(
            x,
            y,
            "SPACE THAT CAN BE FREED",
            Style::default().fg(self.theme.fg_muted),
        );
        y += 1;
        self.legend_row(
            buf,
            x,
            y,
            self.theme.orange,
            "Unneeded files",
            breakdown.unneeded_bytes,
        );
        y += 1;
        self.legend_row(
            buf,
            x,
            y,
            self.theme.purple,
            "Hidden caches",
            breakdown.hidden_bytes,
        );
        y += 1;
        self.legend_row(
            buf,
            x,
            y,
            self.theme.blue,
            "Files to review",
            breakdown.review_bytes,
        );
        y += 2;

        let media = format!(
            "{} media files on device",
            format_count(self.state.media_count())
        );
        buf.set_string(x, y, &media, Style::default().fg(self.theme.fg_dim));
        y += 2;

        buf.set_string(
            x,
            y,
            "Press c to run Quick Clean again",
            Style::default()
                .fg(self.theme.orange)
                .add_modifier(Modifier::BOLD),
        );
    }
}
