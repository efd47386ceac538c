use feja_core::{SCAN_PHASES, ScanStepper};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::Widget,
};

use super::bar_chart::render_bar;
use super::theme::Theme;

/// Scan progress screen: big percentage, phase label, progress bar
pub struct ScanningView<'a> {
    stepper: &'a ScanStepper,
    theme: &'a Theme,
}

impl<'a> ScanningView<'a> {
    pub fn new(stepper: &'a ScanStepper, theme: &'a Theme) -> Self {
        Self { stepper, theme }
    }
}

impl Widget for ScanningView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 8 || area.width < 30 {
            return;
        }

        let x = area.x + 4;
        let mut y = area.y + area.height / 3;

        // Percentage, rendered large-ish by spacing
        let percent = format!("{:>3} %", self.stepper.percent());
        buf.set_string(
            x,
            y,
            &percent,
            Style::default()
                .fg(self.theme.orange)
                .add_modifier(Modifier::BOLD),
        );

        let step = format!(
            "Step {} of {}",
            self.stepper.phase_index() + 1,
            SCAN_PHASES.len()
        );
        buf.set_string(
            x + percent.len() as u16 + 3,
            y,
            &step,
            Style::default().fg(self.theme.fg_muted),
        );
        y += 2;

        buf.set_string(x, y, self.stepper.label(), Style::default().fg(self.theme.fg));
        y += 2;

        let bar_width = area.width.saturating_sub(10) as usize;
        let (bar, _) = render_bar(self.stepper.percent() as f64, bar_width, self.theme.orange);
        buf.set_string(x, y, &bar, Style::default().fg(self.theme.orange));
    }
}
