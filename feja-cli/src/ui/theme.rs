use ratatui::style::Color;

/// Dark theme with 24-bit RGB colors
#[allow(dead_code)]
pub struct Theme {
    // Base colors
    pub bg: Color,
    pub bg_surface: Color,
    pub bg_highlight: Color,
    pub fg: Color,
    pub fg_dim: Color,
    pub fg_muted: Color,

    // Accent colors
    pub orange: Color,
    pub green: Color,
    pub blue: Color,
    pub purple: Color,
    pub yellow: Color,
    pub red: Color,

    // UI elements
    pub border: Color,
    pub selection_bg: Color,
    pub selection_fg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            bg: Color::Rgb(35, 39, 47),
            bg_surface: Color::Rgb(41, 45, 54),
            bg_highlight: Color::Rgb(68, 75, 84),
            fg: Color::Rgb(236, 239, 244),
            fg_dim: Color::Rgb(176, 182, 195),
            fg_muted: Color::Rgb(122, 129, 140),

            // Brand accent is orange; the rest color the dashboard legend
            orange: Color::Rgb(255, 165, 0),
            green: Color::Rgb(61, 220, 151),
            blue: Color::Rgb(79, 195, 247),
            purple: Color::Rgb(162, 89, 255),
            yellow: Color::Rgb(255, 214, 0),
            red: Color::Rgb(244, 96, 96),

            border: Color::Rgb(68, 75, 84),
            selection_bg: Color::Rgb(255, 165, 0),
            selection_fg: Color::Rgb(35, 39, 47),
        }
    }
}
