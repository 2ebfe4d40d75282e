//! Neon - high-saturation synth colors

use crate::tui::themes::Theme;
use ratatui::style::Color;

pub fn neon() -> Theme {
    Theme {
        name: "neon".to_string(),
        display_name: "Neon".to_string(),
        bg_color: Color::Rgb(16, 12, 28),
        text_color: Color::Rgb(230, 225, 245),
        dim_color: Color::Rgb(130, 120, 165),
        border_color: Color::Rgb(90, 70, 140),
        title_color: Color::Rgb(80, 250, 230),
        accent_color: Color::Rgb(255, 110, 200),
        success_color: Color::Rgb(130, 255, 140),
        warning_color: Color::Rgb(255, 220, 90),
        code_color: Color::Rgb(240, 240, 250),
        code_bg_color: Color::Rgb(26, 20, 44),
        link_color: Color::Rgb(80, 250, 230),
        progress_color: Color::Rgb(255, 110, 200),
        caret_color: Color::Rgb(80, 250, 230),
        selection_bg_color: Color::Rgb(50, 38, 80),
        status_bar_bg_color: Color::Rgb(24, 18, 40),
    }
}
