//! Forest - muted greens on warm charcoal

use crate::tui::themes::Theme;
use ratatui::style::Color;

pub fn forest() -> Theme {
    Theme {
        name: "forest".to_string(),
        display_name: "Forest".to_string(),
        bg_color: Color::Rgb(24, 28, 24),
        text_color: Color::Rgb(210, 215, 200),
        dim_color: Color::Rgb(125, 135, 120),
        border_color: Color::Rgb(70, 85, 70),
        title_color: Color::Rgb(150, 210, 130),
        accent_color: Color::Rgb(220, 180, 120),
        success_color: Color::Rgb(150, 210, 130),
        warning_color: Color::Rgb(230, 190, 100),
        code_color: Color::Rgb(215, 215, 195),
        code_bg_color: Color::Rgb(32, 38, 32),
        link_color: Color::Rgb(140, 190, 220),
        progress_color: Color::Rgb(150, 210, 130),
        caret_color: Color::Rgb(220, 180, 120),
        selection_bg_color: Color::Rgb(45, 55, 45),
        status_bar_bg_color: Color::Rgb(30, 36, 30),
    }
}
