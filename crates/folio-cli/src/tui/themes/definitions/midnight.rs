//! Midnight - the default dark blue theme

use crate::tui::themes::Theme;
use ratatui::style::Color;

pub fn midnight() -> Theme {
    Theme {
        name: "midnight".to_string(),
        display_name: "Midnight".to_string(),
        bg_color: Color::Rgb(18, 18, 28),
        text_color: Color::Rgb(205, 214, 230),
        dim_color: Color::Rgb(120, 130, 150),
        border_color: Color::Rgb(70, 75, 95),
        title_color: Color::Rgb(130, 200, 250),
        accent_color: Color::Rgb(180, 150, 250),
        success_color: Color::Rgb(120, 220, 140),
        warning_color: Color::Rgb(240, 200, 110),
        code_color: Color::Rgb(230, 230, 210),
        code_bg_color: Color::Rgb(30, 30, 44),
        link_color: Color::Rgb(130, 200, 250),
        progress_color: Color::Rgb(180, 150, 250),
        caret_color: Color::Rgb(180, 150, 250),
        selection_bg_color: Color::Rgb(45, 50, 70),
        status_bar_bg_color: Color::Rgb(28, 28, 40),
    }
}
