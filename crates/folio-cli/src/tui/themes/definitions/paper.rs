//! Paper - a light theme for bright rooms

use crate::tui::themes::Theme;
use ratatui::style::Color;

pub fn paper() -> Theme {
    Theme {
        name: "paper".to_string(),
        display_name: "Paper".to_string(),
        bg_color: Color::Rgb(248, 246, 240),
        text_color: Color::Rgb(55, 53, 47),
        dim_color: Color::Rgb(140, 135, 125),
        border_color: Color::Rgb(200, 195, 185),
        title_color: Color::Rgb(30, 90, 160),
        accent_color: Color::Rgb(130, 60, 160),
        success_color: Color::Rgb(40, 140, 70),
        warning_color: Color::Rgb(180, 130, 20),
        code_color: Color::Rgb(60, 55, 50),
        code_bg_color: Color::Rgb(236, 232, 222),
        link_color: Color::Rgb(30, 90, 160),
        progress_color: Color::Rgb(130, 60, 160),
        caret_color: Color::Rgb(130, 60, 160),
        selection_bg_color: Color::Rgb(225, 220, 208),
        status_bar_bg_color: Color::Rgb(238, 234, 226),
    }
}
