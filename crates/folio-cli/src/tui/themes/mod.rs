//! Color themes
//!
//! A reduced palette covering everything folio draws. Themes are built in;
//! the active one is chosen through shared settings so every view observes
//! a toggle.

mod definitions;
mod registry;

pub use registry::{ThemeRegistry, UnknownTheme};

use ratatui::style::Color;

/// Color set used across every view
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    /// Identifier used in settings and on the command line
    pub name: String,
    /// Human-facing name for the status bar
    pub display_name: String,
    pub bg_color: Color,
    pub text_color: Color,
    pub dim_color: Color,
    pub border_color: Color,
    pub title_color: Color,
    pub accent_color: Color,
    pub success_color: Color,
    pub warning_color: Color,
    pub code_color: Color,
    pub code_bg_color: Color,
    pub link_color: Color,
    pub progress_color: Color,
    pub caret_color: Color,
    pub selection_bg_color: Color,
    pub status_bar_bg_color: Color,
}
