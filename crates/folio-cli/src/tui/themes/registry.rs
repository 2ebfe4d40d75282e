//! Theme registry for discovering and toggling themes

use std::collections::HashMap;

use once_cell::sync::Lazy;
use ratatui::style::Color;
use thiserror::Error;

use super::Theme;

/// Hardcoded minimal fallback used if the built-in default is ever
/// missing from the registry
static FALLBACK_THEME: Lazy<Theme> = Lazy::new(|| Theme {
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
});

/// Requested theme name is not registered
#[derive(Debug, Error)]
#[error("unknown theme: {0}")]
pub struct UnknownTheme(pub String);

/// Registry of all built-in themes, in toggle order
pub struct ThemeRegistry {
    themes: HashMap<String, Theme>,
    ordered_names: Vec<String>,
}

impl ThemeRegistry {
    pub fn new() -> Self {
        let mut registry = Self {
            themes: HashMap::new(),
            ordered_names: Vec::new(),
        };

        use super::definitions::*;
        registry.register(midnight());
        registry.register(paper());
        registry.register(forest());
        registry.register(neon());

        registry
    }

    fn register(&mut self, theme: Theme) {
        self.ordered_names.push(theme.name.clone());
        self.themes.insert(theme.name.clone(), theme);
    }

    /// Look up a theme, failing with a typed error on unknown names
    pub fn resolve(&self, name: &str) -> Result<&Theme, UnknownTheme> {
        self.themes
            .get(name)
            .ok_or_else(|| UnknownTheme(name.to_string()))
    }

    /// The default theme; falls back to the hardcoded palette if the
    /// registry somehow lost it
    pub fn default_theme(&self) -> &Theme {
        self.themes
            .get(FALLBACK_THEME.name.as_str())
            .unwrap_or(&FALLBACK_THEME)
    }

    /// Next theme name in toggle order, wrapping at the end. Unknown
    /// names restart the cycle.
    pub fn next_after(&self, name: &str) -> &str {
        let position = self.ordered_names.iter().position(|n| n == name);
        let next = match position {
            Some(i) => (i + 1) % self.ordered_names.len(),
            None => 0,
        };
        &self.ordered_names[next]
    }

    pub fn names(&self) -> &[String] {
        &self.ordered_names
    }
}

impl Default for ThemeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_and_unknown() {
        let registry = ThemeRegistry::new();
        assert!(registry.resolve("midnight").is_ok());
        let err = registry.resolve("nonexistent").unwrap_err();
        assert_eq!(err.to_string(), "unknown theme: nonexistent");
    }

    #[test]
    fn test_toggle_order_cycles_back_to_start() {
        let registry = ThemeRegistry::new();
        let start = registry.names()[0].clone();
        let mut name = start.clone();
        for _ in 0..registry.names().len() {
            name = registry.next_after(&name).to_string();
        }
        assert_eq!(name, start);
    }

    #[test]
    fn test_unknown_name_restarts_cycle() {
        let registry = ThemeRegistry::new();
        assert_eq!(registry.next_after("nope"), registry.names()[0]);
    }

    #[test]
    fn test_default_theme_is_registered() {
        let registry = ThemeRegistry::new();
        assert_eq!(registry.default_theme().name, "midnight");
    }
}
