//! Command palette with fuzzy matching
//!
//! A modal list of every navigation and action command, filtered as the
//! user types. Running a command closes the palette first, then the app
//! applies the action.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use super::themes::Theme;

/// What a palette command does, applied by the app after the palette closes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandAction {
    GoHome,
    OpenLatestPost,
    OpenLibrary,
    OpenTalks,
    ToggleTheme,
    OpenSource,
    Quit,
}

#[derive(Debug, Clone)]
pub struct CommandEntry {
    pub title: &'static str,
    pub description: &'static str,
    pub group: &'static str,
    pub action: CommandAction,
}

/// Every command the palette offers, in display order
fn all_commands() -> Vec<CommandEntry> {
    vec![
        CommandEntry {
            title: "Home",
            description: "Back to the start page",
            group: "Navigation",
            action: CommandAction::GoHome,
        },
        CommandEntry {
            title: "Latest Post",
            description: "Open the newest blog post",
            group: "Navigation",
            action: CommandAction::OpenLatestPost,
        },
        CommandEntry {
            title: "Book Log",
            description: "What I'm reading",
            group: "Navigation",
            action: CommandAction::OpenLibrary,
        },
        CommandEntry {
            title: "Tech Talks",
            description: "Talks and slides",
            group: "Navigation",
            action: CommandAction::OpenTalks,
        },
        CommandEntry {
            title: "Toggle Theme",
            description: "Cycle to the next color theme",
            group: "Actions",
            action: CommandAction::ToggleTheme,
        },
        CommandEntry {
            title: "View Source",
            description: "Open the repository in a browser",
            group: "Actions",
            action: CommandAction::OpenSource,
        },
        CommandEntry {
            title: "Quit",
            description: "Leave folio",
            group: "Actions",
            action: CommandAction::Quit,
        },
    ]
}

/// Subsequence fuzzy match, scored. Word-start and consecutive hits rank
/// higher; `None` when the query is not a subsequence of the candidate.
fn fuzzy_match(candidate: &str, query: &str) -> Option<i32> {
    if query.is_empty() {
        return Some(0);
    }
    let candidate: Vec<char> = candidate.chars().collect();
    let query: Vec<char> = query.chars().collect();
    let mut score = 0;
    let mut qi = 0;
    let mut last_hit: Option<usize> = None;

    for (ci, &c) in candidate.iter().enumerate() {
        if qi < query.len() && c == query[qi] {
            score += 1;
            if ci == 0 || candidate[ci - 1] == ' ' {
                score += 3;
            }
            if last_hit == Some(ci.wrapping_sub(1)) {
                score += 2;
            }
            last_hit = Some(ci);
            qi += 1;
        }
    }

    (qi == query.len()).then_some(score)
}

/// Modal command palette state
pub struct CommandPalette {
    entries: Vec<CommandEntry>,
    /// (entry index, score), best first
    filtered: Vec<(usize, i32)>,
    selected: usize,
    pub visible: bool,
    query: String,
}

impl Default for CommandPalette {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandPalette {
    pub fn new() -> Self {
        let mut palette = Self {
            entries: all_commands(),
            filtered: Vec::new(),
            selected: 0,
            visible: false,
            query: String::new(),
        };
        palette.filter();
        palette
    }

    pub fn open(&mut self) {
        self.visible = true;
        self.query.clear();
        self.selected = 0;
        self.filter();
    }

    pub fn close(&mut self) {
        self.visible = false;
        self.query.clear();
        self.selected = 0;
    }

    pub fn input_char(&mut self, c: char) {
        self.query.push(c);
        self.selected = 0;
        self.filter();
    }

    pub fn backspace(&mut self) {
        self.query.pop();
        self.selected = 0;
        self.filter();
    }

    pub fn next(&mut self) {
        if !self.filtered.is_empty() {
            self.selected = (self.selected + 1) % self.filtered.len();
        }
    }

    pub fn prev(&mut self) {
        if !self.filtered.is_empty() {
            self.selected = self
                .selected
                .checked_sub(1)
                .unwrap_or(self.filtered.len() - 1);
        }
    }

    /// Action of the highlighted command, if any survive the filter
    pub fn selected_action(&self) -> Option<CommandAction> {
        self.filtered
            .get(self.selected)
            .and_then(|(idx, _)| self.entries.get(*idx))
            .map(|entry| entry.action)
    }

    fn filter(&mut self) {
        let query = self.query.to_lowercase();
        if query.is_empty() {
            self.filtered = self.entries.iter().enumerate().map(|(i, _)| (i, 0)).collect();
            return;
        }

        let mut scored: Vec<(usize, i32)> = Vec::new();
        for (idx, entry) in self.entries.iter().enumerate() {
            let mut best = 0;
            if let Some(score) = fuzzy_match(&entry.title.to_lowercase(), &query) {
                best = best.max(score + 20);
            }
            if let Some(score) = fuzzy_match(&entry.description.to_lowercase(), &query) {
                best = best.max(score);
            }
            if best > 0 {
                scored.push((idx, best));
            }
        }
        scored.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        self.filtered = scored;
    }

    pub fn render(&self, f: &mut Frame, theme: &Theme) {
        let area = centered_rect(52, 16, f.area());
        f.render_widget(Clear, area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme.border_color))
            .style(Style::default().bg(theme.bg_color))
            .title(" Command Palette ")
            .title_style(Style::default().fg(theme.title_color));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Min(1)])
            .split(inner);

        let input = Line::from(vec![
            Span::styled("> ", Style::default().fg(theme.accent_color)),
            Span::styled(self.query.clone(), Style::default().fg(theme.text_color)),
            Span::styled("▌", Style::default().fg(theme.caret_color)),
        ]);
        f.render_widget(Paragraph::new(input), chunks[0]);

        let mut lines: Vec<Line> = Vec::new();
        if self.filtered.is_empty() {
            lines.push(Line::from(Span::styled(
                "  No results found",
                Style::default().fg(theme.dim_color),
            )));
        }

        let mut last_group = "";
        for (i, (idx, _)) in self.filtered.iter().enumerate() {
            let entry = &self.entries[*idx];
            if entry.group != last_group {
                lines.push(Line::from(Span::styled(
                    entry.group.to_uppercase(),
                    Style::default()
                        .fg(theme.dim_color)
                        .add_modifier(Modifier::BOLD),
                )));
                last_group = entry.group;
            }
            let is_selected = i == self.selected;
            let marker = if is_selected { " › " } else { "   " };
            let title_style = if is_selected {
                Style::default()
                    .fg(theme.accent_color)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.text_color)
            };
            lines.push(Line::from(vec![
                Span::styled(marker, Style::default().fg(theme.accent_color)),
                Span::styled(entry.title, title_style),
                Span::styled(
                    format!("  {}", entry.description),
                    Style::default().fg(theme.dim_color),
                ),
            ]));
        }

        f.render_widget(Paragraph::new(lines), chunks[1]);
    }
}

/// Center a fixed-size rect inside `area`, clamped to it
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_lists_everything() {
        let palette = CommandPalette::new();
        assert_eq!(palette.filtered.len(), palette.entries.len());
    }

    #[test]
    fn test_filter_hides_non_matches() {
        let mut palette = CommandPalette::new();
        palette.open();
        for c in "theme".chars() {
            palette.input_char(c);
        }
        assert_eq!(palette.selected_action(), Some(CommandAction::ToggleTheme));
        assert_eq!(palette.filtered.len(), 1);
    }

    #[test]
    fn test_prefix_match_ranks_first() {
        let mut palette = CommandPalette::new();
        palette.open();
        palette.input_char('h');
        assert_eq!(palette.selected_action(), Some(CommandAction::GoHome));
    }

    #[test]
    fn test_selection_wraps() {
        let mut palette = CommandPalette::new();
        palette.open();
        let count = palette.filtered.len();
        for _ in 0..count {
            palette.next();
        }
        assert_eq!(palette.selected_action(), Some(CommandAction::GoHome));
        palette.prev();
        assert_eq!(palette.selected_action(), Some(CommandAction::Quit));
    }

    #[test]
    fn test_fuzzy_match_requires_subsequence() {
        assert!(fuzzy_match("toggle theme", "ttm").is_some());
        assert!(fuzzy_match("toggle theme", "xyz").is_none());
        assert!(fuzzy_match("anything", "").is_some());
    }

    #[test]
    fn test_backspace_restores_results() {
        let mut palette = CommandPalette::new();
        palette.open();
        palette.input_char('z');
        palette.input_char('z');
        assert!(palette.selected_action().is_none());
        palette.backspace();
        palette.backspace();
        assert_eq!(palette.filtered.len(), palette.entries.len());
    }
}
