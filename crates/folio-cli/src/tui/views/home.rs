//! Home view - animated hero line plus the post list

use folio_core::content::Post;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::tui::themes::Theme;

pub fn render(
    f: &mut Frame,
    area: Rect,
    typing_text: &str,
    posts: &[Post],
    selected: usize,
    theme: &Theme,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(6), Constraint::Min(3)])
        .split(area);

    render_hero(f, chunks[0], typing_text, theme);
    render_posts(f, chunks[1], posts, selected, theme);
}

fn render_hero(f: &mut Frame, area: Rect, typing_text: &str, theme: &Theme) {
    let lines = vec![
        Line::default(),
        Line::from(Span::styled(
            "Welcome to Folio",
            Style::default()
                .fg(theme.title_color)
                .add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(vec![
            Span::styled(typing_text.to_string(), Style::default().fg(theme.text_color)),
            Span::styled("▌", Style::default().fg(theme.caret_color)),
        ]),
        Line::default(),
        Line::from(Span::styled(
            "Ctrl+K command palette · 1/2/3 switch views · q quit",
            Style::default().fg(theme.dim_color),
        )),
    ];
    let hero = Paragraph::new(lines).alignment(Alignment::Center);
    f.render_widget(hero, area);
}

fn render_posts(f: &mut Frame, area: Rect, posts: &[Post], selected: usize, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.border_color))
        .title(" Blog Posts ")
        .title_style(Style::default().fg(theme.title_color));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut lines: Vec<Line> = Vec::new();
    for (i, post) in posts.iter().enumerate() {
        let is_selected = i == selected;
        let title_style = if is_selected {
            Style::default()
                .fg(theme.accent_color)
                .bg(theme.selection_bg_color)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(theme.text_color)
                .add_modifier(Modifier::BOLD)
        };
        let marker = if is_selected { "› " } else { "  " };
        lines.push(Line::from(vec![
            Span::styled(marker, Style::default().fg(theme.accent_color)),
            Span::styled(post.title, title_style),
        ]));
        lines.push(Line::from(Span::styled(
            format!(
                "  {} · {} min read · {}",
                post.date_line(),
                post.reading_time(),
                post.tags.join(", ")
            ),
            Style::default().fg(theme.dim_color),
        )));
        lines.push(Line::from(Span::styled(
            format!("  {}", post.excerpt),
            Style::default()
                .fg(theme.dim_color)
                .add_modifier(Modifier::ITALIC),
        )));
        lines.push(Line::default());
    }
    lines.push(Line::from(Span::styled(
        "  Enter opens the selected post",
        Style::default().fg(theme.dim_color),
    )));

    f.render_widget(Paragraph::new(lines), inner);
}
