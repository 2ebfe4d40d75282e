//! Talks view - the tech-talk listing

use folio_core::content::Talk;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::tui::themes::Theme;

pub fn render(f: &mut Frame, area: Rect, talks: &[Talk], selected: usize, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.border_color))
        .title(" Tech Talks ")
        .title_style(Style::default().fg(theme.title_color));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut lines: Vec<Line> = Vec::new();
    for (i, talk) in talks.iter().enumerate() {
        let is_selected = i == selected;
        let marker = if is_selected { "› " } else { "  " };
        let mut title_style = Style::default()
            .fg(theme.text_color)
            .add_modifier(Modifier::BOLD);
        if is_selected {
            title_style = title_style.fg(theme.accent_color).bg(theme.selection_bg_color);
        }
        lines.push(Line::from(vec![
            Span::styled(marker, Style::default().fg(theme.accent_color)),
            Span::styled(talk.title, title_style),
        ]));
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {}", talk.event),
                Style::default().fg(theme.success_color),
            ),
            Span::styled(
                format!(" · {}", talk.date_line()),
                Style::default().fg(theme.dim_color),
            ),
        ]));
        lines.push(Line::from(Span::styled(
            format!("  {}", talk.summary),
            Style::default().fg(theme.dim_color),
        )));
        lines.push(Line::from(Span::styled(
            format!("  {}", talk.url),
            Style::default()
                .fg(theme.link_color)
                .add_modifier(Modifier::UNDERLINED),
        )));
        lines.push(Line::default());
    }
    lines.push(Line::from(Span::styled(
        "  Enter opens the selected talk in a browser",
        Style::default().fg(theme.dim_color),
    )));

    f.render_widget(Paragraph::new(lines), inner);
}
