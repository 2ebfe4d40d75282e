//! Library view - the book log

use folio_core::content::{Book, BookStatus};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::tui::themes::Theme;

pub fn render(f: &mut Frame, area: Rect, books: &[Book], theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.border_color))
        .title(" Book Log ")
        .title_style(Style::default().fg(theme.title_color));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut lines: Vec<Line> = Vec::new();
    for book in books {
        let (glyph, glyph_style) = status_glyph(book.status, theme);
        lines.push(Line::from(vec![
            Span::styled(format!(" {glyph} "), glyph_style),
            Span::styled(
                book.title,
                Style::default()
                    .fg(theme.text_color)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(" — {}", book.author),
                Style::default().fg(theme.dim_color),
            ),
        ]));
        lines.push(Line::from(vec![
            Span::styled(format!("   {} ", stars(book.rating)), Style::default().fg(theme.warning_color)),
            Span::styled(
                book.notes,
                Style::default()
                    .fg(theme.dim_color)
                    .add_modifier(Modifier::ITALIC),
            ),
        ]));
        lines.push(Line::default());
    }

    f.render_widget(Paragraph::new(lines), inner);
}

fn status_glyph(status: BookStatus, theme: &Theme) -> (&'static str, Style) {
    match status {
        BookStatus::Finished => ("✓", Style::default().fg(theme.success_color)),
        BookStatus::Reading => ("▶", Style::default().fg(theme.accent_color)),
        BookStatus::Queued => ("○", Style::default().fg(theme.dim_color)),
    }
}

fn stars(rating: u8) -> String {
    if rating == 0 {
        return "unrated".to_string();
    }
    let rating = rating.min(5) as usize;
    format!("{}{}", "★".repeat(rating), "☆".repeat(5 - rating))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stars_render_out_of_five() {
        assert_eq!(stars(4), "★★★★☆");
        assert_eq!(stars(5), "★★★★★");
        assert_eq!(stars(0), "unrated");
    }
}
