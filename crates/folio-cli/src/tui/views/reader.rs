//! Reader view - progress bar, article header, TOC sidebar, content

use folio_core::outline::HeadingEntry;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Padding, Paragraph},
    Frame,
};

use crate::tui::reader::ReaderState;
use crate::tui::themes::Theme;

const PROGRESS_HEIGHT: u16 = 1;
const HEADER_HEIGHT: u16 = 4;
/// Sidebar is shown only when the terminal is wide enough for both panes
const SPLIT_MIN_WIDTH: u16 = 90;
const TOC_WIDTH: u16 = 30;

/// Content-pane metrics for the given view area, in (columns, rows).
/// The event loop feeds these to the reader so layout and rendering agree.
pub fn content_metrics(area: Rect) -> (usize, usize) {
    let height = area
        .height
        .saturating_sub(PROGRESS_HEIGHT + HEADER_HEIGHT) as usize;
    let width = if area.width >= SPLIT_MIN_WIDTH {
        area.width.saturating_sub(TOC_WIDTH)
    } else {
        area.width
    };
    // One column of padding on each side of the content pane
    ((width.saturating_sub(2) as usize).max(16), height)
}

pub fn render(f: &mut Frame, area: Rect, reader: &ReaderState, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(PROGRESS_HEIGHT),
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(0),
        ])
        .split(area);

    render_progress(f, chunks[0], reader, theme);
    render_header(f, chunks[1], reader, theme);

    if area.width >= SPLIT_MIN_WIDTH {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(TOC_WIDTH), Constraint::Min(0)])
            .split(chunks[2]);
        render_toc(f, columns[0], reader, theme);
        render_content(f, columns[1], reader, theme);
    } else {
        render_content(f, chunks[2], reader, theme);
    }
}

fn render_progress(f: &mut Frame, area: Rect, reader: &ReaderState, theme: &Theme) {
    let percent = reader.reading().progress_percent;
    let label = format!(" {percent:>3.0}%");
    let bar_width = (area.width as usize).saturating_sub(label.len());
    let filled = ((bar_width as f64) * percent / 100.0).round() as usize;
    let line = Line::from(vec![
        Span::styled(
            "━".repeat(filled.min(bar_width)),
            Style::default().fg(theme.progress_color),
        ),
        Span::styled(
            "─".repeat(bar_width.saturating_sub(filled)),
            Style::default().fg(theme.border_color),
        ),
        Span::styled(label, Style::default().fg(theme.dim_color)),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

fn render_header(f: &mut Frame, area: Rect, reader: &ReaderState, theme: &Theme) {
    let post = &reader.post;
    let mut tag_spans = vec![Span::styled(
        "  ",
        Style::default().fg(theme.dim_color),
    )];
    for tag in post.tags {
        tag_spans.push(Span::styled(
            format!("[{tag}] "),
            Style::default().fg(theme.accent_color),
        ));
    }

    let lines = vec![
        Line::from(Span::styled(
            format!("  {}", post.title),
            Style::default()
                .fg(theme.title_color)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!(
                "  {} · {} · {} min read · {} words",
                post.author,
                post.date_line(),
                post.reading_time(),
                post.word_count()
            ),
            Style::default().fg(theme.dim_color),
        )),
        Line::from(tag_spans),
        Line::default(),
    ];
    f.render_widget(Paragraph::new(lines), area);
}

fn render_toc(f: &mut Frame, area: Rect, reader: &ReaderState, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.border_color))
        .title(" Contents ")
        .title_style(Style::default().fg(theme.title_color));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let active = reader.reading().active_slug.clone();
    let lines: Vec<Line> = reader
        .toc
        .iter()
        .enumerate()
        .map(|(i, entry)| toc_line(entry, i, reader, active.as_deref(), theme))
        .collect();
    f.render_widget(Paragraph::new(lines), inner);
}

fn toc_line<'a>(
    entry: &'a HeadingEntry,
    index: usize,
    reader: &ReaderState,
    active: Option<&str>,
    theme: &Theme,
) -> Line<'a> {
    let indent = "  ".repeat((entry.level as usize).saturating_sub(1));
    let is_active = active == Some(entry.slug.as_str());
    let is_selected = index == reader.toc_selected;
    // Entries that join no rendered anchor (e.g. a heading-looking line
    // inside a code fence) are shown but cannot be jumped to
    let linkable = reader
        .rendered
        .anchors
        .iter()
        .any(|a| a.slug == entry.slug);

    let marker = if is_active { "▸ " } else { "  " };
    let mut style = if is_active {
        Style::default()
            .fg(theme.accent_color)
            .add_modifier(Modifier::BOLD)
    } else if linkable {
        Style::default().fg(theme.text_color)
    } else {
        Style::default().fg(theme.dim_color)
    };
    if is_selected {
        style = style.bg(theme.selection_bg_color);
    }

    Line::from(vec![
        Span::styled(marker, Style::default().fg(theme.accent_color)),
        Span::styled(format!("{indent}{}", entry.text), style),
    ])
}

fn render_content(f: &mut Frame, area: Rect, reader: &ReaderState, theme: &Theme) {
    let block = Block::default().padding(Padding::horizontal(1));
    let inner = block.inner(area);
    let paragraph = Paragraph::new(reader.rendered.lines.clone())
        .scroll((reader.scroll_top.min(u16::MAX as usize) as u16, 0));
    f.render_widget(paragraph, inner);

    if reader.reading().show_top_button {
        render_top_hint(f, area, theme);
    }
}

/// Floating scroll-to-top affordance in the bottom-right corner
fn render_top_hint(f: &mut Frame, area: Rect, theme: &Theme) {
    let label = " ↑ top (t) ";
    let width = unicode_width::UnicodeWidthStr::width(label) as u16;
    if area.width <= width + 2 || area.height < 2 {
        return;
    }
    let hint_area = Rect {
        x: area.x + area.width - width - 2,
        y: area.y + area.height - 1,
        width,
        height: 1,
    };
    let hint = Paragraph::new(Span::styled(
        label,
        Style::default()
            .fg(theme.accent_color)
            .bg(theme.selection_bg_color)
            .add_modifier(Modifier::BOLD),
    ));
    f.render_widget(hint, hint_area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_metrics_subtract_chrome() {
        let area = Rect::new(0, 0, 120, 40);
        let (w, h) = content_metrics(area);
        assert_eq!(h, 40 - 5);
        assert_eq!(w, (120 - 30 - 2) as usize);
    }

    #[test]
    fn test_narrow_terminal_drops_the_sidebar() {
        let area = Rect::new(0, 0, 80, 24);
        let (w, _h) = content_metrics(area);
        assert_eq!(w, 78);
    }

    #[test]
    fn test_metrics_never_collapse_to_zero() {
        let (w, h) = content_metrics(Rect::new(0, 0, 4, 3));
        assert!(w >= 16);
        assert_eq!(h, 0);
    }
}
