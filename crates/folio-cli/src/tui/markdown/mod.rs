//! Markdown rendering
//!
//! Turns a post body into styled ratatui lines plus heading anchors. Every
//! rendered h1-h3 derives its anchor through `folio_core::outline::slugify`,
//! the same function the TOC is built from, so the reader joins TOC entries
//! to rendered positions by slug.

mod cache;

pub use cache::{hash_content, RenderCache};

use folio_core::outline::slugify;
use folio_core::progress::HeadingAnchor;
use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use super::themes::Theme;

/// A rendered post: styled lines plus the anchors of its h1-h3 headings,
/// offsets in rendered-line units
#[derive(Debug, Clone)]
pub struct RenderedPost {
    pub lines: Vec<Line<'static>>,
    pub anchors: Vec<HeadingAnchor>,
}

impl RenderedPost {
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }
}

/// Render a markdown document to `width` columns
pub fn render(markdown: &str, width: usize, theme: &Theme) -> RenderedPost {
    let mut renderer = Renderer::new(width.max(16), theme);
    for event in Parser::new_ext(markdown, Options::empty()) {
        renderer.event(event);
    }
    renderer.finish()
}

struct Renderer<'t> {
    theme: &'t Theme,
    width: usize,
    lines: Vec<Line<'static>>,
    anchors: Vec<HeadingAnchor>,
    /// Word-level spans of the block currently being flowed
    words: Vec<(String, Style)>,
    bold: u32,
    italic: u32,
    link: u32,
    quote_depth: usize,
    /// One entry per open list; `Some(n)` carries the next ordinal
    list_stack: Vec<Option<u64>>,
    /// Pending first-line prefix for the current list item
    item_prefix: Option<String>,
    /// Level and accumulated text of the heading being captured
    heading: Option<(u32, String)>,
    code_block: Option<String>,
}

impl<'t> Renderer<'t> {
    fn new(width: usize, theme: &'t Theme) -> Self {
        Self {
            theme,
            width,
            lines: Vec::new(),
            anchors: Vec::new(),
            words: Vec::new(),
            bold: 0,
            italic: 0,
            link: 0,
            quote_depth: 0,
            list_stack: Vec::new(),
            item_prefix: None,
            heading: None,
            code_block: None,
        }
    }

    fn event(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => self.start(tag),
            Event::End(tag) => self.end(tag),
            Event::Text(text) => self.inline_text(&text, false),
            Event::Code(text) => self.inline_text(&text, true),
            // Both break kinds act as a word boundary in flowed text
            Event::SoftBreak | Event::HardBreak => {}
            Event::Rule => {
                self.blank_line();
                self.lines.push(Line::from(Span::styled(
                    "─".repeat(self.width),
                    Style::default().fg(self.theme.dim_color),
                )));
            }
            _ => {}
        }
    }

    fn start(&mut self, tag: Tag<'_>) {
        match tag {
            Tag::Paragraph => self.blank_line(),
            Tag::Heading { level, .. } => {
                self.blank_line();
                self.heading = Some((level as u32, String::new()));
            }
            Tag::BlockQuote(_) => {
                self.blank_line();
                self.quote_depth += 1;
            }
            Tag::CodeBlock(_) => {
                self.blank_line();
                self.code_block = Some(String::new());
            }
            Tag::List(start) => {
                if self.list_stack.is_empty() {
                    self.blank_line();
                } else {
                    // Nested list: flow the parent item's text first
                    self.flush_words();
                }
                self.list_stack.push(start);
            }
            Tag::Item => {
                let depth = self.list_stack.len().saturating_sub(1);
                let indent = "  ".repeat(depth);
                let marker = match self.list_stack.last_mut() {
                    Some(Some(n)) => {
                        let marker = format!("{indent}{n}. ");
                        *n += 1;
                        marker
                    }
                    _ => format!("{indent}• "),
                };
                self.item_prefix = Some(marker);
            }
            Tag::Emphasis => self.italic += 1,
            Tag::Strong => self.bold += 1,
            Tag::Link { .. } => self.link += 1,
            _ => {}
        }
    }

    fn end(&mut self, tag: TagEnd) {
        match tag {
            TagEnd::Paragraph | TagEnd::Item => self.flush_words(),
            TagEnd::Heading(_) => self.finish_heading(),
            TagEnd::BlockQuote(_) => {
                self.flush_words();
                self.quote_depth = self.quote_depth.saturating_sub(1);
            }
            TagEnd::CodeBlock => self.finish_code_block(),
            TagEnd::List(_) => {
                self.list_stack.pop();
            }
            TagEnd::Emphasis => self.italic = self.italic.saturating_sub(1),
            TagEnd::Strong => self.bold = self.bold.saturating_sub(1),
            TagEnd::Link => self.link = self.link.saturating_sub(1),
            _ => {}
        }
    }

    fn finish(mut self) -> RenderedPost {
        self.flush_words();
        RenderedPost {
            lines: self.lines,
            anchors: self.anchors,
        }
    }

    fn blank_line(&mut self) {
        if let Some(last) = self.lines.last() {
            if !last.spans.is_empty() {
                self.lines.push(Line::default());
            }
        }
    }

    /// Anchor (for h1-h3) and emit the captured heading
    fn finish_heading(&mut self) {
        let Some((level, text)) = self.heading.take() else {
            return;
        };
        let text = text.trim().to_string();
        if (1..=3).contains(&level) {
            self.anchors.push(HeadingAnchor {
                slug: slugify(&text),
                offset: self.lines.len() as f64,
            });
        }
        let style = match level {
            1 => Style::default()
                .fg(self.theme.title_color)
                .add_modifier(Modifier::BOLD),
            2 => Style::default()
                .fg(self.theme.accent_color)
                .add_modifier(Modifier::BOLD),
            _ => Style::default().fg(self.theme.accent_color),
        };
        for piece in textwrap::wrap(&text, self.width) {
            self.lines
                .push(Line::from(Span::styled(piece.into_owned(), style)));
        }
    }

    fn finish_code_block(&mut self) {
        let Some(buffer) = self.code_block.take() else {
            return;
        };
        let style = Style::default()
            .fg(self.theme.code_color)
            .bg(self.theme.code_bg_color);
        for line in buffer.lines() {
            self.lines
                .push(Line::from(Span::styled(line.to_string(), style)));
        }
    }

    /// Current inline style from the open emphasis/strong/link tags
    fn inline_style(&self, code: bool) -> Style {
        if code {
            return Style::default()
                .fg(self.theme.code_color)
                .bg(self.theme.code_bg_color);
        }
        let mut style = Style::default().fg(if self.quote_depth > 0 {
            self.theme.dim_color
        } else {
            self.theme.text_color
        });
        if self.link > 0 {
            style = style
                .fg(self.theme.link_color)
                .add_modifier(Modifier::UNDERLINED);
        }
        if self.bold > 0 {
            style = style.add_modifier(Modifier::BOLD);
        }
        if self.italic > 0 || self.quote_depth > 0 {
            style = style.add_modifier(Modifier::ITALIC);
        }
        style
    }

    fn inline_text(&mut self, text: &str, code: bool) {
        if let Some((_, buffer)) = self.heading.as_mut() {
            buffer.push_str(text);
            return;
        }
        if let Some(buffer) = self.code_block.as_mut() {
            buffer.push_str(text);
            return;
        }
        let style = self.inline_style(code);
        for word in text.split_whitespace() {
            self.words.push((word.to_string(), style));
        }
    }

    /// Greedy line fill of the accumulated words at the current width
    fn flush_words(&mut self) {
        if self.words.is_empty() {
            self.item_prefix = None;
            return;
        }

        let quote_prefix = "│ ".repeat(self.quote_depth);
        let first_prefix = match self.item_prefix.take() {
            Some(marker) => format!("{quote_prefix}{marker}"),
            None => quote_prefix.clone(),
        };
        let hang = first_prefix.width() - quote_prefix.width();
        let cont_prefix = format!("{quote_prefix}{}", " ".repeat(hang));
        let prefix_style = Style::default().fg(self.theme.dim_color);

        let words = std::mem::take(&mut self.words);
        let mut spans: Vec<Span<'static>> = vec![Span::styled(first_prefix.clone(), prefix_style)];
        let mut used = first_prefix.width();
        let mut has_word = false;

        for (word, style) in words {
            let word_width = word.width();
            if has_word && used + 1 + word_width > self.width {
                self.lines.push(Line::from(std::mem::take(&mut spans)));
                spans.push(Span::styled(cont_prefix.clone(), prefix_style));
                used = cont_prefix.width();
                has_word = false;
            }
            if has_word {
                spans.push(Span::raw(" "));
                used += 1;
            }
            used += word_width;
            spans.push(Span::styled(word, style));
            has_word = true;
        }
        self.lines.push(Line::from(spans));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::themes::ThemeRegistry;
    use folio_core::outline::outline;

    const DOC: &str = "# Intro\n\nSome opening prose that is long enough to wrap \
        across more than one rendered line at narrow widths.\n\n\
        ## Details, Details!\n\nA [link](https://example.com) and `inline code`.\n\n\
        - first item\n- second item with a somewhat longer tail that wraps\n\n\
        ### Fine Print\n\n> Quoted wisdom.\n\n#### Deep Heading\n\nDone.\n";

    fn theme() -> Theme {
        ThemeRegistry::new().default_theme().clone()
    }

    #[test]
    fn test_anchors_join_outline_by_slug() {
        let rendered = render(DOC, 60, &theme());
        let toc = outline(DOC);
        let anchor_slugs: Vec<_> = rendered.anchors.iter().map(|a| a.slug.as_str()).collect();
        let toc_slugs: Vec<_> = toc.iter().map(|e| e.slug.as_str()).collect();
        assert_eq!(anchor_slugs, toc_slugs);
        assert_eq!(anchor_slugs, vec!["intro", "details-details", "fine-print"]);
    }

    #[test]
    fn test_anchor_offsets_are_nondecreasing_and_in_bounds() {
        let rendered = render(DOC, 40, &theme());
        let offsets: Vec<_> = rendered.anchors.iter().map(|a| a.offset).collect();
        for pair in offsets.windows(2) {
            assert!(pair[0] < pair[1]);
        }
        for offset in offsets {
            assert!(offset >= 0.0 && (offset as usize) < rendered.line_count());
        }
    }

    #[test]
    fn test_anchor_points_at_heading_line() {
        let rendered = render(DOC, 60, &theme());
        let first = &rendered.anchors[0];
        let line = &rendered.lines[first.offset as usize];
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "Intro");
    }

    #[test]
    fn test_deep_headings_are_rendered_but_not_anchored() {
        let rendered = render(DOC, 60, &theme());
        assert!(rendered.anchors.iter().all(|a| a.slug != "deep-heading"));
        let all_text: String = rendered
            .lines
            .iter()
            .flat_map(|l| l.spans.iter())
            .map(|s| s.content.as_ref())
            .collect();
        assert!(all_text.contains("Deep Heading"));
    }

    #[test]
    fn test_fenced_heading_lines_produce_no_anchor() {
        let doc = "# Real\n\n```\n# not a heading\n```\n";
        let rendered = render(doc, 60, &theme());
        assert_eq!(rendered.anchors.len(), 1);
        // The outline scan indexes the fence line too; the unmatched TOC
        // entry simply joins no anchor
        assert_eq!(outline(doc).len(), 2);
    }

    #[test]
    fn test_paragraphs_wrap_to_width() {
        let width = 30;
        let rendered = render(DOC, width, &theme());
        for line in &rendered.lines {
            let line_width: usize = line.spans.iter().map(|s| s.content.as_ref().width()).sum();
            assert!(line_width <= width, "line wider than {width}: {line_width}");
        }
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let theme = theme();
        let a = render(DOC, 52, &theme);
        let b = render(DOC, 52, &theme);
        assert_eq!(a.lines, b.lines);
        assert_eq!(a.anchors, b.anchors);
    }
}
