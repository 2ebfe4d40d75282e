//! Reader state
//!
//! Owns the open post: rendered lines and anchors, scroll offset, TOC
//! selection, and the progress tracker. Every scroll or layout mutation
//! ends in exactly one synchronous recomputation of the reading state, so
//! the progress bar, active TOC entry, and top-button flag always agree.

use std::sync::Arc;

use folio_core::content::Post;
use folio_core::outline::{outline, HeadingEntry};
use folio_core::progress::{ReadingState, ScrollConfig, ScrollTracker, ViewportMetrics};

use super::markdown::{RenderCache, RenderedPost};
use super::themes::Theme;

/// Scroll-to-top threshold, in rendered lines rather than pixels
const TOP_THRESHOLD_LINES: f64 = 5.0;
/// Active-heading lookahead, in rendered lines
const REVEAL_MARGIN_LINES: f64 = 2.0;

pub struct ReaderState {
    pub post: Post,
    /// TOC entries from the heading scan, in document order
    pub toc: Vec<HeadingEntry>,
    pub rendered: Arc<RenderedPost>,
    pub scroll_top: usize,
    pub toc_selected: usize,
    width: usize,
    viewport_height: usize,
    tracker: ScrollTracker,
}

impl ReaderState {
    pub fn open(
        post: Post,
        cache: &mut RenderCache,
        width: usize,
        viewport_height: usize,
        theme: &Theme,
    ) -> Self {
        tracing::info!("opening post: {}", post.title);
        let rendered = cache.get_or_render(post.body, width, theme);
        let toc = outline(post.body);
        let mut tracker = ScrollTracker::new(ScrollConfig {
            top_threshold: TOP_THRESHOLD_LINES,
            reveal_margin: REVEAL_MARGIN_LINES,
        });
        tracker.set_anchors(rendered.anchors.clone());
        let mut reader = Self {
            post,
            toc,
            rendered,
            scroll_top: 0,
            toc_selected: 0,
            width,
            viewport_height,
            tracker,
        };
        reader.recompute();
        reader
    }

    /// Sync to the current layout. Cheap when nothing changed (cache hit);
    /// re-derives anchors after a width or theme change.
    pub fn relayout(
        &mut self,
        cache: &mut RenderCache,
        width: usize,
        viewport_height: usize,
        theme: &Theme,
    ) {
        self.width = width;
        self.viewport_height = viewport_height;
        self.rendered = cache.get_or_render(self.post.body, width, theme);
        self.tracker.set_anchors(self.rendered.anchors.clone());
        self.scroll_top = self.scroll_top.min(self.max_scroll());
        self.recompute();
    }

    /// Latest reading state (progress, active slug, top button)
    pub fn reading(&self) -> &ReadingState {
        self.tracker.state()
    }

    pub fn viewport_height(&self) -> usize {
        self.viewport_height
    }

    fn max_scroll(&self) -> usize {
        self.rendered
            .line_count()
            .saturating_sub(self.viewport_height)
    }

    pub fn scroll_by(&mut self, delta: i64) {
        self.scroll_top = if delta < 0 {
            self.scroll_top.saturating_sub(delta.unsigned_abs() as usize)
        } else {
            (self.scroll_top + delta as usize).min(self.max_scroll())
        };
        self.recompute();
    }

    pub fn page_down(&mut self) {
        self.scroll_by(self.viewport_height.saturating_sub(1) as i64);
    }

    pub fn page_up(&mut self) {
        self.scroll_by(-(self.viewport_height.saturating_sub(1) as i64));
    }

    pub fn to_top(&mut self) {
        self.scroll_top = 0;
        self.recompute();
    }

    pub fn to_bottom(&mut self) {
        self.scroll_top = self.max_scroll();
        self.recompute();
    }

    pub fn toc_next(&mut self) {
        if !self.toc.is_empty() {
            self.toc_selected = (self.toc_selected + 1) % self.toc.len();
        }
    }

    pub fn toc_prev(&mut self) {
        if !self.toc.is_empty() {
            self.toc_selected = self
                .toc_selected
                .checked_sub(1)
                .unwrap_or(self.toc.len() - 1);
        }
    }

    /// Scroll so the selected TOC entry's anchor sits at the top of the
    /// viewport. Entries whose slug joins no anchor (a heading-looking
    /// line inside a code fence) are left alone.
    pub fn jump_to_selected(&mut self) {
        let Some(entry) = self.toc.get(self.toc_selected) else {
            return;
        };
        if let Some(anchor) = self
            .rendered
            .anchors
            .iter()
            .find(|a| a.slug == entry.slug)
        {
            self.scroll_top = (anchor.offset as usize).min(self.max_scroll());
            self.recompute();
        }
    }

    /// One atomic recomputation per event
    fn recompute(&mut self) {
        self.tracker.on_scroll(ViewportMetrics {
            scroll_top: self.scroll_top as f64,
            scroll_height: self.rendered.line_count() as f64,
            client_height: self.viewport_height as f64,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::themes::ThemeRegistry;
    use folio_core::content::all_posts;

    fn open_first_post(width: usize, height: usize) -> (ReaderState, RenderCache) {
        let registry = ThemeRegistry::new();
        let theme = registry.default_theme().clone();
        let mut cache = RenderCache::new();
        let post = all_posts().remove(0);
        let reader = ReaderState::open(post, &mut cache, width, height, &theme);
        (reader, cache)
    }

    #[test]
    fn test_opens_at_the_top() {
        let (reader, _cache) = open_first_post(60, 12);
        assert_eq!(reader.scroll_top, 0);
        assert_eq!(reader.reading().progress_percent, 0.0);
        assert!(!reader.reading().show_top_button);
    }

    #[test]
    fn test_bottom_is_full_progress() {
        let (mut reader, _cache) = open_first_post(60, 12);
        assert!(reader.rendered.line_count() > 12);
        reader.to_bottom();
        assert_eq!(reader.reading().progress_percent, 100.0);
        assert!(reader.reading().show_top_button);
    }

    #[test]
    fn test_scroll_is_clamped_to_content() {
        let (mut reader, _cache) = open_first_post(60, 12);
        reader.scroll_by(1_000_000);
        let max = reader.rendered.line_count() - 12;
        assert_eq!(reader.scroll_top, max);
        reader.scroll_by(-1_000_000);
        assert_eq!(reader.scroll_top, 0);
    }

    #[test]
    fn test_short_content_pins_progress_at_zero() {
        let (mut reader, _cache) = open_first_post(60, 4000);
        reader.scroll_by(10);
        assert_eq!(reader.scroll_top, 0);
        assert_eq!(reader.reading().progress_percent, 0.0);
    }

    #[test]
    fn test_toc_jump_activates_the_section() {
        let (mut reader, _cache) = open_first_post(60, 12);
        assert!(reader.toc.len() > 2);
        reader.toc_next();
        reader.toc_next();
        reader.jump_to_selected();
        let expected = reader.toc[reader.toc_selected].slug.clone();
        assert_eq!(reader.reading().active_slug.as_deref(), Some(expected.as_str()));
        assert!(reader.scroll_top > 0);
    }

    #[test]
    fn test_relayout_keeps_scroll_in_range() {
        let registry = ThemeRegistry::new();
        let theme = registry.default_theme().clone();
        let (mut reader, mut cache) = open_first_post(40, 12);
        reader.to_bottom();
        // A much wider layout shrinks the line count
        reader.relayout(&mut cache, 160, 40, &theme);
        assert!(reader.scroll_top <= reader.rendered.line_count() - 40 || reader.scroll_top == 0);
        let state = reader.reading().clone();
        assert!(state.progress_percent >= 0.0 && state.progress_percent <= 100.0);
    }

    #[test]
    fn test_toc_selection_wraps() {
        let (mut reader, _cache) = open_first_post(60, 12);
        let len = reader.toc.len();
        reader.toc_prev();
        assert_eq!(reader.toc_selected, len - 1);
        reader.toc_next();
        assert_eq!(reader.toc_selected, 0);
    }
}
