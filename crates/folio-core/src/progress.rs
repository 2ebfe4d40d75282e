//! Reading progress and active-section tracking
//!
//! Recomputes the full reading state from viewport metrics on every scroll
//! or resize event. The recomputation is synchronous and replaces all three
//! fields at once, so callers never observe a half-updated state.

/// Viewport metrics sampled by the hosting view on each scroll event.
///
/// Units are whatever the host lays out in (pixels, terminal rows); the
/// tracker only compares and divides them.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ViewportMetrics {
    /// Current scroll offset from the top of the document
    pub scroll_top: f64,
    /// Total scrollable height of the document
    pub scroll_height: f64,
    /// Visible viewport height
    pub client_height: f64,
}

/// A rendered heading anchor: slug plus vertical offset, in the same
/// layout units as [`ViewportMetrics`]
#[derive(Debug, Clone, PartialEq)]
pub struct HeadingAnchor {
    pub slug: String,
    pub offset: f64,
}

/// Thresholds for the derived affordances
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollConfig {
    /// Scroll offset above which the scroll-to-top affordance shows.
    /// Strictly greater-than: at exactly the threshold it stays hidden.
    pub top_threshold: f64,
    /// Lookahead added to the scroll offset when matching the active
    /// heading, so a heading counts as reached slightly before it hits
    /// the very top of the viewport.
    pub reveal_margin: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            top_threshold: 300.0,
            reveal_margin: 96.0,
        }
    }
}

/// Derived reading state, recomputed per scroll event
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReadingState {
    /// Scroll completion in [0, 100]
    pub progress_percent: f64,
    /// Slug of the heading most recently scrolled past, if any
    pub active_slug: Option<String>,
    /// Whether the scroll-to-top affordance should show
    pub show_top_button: bool,
}

/// Tracks reading progress through a rendered document.
///
/// The anchor set is derived from layout and replaced via [`set_anchors`]
/// whenever the document is re-rendered; scroll events feed
/// [`on_scroll`].
///
/// [`set_anchors`]: ScrollTracker::set_anchors
/// [`on_scroll`]: ScrollTracker::on_scroll
#[derive(Debug, Clone, Default)]
pub struct ScrollTracker {
    config: ScrollConfig,
    anchors: Vec<HeadingAnchor>,
    state: ReadingState,
}

impl ScrollTracker {
    pub fn new(config: ScrollConfig) -> Self {
        Self {
            config,
            anchors: Vec::new(),
            state: ReadingState::default(),
        }
    }

    /// Replace the anchor set after a (re)layout. Anchors must be in
    /// document order.
    pub fn set_anchors(&mut self, anchors: Vec<HeadingAnchor>) {
        self.anchors = anchors;
    }

    pub fn anchors(&self) -> &[HeadingAnchor] {
        &self.anchors
    }

    /// Latest computed state
    pub fn state(&self) -> &ReadingState {
        &self.state
    }

    /// Recompute the full state from fresh metrics.
    ///
    /// Total function: when the content fits the viewport the progress is
    /// defined as 0 rather than dividing by a non-positive height.
    pub fn on_scroll(&mut self, metrics: ViewportMetrics) -> &ReadingState {
        let scrollable = metrics.scroll_height - metrics.client_height;
        let progress_percent = if scrollable <= 0.0 {
            0.0
        } else {
            (metrics.scroll_top / scrollable * 100.0).clamp(0.0, 100.0)
        };

        let reveal = metrics.scroll_top + self.config.reveal_margin;
        let active_slug = self
            .anchors
            .iter()
            .rev()
            .find(|a| a.offset <= reveal)
            .map(|a| a.slug.clone());

        self.state = ReadingState {
            progress_percent,
            active_slug,
            show_top_button: metrics.scroll_top > self.config.top_threshold,
        };
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(scroll_top: f64, scroll_height: f64, client_height: f64) -> ViewportMetrics {
        ViewportMetrics {
            scroll_top,
            scroll_height,
            client_height,
        }
    }

    fn anchor(slug: &str, offset: f64) -> HeadingAnchor {
        HeadingAnchor {
            slug: slug.to_string(),
            offset,
        }
    }

    #[test]
    fn test_progress_is_clamped() {
        let mut tracker = ScrollTracker::default();
        assert_eq!(tracker.on_scroll(metrics(0.0, 2000.0, 500.0)).progress_percent, 0.0);
        assert_eq!(
            tracker.on_scroll(metrics(1500.0, 2000.0, 500.0)).progress_percent,
            100.0
        );
        // Overscroll (rubber-banding) stays pinned at the ends
        assert_eq!(
            tracker.on_scroll(metrics(9999.0, 2000.0, 500.0)).progress_percent,
            100.0
        );
        assert_eq!(tracker.on_scroll(metrics(-50.0, 2000.0, 500.0)).progress_percent, 0.0);
    }

    #[test]
    fn test_progress_when_content_fits_viewport() {
        let mut tracker = ScrollTracker::default();
        let state = tracker.on_scroll(metrics(0.0, 500.0, 500.0));
        assert_eq!(state.progress_percent, 0.0);
        // Shorter than the viewport is the same case
        let state = tracker.on_scroll(metrics(0.0, 300.0, 500.0));
        assert_eq!(state.progress_percent, 0.0);
    }

    #[test]
    fn test_top_button_threshold_is_strict() {
        let mut tracker = ScrollTracker::default();
        assert!(!tracker.on_scroll(metrics(300.0, 5000.0, 500.0)).show_top_button);
        assert!(tracker.on_scroll(metrics(301.0, 5000.0, 500.0)).show_top_button);
        assert!(!tracker.on_scroll(metrics(0.0, 5000.0, 500.0)).show_top_button);
    }

    #[test]
    fn test_active_slug_picks_last_anchor_scrolled_past() {
        let mut tracker = ScrollTracker::new(ScrollConfig {
            top_threshold: 300.0,
            reveal_margin: 0.0,
        });
        tracker.set_anchors(vec![
            anchor("intro", 100.0),
            anchor("middle", 500.0),
            anchor("end", 900.0),
        ]);

        assert_eq!(tracker.on_scroll(metrics(0.0, 2000.0, 400.0)).active_slug, None);
        assert_eq!(
            tracker.on_scroll(metrics(100.0, 2000.0, 400.0)).active_slug.as_deref(),
            Some("intro")
        );
        assert_eq!(
            tracker.on_scroll(metrics(550.0, 2000.0, 400.0)).active_slug.as_deref(),
            Some("middle")
        );
        assert_eq!(
            tracker.on_scroll(metrics(1600.0, 2000.0, 400.0)).active_slug.as_deref(),
            Some("end")
        );
    }

    #[test]
    fn test_reveal_margin_counts_upcoming_heading() {
        let mut tracker = ScrollTracker::new(ScrollConfig {
            top_threshold: 300.0,
            reveal_margin: 96.0,
        });
        tracker.set_anchors(vec![anchor("soon", 150.0)]);
        // 60 + 96 >= 150: the heading is about to reach the top
        assert_eq!(
            tracker.on_scroll(metrics(60.0, 2000.0, 400.0)).active_slug.as_deref(),
            Some("soon")
        );
        assert_eq!(tracker.on_scroll(metrics(10.0, 2000.0, 400.0)).active_slug, None);
    }

    #[test]
    fn test_state_updates_atomically() {
        let mut tracker = ScrollTracker::default();
        tracker.set_anchors(vec![anchor("a", 0.0)]);
        tracker.on_scroll(metrics(400.0, 2000.0, 500.0));
        let state = tracker.state().clone();
        assert_eq!(state.active_slug.as_deref(), Some("a"));
        assert!(state.show_top_button);
        assert!(state.progress_percent > 0.0);
        // A second event fully replaces the previous state
        tracker.on_scroll(metrics(0.0, 2000.0, 500.0));
        assert_eq!(tracker.state().progress_percent, 0.0);
        assert!(!tracker.state().show_top_button);
    }

    #[test]
    fn test_no_anchors_never_yields_active_slug() {
        let mut tracker = ScrollTracker::default();
        assert_eq!(tracker.on_scroll(metrics(1000.0, 5000.0, 500.0)).active_slug, None);
    }
}
