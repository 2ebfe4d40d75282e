//! Rendered-post cache
//!
//! Caches rendering keyed by (content hash, width) so scroll events and
//! redraws reuse the layout. Bounded with oldest-first eviction; cleared
//! wholesale on theme change since colors are baked into the spans.

use std::collections::hash_map::DefaultHasher;
use std::collections::{HashMap, VecDeque};
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use super::RenderedPost;
use crate::tui::themes::Theme;

/// Cache key: (content_hash, wrap_width)
type CacheKey = (u64, usize);

/// Maximum number of cached renders
const MAX_CACHE_ENTRIES: usize = 16;

/// Stable hash of a post body for cache keying
pub fn hash_content(content: &str) -> u64 {
    let mut hasher = DefaultHasher::new();
    content.hash(&mut hasher);
    hasher.finish()
}

/// Bounded cache of rendered posts
#[derive(Default)]
pub struct RenderCache {
    cache: HashMap<CacheKey, Arc<RenderedPost>>,
    /// Insertion order, oldest at the front
    order: VecDeque<CacheKey>,
}

impl RenderCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the cached render for (content, width) or produce and cache it
    pub fn get_or_render(&mut self, content: &str, width: usize, theme: &Theme) -> Arc<RenderedPost> {
        let key = (hash_content(content), width);
        if let Some(cached) = self.cache.get(&key) {
            return Arc::clone(cached);
        }
        self.evict_if_full();
        let rendered = Arc::new(super::render(content, width, theme));
        self.cache.insert(key, Arc::clone(&rendered));
        self.order.push_back(key);
        rendered
    }

    /// Drop everything; used when the theme changes
    pub fn clear(&mut self) {
        self.cache.clear();
        self.order.clear();
    }

    fn evict_if_full(&mut self) {
        while self.cache.len() >= MAX_CACHE_ENTRIES {
            if let Some(oldest) = self.order.pop_front() {
                self.cache.remove(&oldest);
            } else {
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::themes::ThemeRegistry;

    #[test]
    fn test_same_key_returns_same_render() {
        let registry = ThemeRegistry::new();
        let theme = registry.default_theme();
        let mut cache = RenderCache::new();
        let a = cache.get_or_render("# Hello", 40, theme);
        let b = cache.get_or_render("# Hello", 40, theme);
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_width_is_part_of_the_key() {
        let registry = ThemeRegistry::new();
        let theme = registry.default_theme();
        let mut cache = RenderCache::new();
        let a = cache.get_or_render("# Hello", 40, theme);
        let b = cache.get_or_render("# Hello", 60, theme);
        assert!(!Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_clear_forces_rerender() {
        let registry = ThemeRegistry::new();
        let theme = registry.default_theme();
        let mut cache = RenderCache::new();
        let a = cache.get_or_render("# Hello", 40, theme);
        cache.clear();
        let b = cache.get_or_render("# Hello", 40, theme);
        assert!(!Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_eviction_is_bounded() {
        let registry = ThemeRegistry::new();
        let theme = registry.default_theme();
        let mut cache = RenderCache::new();
        for width in 20..20 + MAX_CACHE_ENTRIES * 2 {
            cache.get_or_render("# Hello", width, theme);
        }
        assert!(cache.cache.len() <= MAX_CACHE_ENTRIES);
    }
}
