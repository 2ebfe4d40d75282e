//! Static portfolio content
//!
//! The catalog the views render: blog posts, the book log, and tech talks.
//! Everything is compiled in; there is no storage layer behind it.

mod books;
mod posts;
mod talks;

pub use books::all_books;
pub use posts::all_posts;
pub use talks::all_talks;

use chrono::NaiveDate;
use serde::Serialize;

/// Words-per-minute used for the reading-time estimate
const READING_WPM: usize = 200;

/// Hero phrases cycled by the typing animation on the home view
pub fn hero_phrases() -> Vec<String> {
    [
        "Building amazing web experiences",
        "Crafting clean, efficient code",
        "Solving complex problems",
        "Learning new technologies daily",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

/// A blog post with its full markdown body
#[derive(Debug, Clone, Serialize)]
pub struct Post {
    pub title: &'static str,
    pub excerpt: &'static str,
    pub author: &'static str,
    pub date: NaiveDate,
    pub tags: &'static [&'static str],
    pub body: &'static str,
}

impl Post {
    pub fn word_count(&self) -> usize {
        self.body.split_whitespace().count()
    }

    /// Estimated minutes to read: ceil(words / 200), at least one minute
    pub fn reading_time(&self) -> usize {
        self.word_count().div_ceil(READING_WPM).max(1)
    }

    /// "January 15, 2024" style date line
    pub fn date_line(&self) -> String {
        format_date(self.date)
    }
}

/// Where a book currently sits in the log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BookStatus {
    Reading,
    Finished,
    Queued,
}

/// One entry of the book log
#[derive(Debug, Clone, Serialize)]
pub struct Book {
    pub title: &'static str,
    pub author: &'static str,
    pub status: BookStatus,
    /// Stars out of five; zero for unrated (queued) books
    pub rating: u8,
    pub notes: &'static str,
}

/// A conference or meetup talk
#[derive(Debug, Clone, Serialize)]
pub struct Talk {
    pub title: &'static str,
    pub event: &'static str,
    pub date: NaiveDate,
    pub url: &'static str,
    pub summary: &'static str,
}

impl Talk {
    pub fn date_line(&self) -> String {
        format_date(self.date)
    }
}

/// Fixed-locale literal English date formatting
fn format_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Literal calendar date for the static catalog
pub(crate) fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid literal date")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reading_time_rounds_up() {
        let post = Post {
            title: "t",
            excerpt: "e",
            author: "a",
            date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            tags: &[],
            body: "word ",
        };
        assert_eq!(post.reading_time(), 1);

        let long_body = "word ".repeat(401);
        let words = long_body.split_whitespace().count();
        assert_eq!(words.div_ceil(READING_WPM), 3);
    }

    #[test]
    fn test_date_line_is_literal_english() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        assert_eq!(format_date(date), "January 5, 2024");
    }

    #[test]
    fn test_catalog_is_nonempty() {
        assert!(!all_posts().is_empty());
        assert!(!all_books().is_empty());
        assert!(!all_talks().is_empty());
        assert_eq!(hero_phrases().len(), 4);
    }

    #[test]
    fn test_every_post_has_headings_to_index() {
        for post in all_posts() {
            assert!(
                !crate::outline::outline(post.body).is_empty(),
                "post '{}' has no indexable headings",
                post.title
            );
        }
    }

    #[test]
    fn test_ratings_are_at_most_five_stars() {
        for book in all_books() {
            assert!(book.rating <= 5);
        }
    }
}
