//! Tech talk catalog

use super::{date, Talk};

/// Talks given, newest first
pub fn all_talks() -> Vec<Talk> {
    vec![
        Talk {
            title: "Your CI Is Lying to You",
            event: "TestingConf",
            date: date(2024, 4, 12),
            url: "https://example.com/talks/ci-lying",
            summary: "Why green builds go red on Fridays: a field taxonomy of flaky \
                      tests and the polling, clock-faking, and namespacing patterns \
                      that retire them.",
        },
        Talk {
            title: "Reading Code Out Loud",
            event: "DevDays Meetup",
            date: date(2023, 9, 28),
            url: "https://example.com/talks/reading-code",
            summary: "A live code-review session: reading order, labeled comments, \
                      and knowing when a thread should become a call.",
        },
        Talk {
            title: "Small Files, Big Systems",
            event: "Local Rust Meetup",
            date: date(2023, 5, 11),
            url: "https://example.com/talks/small-files",
            summary: "How module boundaries fall out of ownership, with examples from \
                      a production codebase that grew up instead of out.",
        },
    ]
}
