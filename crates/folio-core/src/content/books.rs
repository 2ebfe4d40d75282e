//! Book log catalog

use super::{Book, BookStatus};

/// The reading log shown on the library view
pub fn all_books() -> Vec<Book> {
    vec![
        Book {
            title: "Designing Data-Intensive Applications",
            author: "Martin Kleppmann",
            status: BookStatus::Finished,
            rating: 5,
            notes: "The chapter on consistency models alone is worth the cover price.",
        },
        Book {
            title: "A Philosophy of Software Design",
            author: "John Ousterhout",
            status: BookStatus::Finished,
            rating: 4,
            notes: "Deep modules, shallow interfaces. Short and keeps paying off.",
        },
        Book {
            title: "The Staff Engineer's Path",
            author: "Tanya Reilly",
            status: BookStatus::Reading,
            rating: 4,
            notes: "Halfway through; the chapter on picking problems is already dog-eared.",
        },
        Book {
            title: "Working in Public",
            author: "Nadia Eghbal",
            status: BookStatus::Finished,
            rating: 3,
            notes: "Good taxonomy of open source projects, drags in the middle.",
        },
        Book {
            title: "Crafting Interpreters",
            author: "Robert Nystrom",
            status: BookStatus::Queued,
            rating: 0,
            notes: "Next up, for the bytecode VM half.",
        },
    ]
}
