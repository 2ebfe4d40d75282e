//! Heading outline and slug derivation
//!
//! Scans markdown source line-by-line for `#`..`###` headings and derives
//! the anchor slug for each. [`slugify`] is the single slug computation in
//! the workspace: the markdown renderer assigns heading anchors through it
//! as well, so TOC entries and rendered anchors always join on identical
//! strings.

use serde::Serialize;

/// One table-of-contents entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeadingEntry {
    /// Number of leading `#` markers (1..=3)
    pub level: u8,
    /// Raw heading text with leading whitespace stripped
    pub text: String,
    /// Anchor id derived from `text` via [`slugify`]
    pub slug: String,
    /// Zero-based discovery position in the source document
    pub order: usize,
}

/// Derive an anchor slug from heading text.
///
/// Lower-cases the text, drops every character that is not a letter, digit,
/// or whitespace, then collapses whitespace runs into single hyphens.
/// Empty or all-punctuation text yields an empty slug, which is still a
/// valid (if unlinkable) entry.
pub fn slugify(text: &str) -> String {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .collect();
    cleaned.split_whitespace().collect::<Vec<_>>().join("-")
}

/// Extract the heading outline from markdown source.
///
/// A line qualifies iff it starts with one to three `#` markers followed by
/// at least one whitespace character; the remainder after the whitespace is
/// the raw heading text. Deeper headings stay in the rendered document but
/// are not indexed. Entries preserve source order.
pub fn outline(markdown: &str) -> Vec<HeadingEntry> {
    let mut entries = Vec::new();
    for line in markdown.lines() {
        let level = line.bytes().take_while(|&b| b == b'#').count();
        if !(1..=3).contains(&level) {
            continue;
        }
        let rest = &line[level..];
        if !rest.starts_with(|c: char| c.is_whitespace()) {
            continue;
        }
        let text = rest.trim_start();
        entries.push(HeadingEntry {
            level: level as u8,
            text: text.to_string(),
            slug: slugify(text),
            order: entries.len(),
        });
    }
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_examples() {
        assert_eq!(slugify("Hello, World!"), "hello-world");
        assert_eq!(slugify("  Multiple   Spaces  "), "multiple-spaces");
    }

    #[test]
    fn test_slug_is_deterministic() {
        let text = "Why Rust? (Part 2)";
        assert_eq!(slugify(text), slugify(text));
        assert_eq!(slugify(text), "why-rust-part-2");
    }

    #[test]
    fn test_slug_of_empty_text() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn test_outline_levels_and_order() {
        let doc = "# One\nbody\n## Two\n### Three\n#### Four\ntext # not a heading";
        let entries = outline(doc);
        assert_eq!(entries.len(), 3);
        assert_eq!(
            entries.iter().map(|e| e.level).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
        assert_eq!(
            entries.iter().map(|e| e.order).collect::<Vec<_>>(),
            vec![0, 1, 2]
        );
        assert_eq!(entries[0].slug, "one");
    }

    #[test]
    fn test_outline_requires_whitespace_after_markers() {
        let entries = outline("#One\n##Two\n# Real");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].text, "Real");
    }

    #[test]
    fn test_outline_counts_every_matching_line() {
        let doc = "# A\n\n## B\n\n## C\n\n### D\n";
        assert_eq!(outline(doc).len(), 4);
    }

    #[test]
    fn test_outline_of_plain_text_is_empty() {
        assert!(outline("no headings here\njust prose\n").is_empty());
        assert!(outline("").is_empty());
    }

    #[test]
    fn test_heading_with_empty_text_keeps_empty_slug() {
        let entries = outline("#  \n# Next");
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].text, "");
        assert_eq!(entries[0].slug, "");
    }

    #[test]
    fn test_tab_counts_as_whitespace() {
        let entries = outline("#\tTabbed");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].slug, "tabbed");
    }
}
