//! Ordered chapter collection with "Chapter N" sort discipline

use serde::{Deserialize, Serialize};

/// A single titled chapter body
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
struct ChapterEntry {
    title: String,
    body: String,
}

/// Ordered collection mapping chapter titles to Markdown bodies.
///
/// Iteration order follows a numeric sort over titles of the form
/// `Chapter <N>`: the second whitespace-separated token is parsed as an
/// integer, and titles without a parseable token sort after all
/// numbered titles (stable among themselves). Title uniqueness is the
/// caller's responsibility; colliding titles silently overwrite.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct ChapterStore {
    entries: Vec<ChapterEntry>,
}

impl ChapterStore {
    /// Create a store with the default single entry ("Chapter 1", empty body)
    pub fn new() -> Self {
        Self {
            entries: vec![ChapterEntry {
                title: "Chapter 1".to_string(),
                body: String::new(),
            }],
        }
    }

    /// Create a store with no entries, for callers that assemble the
    /// collection from external input. The store itself permits zero
    /// chapters; the one-chapter floor is front-end policy.
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Parse the chapter number out of a title (`"Chapter 3"` -> `Some(3)`).
    /// The second whitespace-separated token must parse fully as an integer.
    fn chapter_number(title: &str) -> Option<i64> {
        title.split_whitespace().nth(1)?.parse().ok()
    }

    /// Append a new auto-numbered chapter with an empty body.
    ///
    /// The next number is one past the highest parseable chapter number
    /// (1 when nothing parses or the store is empty). Side effect: all
    /// existing entries are re-sorted by parsed number first, so `add`
    /// reorders the collection, not just appends.
    pub fn add(&mut self) {
        let next = self
            .entries
            .iter()
            .filter_map(|e| Self::chapter_number(&e.title))
            .max()
            .map_or(1, |n| n + 1);

        self.entries
            .sort_by_key(|e| Self::chapter_number(&e.title).unwrap_or(i64::MAX));

        self.entries.push(ChapterEntry {
            title: format!("Chapter {next}"),
            body: String::new(),
        });
    }

    /// Rename a chapter in place, preserving its position and body.
    ///
    /// No-op when `old` is absent or equal to `new`. When another entry
    /// already carries `new`, the entries collapse into the renamed
    /// slot with the later body winning, matching ordered-map
    /// assignment semantics.
    pub fn rename(&mut self, old: &str, new: &str) {
        if old == new || !self.contains(old) {
            return;
        }
        for entry in &mut self.entries {
            if entry.title == old {
                entry.title = new.to_string();
                break;
            }
        }
        self.collapse_duplicates(new);
    }

    /// Keep the first entry titled `title`, give it the last duplicate's
    /// body, and drop the rest.
    fn collapse_duplicates(&mut self, title: &str) {
        let indices: Vec<usize> = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.title == title)
            .map(|(i, _)| i)
            .collect();
        if let [first, .., last] = indices.as_slice() {
            let body = self.entries[*last].body.clone();
            self.entries[*first].body = body;
            let keep = *first;
            let mut i = 0;
            self.entries.retain(|e| {
                let drop = e.title == title && i != keep;
                i += 1;
                !drop
            });
        }
    }

    /// Remove a chapter; no-op when absent. Relative order of the
    /// remainder is preserved.
    pub fn remove(&mut self, title: &str) {
        self.entries.retain(|e| e.title != title);
    }

    /// Replace a chapter's body; no-op when absent.
    pub fn set_body(&mut self, title: &str, body: &str) {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.title == title) {
            entry.body = body.to_string();
        }
    }

    /// Insert with ordered-map assignment semantics: an existing title
    /// keeps its position and takes the new body, a new title appends.
    pub fn insert(&mut self, title: impl Into<String>, body: impl Into<String>) {
        let title = title.into();
        let body = body.into();
        match self.entries.iter_mut().find(|e| e.title == title) {
            Some(entry) => entry.body = body,
            None => self.entries.push(ChapterEntry { title, body }),
        }
    }

    /// Look up a chapter body by title
    pub fn get(&self, title: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.title == title)
            .map(|e| e.body.as_str())
    }

    /// Whether a chapter with this title exists
    pub fn contains(&self, title: &str) -> bool {
        self.entries.iter().any(|e| e.title == title)
    }

    /// Iterate over (title, body) pairs in store order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|e| (e.title.as_str(), e.body.as_str()))
    }

    /// Iterate over titles in store order
    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.title.as_str())
    }

    /// Number of chapters
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store has no chapters
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether at least one chapter has a non-empty body
    pub fn has_content(&self) -> bool {
        self.entries.iter().any(|e| !e.body.is_empty())
    }
}

impl Default for ChapterStore {
    fn default() -> Self {
        Self::new()
    }
}
