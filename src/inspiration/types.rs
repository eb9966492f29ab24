//! Core inspiration type definitions.
//!
//! Defines [`Category`] (the classifier's label set), [`Inspiration`] (a
//! persisted record), [`NewInspiration`] (a validated record awaiting an id),
//! and [`CategoryFilter`] (the category-membership predicate shared by counts
//! and range reads).

use serde::{Deserialize, Serialize};

/// Label used when a caller supplies a category that trims to empty.
pub const DEFAULT_CATEGORY: &str = "General";

/// The labels the classifier can assign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Starts with `http` or contains a URL scheme separator.
    Link,
    /// Carries a todo marker.
    Task,
    /// Up to 20 characters.
    Quote,
    /// Up to 60 characters.
    Thought,
    /// Anything longer.
    Note,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Self::Link,
        Self::Task,
        Self::Quote,
        Self::Thought,
        Self::Note,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Link => "Link",
            Self::Task => "Task",
            Self::Quote => "Quote",
            Self::Thought => "Thought",
            Self::Note => "Note",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown category: {s}"))
    }
}

/// An inspiration record, matching the `inspirations` table schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inspiration {
    /// UUID v7 primary key, assigned by the store.
    pub id: String,
    /// The snippet itself, stored trimmed.
    pub content: String,
    /// Auto-derived or caller-chosen label. Never empty.
    pub category: String,
    /// RFC 3339 UTC creation timestamp, assigned by the store.
    pub created_at: String,
}

/// A validated record handed to [`crate::store::InspirationStore::insert`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewInspiration {
    pub content: String,
    pub category: String,
}

/// A normalized set of categories to restrict a draw to.
///
/// Labels are trimmed, blanks dropped, duplicates removed and the result
/// sorted. An empty filter matches every record. A filter built only from
/// blank labels matches nothing, since stored categories are never blank.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryFilter {
    categories: Vec<String>,
    blank_only: bool,
}

impl CategoryFilter {
    /// A filter that matches every record.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn new<I, S>(categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut requested = 0usize;
        let mut categories: Vec<String> = categories
            .into_iter()
            .inspect(|_| requested += 1)
            .map(|c| c.as_ref().trim().to_string())
            .filter(|c| !c.is_empty())
            .collect();
        categories.sort();
        categories.dedup();
        Self {
            blank_only: requested > 0 && categories.is_empty(),
            categories,
        }
    }

    pub fn is_unfiltered(&self) -> bool {
        self.categories.is_empty() && !self.blank_only
    }

    /// True when every requested label was blank.
    pub fn matches_nothing(&self) -> bool {
        self.blank_only
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Whether a record with this category passes the filter.
    pub fn matches(&self, category: &str) -> bool {
        !self.blank_only && (self.is_unfiltered() || self.categories.iter().any(|c| c == category))
    }
}
