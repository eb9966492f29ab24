//! Content-shape classifier.
//!
//! Rules run in order on the trimmed text and the first match wins:
//! URL → [`Category::Link`], todo marker → [`Category::Task`], then length
//! in characters: ≤ 20 → [`Category::Quote`], ≤ 60 → [`Category::Thought`],
//! otherwise [`Category::Note`].

use super::types::Category;

const QUOTE_MAX_CHARS: usize = 20;
const THOUGHT_MAX_CHARS: usize = 60;

/// Markers matched case-insensitively against the lowercased text.
const TODO_MARKERS: &[&str] = &["todo", "待辦"];

/// Assign a category to `content`. Pure and total.
pub fn classify(content: &str) -> Category {
    let trimmed = content.trim();

    if looks_like_link(trimmed) {
        return Category::Link;
    }
    if has_todo_marker(trimmed) {
        return Category::Task;
    }

    match trimmed.chars().count() {
        n if n <= QUOTE_MAX_CHARS => Category::Quote,
        n if n <= THOUGHT_MAX_CHARS => Category::Thought,
        _ => Category::Note,
    }
}

/// Live preview while the user types: `None` until there is something to classify.
pub fn preview_category(text: &str) -> Option<Category> {
    if text.trim().is_empty() {
        None
    } else {
        Some(classify(text))
    }
}

fn looks_like_link(trimmed: &str) -> bool {
    trimmed.starts_with("http") || trimmed.contains("://")
}

fn has_todo_marker(trimmed: &str) -> bool {
    let lowered = trimmed.to_lowercase();
    TODO_MARKERS.iter().any(|m| lowered.contains(m))
}
