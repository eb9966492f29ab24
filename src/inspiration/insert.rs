//! Write path: validation, classification, persistence.

use tracing::info;

use super::classify::classify;
use super::types::{Inspiration, NewInspiration};
use crate::error::{CapsuleError, Result};
use crate::store::InspirationStore;

/// Validate `content`, resolve its category and persist it.
///
/// An omitted category is derived with [`classify`]. A supplied category is
/// trimmed and replaced by `default_category` when nothing is left.
pub async fn add_inspiration<S: InspirationStore + ?Sized>(
    store: &S,
    content: &str,
    category: Option<&str>,
    default_category: &str,
) -> Result<Inspiration> {
    let record = prepare(content, category, default_category)?;
    let auto_tagged = category.is_none();

    let saved = store.insert(record).await?;

    info!(
        id = %saved.id,
        category = %saved.category,
        auto_tagged,
        content_len = saved.content.chars().count(),
        "inspiration stored"
    );
    Ok(saved)
}

/// Build the record to insert without touching the store.
fn prepare(
    content: &str,
    category: Option<&str>,
    default_category: &str,
) -> Result<NewInspiration> {
    let content = content.trim();
    if content.is_empty() {
        return Err(CapsuleError::Validation("content must not be empty".into()));
    }

    let category = match category.map(str::trim) {
        Some("") => default_category.to_string(),
        Some(chosen) => chosen.to_string(),
        None => classify(content).as_str().to_string(),
    };

    Ok(NewInspiration {
        content: content.to_string(),
        category,
    })
}
