//! Keyword search: case-insensitive substring match, newest first, capped.

use tracing::debug;

use super::types::Inspiration;
use crate::error::Result;
use crate::store::InspirationStore;

pub async fn search_inspirations<S: InspirationStore + ?Sized>(
    store: &S,
    query: &str,
    limit: usize,
) -> Result<Vec<Inspiration>> {
    if limit == 0 {
        return Ok(Vec::new());
    }
    let results = store.substring_search(query, limit).await?;
    debug!(query_len = query.chars().count(), hits = results.len(), "search complete");
    Ok(results)
}
