//! Volatile, in-process [`InspirationStore`].
//!
//! Records live in insertion order, which is also the range-read order.

use async_trait::async_trait;
use std::sync::Mutex;

use super::{new_id, now_timestamp, InspirationStore};
use crate::error::StoreError;
use crate::inspiration::types::{CategoryFilter, Inspiration, NewInspiration};

#[derive(Default)]
pub struct MemoryStore {
    records: Mutex<Vec<Inspiration>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Vec<Inspiration>>, StoreError> {
        self.records.lock().map_err(|_| StoreError::Poisoned)
    }
}

#[async_trait]
impl InspirationStore for MemoryStore {
    async fn count(&self, filter: &CategoryFilter) -> Result<u64, StoreError> {
        let records = self.lock()?;
        Ok(records.iter().filter(|r| filter.matches(&r.category)).count() as u64)
    }

    async fn range_read(
        &self,
        offset: u64,
        filter: &CategoryFilter,
    ) -> Result<Option<Inspiration>, StoreError> {
        let Ok(offset) = usize::try_from(offset) else {
            return Ok(None);
        };
        let records = self.lock()?;
        Ok(records
            .iter()
            .filter(|r| filter.matches(&r.category))
            .nth(offset)
            .cloned())
    }

    async fn substring_search(
        &self,
        pattern: &str,
        limit: usize,
    ) -> Result<Vec<Inspiration>, StoreError> {
        let needle = pattern.to_lowercase();
        let records = self.lock()?;

        // Reverse insertion order first so equal timestamps keep newest-first.
        let mut hits: Vec<Inspiration> = records
            .iter()
            .rev()
            .filter(|r| r.content.to_lowercase().contains(&needle))
            .cloned()
            .collect();
        hits.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        hits.truncate(limit);
        Ok(hits)
    }

    async fn insert(&self, record: NewInspiration) -> Result<Inspiration, StoreError> {
        if record.content.trim().is_empty() || record.category.is_empty() {
            return Err(StoreError::Other(
                "content and category must not be empty".into(),
            ));
        }
        let inspiration = Inspiration {
            id: new_id(),
            content: record.content,
            category: record.category,
            created_at: now_timestamp(),
        };
        self.lock()?.push(inspiration.clone());
        Ok(inspiration)
    }

    async fn delete(&self, id: &str) -> Result<u64, StoreError> {
        let mut records = self.lock()?;
        let before = records.len();
        records.retain(|r| r.id != id);
        Ok((before - records.len()) as u64)
    }

    async fn get(&self, id: &str) -> Result<Option<Inspiration>, StoreError> {
        Ok(self.lock()?.iter().find(|r| r.id == id).cloned())
    }

    async fn categories(&self) -> Result<Vec<String>, StoreError> {
        Ok(self.lock()?.iter().map(|r| r.category.clone()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(content: &str, category: &str) -> NewInspiration {
        NewInspiration {
            content: content.into(),
            category: category.into(),
        }
    }

    #[tokio::test]
    async fn range_read_respects_filter_order() {
        let store = MemoryStore::new();
        store.insert(record("a", "Quote")).await.unwrap();
        store.insert(record("b", "Task")).await.unwrap();
        store.insert(record("c", "Quote")).await.unwrap();

        let filter = CategoryFilter::new(["Quote"]);
        assert_eq!(store.count(&filter).await.unwrap(), 2);
        assert_eq!(store.range_read(1, &filter).await.unwrap().unwrap().content, "c");
        assert!(store.range_read(2, &filter).await.unwrap().is_none());
        assert!(store.range_read(u64::MAX, &filter).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn search_handles_unicode_case() {
        let store = MemoryStore::new();
        store.insert(record("ÉCOLE du soir", "Quote")).await.unwrap();

        let hits = store.substring_search("école", 20).await.unwrap();
        assert_eq!(hits.len(), 1);
    }

    #[tokio::test]
    async fn insert_rejects_blank_content() {
        let store = MemoryStore::new();
        assert!(store.insert(record("  ", "Quote")).await.is_err());
        assert_eq!(store.count(&CategoryFilter::all()).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let store = MemoryStore::new();
        let saved = store.insert(record("x", "Quote")).await.unwrap();
        assert_eq!(store.delete(&saved.id).await.unwrap(), 1);
        assert_eq!(store.delete(&saved.id).await.unwrap(), 0);
    }
}
