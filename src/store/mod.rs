//! The persistence boundary consumed by the retrieval engine.
//!
//! [`InspirationStore`] is the whole contract: the engine never assumes more
//! capability than these operations. Two implementations ship with the crate:
//! [`sqlite::SqliteStore`] for on-disk persistence and [`memory::MemoryStore`]
//! for a volatile, in-process collection.

pub mod memory;
pub mod sqlite;

use async_trait::async_trait;

use crate::error::StoreError;
use crate::inspiration::types::{CategoryFilter, Inspiration, NewInspiration};

/// A record-oriented collection of inspirations keyed by id.
///
/// Implementations must order range reads consistently with counts: for any
/// filter, `range_read(i, f)` for `i < count(f)` addresses the same
/// filtered sequence `count(f)` measured. The engine relies on
/// read-after-write consistency between consecutive calls; a record vanishing
/// between a count and a range read must show up as `Ok(None)`, never an error.
#[async_trait]
pub trait InspirationStore: Send + Sync {
    /// Number of records whose category passes `filter`.
    async fn count(&self, filter: &CategoryFilter) -> Result<u64, StoreError>;

    /// The record at zero-based `offset` within the filtered, store-defined
    /// ordering. `None` when the offset is out of range.
    async fn range_read(
        &self,
        offset: u64,
        filter: &CategoryFilter,
    ) -> Result<Option<Inspiration>, StoreError>;

    /// Case-insensitive substring match on content, newest first, at most `limit` rows.
    async fn substring_search(
        &self,
        pattern: &str,
        limit: usize,
    ) -> Result<Vec<Inspiration>, StoreError>;

    /// Persist a record, assigning its id and creation timestamp.
    async fn insert(&self, record: NewInspiration) -> Result<Inspiration, StoreError>;

    /// Remove the record with `id`. Returns rows removed; zero is not an error.
    async fn delete(&self, id: &str) -> Result<u64, StoreError>;

    /// Point lookup by id.
    async fn get(&self, id: &str) -> Result<Option<Inspiration>, StoreError>;

    /// The category field of every record, in no particular order.
    async fn categories(&self) -> Result<Vec<String>, StoreError>;
}

/// Fresh UUID v7 (time-sortable) identifier.
pub(crate) fn new_id() -> String {
    uuid::Uuid::now_v7().to_string()
}

/// Current time as fixed-width RFC 3339 so string order matches time order.
pub(crate) fn now_timestamp() -> String {
    chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Micros, true)
}
