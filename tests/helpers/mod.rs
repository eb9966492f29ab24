#![allow(dead_code)]

use capsule::store::memory::MemoryStore;
use capsule::store::sqlite::SqliteStore;
use capsule::{db, Capsule};
use rusqlite::Connection;

/// Open a fresh in-memory database the way the binary does: SQL functions
/// registered, schema and migrations applied.
pub fn test_db() -> Connection {
    db::open_memory_database().unwrap()
}

/// Engine over a fresh SQLite store with a fixed RNG seed.
pub fn sqlite_capsule() -> Capsule<SqliteStore> {
    Capsule::new(SqliteStore::new(test_db())).with_seed(42)
}

/// Engine over a fresh in-memory store with a fixed RNG seed.
pub fn memory_capsule() -> Capsule<MemoryStore> {
    Capsule::new(MemoryStore::new()).with_seed(42)
}

/// Insert `(content, category)` pairs and return their ids in order.
pub async fn seed<S: capsule::store::InspirationStore>(
    capsule: &Capsule<S>,
    items: &[(&str, &str)],
) -> Vec<String> {
    let mut ids = Vec::with_capacity(items.len());
    for (content, category) in items {
        ids.push(capsule.insert(content, Some(*category)).await.unwrap().id);
    }
    ids
}
