//! SQL DDL for the capsule tables.
//!
//! Defines the `inspirations` and `schema_meta` tables. All DDL uses
//! `IF NOT EXISTS` for idempotent initialization.

use rusqlite::Connection;

const SCHEMA_SQL: &str = r#"
-- One row per inspiration; rowid order is the stable order used for random draws
CREATE TABLE IF NOT EXISTS inspirations (
    id TEXT PRIMARY KEY,
    content TEXT NOT NULL CHECK(length(trim(content)) > 0),
    category TEXT NOT NULL CHECK(length(category) > 0),
    created_at TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_inspirations_category ON inspirations(category);
-- Newest-first keyword search
CREATE INDEX IF NOT EXISTS idx_inspirations_created_at ON inspirations(created_at);

-- Schema metadata
CREATE TABLE IF NOT EXISTS schema_meta (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL
);
"#;

/// Initialize all schema tables. Idempotent (uses IF NOT EXISTS).
pub fn init_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(SCHEMA_SQL)?;

    // Set initial schema version if not already present
    conn.execute(
        "INSERT OR IGNORE INTO schema_meta (key, value) VALUES ('schema_version', '1')",
        [],
    )?;

    Ok(())
}
