pub mod migrations;
pub mod schema;

use anyhow::{Context, Result};
use rusqlite::functions::FunctionFlags;
use rusqlite::Connection;
use std::path::Path;

/// Register `unicode_lower(text)`, a full Unicode lowercase.
///
/// SQLite's own `lower()` and `LIKE` fold ASCII letters only. Must be called
/// on every connection that runs keyword search.
pub fn register_functions(conn: &Connection) -> rusqlite::Result<()> {
    conn.create_scalar_function(
        "unicode_lower",
        1,
        FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC,
        |ctx| {
            let text: Option<String> = ctx.get(0)?;
            Ok(text.map(|t| t.to_lowercase()))
        },
    )
}

/// Open (or create) the capsule database at the given path, with schema
/// initialized and migrations applied.
pub fn open_database(path: impl AsRef<Path>) -> Result<Connection> {
    let path = path.as_ref();

    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory {}", parent.display()))?;
    }

    let conn = Connection::open(path)
        .with_context(|| format!("failed to open database at {}", path.display()))?;

    // WAL keeps readers off the writer's lock between a draw's count and range read
    conn.pragma_update(None, "journal_mode", "WAL")?;
    conn.busy_timeout(std::time::Duration::from_millis(5000))?;
    register_functions(&conn).context("failed to register SQL functions")?;

    schema::init_schema(&conn).context("failed to initialize schema")?;
    migrations::run_migrations(&conn).context("failed to run migrations")?;

    tracing::info!(path = %path.display(), "database initialized");
    Ok(conn)
}

/// Open an in-memory database with schema and migrations applied.
pub fn open_memory_database() -> Result<Connection> {
    let conn = Connection::open_in_memory().context("failed to open in-memory database")?;
    register_functions(&conn).context("failed to register SQL functions")?;
    schema::init_schema(&conn).context("failed to initialize schema")?;
    migrations::run_migrations(&conn).context("failed to run migrations")?;
    Ok(conn)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unicode_lower_folds_non_ascii() {
        let conn = Connection::open_in_memory().unwrap();
        register_functions(&conn).unwrap();

        let lowered: String = conn
            .query_row("SELECT unicode_lower('ÉCOLE Привет')", [], |row| row.get(0))
            .unwrap();
        assert_eq!(lowered, "école привет");

        let null: Option<String> = conn
            .query_row("SELECT unicode_lower(NULL)", [], |row| row.get(0))
            .unwrap();
        assert!(null.is_none());
    }
}
