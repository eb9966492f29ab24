//! Forward-only schema migration framework.
//!
//! Tracks the schema version in `schema_meta` and runs sequential migrations
//! to bring the database up to [`CURRENT_SCHEMA_VERSION`]. Version 1 is the
//! baseline created by [`crate::db::schema::init_schema`]; later schema
//! changes add a step to [`run_migrations`] and bump the constant.

use rusqlite::Connection;

/// The schema version that the current binary expects.
pub const CURRENT_SCHEMA_VERSION: u32 = 1;

/// Get the current schema version from the database.
pub fn get_schema_version(conn: &Connection) -> rusqlite::Result<u32> {
    conn.query_row(
        "SELECT value FROM schema_meta WHERE key = 'schema_version'",
        [],
        |row| {
            let val: String = row.get(0)?;
            Ok(val.parse::<u32>().unwrap_or(0))
        },
    )
}

fn update_schema_version(conn: &Connection, version: u32) -> rusqlite::Result<()> {
    conn.execute(
        "UPDATE schema_meta SET value = ?1 WHERE key = 'schema_version'",
        [version.to_string()],
    )?;
    Ok(())
}

/// Run any pending forward-only migrations. Each migration runs in a transaction.
pub fn run_migrations(conn: &Connection) -> rusqlite::Result<()> {
    let mut version = get_schema_version(conn)?;
    tracing::debug!(schema_version = version, target = CURRENT_SCHEMA_VERSION, "checking migrations");

    while version < CURRENT_SCHEMA_VERSION {
        let next = version + 1;
        tracing::info!(from = version, to = next, "running migration");

        let tx = conn.unchecked_transaction()?;
        if !apply_step(&tx, next)? {
            tracing::error!(version = next, "unknown migration target");
            break;
        }
        update_schema_version(&tx, next)?;
        tx.commit()?;

        version = next;
    }

    Ok(())
}

/// Apply the step that produces schema version `target`. Returns `false` when
/// no such step is known. None exist yet past the version 1 baseline.
fn apply_step(_conn: &Connection, version: u32) -> rusqlite::Result<bool> {
    tracing::trace!(version, "no migration step registered");
    Ok(false)
}
