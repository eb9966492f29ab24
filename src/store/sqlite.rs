//! SQLite-backed [`InspirationStore`].
//!
//! Every call takes the connection lock inside `spawn_blocking` so rusqlite's
//! synchronous API never blocks the async runtime. Range reads order by
//! `rowid`, which is stable for the lifetime of a row. Keyword search needs
//! the `unicode_lower` function from [`crate::db::register_functions`], which
//! both `db::open_*` constructors install.

use async_trait::async_trait;
use rusqlite::{params, params_from_iter, Connection, OptionalExtension, Row};
use std::sync::{Arc, Mutex};

use super::{new_id, now_timestamp, InspirationStore};
use crate::error::StoreError;
use crate::inspiration::types::{CategoryFilter, Inspiration, NewInspiration};

const COLUMNS: &str = "id, content, category, created_at";

/// Handle to a capsule database. Cheap to clone.
#[derive(Clone)]
pub struct SqliteStore {
    db: Arc<Mutex<Connection>>,
}

impl SqliteStore {
    pub fn new(conn: Connection) -> Self {
        Self {
            db: Arc::new(Mutex::new(conn)),
        }
    }

    /// Run `f` against the connection on the blocking pool.
    async fn with_conn<T, F>(&self, f: F) -> Result<T, StoreError>
    where
        T: Send + 'static,
        F: FnOnce(&Connection) -> Result<T, StoreError> + Send + 'static,
    {
        let db = Arc::clone(&self.db);
        tokio::task::spawn_blocking(move || {
            let conn = db.lock().map_err(|_| StoreError::Poisoned)?;
            f(&conn)
        })
        .await?
    }
}

/// `WHERE` clause and bind values for a category filter.
///
/// Both `count` and `range_read` build their predicate here so the two
/// queries of a draw can never disagree on what they filter.
fn filter_clause(filter: &CategoryFilter) -> (String, Vec<String>) {
    if filter.matches_nothing() {
        return ("WHERE 0".to_string(), Vec::new());
    }
    if filter.is_unfiltered() {
        return (String::new(), Vec::new());
    }
    let placeholders = (1..=filter.categories().len())
        .map(|i| format!("?{i}"))
        .collect::<Vec<_>>()
        .join(", ");
    (
        format!("WHERE category IN ({placeholders})"),
        filter.categories().to_vec(),
    )
}

/// Escape `%`, `_` and the escape character itself for a `LIKE ... ESCAPE '\'` pattern.
fn escape_like(pattern: &str) -> String {
    let mut escaped = String::with_capacity(pattern.len() + 2);
    escaped.push('%');
    for ch in pattern.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped.push('%');
    escaped
}

fn to_sql_int(value: u64) -> Result<i64, StoreError> {
    i64::try_from(value).map_err(|_| StoreError::Other(format!("value out of range: {value}")))
}

fn row_to_inspiration(row: &Row<'_>) -> rusqlite::Result<Inspiration> {
    Ok(Inspiration {
        id: row.get(0)?,
        content: row.get(1)?,
        category: row.get(2)?,
        created_at: row.get(3)?,
    })
}

#[async_trait]
impl InspirationStore for SqliteStore {
    async fn count(&self, filter: &CategoryFilter) -> Result<u64, StoreError> {
        let (where_clause, binds) = filter_clause(filter);
        self.with_conn(move |conn| {
            let sql = format!("SELECT COUNT(*) FROM inspirations {where_clause}");
            let count: i64 = conn.query_row(&sql, params_from_iter(binds.iter()), |row| row.get(0))?;
            Ok(count as u64)
        })
        .await
    }

    async fn range_read(
        &self,
        offset: u64,
        filter: &CategoryFilter,
    ) -> Result<Option<Inspiration>, StoreError> {
        let (where_clause, binds) = filter_clause(filter);
        let offset = to_sql_int(offset)?;
        self.with_conn(move |conn| {
            let offset_param = binds.len() + 1;
            let sql = format!(
                "SELECT {COLUMNS} FROM inspirations {where_clause} \
                 ORDER BY rowid LIMIT 1 OFFSET ?{offset_param}"
            );
            let mut values: Vec<rusqlite::types::Value> =
                binds.into_iter().map(rusqlite::types::Value::Text).collect();
            values.push(rusqlite::types::Value::Integer(offset));

            let record = conn
                .query_row(&sql, params_from_iter(values.iter()), row_to_inspiration)
                .optional()?;
            Ok(record)
        })
        .await
    }

    async fn substring_search(
        &self,
        pattern: &str,
        limit: usize,
    ) -> Result<Vec<Inspiration>, StoreError> {
        let like = escape_like(&pattern.to_lowercase());
        let limit = to_sql_int(limit as u64)?;
        self.with_conn(move |conn| {
            let mut stmt = conn.prepare(&format!(
                "SELECT {COLUMNS} FROM inspirations \
                 WHERE unicode_lower(content) LIKE ?1 ESCAPE '\\' \
                 ORDER BY created_at DESC, rowid DESC LIMIT ?2"
            ))?;
            let results = stmt
                .query_map(params![like, limit], row_to_inspiration)?
                .collect::<Result<Vec<_>, _>>()?;
            Ok(results)
        })
        .await
    }

    async fn insert(&self, record: NewInspiration) -> Result<Inspiration, StoreError> {
        self.with_conn(move |conn| {
            let inspiration = Inspiration {
                id: new_id(),
                content: record.content,
                category: record.category,
                created_at: now_timestamp(),
            };
            conn.execute(
                "INSERT INTO inspirations (id, content, category, created_at) VALUES (?1, ?2, ?3, ?4)",
                params![
                    inspiration.id,
                    inspiration.content,
                    inspiration.category,
                    inspiration.created_at,
                ],
            )?;
            Ok(inspiration)
        })
        .await
    }

    async fn delete(&self, id: &str) -> Result<u64, StoreError> {
        let id = id.to_string();
        self.with_conn(move |conn| {
            let rows = conn.execute("DELETE FROM inspirations WHERE id = ?1", params![id])?;
            Ok(rows as u64)
        })
        .await
    }

    async fn get(&self, id: &str) -> Result<Option<Inspiration>, StoreError> {
        let id = id.to_string();
        self.with_conn(move |conn| {
            let record = conn
                .query_row(
                    &format!("SELECT {COLUMNS} FROM inspirations WHERE id = ?1"),
                    params![id],
                    row_to_inspiration,
                )
                .optional()?;
            Ok(record)
        })
        .await
    }

    async fn categories(&self) -> Result<Vec<String>, StoreError> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare("SELECT category FROM inspirations")?;
            let categories = stmt
                .query_map([], |row| row.get(0))?
                .collect::<Result<Vec<String>, _>>()?;
            Ok(categories)
        })
        .await
    }
}
