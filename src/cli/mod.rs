pub mod add;
pub mod categories;
pub mod delete;
pub mod draw;
pub mod search;
pub mod show;

use anyhow::Result;

use capsule::config::CapsuleConfig;
use capsule::store::sqlite::SqliteStore;
use capsule::{Capsule, Inspiration};

/// Open the configured database and wrap it in an engine.
pub fn open_capsule(config: &CapsuleConfig) -> Result<Capsule<SqliteStore>> {
    let db_path = config.resolved_db_path();
    let conn = capsule::db::open_database(&db_path)?;
    Ok(Capsule::with_config(
        SqliteStore::new(conn),
        config.retrieval.clone(),
    ))
}

/// Print a single record as a card, or as JSON.
pub fn print_inspiration(inspiration: &Inspiration, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(inspiration)?);
        return Ok(());
    }
    println!("[{}] {}", inspiration.category, inspiration.content);
    println!("  id: {}  created: {}", inspiration.id, inspiration.created_at);
    Ok(())
}

/// Shorten `content` to `max_chars` characters, appending `...` when cut.
pub fn truncate_preview(content: &str, max_chars: usize) -> String {
    if content.chars().count() <= max_chars {
        return content.to_string();
    }
    let cut: String = content.chars().take(max_chars).collect();
    format!("{cut}...")
}
