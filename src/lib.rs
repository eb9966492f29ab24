//! Inspiration capsule, a personal store of short snippets that surfaces
//! them one at a time.
//!
//! Snippets are auto-classified on the way in and drawn back out at random
//! (optionally limited to a set of categories) or found by keyword.
//!
//! | Category | Rule (first match wins, on trimmed text) |
//! |----------|------------------------------------------|
//! | **Link** | starts with `http` or contains `://` |
//! | **Task** | contains a todo marker (`todo`, any case, or `待辦`) |
//! | **Quote** | at most 20 characters |
//! | **Thought** | at most 60 characters |
//! | **Note** | anything longer |
//!
//! # Architecture
//!
//! - **Engine**: [`inspiration::Capsule`] over an injected [`store::InspirationStore`]
//! - **Random draw**: count, then a single-row range read at a random offset;
//!   the collection is never loaded into memory
//! - **Storage**: SQLite via rusqlite, or a volatile in-process store
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from TOML files and environment variables
//! - [`db`]: SQLite database initialization, schema, and migrations
//! - [`error`]: Engine and store error types
//! - [`inspiration`]: Classifier and retrieval engine
//! - [`store`]: Store contract and its SQLite and in-memory implementations

pub mod config;
pub mod db;
pub mod error;
pub mod inspiration;
pub mod store;

pub use error::{CapsuleError, StoreError};
pub use inspiration::types::{Category, CategoryFilter, Inspiration};
pub use inspiration::Capsule;
