//! Classification and retrieval engine.
//!
//! [`Capsule`] wraps an injected [`InspirationStore`] and exposes the
//! operations a front-end needs: add, draw, search, delete, and category
//! listing. Each operation lives in its own module as a free function over
//! the store; `Capsule` carries the shared state (RNG and retrieval knobs).

pub mod categories;
pub mod classify;
pub mod draw;
pub mod forget;
pub mod insert;
pub mod search;
pub mod types;

use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Mutex;

use crate::config::RetrievalConfig;
use crate::error::Result;
use crate::store::InspirationStore;
use types::{CategoryFilter, Inspiration};

/// Retrieval engine over an injected store.
pub struct Capsule<S> {
    store: S,
    rng: Mutex<StdRng>,
    settings: RetrievalConfig,
}

impl<S: InspirationStore> Capsule<S> {
    /// Engine over `store` with default retrieval settings and an entropy-seeded RNG.
    pub fn new(store: S) -> Self {
        Self::with_config(store, RetrievalConfig::default())
    }

    pub fn with_config(store: S, settings: RetrievalConfig) -> Self {
        Self {
            store,
            rng: Mutex::new(StdRng::from_entropy()),
            settings,
        }
    }

    /// Replace the RNG with a seeded one so draws are reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = Mutex::new(StdRng::seed_from_u64(seed));
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn settings(&self) -> &RetrievalConfig {
        &self.settings
    }

    /// Store `content` under `category`, or under its classified label when omitted.
    pub async fn insert(&self, content: &str, category: Option<&str>) -> Result<Inspiration> {
        insert::add_inspiration(
            &self.store,
            content,
            category,
            &self.settings.default_category,
        )
        .await
    }

    /// One uniformly random inspiration, restricted to `categories` when any are given.
    ///
    /// `Ok(None)` means nothing matched; it is not a failure.
    pub async fn draw_random<I>(&self, categories: Option<I>) -> Result<Option<Inspiration>>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let filter = categories.map(CategoryFilter::new).unwrap_or_default();
        draw::draw_random(&self.store, &filter, self.settings.draw_retries, &self.rng).await
    }

    /// Unfiltered draw.
    pub async fn draw_any(&self) -> Result<Option<Inspiration>> {
        self.draw_random(None::<&[&str]>).await
    }

    /// Case-insensitive substring search, newest first, capped at the configured limit.
    pub async fn search(&self, query: &str) -> Result<Vec<Inspiration>> {
        search::search_inspirations(&self.store, query, self.settings.search_limit).await
    }

    /// Remove `id`. Succeeds whether or not it existed.
    pub async fn delete(&self, id: &str) -> Result<()> {
        forget::delete_inspiration(&self.store, id).await
    }

    pub async fn list_categories(&self) -> Result<Vec<String>> {
        categories::list_categories(&self.store).await
    }

    pub async fn get(&self, id: &str) -> Result<Option<Inspiration>> {
        Ok(self.store.get(id).await?)
    }

    /// Live number of inspirations passing the category filter.
    pub async fn count<I>(&self, categories: Option<I>) -> Result<u64>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let filter = categories.map(CategoryFilter::new).unwrap_or_default();
        Ok(self.store.count(&filter).await?)
    }
}
