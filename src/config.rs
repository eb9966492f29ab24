use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct CapsuleConfig {
    pub log: LogConfig,
    pub storage: StorageConfig,
    pub retrieval: RetrievalConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct StorageConfig {
    pub db_path: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct RetrievalConfig {
    /// Maximum number of hits returned by a keyword search.
    pub search_limit: usize,
    /// Extra draw attempts when the record at a drawn offset vanished
    /// between the count and the range read.
    pub draw_retries: u32,
    /// Label used when a caller supplies a category that trims to empty.
    pub default_category: String,
}

impl Default for CapsuleConfig {
    fn default() -> Self {
        Self {
            log: LogConfig::default(),
            storage: StorageConfig::default(),
            retrieval: RetrievalConfig::default(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        let db_path = default_capsule_dir()
            .join("capsule.db")
            .to_string_lossy()
            .into_owned();
        Self { db_path }
    }
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            search_limit: 20,
            draw_retries: 1,
            default_category: crate::inspiration::types::DEFAULT_CATEGORY.into(),
        }
    }
}

/// Returns `~/.capsule/`, falling back to `./.capsule/` when no home directory is known.
pub fn default_capsule_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".capsule")
}

/// Returns the default config file path: `~/.capsule/config.toml`
pub fn default_config_path() -> PathBuf {
    default_capsule_dir().join("config.toml")
}

impl CapsuleConfig {
    /// Load config from TOML file (if it exists) then apply env var overrides.
    pub fn load() -> Result<Self> {
        Self::load_from(default_config_path())
    }

    /// Load from a specific path, then apply env var overrides.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut config = if path.exists() {
            let contents =
                std::fs::read_to_string(path).context("failed to read config file")?;
            toml::from_str(&contents).context("failed to parse config TOML")?
        } else {
            info!("no config file at {}, using defaults", path.display());
            CapsuleConfig::default()
        };

        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Apply environment variable overrides (CAPSULE_DB, CAPSULE_LOG_LEVEL, CAPSULE_SEARCH_LIMIT).
    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("CAPSULE_DB") {
            self.storage.db_path = val;
        }
        if let Ok(val) = std::env::var("CAPSULE_LOG_LEVEL") {
            self.log.level = val;
        }
        if let Ok(val) = std::env::var("CAPSULE_SEARCH_LIMIT") {
            self.retrieval.search_limit = val
                .parse()
                .with_context(|| format!("CAPSULE_SEARCH_LIMIT is not a number: {val}"))?;
        }
        Ok(())
    }

    /// Resolve the database path, expanding `~` if needed.
    pub fn resolved_db_path(&self) -> PathBuf {
        expand_tilde(&self.storage.db_path)
    }
}

pub fn expand_tilde(path: &str) -> PathBuf {
    match (path.strip_prefix("~/"), dirs::home_dir()) {
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(path),
    }
}
