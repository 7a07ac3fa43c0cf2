//! Database configuration types.
//!
//! The config file is TOML with one table per environment, e.g.:
//!
//! ```toml
//! [development]
//! url = "sqlite://chatterbox-development.db?mode=rwc"
//! ```
//!
//! The active profile is selected by the `--env` flag. Loading and fallback
//! behavior live in `chatterbox-infra`.

use std::collections::BTreeMap;

use serde::Deserialize;

/// Parsed database config file: one profile per environment name.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DbConfig {
    #[serde(flatten)]
    pub profiles: BTreeMap<String, DbProfile>,
}

/// Connection settings for a single environment.
#[derive(Debug, Clone, Deserialize)]
pub struct DbProfile {
    /// SQLite connection URL.
    pub url: String,
}

impl DbConfig {
    /// Resolve the database URL for an environment, falling back to a
    /// per-env default when the profile is absent.
    pub fn url_for(&self, env: &str) -> String {
        self.profiles
            .get(env)
            .map(|p| p.url.clone())
            .unwrap_or_else(|| default_database_url(env))
    }
}

/// Default on-disk database URL for an environment.
pub fn default_database_url(env: &str) -> String {
    format!("sqlite://chatterbox-{env}.db?mode=rwc")
}
