//! Database config file loader.
//!
//! Reads the TOML profile file selected by `--db-config` and deserializes
//! it into [`DbConfig`]. Falls back to an empty config (per-env default
//! URLs) when the file is missing or malformed, so a bare checkout runs
//! without any setup.

use std::path::Path;

use chatterbox_types::config::DbConfig;

/// Load database profiles from a TOML file.
///
/// - If the file does not exist, returns `DbConfig::default()`.
/// - If the file exists but fails to parse, logs a warning and returns the
///   default.
pub async fn load_db_config(path: &Path) -> DbConfig {
    let content = match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No db config at {}, using defaults", path.display());
            return DbConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", path.display());
            return DbConfig::default();
        }
    };

    match toml::from_str::<DbConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!("Failed to parse {}: {err}, using defaults", path.display());
            DbConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_file_uses_defaults() {
        let config = load_db_config(Path::new("/nonexistent/dbconfig.toml")).await;
        assert_eq!(
            config.url_for("development"),
            "sqlite://chatterbox-development.db?mode=rwc"
        );
    }

    #[tokio::test]
    async fn test_malformed_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dbconfig.toml");
        tokio::fs::write(&path, "not valid = [toml").await.unwrap();

        let config = load_db_config(&path).await;
        assert!(config.profiles.is_empty());
    }

    #[tokio::test]
    async fn test_parses_profiles() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dbconfig.toml");
        tokio::fs::write(&path, "[development]\nurl = \"sqlite://dev.db?mode=rwc\"\n")
            .await
            .unwrap();

        let config = load_db_config(&path).await;
        assert_eq!(config.url_for("development"), "sqlite://dev.db?mode=rwc");
    }
}
