//! Configuration for the roster preview tool

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::Level;

/// Roster preview configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreviewConfig {
    /// JSON roster to preview; the built-in sample roster is used when unset
    pub roster_file: Option<PathBuf>,

    /// Log level for the preview (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self { roster_file: None, log_level: "info".to_string() }
    }
}

impl PreviewConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        let mut config = Self::default();

        if let Ok(path) = std::env::var("ROSTER_FILE") {
            if !path.trim().is_empty() {
                config.roster_file = Some(PathBuf::from(path));
            }
        }

        if let Ok(level) = std::env::var("ROSTER_LOG_LEVEL") {
            config.set_log_level(&level).context("Invalid ROSTER_LOG_LEVEL")?;
        }

        Ok(config)
    }

    /// Set the log level, rejecting anything tracing can't parse
    pub fn set_log_level(&mut self, level: &str) -> anyhow::Result<()> {
        level.parse::<Level>().map_err(|_| anyhow::anyhow!("unknown log level '{level}'"))?;
        self.log_level = level.to_string();
        Ok(())
    }

    /// Max tracing level; INFO if `log_level` was set directly to something unparseable
    pub fn max_level(&self) -> Level {
        self.log_level.parse().unwrap_or(Level::INFO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_config_default() {
        let config = PreviewConfig::default();
        assert!(config.roster_file.is_none());
        assert_eq!(config.log_level, "info");
        assert_eq!(config.max_level(), Level::INFO);
    }

    #[test]
    fn test_max_level_parsing() {
        let mut config = PreviewConfig::default();

        config.log_level = "debug".to_string();
        assert_eq!(config.max_level(), Level::DEBUG);

        config.log_level = "WARN".to_string();
        assert_eq!(config.max_level(), Level::WARN);

        config.log_level = "loud".to_string();
        assert_eq!(config.max_level(), Level::INFO);
    }

    #[test]
    fn test_set_log_level_rejects_unknown_levels() {
        let mut config = PreviewConfig::default();

        config.set_log_level("trace").unwrap();
        assert_eq!(config.max_level(), Level::TRACE);

        let err = config.set_log_level("loud").unwrap_err();
        assert!(err.to_string().contains("loud"));
        assert_eq!(config.log_level, "trace");
    }

    #[test]
    fn test_preview_config_serialization() {
        let config = PreviewConfig {
            roster_file: Some(PathBuf::from("data/roster.json")),
            log_level: "debug".to_string(),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: PreviewConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.roster_file, config.roster_file);
        assert_eq!(parsed.log_level, "debug");
    }
}
