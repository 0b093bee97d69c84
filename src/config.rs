//! Configuration management for Cineplex
//!
//! Handles config file loading/saving and backend origin resolution.
//! Config is stored at ~/.config/cineplex/config.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::api::DEFAULT_API_BASE;

/// Environment variable overriding the backend origin
pub const API_BASE_ENV: &str = "API_BASE_URL";

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Backend origin, e.g. http://localhost:5000
    pub api_base_url: Option<String>,
    /// Drop responses that belong to a superseded request
    #[serde(default)]
    pub discard_stale_responses: bool,
    /// Tracing filter directive (info, debug, cineplex=trace, ...)
    pub log_level: Option<String>,
}

impl Config {
    /// Get config file path (~/.config/cineplex/config.toml)
    pub fn path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("cineplex").join("config.toml"))
    }

    /// Load config from the default location, or return default if not found
    pub fn load() -> Result<Self> {
        match Self::path() {
            Some(p) => Self::load_from(&p),
            None => Ok(Self::default()),
        }
    }

    /// Load config from a specific file
    ///
    /// A missing file yields defaults; a file that fails to parse is an error.
    pub fn load_from(path: &Path) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(s) => toml::from_str(&s)
                .with_context(|| format!("invalid config file {}", path.display())),
            Err(_) => Ok(Self::default()),
        }
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<()> {
        let path = Self::path().ok_or_else(|| anyhow::anyhow!("Could not determine config path"))?;
        self.save_to(&path)
    }

    /// Save config to a specific file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let toml = toml::to_string_pretty(self)?;
        std::fs::write(path, toml)?;
        Ok(())
    }

    /// Resolve the backend origin with fallback chain:
    /// 1. Command line flag
    /// 2. Environment variable API_BASE_URL
    /// 3. Config file
    /// 4. Built-in default
    pub fn resolve_api_base(&self, flag: Option<&str>) -> String {
        let env = std::env::var(API_BASE_ENV).ok();
        self.resolve_api_base_with(flag, env.as_deref())
    }

    fn resolve_api_base_with(&self, flag: Option<&str>, env: Option<&str>) -> String {
        [flag, env, self.api_base_url.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|s| !s.is_empty())
            .unwrap_or(DEFAULT_API_BASE)
            .to_string()
    }

    /// Tracing filter directive, defaulting to "info"
    pub fn log_filter(&self) -> &str {
        self.log_level.as_deref().unwrap_or("info")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.api_base_url.is_none());
        assert!(!config.discard_stale_responses);
        assert_eq!(config.log_filter(), "info");
    }

    #[test]
    fn test_api_base_precedence() {
        let config = Config {
            api_base_url: Some("http://file:5000".into()),
            ..Default::default()
        };

        assert_eq!(
            config.resolve_api_base_with(Some("http://flag:1"), Some("http://env:2")),
            "http://flag:1"
        );
        assert_eq!(
            config.resolve_api_base_with(None, Some("http://env:2")),
            "http://env:2"
        );
        assert_eq!(config.resolve_api_base_with(None, None), "http://file:5000");
        assert_eq!(
            Config::default().resolve_api_base_with(None, None),
            DEFAULT_API_BASE
        );
    }

    #[test]
    fn test_blank_values_are_skipped() {
        let config = Config::default();
        assert_eq!(
            config.resolve_api_base_with(Some("  "), Some("")),
            DEFAULT_API_BASE
        );
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = Config {
            api_base_url: Some("http://movies.local:8080".into()),
            discard_stale_responses: true,
            log_level: Some("debug".into()),
        };
        config.save_to(&path).unwrap();

        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_load_missing_or_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.toml");
        assert_eq!(Config::load_from(&missing).unwrap(), Config::default());

        let invalid = dir.path().join("invalid.toml");
        std::fs::write(&invalid, "api_base_url = [not toml").unwrap();
        let err = Config::load_from(&invalid).unwrap_err();
        assert!(err.to_string().contains("invalid.toml"), "got {}", err);
    }
}
