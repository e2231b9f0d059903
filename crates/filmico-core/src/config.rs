use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

const DEFAULT_CONFIG: &str = include_str!("../../../config/default.toml");

/// Environment variables checked for the API key, highest priority first.
pub const API_KEY_ENV_VARS: &[&str] = &["FILMICO_TMDB_API_KEY", "TMDB_API_KEY"];

/// Top-level application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub tmdb: TmdbConfig,
    pub browse: BrowseConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TmdbConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    pub base_url: String,
    pub image_base_url: String,
    pub language: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrowseConfig {
    pub prefetch_threshold: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub filter: String,
}

impl TmdbConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }
}

impl AppConfig {
    /// Load config: the user file if it exists, otherwise built-in defaults.
    /// Environment overrides are applied on top either way.
    pub fn load() -> Result<Self, CoreError> {
        let mut config = Self::load_from(&Self::config_path())?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from an explicit path, falling back to defaults when it is absent.
    pub fn load_from(path: &Path) -> Result<Self, CoreError> {
        if path.exists() {
            let user_str =
                std::fs::read_to_string(path).map_err(|e| CoreError::Config(e.to_string()))?;
            toml::from_str(&user_str).map_err(|e| CoreError::Config(e.to_string()))
        } else {
            toml::from_str(DEFAULT_CONFIG).map_err(|e| CoreError::Config(e.to_string()))
        }
    }

    /// Save current config to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<(), CoreError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| CoreError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Save current config to the user config file.
    pub fn save(&self) -> Result<(), CoreError> {
        self.save_to(&Self::config_path())
    }

    /// Path to user config file (XDG on Linux, AppData on Windows).
    pub fn config_path() -> PathBuf {
        Self::project_dirs()
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("config.toml"))
    }

    /// Override `tmdb.api_key` from the process environment.
    pub fn apply_env_overrides(&mut self) {
        self.apply_api_key_override(|name| std::env::var(name).ok());
    }

    /// Override `tmdb.api_key` from the first non-empty variable `lookup` returns.
    pub fn apply_api_key_override(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let found = API_KEY_ENV_VARS
            .iter()
            .filter_map(|name| lookup(name))
            .map(|v| v.trim().to_string())
            .find(|v| !v.is_empty());
        if let Some(key) = found {
            self.tmdb.api_key = Some(key);
        }
    }

    /// The configured API key, treating blank values as absent.
    pub fn api_key(&self) -> Option<&str> {
        self.tmdb
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
    }

    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("", "", "filmico")
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG).expect("built-in default config is valid TOML")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config = AppConfig::default();
        assert_eq!(config.tmdb.base_url, "https://api.themoviedb.org/3");
        assert_eq!(config.tmdb.language, "es-ES");
        assert_eq!(config.tmdb.timeout(), Duration::from_secs(10));
        assert!(config.tmdb.api_key.is_none());
        assert!((config.browse.prefetch_threshold - 0.5).abs() < f32::EPSILON);
        assert_eq!(config.logging.filter, "filmico=info");
    }

    #[test]
    fn test_save_and_load_from() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = AppConfig::default();
        config.tmdb.api_key = Some("secret".into());
        config.tmdb.language = "en-US".into();
        config.save_to(&path).unwrap();

        let loaded = AppConfig::load_from(&path).unwrap();
        assert_eq!(loaded.api_key(), Some("secret"));
        assert_eq!(loaded.tmdb.language, "en-US");
    }

    #[test]
    fn test_load_from_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = AppConfig::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(loaded.tmdb.language, "es-ES");
    }

    #[test]
    fn test_load_from_invalid_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[tmdb\nlanguage = ").unwrap();
        assert!(matches!(
            AppConfig::load_from(&path),
            Err(CoreError::Config(_))
        ));
    }

    #[test]
    fn test_api_key_override_priority() {
        let mut config = AppConfig::default();
        config.apply_api_key_override(|name| match name {
            "FILMICO_TMDB_API_KEY" => Some("  ".into()),
            "TMDB_API_KEY" => Some("from-dotenv".into()),
            _ => None,
        });
        assert_eq!(config.api_key(), Some("from-dotenv"));

        config.apply_api_key_override(|name| {
            (name == "FILMICO_TMDB_API_KEY").then(|| "preferred".to_string())
        });
        assert_eq!(config.api_key(), Some("preferred"));

        config.apply_api_key_override(|_| None);
        assert_eq!(config.api_key(), Some("preferred"));
    }

    #[test]
    fn test_blank_api_key_is_absent() {
        let mut config = AppConfig::default();
        config.tmdb.api_key = Some("   ".into());
        assert_eq!(config.api_key(), None);
    }
}
