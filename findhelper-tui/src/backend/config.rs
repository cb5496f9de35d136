//! Application configuration loaded from the user's config directory.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

const CONFIG_DIR: &str = "findhelper";
const CONFIG_FILE: &str = "config.json";

fn default_base_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_user_id() -> String {
    "1".to_string()
}

fn default_theme() -> String {
    "dark".to_string()
}

/// Settings read from `~/.config/findhelper/config.json`.
///
/// Missing file or unreadable content falls back to defaults so the
/// application always starts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Base URL of the Findhelper backend.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Identifier of the signed-in service provider.
    #[serde(default = "default_user_id")]
    pub user_id: String,
    /// UI theme, "dark" or "light".
    #[serde(default = "default_theme")]
    pub theme: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            user_id: default_user_id(),
            theme: default_theme(),
        }
    }
}

impl AppConfig {
    /// Loads the configuration, falling back to defaults on any failure.
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            log::warn!("Could not determine config directory, using defaults");
            return Self::default();
        };
        match fs::read_to_string(&path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(config) => config,
                Err(e) => {
                    log::warn!("Failed to parse {}: {e}, using defaults", path.display());
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_points_at_local_backend() {
        let config = AppConfig::default();
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.user_id, "1");
    }

    #[test]
    fn partial_file_fills_missing_fields_with_defaults() {
        let config: AppConfig = serde_json::from_str(r#"{"user_id": "42"}"#).unwrap();
        assert_eq!(config.user_id, "42");
        assert_eq!(config.base_url, "http://localhost:8080");
    }

    #[test]
    fn full_file_round_trips() {
        let config = AppConfig {
            base_url: "https://api.findhelper.lk".to_string(),
            user_id: "7".to_string(),
            theme: "light".to_string(),
        };
        let json = serde_json::to_string(&config).unwrap();
        let parsed: AppConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.base_url, config.base_url);
        assert_eq!(parsed.user_id, config.user_id);
        assert_eq!(parsed.theme, config.theme);
    }
}
