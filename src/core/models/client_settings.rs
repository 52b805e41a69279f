use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::global_constants;

fn default_api_url() -> String {
    global_constants::API_URL.to_string()
}

fn default_search_results_count() -> u32 {
    global_constants::SEARCH_RESULTS_COUNT
}

/// Endpoint configuration injected into the client at construction time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClientSettings {
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default = "default_search_results_count")]
    pub search_results_count: u32,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            search_results_count: default_search_results_count(),
        }
    }
}

impl ClientSettings {
    pub fn with_api_url(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            ..Self::default()
        }
    }

    pub fn load() -> anyhow::Result<Self> {
        let settings_path = Self::get_settings_file_path()?;
        Self::load_from_path(&settings_path)
    }

    pub fn load_from_path(settings_path: &Path) -> anyhow::Result<Self> {
        if !settings_path.exists() {
            log::info!(
                "{} No settings file at {:?}, using defaults",
                global_constants::LOG_TAG_SETTINGS,
                settings_path
            );
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(settings_path)?;
        let settings: ClientSettings = serde_json::from_str(&contents)?;

        log::info!(
            "{} Loaded settings from {:?}",
            global_constants::LOG_TAG_SETTINGS,
            settings_path
        );
        log::debug!(
            "{} API URL: {}, search results: {}",
            global_constants::LOG_TAG_SETTINGS,
            settings.api_url,
            settings.search_results_count
        );

        Ok(settings)
    }

    pub fn save_to_path(&self, settings_path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = settings_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(settings_path, contents)?;

        log::info!(
            "{} Saved settings to {:?}",
            global_constants::LOG_TAG_SETTINGS,
            settings_path
        );
        Ok(())
    }

    /// Base URL with any trailing slash removed.
    pub fn base_url(&self) -> &str {
        self.api_url.trim_end_matches('/')
    }

    fn get_settings_file_path() -> anyhow::Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?
            .join(global_constants::SETTINGS_DIR_NAME);

        Ok(config_dir.join(global_constants::SETTINGS_FILE_NAME))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_settings_default_values() {
        let settings = ClientSettings::default();

        assert_eq!(settings.api_url, global_constants::API_URL);
        assert_eq!(settings.search_results_count, 10);
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let settings: ClientSettings =
            serde_json::from_str(r#"{"api_url":"http://localhost:9000"}"#).unwrap();

        assert_eq!(settings.api_url, "http://localhost:9000");
        assert_eq!(settings.search_results_count, 10);
    }

    #[test]
    fn test_base_url_strips_trailing_slashes() {
        let settings = ClientSettings::with_api_url("http://localhost:9000//");

        assert_eq!(settings.base_url(), "http://localhost:9000");
    }

    #[test]
    fn test_load_from_missing_path_uses_defaults() {
        let temp_dir = tempfile::tempdir().unwrap();

        let settings =
            ClientSettings::load_from_path(&temp_dir.path().join("settings.json")).unwrap();

        assert_eq!(settings, ClientSettings::default());
    }

    #[test]
    fn test_save_then_load_preserves_values() {
        let temp_dir = tempfile::tempdir().unwrap();
        let settings_path = temp_dir.path().join("nested").join("settings.json");
        let settings = ClientSettings {
            api_url: "http://memes.local".to_string(),
            search_results_count: 25,
        };

        settings.save_to_path(&settings_path).unwrap();
        let loaded = ClientSettings::load_from_path(&settings_path).unwrap();

        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_load_from_malformed_file_fails() {
        let temp_dir = tempfile::tempdir().unwrap();
        let settings_path = temp_dir.path().join("settings.json");
        std::fs::write(&settings_path, "not json").unwrap();

        assert!(ClientSettings::load_from_path(&settings_path).is_err());
    }
}
