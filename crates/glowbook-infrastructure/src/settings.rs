//! API configuration loading.
//!
//! The config file wins over the environment: `config.toml` under the
//! Glowbook config directory is consulted first, then the
//! `GLOWBOOK_API_URL` variable. Absent both, the client runs in mock
//! mode.

use crate::paths::GlowbookPaths;
use glowbook_core::Result;
use glowbook_core::config::ApiConfig;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Environment variable consulted when no config file sets a base URL.
pub const API_URL_ENV: &str = "GLOWBOOK_API_URL";

#[derive(Debug, Default, Deserialize)]
struct SettingsFile {
    #[serde(default)]
    api: ApiSection,
}

#[derive(Debug, Default, Deserialize)]
struct ApiSection {
    base_url: Option<String>,
}

/// Loads the API configuration from the platform-standard location.
pub fn load_api_config() -> Result<ApiConfig> {
    let path = GlowbookPaths::config_file()?;
    load_api_config_from(&path)
}

/// Loads the API configuration, reading the given config file path.
pub fn load_api_config_from(path: &Path) -> Result<ApiConfig> {
    let file_url = if path.exists() {
        let content = fs::read_to_string(path)?;
        let parsed: SettingsFile = toml::from_str(&content)?;
        parsed.api.base_url
    } else {
        None
    };

    let env_url = std::env::var(API_URL_ENV).ok();
    Ok(resolve(file_url, env_url))
}

/// Applies the file-over-env priority, discarding empty values.
fn resolve(file_url: Option<String>, env_url: Option<String>) -> ApiConfig {
    let base_url = file_url
        .filter(|url| !url.trim().is_empty())
        .or_else(|| env_url.filter(|url| !url.trim().is_empty()));
    ApiConfig::new(base_url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glowbook_core::config::ApiMode;
    use tempfile::TempDir;

    #[test]
    fn test_file_url_wins_over_env() {
        let config = resolve(
            Some("https://api.glowbook.example".to_string()),
            Some("https://other.example".to_string()),
        );
        assert_eq!(
            config.base_url.as_deref(),
            Some("https://api.glowbook.example")
        );
    }

    #[test]
    fn test_env_fills_in_when_file_silent() {
        let config = resolve(None, Some("https://other.example".to_string()));
        assert_eq!(config.base_url.as_deref(), Some("https://other.example"));
    }

    #[test]
    fn test_empty_values_are_ignored() {
        let config = resolve(Some("  ".to_string()), Some(String::new()));
        assert_eq!(config.base_url, None);
        assert_eq!(config.mode(), ApiMode::Mock);
    }

    #[test]
    fn test_reads_base_url_from_toml() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "[api]\nbase_url = \"https://api.glowbook.example\"\n",
        )
        .unwrap();

        let config = load_api_config_from(&path).unwrap();
        assert_eq!(
            config.base_url.as_deref(),
            Some("https://api.glowbook.example")
        );
        assert_eq!(config.mode(), ApiMode::Remote);
    }

    #[test]
    fn test_file_without_api_section_is_tolerated() {
        let parsed: SettingsFile = toml::from_str("# nothing configured yet\n").unwrap();
        assert!(parsed.api.base_url.is_none());
    }
}
