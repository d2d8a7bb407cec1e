//! CLI configuration file support
//!
//! Loads configuration from ~/.rollchat/config.toml (override the directory
//! with ROLLCHAT_DIR). Missing or unreadable files fall back to defaults.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::paths;

/// CLI configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// Default settings
    #[serde(default)]
    pub default: DefaultConfig,
    /// API key settings
    #[serde(default)]
    pub api_keys: ApiKeysConfig,
}

/// Default configuration values
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DefaultConfig {
    /// Primary chat model
    pub model: Option<String>,
    /// Summarization model
    pub summary_model: Option<String>,
    /// Turns kept verbatim after each summarization pass
    pub max_recent_turns: Option<usize>,
}

/// API key configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiKeysConfig {
    /// Gemini API key
    pub gemini: Option<String>,
}

impl CliConfig {
    /// Load configuration from the default path
    pub fn load() -> Self {
        Self::load_from_path(paths::config_path().ok())
    }

    /// Load configuration from a specific path
    pub fn load_from_path(path: Option<PathBuf>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };

        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(&path) {
            Ok(content) => toml::from_str(&content).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = CliConfig::load_from_path(Some(PathBuf::from("/nonexistent/config.toml")));
        assert!(config.default.model.is_none());
        assert!(config.api_keys.gemini.is_none());
    }

    #[test]
    fn parses_models_and_api_key() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
[default]
model = "gemini-2.5-pro"
max_recent_turns = 5

[api_keys]
gemini = "key-from-file"
"#,
        )
        .unwrap();

        let config = CliConfig::load_from_path(Some(path));
        assert_eq!(config.default.model.as_deref(), Some("gemini-2.5-pro"));
        assert_eq!(config.default.max_recent_turns, Some(5));
        assert_eq!(config.api_keys.gemini.as_deref(), Some("key-from-file"));
    }

    #[test]
    fn malformed_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "not valid toml [[").unwrap();

        let config = CliConfig::load_from_path(Some(path));
        assert!(config.default.model.is_none());
    }
}
