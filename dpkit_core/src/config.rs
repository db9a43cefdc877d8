//! Configuration file support for dpkit.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/dpkit/config.toml`.

use crate::morse::TableMode;
use crate::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub morse: MorseConfig,
}

/// Defaults for the `morse-count` tool
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MorseConfig {
    /// Table mode name, resolved lazily so a bad value is reported as a
    /// configuration error only when it is actually used
    #[serde(default = "default_mode")]
    pub mode: String,

    #[serde(default)]
    pub verbose: bool,
}

impl Default for MorseConfig {
    fn default() -> Self {
        Self {
            mode: default_mode(),
            verbose: false,
        }
    }
}

impl MorseConfig {
    /// Resolve the configured mode name into a [`TableMode`]
    pub fn table_mode(&self) -> Result<TableMode> {
        self.mode.parse()
    }
}

fn default_mode() -> String {
    TableMode::default().name().to_string()
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path();
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::info!(
                "No config file found at {:?}, using defaults",
                config_path
            );
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> PathBuf {
        let base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        base.join("dpkit").join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.morse.mode, "BASIC_PLUS_CEDILLA");
        assert!(!config.morse.verbose);
        assert_eq!(
            config.morse.table_mode().unwrap(),
            TableMode::BasicPlusCedilla
        );
    }

    #[test]
    fn test_config_roundtrip_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.morse.mode = "FULL".into();
        config.morse.verbose = true;
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, toml::to_string_pretty(&config).unwrap()).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.morse.table_mode().unwrap(), TableMode::Full);
        assert!(loaded.morse.verbose);
    }

    #[test]
    fn test_partial_config() {
        let toml_str = r#"
[morse]
verbose = true
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert!(config.morse.verbose);
        assert_eq!(config.morse.mode, "BASIC_PLUS_CEDILLA"); // default
    }

    #[test]
    fn test_bad_mode_is_config_error() {
        let toml_str = r#"
[morse]
mode = "KLINGON"
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        let err = config.morse.table_mode().unwrap_err();
        assert!(matches!(err, Error::Config(ref msg) if msg.contains("KLINGON")));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load_from(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
