//! Configuration for the operations layer.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tcomment_translator::{ThrowsMode, TranslatorConfig};

use crate::error::{OpsError, OpsResult};

/// Keys accepted by [`Config::get`] and [`Config::set`].
pub const CONFIG_KEYS: [&str; 3] = ["throws_mode", "workers", "output_dir"];

/// Configuration for tComment operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// How `@throws` comments naming several parameters are translated.
    #[serde(default)]
    pub throws_mode: ThrowsMode,

    /// Number of blocking tasks used to translate a batch of methods.
    #[serde(default = "default_workers")]
    pub workers: usize,

    /// Directory for outputs written without an explicit path.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

fn default_workers() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(4)
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            throws_mode: ThrowsMode::default(),
            workers: default_workers(),
            output_dir: default_output_dir(),
        }
    }
}

impl Config {
    /// Load configuration from disk with environment overrides.
    ///
    /// A `.env` file in the working directory is honored when present.
    pub fn load() -> OpsResult<Self> {
        let mut config = Self::load_file()?;

        if let Ok(mode) = std::env::var("TCOMMENT_THROWS_MODE") {
            config.set("throws_mode", &mode)?;
        }
        if let Ok(workers) = std::env::var("TCOMMENT_WORKERS") {
            config.set("workers", &workers)?;
        }
        if let Ok(output_dir) = std::env::var("TCOMMENT_OUTPUT_DIR") {
            config.set("output_dir", &output_dir)?;
        }

        Ok(config)
    }

    /// Load only what is stored in the config file, without environment
    /// overrides. This is the view that [`Config::save`] should write back.
    ///
    /// A `.env` file may still point `TCOMMENT_CONFIG_FILE` elsewhere.
    pub fn load_file() -> OpsResult<Self> {
        let _ = dotenvy::dotenv();

        match Self::config_file_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load the config file at `path`, or defaults when it does not exist.
    pub fn load_from(path: &Path) -> OpsResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)?;
        serde_json::from_str(&contents)
            .map_err(|e| OpsError::Config(format!("Failed to parse {}: {}", path.display(), e)))
    }

    /// Save configuration to disk.
    pub fn save(&self) -> OpsResult<()> {
        if let Some(path) = Self::config_file_path() {
            self.save_to(&path)?;
        }
        Ok(())
    }

    /// Save configuration to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> OpsResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Get the path to the configuration file.
    ///
    /// `TCOMMENT_CONFIG_FILE` replaces the platform location.
    pub fn config_file_path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var("TCOMMENT_CONFIG_FILE") {
            return Some(PathBuf::from(path));
        }
        ProjectDirs::from("dev", "tcomment", "tcomment")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Translator settings derived from this configuration.
    pub fn translator_config(&self) -> TranslatorConfig {
        TranslatorConfig::default().with_throws_mode(self.throws_mode)
    }

    /// Get a configuration value by key.
    pub fn get(&self, key: &str) -> Option<String> {
        match normalize_key(key).as_str() {
            "throws_mode" => Some(self.throws_mode.to_string()),
            "workers" => Some(self.workers.to_string()),
            "output_dir" => Some(self.output_dir.display().to_string()),
            _ => None,
        }
    }

    /// Set a configuration value by key.
    pub fn set(&mut self, key: &str, value: &str) -> OpsResult<()> {
        match normalize_key(key).as_str() {
            "throws_mode" => {
                self.throws_mode = value.parse()?;
            }
            "workers" => {
                self.workers = value
                    .trim()
                    .parse()
                    .map_err(|_| OpsError::Config(format!("Invalid number: {}", value)))?;
            }
            "output_dir" => {
                self.output_dir = PathBuf::from(value);
            }
            _ => {
                return Err(OpsError::Config(format!(
                    "Unknown config key: {}. Valid keys: {}",
                    key,
                    CONFIG_KEYS.join(", ")
                )));
            }
        }
        Ok(())
    }
}

/// Accept `throws-mode` as well as `throws_mode`.
fn normalize_key(key: &str) -> String {
    key.trim().replace('-', "_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.throws_mode, ThrowsMode::All);
        assert!(config.workers >= 1);
        assert_eq!(config.output_dir, PathBuf::from("."));
    }

    #[test]
    fn test_get_set_round_trip() {
        let mut config = Config::default();
        config.set("throws-mode", "gated").unwrap();
        config.set("workers", "3").unwrap();
        config.set("output_dir", "/tmp/specs").unwrap();

        assert_eq!(config.get("throws_mode").as_deref(), Some("gated"));
        assert_eq!(config.get("workers").as_deref(), Some("3"));
        assert_eq!(config.get("output-dir").as_deref(), Some("/tmp/specs"));
        assert_eq!(config.translator_config().throws_mode, ThrowsMode::Gated);
    }

    #[test]
    fn test_set_rejects_bad_values() {
        let mut config = Config::default();
        assert!(matches!(config.set("workers", "many"), Err(OpsError::Config(_))));
        assert!(matches!(config.set("throws_mode", "maybe"), Err(OpsError::Config(_))));
        assert!(matches!(config.set("colour", "red"), Err(OpsError::Config(_))));
        assert!(config.get("colour").is_none());
    }

    #[test]
    fn test_save_and_load_from_file() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("nested/config.json");

        let mut config = Config::default();
        config.set("throws_mode", "gated").unwrap();
        config.set("workers", "7").unwrap();
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(
            Config::load_from(&temp.path().join("missing.json")).unwrap(),
            Config::default()
        );
    }

    #[test]
    fn test_load_from_rejects_malformed_file() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("config.json");
        std::fs::write(&path, "{ nope").unwrap();
        assert!(matches!(Config::load_from(&path), Err(OpsError::Config(_))));
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config: Config = serde_json::from_str(r#"{"throws_mode": "gated"}"#).unwrap();
        assert_eq!(config.throws_mode, ThrowsMode::Gated);
        assert_eq!(config.output_dir, PathBuf::from("."));
    }
}
