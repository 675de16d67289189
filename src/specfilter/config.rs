use crate::error::{Result, SpecFilterError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";

/// Keys accepted by [`SpecFilterConfig::get`] and [`SpecFilterConfig::set`].
pub const CONFIG_KEYS: &[&str] = &["catalog", "color"];

/// Configuration for specfilter, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SpecFilterConfig {
    /// Catalog file used when `--catalog` is not given
    #[serde(default)]
    pub catalog: Option<PathBuf>,

    /// Colorize text output
    #[serde(default = "default_color")]
    pub color: bool,
}

fn default_color() -> bool {
    true
}

impl Default for SpecFilterConfig {
    fn default() -> Self {
        Self {
            catalog: None,
            color: default_color(),
        }
    }
}

impl SpecFilterConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: SpecFilterConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_path, content)?;
        Ok(())
    }

    /// Display value of a key, `None` if the key is unknown.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "catalog" => Some(
                self.catalog
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "(built-in)".to_string()),
            ),
            "color" => Some(self.color.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "catalog" => {
                self.catalog = match value {
                    "" | "none" | "builtin" => None,
                    path => Some(PathBuf::from(path)),
                };
                Ok(())
            }
            "color" => {
                self.color = match value {
                    "true" | "on" | "yes" => true,
                    "false" | "off" | "no" => false,
                    other => {
                        return Err(SpecFilterError::Config(format!(
                            "color expects true or false, got '{}'",
                            other
                        )))
                    }
                };
                Ok(())
            }
            other => Err(SpecFilterError::Config(format!(
                "Unknown config key: {}",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SpecFilterConfig::default();
        assert_eq!(config.catalog, None);
        assert!(config.color);
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = SpecFilterConfig::load(temp_dir.path()).unwrap();
        assert_eq!(config, SpecFilterConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = tempfile::tempdir().unwrap();
        let dir = temp_dir.path().join("nested");

        let mut config = SpecFilterConfig::default();
        config.set("catalog", "/tmp/products.json").unwrap();
        config.set("color", "off").unwrap();
        config.save(&dir).unwrap();

        let loaded = SpecFilterConfig::load(&dir).unwrap();
        assert_eq!(loaded.catalog, Some(PathBuf::from("/tmp/products.json")));
        assert!(!loaded.color);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILENAME), "{}").unwrap();

        let config = SpecFilterConfig::load(temp_dir.path()).unwrap();
        assert_eq!(config, SpecFilterConfig::default());
    }

    #[test]
    fn test_get_known_and_unknown_keys() {
        let config = SpecFilterConfig::default();
        assert_eq!(config.get("catalog").as_deref(), Some("(built-in)"));
        assert_eq!(config.get("color").as_deref(), Some("true"));
        assert_eq!(config.get("theme"), None);
    }

    #[test]
    fn test_set_rejects_bad_input() {
        let mut config = SpecFilterConfig::default();
        assert!(config.set("color", "maybe").is_err());
        assert!(config.set("theme", "dark").is_err());
    }

    #[test]
    fn test_catalog_reset_to_builtin() {
        let mut config = SpecFilterConfig::default();
        config.set("catalog", "items.json").unwrap();
        config.set("catalog", "none").unwrap();
        assert_eq!(config.catalog, None);
    }
}
