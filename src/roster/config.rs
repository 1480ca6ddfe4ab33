use crate::error::{Result, RosterError};
use crate::model::{AgeRange, DEFAULT_MAX_AGE, DEFAULT_MIN_AGE};
use crate::store::fs_backend::DEFAULT_DATA_FILE;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const CONFIG_FILENAME: &str = "config.json";

/// Keys accepted by `roster config`.
pub const CONFIG_KEYS: &[&str] = &["data-file", "min-age", "max-age"];

/// Configuration for roster, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RosterConfig {
    /// File name of the backing file, relative to the data directory
    #[serde(default = "default_data_file")]
    pub data_file: String,

    /// Youngest age accepted without confirmation
    #[serde(default = "default_min_age")]
    pub min_age: i32,

    /// Oldest age accepted without confirmation
    #[serde(default = "default_max_age")]
    pub max_age: i32,
}

fn default_data_file() -> String {
    DEFAULT_DATA_FILE.to_string()
}

fn default_min_age() -> i32 {
    DEFAULT_MIN_AGE
}

fn default_max_age() -> i32 {
    DEFAULT_MAX_AGE
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            min_age: DEFAULT_MIN_AGE,
            max_age: DEFAULT_MAX_AGE,
        }
    }
}

impl RosterConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(RosterError::Io)?;
        let config: RosterConfig =
            serde_json::from_str(&content).map_err(|e| RosterError::Config(e.to_string()))?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(RosterError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(RosterError::Parse)?;
        fs::write(config_path, content).map_err(RosterError::Io)?;
        Ok(())
    }

    pub fn age_range(&self) -> AgeRange {
        AgeRange::new(self.min_age, self.max_age)
    }

    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "data-file" => Ok(self.data_file.clone()),
            "min-age" => Ok(self.min_age.to_string()),
            "max-age" => Ok(self.max_age.to_string()),
            other => Err(unknown_key(other)),
        }
    }

    /// Set `key` to `value`. The config is left unchanged on error.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut next = self.clone();
        match key {
            "data-file" => {
                let value = value.trim();
                if value.is_empty() {
                    return Err(RosterError::Config("data-file cannot be empty".into()));
                }
                next.data_file = value.to_string();
            }
            "min-age" => next.min_age = parse_age_bound(key, value)?,
            "max-age" => next.max_age = parse_age_bound(key, value)?,
            other => return Err(unknown_key(other)),
        }
        if next.min_age > next.max_age {
            return Err(RosterError::Config(format!(
                "min-age ({}) cannot exceed max-age ({})",
                next.min_age, next.max_age
            )));
        }
        *self = next;
        Ok(())
    }

    /// All keys with their current values, in display order.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        CONFIG_KEYS
            .iter()
            .filter_map(|key| self.get(key).ok().map(|value| (*key, value)))
            .collect()
    }
}

fn parse_age_bound(key: &str, value: &str) -> Result<i32> {
    value
        .trim()
        .parse()
        .map_err(|_| RosterError::Config(format!("{} must be a whole number", key)))
}

fn unknown_key(key: &str) -> RosterError {
    RosterError::Config(format!(
        "Unknown config key: {} (expected one of: {})",
        key,
        CONFIG_KEYS.join(", ")
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = RosterConfig::default();
        assert_eq!(config.data_file, "students.json");
        assert_eq!(config.age_range(), AgeRange::new(5, 30));
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = TempDir::new().unwrap();
        let config = RosterConfig::load(temp_dir.path()).unwrap();
        assert_eq!(config, RosterConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("nested");

        let mut config = RosterConfig::default();
        config.set("max-age", "25").unwrap();
        config.save(&nested).unwrap();

        let loaded = RosterConfig::load(&nested).unwrap();
        assert_eq!(loaded.max_age, 25);
    }

    #[test]
    fn test_partial_config_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join(CONFIG_FILENAME),
            r#"{"data_file": "class-9.json"}"#,
        )
        .unwrap();

        let config = RosterConfig::load(temp_dir.path()).unwrap();
        assert_eq!(config.data_file, "class-9.json");
        assert_eq!(config.min_age, 5);
    }

    #[test]
    fn test_set_rejects_unknown_key_and_bad_values() {
        let mut config = RosterConfig::default();
        assert!(matches!(
            config.set("colour", "red"),
            Err(RosterError::Config(_))
        ));
        assert!(config.set("min-age", "five").is_err());
        assert!(config.set("data-file", "  ").is_err());
    }

    #[test]
    fn test_set_rejects_inverted_range() {
        let mut config = RosterConfig::default();
        assert!(config.set("min-age", "40").is_err());
        assert_eq!(config.min_age, 5);
    }

    #[test]
    fn test_entries_lists_every_key() {
        let keys: Vec<_> = RosterConfig::default()
            .entries()
            .into_iter()
            .map(|(k, _)| k)
            .collect();
        assert_eq!(keys, CONFIG_KEYS);
    }
}
