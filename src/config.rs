// Harness configuration and seed data

use crate::record::Record;
use crate::scores::ScoreTable;
use crate::store::RecordStore;
use crate::value::Value;
use eyre::{Context, Result, eyre};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

const CONFIG_DIR: &str = "recordstore";
const CONFIG_FILE: &str = "recordstore.yml";

/// Configuration for the command-line harness
///
/// ```yaml
/// color: true
/// prefix_field: name
/// active_field: active
/// records:
///   - { id: 101, name: Francis, active: true }
/// scores:
///   John: 95
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Colorize section headings
    #[serde(default = "default_color")]
    pub color: bool,

    /// Field the `prefix` command filters on
    #[serde(default = "default_prefix_field")]
    pub prefix_field: String,

    /// Boolean field the `active` command filters on
    #[serde(default = "default_active_field")]
    pub active_field: String,

    /// Records loaded into the store, in order
    #[serde(default)]
    pub records: Vec<Record>,

    /// Scores loaded into the store, in order
    #[serde(default)]
    pub scores: ScoreTable,
}

fn default_color() -> bool {
    true
}

fn default_prefix_field() -> String {
    "name".to_string()
}

fn default_active_field() -> String {
    "active".to_string()
}

impl Default for Config {
    /// Built-in sample data used when no config file is found
    fn default() -> Self {
        let records = [(101, "Francis", true), (102, "Admin", true), (103, "Frank", false)]
            .into_iter()
            .filter_map(|(id, name, active)| {
                Record::new([
                    ("id", Value::from(id)),
                    ("name", Value::from(name)),
                    ("active", Value::from(active)),
                ])
                .ok()
            })
            .collect();

        let scores = [("John", 95), ("Jane", 100), ("Bob", 85)].into_iter().collect();

        Self {
            color: default_color(),
            prefix_field: default_prefix_field(),
            active_field: default_active_field(),
            records,
            scores,
        }
    }
}

impl Config {
    /// Default config location: `<config_dir>/recordstore/recordstore.yml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
    }

    /// Load and validate a config file
    pub fn load(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Config = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        config.validate()?;

        info!(
            path = ?path,
            records = config.records.len(),
            scores = config.scores.len(),
            "Loaded config"
        );
        Ok(config)
    }

    /// Load an explicit path, else the default path if it exists, else built-in samples
    ///
    /// An explicit path that can't be read is an error; a missing default file is not.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        match Self::default_path() {
            Some(path) if path.exists() => Self::load(&path),
            other => {
                debug!(path = ?other, "No config file found, using built-in sample data");
                Ok(Self::default())
            }
        }
    }

    /// Build a fresh store holding the configured records and scores
    pub fn to_store(&self) -> RecordStore {
        RecordStore::with_data(self.records.clone(), self.scores.clone())
    }

    fn validate(&self) -> Result<()> {
        Self::validate_field_name(&self.prefix_field)?;
        Self::validate_field_name(&self.active_field)?;
        Ok(())
    }

    fn validate_field_name(name: &str) -> Result<()> {
        if name.is_empty() {
            return Err(eyre!("Field name cannot be empty"));
        }
        if name.len() > 64 {
            return Err(eyre!("Field name too long: {} (max 64 chars)", name));
        }
        if !name.chars().all(|c| c.is_alphanumeric() || c == '_') {
            return Err(eyre!("Invalid field name: {} (must be alphanumeric with _)", name));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_sample_data() {
        let config = Config::default();
        assert!(config.color);
        assert_eq!(config.prefix_field, "name");
        assert_eq!(config.active_field, "active");
        assert_eq!(config.records.len(), 3);
        assert_eq!(config.scores.get("Jane"), Some(100));
    }

    #[test]
    fn test_load_yaml() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("recordstore.yml");
        fs::write(
            &path,
            r#"
color: false
prefix_field: title
records:
  - { id: 1, title: Django, active: true }
  - { id: 2, title: Spring, active: false }
scores:
  John: 95
  Jane: 100
"#,
        )
        .unwrap();

        let config = Config::load(&path).unwrap();
        assert!(!config.color);
        assert_eq!(config.prefix_field, "title");
        assert_eq!(config.active_field, "active");
        assert_eq!(config.records.len(), 2);
        assert_eq!(config.records[0].get("title"), Some(&Value::from("Django")));
        assert_eq!(config.records[1].get("active"), Some(&Value::from(false)));

        let keys: Vec<&str> = config.scores.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["John", "Jane"]);
    }

    #[test]
    fn test_load_missing_sections_are_empty() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("recordstore.yml");
        fs::write(&path, "color: true\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert!(config.records.is_empty());
        assert!(config.scores.is_empty());
    }

    #[test]
    fn test_load_rejects_empty_record() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("recordstore.yml");
        fs::write(&path, "records:\n  - {}\n").unwrap();

        assert!(Config::load(&path).is_err());
    }

    #[test]
    fn test_load_rejects_invalid_field_name() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("recordstore.yml");
        fs::write(&path, "active_field: \"is-active\"\n").unwrap();

        let err = Config::load(&path).unwrap_err();
        assert!(err.to_string().contains("Invalid field name"));
    }

    #[test]
    fn test_resolve_explicit_missing_file_errors() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("absent.yml");
        assert!(Config::resolve(Some(&path)).is_err());
    }

    #[test]
    fn test_to_store() {
        let config = Config::default();
        let store = config.to_store();

        assert_eq!(store.len(), 3);
        assert_eq!(store.score_get("Bob"), Some(85));
        assert!(!store.contains_key("Admin"));
    }

    #[test]
    fn test_validation_field_name() {
        assert!(Config::validate_field_name("valid_field").is_ok());

        assert!(Config::validate_field_name("invalid-field").is_err());
        assert!(Config::validate_field_name("").is_err());
        assert!(Config::validate_field_name(&"a".repeat(65)).is_err());
    }
}
