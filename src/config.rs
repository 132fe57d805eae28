//! Configuration for multi-value elements

use crate::error::{ElementError, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Site-wide settings applied to every multi-value element
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MultiValueConfig {
    /// Label of the add-more trigger
    pub add_more_label: String,
    /// Ordering weight of the per-row ordering control
    pub weight_order: i32,
    /// Suffix of the path-derived wrapper container id
    pub wrapper_suffix: String,
    /// Effect the transport applies when splicing the update
    pub ajax_effect: String,
}

impl Default for MultiValueConfig {
    fn default() -> Self {
        Self {
            add_more_label: "Add another item".to_string(),
            weight_order: 100,
            wrapper_suffix: "add-more-wrapper".to_string(),
            ajax_effect: "fade".to_string(),
        }
    }
}

impl MultiValueConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("org", "multivalue", "multivalue-form")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from the platform config directory
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a file, defaults if it doesn't exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).map_err(|source| ElementError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ElementError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Save configuration to a file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let io_err = |source: std::io::Error| ElementError::ConfigIo {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        let content = serde_json::to_string_pretty(self).map_err(|source| {
            ElementError::ConfigParse {
                path: path.to_path_buf(),
                source,
            }
        })?;
        fs::write(path, content).map_err(io_err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = MultiValueConfig::default();
        assert_eq!(config.add_more_label, "Add another item");
        assert_eq!(config.weight_order, 100);
        assert_eq!(config.wrapper_suffix, "add-more-wrapper");
        assert_eq!(config.ajax_effect, "fade");
    }

    #[test]
    fn test_partial_deserialization() {
        let json = r#"{"add_more_label": "Add row"}"#;
        let parsed: MultiValueConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.add_more_label, "Add row");
        assert_eq!(parsed.weight_order, 100);
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Unknown fields are ignored
        let json = r#"{"ajax_effect": "slide", "unknown_field": "value"}"#;
        let parsed: MultiValueConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.ajax_effect, "slide");
    }

    #[test]
    fn test_load_from_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = MultiValueConfig::load_from(&dir.path().join("config.json")).unwrap();
        assert_eq!(config, MultiValueConfig::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let config = MultiValueConfig {
            add_more_label: "Add link".to_string(),
            weight_order: 50,
            ..Default::default()
        };
        config.save_to(&path).unwrap();
        assert_eq!(MultiValueConfig::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_load_from_invalid_json_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{not json").unwrap();
        let err = MultiValueConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, ElementError::ConfigParse { .. }));
    }

    #[test]
    fn test_load_returns_ok() {
        // Falls back to defaults when no config file exists
        assert!(MultiValueConfig::load().is_ok());
    }
}
