//! Application configuration loaded from a TOML file.
//!
//! ```toml
//! [validation]
//! allow_self_loops = false
//! allow_duplicate_names = true
//! require_finite_values = true
//!
//! [output]
//! pretty = true
//! ```
//!
//! Every key is optional; missing keys take their defaults.

use std::fs;
use std::path::Path;

use log::debug;
use serde::Deserialize;

use crate::error::{GraphError, Result};
use crate::graph::ValidationConfig;

/// Top-level configuration for the `nodelink` binary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AppConfig {
    /// Validation rules section
    #[serde(default)]
    pub validation: ValidationConfig,

    /// Encoding section
    #[serde(default)]
    pub output: OutputConfig,
}

/// Encoding options for written graphs.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Indent written JSON.
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { pretty: true }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| GraphError::Config {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let config = Self::from_toml(&content).map_err(|message| GraphError::Config {
            path: path.display().to_string(),
            message,
        })?;
        debug!("loaded configuration from {}", path.display());
        Ok(config)
    }

    fn from_toml(content: &str) -> std::result::Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_empty_is_default() {
        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert!(config.output.pretty);
        assert!(config.validation.allow_self_loops);
    }

    #[test]
    fn test_partial_sections() {
        let config = AppConfig::from_toml("[validation]\nallow_self_loops = false\n").unwrap();
        assert!(!config.validation.allow_self_loops);
        assert!(config.validation.require_finite_values);
        assert!(config.output.pretty);
    }

    #[test]
    fn test_bad_type_reported() {
        assert!(AppConfig::from_toml("[output]\npretty = \"yes\"\n").is_err());
    }

    #[test]
    fn test_load_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[output]\npretty = false").unwrap();
        let config = AppConfig::load(file.path()).unwrap();
        assert!(!config.output.pretty);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = AppConfig::load(dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, GraphError::Config { .. }));
    }
}
