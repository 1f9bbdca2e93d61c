//! CLI configuration file.
//!
//! Operational defaults are read from a TOML file (`composer.toml` by
//! default). A missing file falls back to built-in defaults; a present
//! but malformed file is an error.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Operational defaults for CLI commands.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Default simulation seed; unseeded when absent.
    pub seed: Option<u64>,
    /// Default output format (`table` or `json`).
    pub format: Option<String>,
}

impl CliConfig {
    /// Loads the configuration from `path`, falling back to defaults
    /// when the file does not exist.
    pub fn load(path: &str) -> Result<CliConfig> {
        if !Path::new(path).exists() {
            return Ok(CliConfig::default());
        }
        let raw = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&raw)?)
    }

    /// Resolved output format, defaulting to `table`.
    pub fn format(&self) -> &str {
        self.format.as_deref().unwrap_or("table")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_yields_defaults() {
        let config = CliConfig::load("definitely-not-here.toml").unwrap();
        assert_eq!(config, CliConfig::default());
        assert_eq!(config.format(), "table");
    }

    #[test]
    fn test_parse_full_config() {
        let config: CliConfig = toml::from_str("seed = 42\nformat = \"json\"").unwrap();
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.format(), "json");
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: CliConfig = toml::from_str("seed = 7").unwrap();
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.format(), "table");
    }
}
