//! TOML-backed run configuration
//!
//! Thresholds and run behavior can be supplied in a small TOML file:
//!
//! ```toml
//! keep_going = true
//!
//! [thresholds]
//! red = 12
//! green = 13
//! blue = 14
//! ```
//!
//! Missing fields fall back to defaults, so a partial file is fine.
use crate::evaluation::threshold::CubePredicate;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("Failed to read config file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

/// Run configuration loaded from file, CLI flags, or defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Per-color validity thresholds
    pub thresholds: CubePredicate,

    /// Skip failing lines instead of aborting the run
    pub keep_going: bool,
}

impl RunConfig {
    /// Load configuration from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let path_display = path.as_ref().display().to_string();

        let content = std::fs::read_to_string(&path).map_err(|source| SettingsError::Io {
            path: path_display.clone(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| SettingsError::Parse {
            path: path_display,
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = RunConfig::default();
        assert_eq!(config.thresholds.red, 12);
        assert_eq!(config.thresholds.green, 13);
        assert_eq!(config.thresholds.blue, 14);
        assert!(!config.keep_going);
    }

    #[test]
    fn test_load_full_config() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "keep_going = true").unwrap();
        writeln!(file, "[thresholds]").unwrap();
        writeln!(file, "red = 5").unwrap();
        writeln!(file, "green = 6").unwrap();
        writeln!(file, "blue = 7").unwrap();

        let config = RunConfig::load(file.path()).unwrap();
        assert!(config.keep_going);
        assert_eq!(config.thresholds.red, 5);
        assert_eq!(config.thresholds.green, 6);
        assert_eq!(config.thresholds.blue, 7);
    }

    #[test]
    fn test_load_partial_config_uses_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "keep_going = true").unwrap();

        let config = RunConfig::load(file.path()).unwrap();
        assert!(config.keep_going);
        assert_eq!(config.thresholds.red, 12);
    }

    #[test]
    fn test_load_missing_file() {
        let result = RunConfig::load("/nonexistent/cubelog.toml");
        assert_matches!(result, Err(SettingsError::Io { .. }));
    }

    #[test]
    fn test_load_invalid_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "keep_going = maybe").unwrap();

        let result = RunConfig::load(file.path());
        assert_matches!(result, Err(SettingsError::Parse { .. }));
    }
}
