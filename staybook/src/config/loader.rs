//! Configuration file loading.
//!
//! The only file source is `config.yaml` inside the data directory.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::schema::Config;
use crate::error::{Error, Result};

/// Name of the configuration file inside the data directory.
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// A configuration loaded from a file, with its origin.
#[derive(Debug, Clone)]
pub struct ConfigSource {
    /// Path the configuration was read from.
    pub path: PathBuf,
    /// The parsed configuration.
    pub config: Config,
}

/// Loads configuration files from disk.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads `config.yaml` from the data directory, if it exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_from_data_dir(data_dir: &Path) -> Result<Option<ConfigSource>> {
        let path = data_dir.join(CONFIG_FILE_NAME);
        if !path.exists() {
            log::debug!("no configuration file at {}", path.display());
            return Ok(None);
        }

        let config = Self::load_file(&path)?;
        log::debug!("loaded configuration from {}", path.display());
        Ok(Some(ConfigSource { path, config }))
    }

    /// Load and parse a YAML configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the YAML is invalid.
    pub fn load_file(path: &Path) -> Result<Config> {
        let contents = fs::read_to_string(path)?;

        // An empty or comment-only file deserializes to unit, not a mapping
        if contents.lines().all(|line| {
            let line = line.trim();
            line.is_empty() || line.starts_with('#')
        }) {
            return Ok(Config::default());
        }

        serde_yaml::from_str(&contents).map_err(|e| Error::Validation {
            field: format!("{}", path.display()),
            message: format!("Invalid YAML: {e}"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LookupStrategy;
    use tempfile::TempDir;

    #[test]
    fn test_load_nonexistent_file() {
        let result = ConfigLoader::load_file(Path::new("/nonexistent/path/config.yaml"));
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn test_load_invalid_yaml() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("bad.yaml");
        fs::write(&config_path, "invalid: yaml: syntax:").unwrap();

        let result = ConfigLoader::load_file(&config_path);
        assert!(matches!(result, Err(Error::Validation { .. })));
    }

    #[test]
    fn test_load_valid_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");
        fs::write(&config_path, "lookup: all-matches\n").unwrap();

        let config = ConfigLoader::load_file(&config_path).unwrap();
        assert_eq!(config.lookup, Some(LookupStrategy::AllMatches));
    }

    #[test]
    fn test_comment_only_file_is_default() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");
        fs::write(&config_path, "# lookup: all-matches\n\n").unwrap();

        let config = ConfigLoader::load_file(&config_path).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_missing_data_dir_config() {
        let temp_dir = TempDir::new().unwrap();
        assert!(ConfigLoader::load_from_data_dir(temp_dir.path())
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_data_dir_config_found() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join(CONFIG_FILE_NAME),
            "maximum_lock_wait_seconds: 3\n",
        )
        .unwrap();

        let source = ConfigLoader::load_from_data_dir(temp_dir.path())
            .unwrap()
            .unwrap();
        assert_eq!(source.config.maximum_lock_wait_seconds, Some(3));
        assert!(source.path.ends_with(CONFIG_FILE_NAME));
    }
}
