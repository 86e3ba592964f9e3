//! Layered configuration construction.

use std::path::{Path, PathBuf};

use crate::config::environment::EnvironmentConfig;
use crate::config::loader::ConfigLoader;
use crate::config::merger::ConfigMerger;
use crate::config::schema::Config;
use crate::config::validator::ConfigValidator;
use crate::database::default_data_dir;
use crate::error::Result;

/// Builds a [`Config`] from defaults, the data directory's `config.yaml`,
/// `STAYBOOK_*` environment variables and programmatic overrides, in
/// increasing order of precedence.
///
/// # Examples
///
/// ```
/// use staybook::config::{Config, ConfigBuilder, LookupStrategy};
///
/// let config = ConfigBuilder::new()
///     .skip_files()
///     .skip_env()
///     .with_config(Config {
///         lookup: Some(LookupStrategy::AllMatches),
///         ..Default::default()
///     })
///     .build()
///     .unwrap();
///
/// assert_eq!(config.lookup_strategy(), LookupStrategy::AllMatches);
/// ```
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    data_dir: Option<PathBuf>,
    skip_files: bool,
    skip_env: bool,
    overrides: Option<Config>,
}

impl ConfigBuilder {
    /// Creates a builder that reads every source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads `config.yaml` from `data_dir` instead of the default data directory.
    #[must_use]
    pub fn with_data_dir(mut self, data_dir: &Path) -> Self {
        self.data_dir = Some(data_dir.to_path_buf());
        self
    }

    /// Skips configuration files.
    #[must_use]
    pub fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Skips environment variables.
    #[must_use]
    pub fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Applies `config` on top of every other source.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.overrides = Some(config);
        self
    }

    /// Merges the sources and validates the result.
    ///
    /// # Errors
    ///
    /// Returns an error if a source cannot be read or parsed, or if the merged
    /// configuration is invalid.
    pub fn build(self) -> Result<Config> {
        let mut config = Config::default();

        if !self.skip_files {
            let data_dir = match self.data_dir {
                Some(dir) => Some(dir),
                None => default_data_dir().ok(),
            };
            if let Some(dir) = data_dir {
                if let Some(source) = ConfigLoader::load_from_data_dir(&dir)? {
                    ConfigMerger::merge_into(&mut config, &source.config);
                }
            }
        }

        if !self.skip_env {
            EnvironmentConfig::apply_overrides(&mut config)?;
        }

        if let Some(overrides) = &self.overrides {
            ConfigMerger::merge_into(&mut config, overrides);
        }

        ConfigValidator::validate(&config)?;
        Ok(config)
    }
}
