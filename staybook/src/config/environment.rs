//! Environment variable handling for configuration overrides.
//!
//! This module provides support for `STAYBOOK_*` environment variables that
//! override configuration file values.

use std::env;

use crate::config::schema::Config;
use crate::error::{Error, Result};

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use staybook::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// # Errors
    ///
    /// Returns an error if any environment variable value is invalid
    /// (e.g., unknown lookup strategy, non-numeric timeout, invalid boolean).
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        // STAYBOOK_LOOKUP
        if let Ok(lookup) = env::var("STAYBOOK_LOOKUP") {
            config.lookup = Some(lookup.parse()?);
        }

        // STAYBOOK_MAXIMUM_LOCK_WAIT_SECONDS
        if let Ok(seconds) = env::var("STAYBOOK_MAXIMUM_LOCK_WAIT_SECONDS") {
            config.maximum_lock_wait_seconds =
                Some(seconds.trim().parse().map_err(|_| Error::Validation {
                    field: "STAYBOOK_MAXIMUM_LOCK_WAIT_SECONDS".into(),
                    message: format!("Invalid number of seconds: '{seconds}'"),
                })?);
        }

        // STAYBOOK_DISABLE_AUTOINIT
        if let Ok(val) = env::var("STAYBOOK_DISABLE_AUTOINIT") {
            config.disable_autoinit = Some(Self::parse_bool("STAYBOOK_DISABLE_AUTOINIT", &val)?);
        }

        Ok(())
    }

    /// Parse a boolean from common string spellings.
    fn parse_bool(field: &str, s: &str) -> Result<bool> {
        match s.to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!(
                    "Invalid boolean value: '{s}' (expected true/false/1/0/yes/no/on/off)"
                ),
            }),
        }
    }
}
