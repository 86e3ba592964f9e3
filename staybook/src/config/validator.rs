//! Configuration validation.

use crate::config::schema::Config;
use crate::error::{Error, Result};

/// Validates a merged configuration.
///
/// # Examples
///
/// ```
/// use staybook::config::{Config, ConfigValidator};
///
/// ConfigValidator::validate(&Config::default()).unwrap();
///
/// let zero_wait = Config {
///     maximum_lock_wait_seconds: Some(0),
///     ..Default::default()
/// };
/// assert!(ConfigValidator::validate(&zero_wait).is_err());
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns a validation error if `maximum_lock_wait_seconds` is zero.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(timeout) = config.maximum_lock_wait_seconds {
            if timeout == 0 {
                return Err(Error::Validation {
                    field: "maximum_lock_wait_seconds".into(),
                    message: "Timeout must be greater than 0".into(),
                });
            }
        }

        Ok(())
    }
}
