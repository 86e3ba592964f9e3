//! Configuration schema definitions.
//!
//! This module defines the configuration structure that is deserialized from
//! `config.yaml` in the data directory.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Main configuration structure.
///
/// Every field is optional so that sources can be layered; unset fields fall
/// back to the built-in defaults.
///
/// # Examples
///
/// ```
/// use staybook::config::{Config, LookupStrategy};
///
/// let config = Config {
///     lookup: Some(LookupStrategy::AllMatches),
///     ..Default::default()
/// };
/// assert_eq!(config.lookup_strategy(), LookupStrategy::AllMatches);
/// assert_eq!(Config::default().lookup_strategy(), LookupStrategy::FirstMatch);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// How the validator looks up existing bookings.
    pub lookup: Option<LookupStrategy>,

    /// Maximum time to wait for the database write lock, in seconds.
    pub maximum_lock_wait_seconds: Option<u64>,

    /// Disable automatic database initialization.
    pub disable_autoinit: Option<bool>,
}

impl Config {
    /// Returns the configured lookup strategy or the default.
    #[must_use]
    pub fn lookup_strategy(&self) -> LookupStrategy {
        self.lookup.unwrap_or_default()
    }

    /// Returns whether automatic initialization is disabled (default: false).
    #[must_use]
    pub fn autoinit_disabled(&self) -> bool {
        self.disable_autoinit.unwrap_or(false)
    }
}

/// How each conflict rule fetches existing bookings.
///
/// `FirstMatch` checks only the first matching booking in the store's default
/// ordering. `AllMatches` checks every matching booking and denies if any of
/// them overlaps the candidate.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum LookupStrategy {
    /// Compare against the first matching booking only.
    #[default]
    FirstMatch,
    /// Compare against every matching booking.
    AllMatches,
}

impl LookupStrategy {
    /// Returns the configuration spelling of this strategy.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FirstMatch => "first-match",
            Self::AllMatches => "all-matches",
        }
    }
}

impl fmt::Display for LookupStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LookupStrategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "first-match" => Ok(Self::FirstMatch),
            "all-matches" => Ok(Self::AllMatches),
            other => Err(Error::Validation {
                field: "lookup".into(),
                message: format!(
                    "Invalid lookup strategy: '{other}' (expected first-match or all-matches)"
                ),
            }),
        }
    }
}
