//! Configuration merging and precedence handling.

use crate::config::schema::Config;

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use staybook::config::{Config, ConfigMerger, LookupStrategy};
///
/// let mut result = Config {
///     maximum_lock_wait_seconds: Some(5),
///     ..Default::default()
/// };
/// let high = Config {
///     lookup: Some(LookupStrategy::AllMatches),
///     ..Default::default()
/// };
///
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.lookup, Some(LookupStrategy::AllMatches));
/// assert_eq!(result.maximum_lock_wait_seconds, Some(5));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge source config into target (source overwrites target).
    ///
    /// Fields that are `None` in `source` leave `target` unchanged.
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.lookup.is_some() {
            target.lookup = source.lookup;
        }

        if source.maximum_lock_wait_seconds.is_some() {
            target.maximum_lock_wait_seconds = source.maximum_lock_wait_seconds;
        }

        if source.disable_autoinit.is_some() {
            target.disable_autoinit = source.disable_autoinit;
        }
    }
}
