//! Plumbing shared by the subcommands: locating the data directory, loading
//! configuration, opening the database and printing results.

use crate::error::CliError;
use staybook::database::{default_data_dir, DATABASE_FILE_NAME};
use staybook::{
    Booking, Config, ConfigBuilder, Database, DatabaseConfig, ExecutionResult, LookupStrategy,
};
use std::path::PathBuf;
use std::time::Duration;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Suppress non-essential output.
    pub quiet: bool,

    /// Override the data directory location.
    pub data_dir: Option<PathBuf>,

    /// Override the default busy timeout (in seconds).
    pub busy_timeout: Option<u32>,

    /// Disable automatic database initialization.
    pub disable_autoinit: bool,

    /// Override the configured lookup strategy.
    pub lookup: Option<LookupStrategy>,
}

/// Resolve the data directory: `--data-dir` if given, else `~/.staybook`.
pub fn resolve_data_dir(global: &GlobalOptions) -> Result<PathBuf, CliError> {
    if let Some(ref data_dir) = global.data_dir {
        return Ok(data_dir.clone());
    }

    default_data_dir().map_err(|_| {
        CliError::Config("Could not determine data directory (home directory not found)".into())
    })
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Global options (highest priority)
/// 2. Environment variables
/// 3. `config.yaml` in the data directory
/// 4. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let data_dir = resolve_data_dir(global)?;

    let overrides = Config {
        lookup: global.lookup,
        disable_autoinit: global.disable_autoinit.then_some(true),
        ..Config::default()
    };

    ConfigBuilder::new()
        .with_data_dir(&data_dir)
        .with_config(overrides)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}

/// Open database with configuration.
///
/// # Errors
///
/// Returns `NoDataDirectory` if the database doesn't exist and auto-init is disabled.
pub fn open_database(global: &GlobalOptions, config: &Config) -> Result<Database, CliError> {
    let db_config = database_config(global, config)?;

    if !db_config.path.exists() && config.autoinit_disabled() {
        return Err(CliError::NoDataDirectory);
    }

    Database::open(db_config).map_err(CliError::from)
}

/// Open the database without write access.
///
/// Returns `None` when no database exists yet; nothing is created.
///
/// # Errors
///
/// Returns `NoDataDirectory` if the database doesn't exist and auto-init is disabled.
pub fn open_database_read_only(
    global: &GlobalOptions,
    config: &Config,
) -> Result<Option<Database>, CliError> {
    let db_config = database_config(global, config)?;

    if !db_config.path.exists() {
        if config.autoinit_disabled() {
            return Err(CliError::NoDataDirectory);
        }
        return Ok(None);
    }

    Ok(Some(Database::open(db_config.read_only())?))
}

fn database_config(global: &GlobalOptions, config: &Config) -> Result<DatabaseConfig, CliError> {
    let db_config = DatabaseConfig::new(resolve_data_dir(global)?.join(DATABASE_FILE_NAME));

    let seconds = global
        .busy_timeout
        .map(u64::from)
        .or(config.maximum_lock_wait_seconds);
    Ok(match seconds {
        Some(seconds) => db_config.with_busy_timeout(Duration::from_secs(seconds)),
        None => db_config,
    })
}

/// Print a booking as pretty JSON on stdout.
pub fn print_booking(booking: &Booking) -> Result<(), CliError> {
    let json = serde_json::to_string_pretty(booking).map_err(staybook::Error::from)?;
    println!("{json}");
    Ok(())
}

/// Describe a dry-run result on stderr.
pub fn report_dry_run(global: &GlobalOptions, result: &ExecutionResult) {
    if global.quiet {
        return;
    }

    eprintln!("Dry run - would perform the following actions:");
    for (i, action) in result.actions_taken.iter().enumerate() {
        eprintln!("  {}. {action}", i + 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use staybook::config::CONFIG_FILE_NAME;

    fn global_for(dir: &std::path::Path) -> GlobalOptions {
        GlobalOptions {
            data_dir: Some(dir.to_path_buf()),
            ..GlobalOptions::default()
        }
    }

    #[test]
    fn test_explicit_data_dir_wins() {
        let global = global_for(std::path::Path::new("/srv/staybook"));
        assert_eq!(
            resolve_data_dir(&global).unwrap(),
            PathBuf::from("/srv/staybook")
        );
    }

    #[test]
    fn test_cli_lookup_overrides_config_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE_NAME), "lookup: all-matches\n").unwrap();

        let from_file = load_configuration(&global_for(dir.path())).unwrap();
        assert_eq!(from_file.lookup_strategy(), LookupStrategy::AllMatches);

        let global = GlobalOptions {
            lookup: Some(LookupStrategy::FirstMatch),
            ..global_for(dir.path())
        };
        let overridden = load_configuration(&global).unwrap();
        assert_eq!(overridden.lookup_strategy(), LookupStrategy::FirstMatch);
    }

    #[test]
    fn test_disable_autoinit_refuses_missing_database() {
        let dir = tempfile::tempdir().unwrap();
        let global = GlobalOptions {
            disable_autoinit: true,
            ..global_for(dir.path())
        };
        let config = load_configuration(&global).unwrap();

        let err = open_database(&global, &config).unwrap_err();
        assert_eq!(err.exit_code(), 3);
        assert!(!dir.path().join(DATABASE_FILE_NAME).exists());
    }

    #[test]
    fn test_read_only_open_creates_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let data_dir = dir.path().join("staybook");
        let global = global_for(&data_dir);
        let config = load_configuration(&global).unwrap();

        assert!(open_database_read_only(&global, &config).unwrap().is_none());
        assert!(!data_dir.exists());

        open_database(&global, &config).unwrap();
        assert!(open_database_read_only(&global, &config).unwrap().is_some());
    }
}
