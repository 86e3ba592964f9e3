//! Explicit set-up of a data directory.
//!
//! Bookings normally create their database on first use. `init` does the
//! same up front, can wipe an existing database, and can drop a commented
//! `config.yaml` next to it.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::CONFIG_FILE_NAME;
use crate::database::DATABASE_FILE_NAME;
use crate::error::{Error, Result};
use crate::{Database, DatabaseConfig};

/// What `init` should do.
#[derive(Debug, Clone)]
pub struct InitOptions {
    /// Data directory to set up.
    pub data_dir: PathBuf,
    /// Replace an existing database, discarding its bookings.
    pub overwrite: bool,
    /// Write `config.yaml` unless one exists.
    pub create_config: bool,
    /// Work out the steps without running them.
    pub dry_run: bool,
}

impl InitOptions {
    /// Options that only create a missing database.
    #[must_use]
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            data_dir,
            overwrite: false,
            create_config: false,
            dry_run: false,
        }
    }

    /// See [`InitOptions::overwrite`].
    #[must_use]
    pub fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    /// See [`InitOptions::create_config`].
    #[must_use]
    pub fn with_create_config(mut self, create_config: bool) -> Self {
        self.create_config = create_config;
        self
    }

    /// See [`InitOptions::dry_run`].
    #[must_use]
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    fn database_path(&self) -> PathBuf {
        self.data_dir.join(DATABASE_FILE_NAME)
    }

    fn config_path(&self) -> PathBuf {
        self.data_dir.join(CONFIG_FILE_NAME)
    }
}

/// One step of an initialization, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitStep {
    /// The data directory did not exist.
    CreateDataDirectory,
    /// No database existed.
    CreateDatabase,
    /// An existing database is replaced by an empty one.
    RecreateDatabase,
    /// The commented configuration template is written.
    WriteConfig,
    /// A configuration file was requested but one already exists.
    KeepExistingConfig,
}

impl InitStep {
    /// Past-tense description, or the imperative one for a dry run.
    #[must_use]
    pub const fn describe(self, dry_run: bool) -> &'static str {
        match (self, dry_run) {
            (Self::CreateDataDirectory, false) => "Created data directory",
            (Self::CreateDataDirectory, true) => "Create data directory",
            (Self::CreateDatabase, false) => "Created database",
            (Self::CreateDatabase, true) => "Create database",
            (Self::RecreateDatabase, false) => "Recreated database",
            (Self::RecreateDatabase, true) => "Recreate database",
            (Self::WriteConfig, false) => "Created default configuration file",
            (Self::WriteConfig, true) => "Create default configuration file",
            (Self::KeepExistingConfig, _) => "Configuration file already exists (not overwritten)",
        }
    }
}

impl fmt::Display for InitStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe(false))
    }
}

/// The steps `init` took, or would take on a dry run.
#[derive(Debug)]
pub struct InitResult {
    /// The data directory that was set up.
    pub data_dir: PathBuf,
    /// Whether `steps` were only planned.
    pub dry_run: bool,
    /// Steps in execution order.
    pub steps: Vec<InitStep>,
}

impl InitResult {
    /// Whether `step` is part of this initialization.
    #[must_use]
    pub fn includes(&self, step: InitStep) -> bool {
        self.steps.contains(&step)
    }
}

/// Written by `init --with-config`. Every option is commented out, so the
/// file parses to the default configuration.
const DEFAULT_CONFIG_TEMPLATE: &str = r"# staybook configuration file

# How existing bookings are looked up for each conflict rule (default: first-match)
#   first-match: compare against the oldest matching booking only
#   all-matches: compare against every matching booking
# lookup: first-match

# Maximum lock wait time in seconds (default: 5)
# maximum_lock_wait_seconds: 5

# Refuse to create the database implicitly (default: false)
# disable_autoinit: false
";

fn plan_init(options: &InitOptions) -> Result<Vec<InitStep>> {
    let mut steps = Vec::new();

    if !options.data_dir.exists() {
        steps.push(InitStep::CreateDataDirectory);
    }

    let db_path = options.database_path();
    if !db_path.exists() {
        steps.push(InitStep::CreateDatabase);
    } else if options.overwrite {
        steps.push(InitStep::RecreateDatabase);
    } else {
        return Err(Error::Validation {
            field: "database".into(),
            message: format!(
                "Database already exists at {}. Use --overwrite to replace it.",
                db_path.display()
            ),
        });
    }

    if options.create_config {
        steps.push(if options.config_path().exists() {
            InitStep::KeepExistingConfig
        } else {
            InitStep::WriteConfig
        });
    }

    Ok(steps)
}

/// Deletes the database together with its WAL and shared-memory files.
fn remove_database_files(db_path: &Path) -> Result<()> {
    fs::remove_file(db_path)?;
    for suffix in ["-wal", "-shm"] {
        let mut sidecar = db_path.as_os_str().to_owned();
        sidecar.push(suffix);
        match fs::remove_file(PathBuf::from(sidecar)) {
            Err(e) if e.kind() != std::io::ErrorKind::NotFound => return Err(e.into()),
            _ => {}
        }
    }
    Ok(())
}

fn run_step(step: InitStep, options: &InitOptions) -> Result<()> {
    let db_path = options.database_path();
    match step {
        InitStep::CreateDataDirectory => fs::create_dir_all(&options.data_dir)?,
        InitStep::RecreateDatabase => {
            remove_database_files(&db_path)?;
            Database::open(DatabaseConfig::new(&db_path))?;
        }
        InitStep::CreateDatabase => {
            Database::open(DatabaseConfig::new(&db_path))?;
        }
        InitStep::WriteConfig => fs::write(options.config_path(), DEFAULT_CONFIG_TEMPLATE)?,
        InitStep::KeepExistingConfig => {}
    }
    log::debug!("init: {step}");
    Ok(())
}

/// Sets up the data directory, its database and optionally `config.yaml`.
///
/// # Errors
///
/// Returns [`Error::Validation`] if a database exists and `overwrite` is not
/// set, or an I/O or database error from a step.
///
/// # Examples
///
/// ```
/// use staybook::operations::init::{init_database, InitOptions, InitStep};
///
/// let dir = tempfile::tempdir().unwrap();
/// let options = InitOptions::new(dir.path().join("data")).with_create_config(true);
///
/// let result = init_database(&options).unwrap();
/// assert!(result.includes(InitStep::CreateDatabase));
/// assert!(result.includes(InitStep::WriteConfig));
/// ```
pub fn init_database(options: &InitOptions) -> Result<InitResult> {
    let steps = plan_init(options)?;

    if !options.dry_run {
        for &step in &steps {
            run_step(step, options)?;
        }
        log::info!("initialized {}", options.data_dir.display());
    }

    Ok(InitResult {
        data_dir: options.data_dir.clone(),
        dry_run: options.dry_run,
        steps,
    })
}
