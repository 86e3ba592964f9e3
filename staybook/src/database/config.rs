//! Where the booking database lives and how it is opened.

use std::path::{Path, PathBuf};
use std::time::Duration;

use rusqlite::OpenFlags;

use crate::error::{Error, Result};

/// File name of the database inside the data directory.
pub const DATABASE_FILE_NAME: &str = "staybook.db";

const DEFAULT_BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Open parameters for [`Database::open`](super::Database::open).
///
/// # Examples
///
/// ```
/// use staybook::database::DatabaseConfig;
/// use std::time::Duration;
///
/// let config = DatabaseConfig::new("/tmp/staybook.db")
///     .with_busy_timeout(Duration::from_secs(10));
/// assert_eq!(config.busy_timeout, Duration::from_secs(10));
/// ```
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Path to the database file.
    pub path: PathBuf,
    /// How long a request waits for the write lock before giving up.
    pub busy_timeout: Duration,
    /// Create the file and its parent directory when missing.
    pub auto_create: bool,
    /// Open without write access.
    pub read_only: bool,
}

impl DatabaseConfig {
    /// Read-write, auto-creating, with a five second busy timeout.
    #[must_use]
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            busy_timeout: DEFAULT_BUSY_TIMEOUT,
            auto_create: true,
            read_only: false,
        }
    }

    /// Sets how long a writer waits for the lock.
    #[must_use]
    pub fn with_busy_timeout(mut self, timeout: Duration) -> Self {
        self.busy_timeout = timeout;
        self
    }

    /// Opens without write access. A read-only database is never created.
    ///
    /// ```
    /// use staybook::database::DatabaseConfig;
    ///
    /// let config = DatabaseConfig::new("/tmp/staybook.db").read_only();
    /// assert!(config.read_only);
    /// assert!(!config.auto_create);
    /// ```
    #[must_use]
    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self.auto_create = false;
        self
    }

    /// `SQLite` open flags for this configuration. Always includes
    /// `SQLITE_OPEN_NO_MUTEX`.
    #[must_use]
    pub fn open_flags(&self) -> OpenFlags {
        let access = match (self.read_only, self.auto_create) {
            (true, _) => OpenFlags::SQLITE_OPEN_READ_ONLY,
            (false, true) => OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_CREATE,
            (false, false) => OpenFlags::SQLITE_OPEN_READ_WRITE,
        };
        access | OpenFlags::SQLITE_OPEN_NO_MUTEX
    }

    pub(super) fn prepare_parent_directory(&self) -> Result<()> {
        if !self.auto_create || self.path.exists() {
            return Ok(());
        }
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => {
                std::fs::create_dir_all(parent)?;
                Ok(())
            }
            _ => Ok(()),
        }
    }
}

/// Returns the default data directory, `~/.staybook`.
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined.
pub fn default_data_dir() -> Result<PathBuf> {
    let home = home::home_dir().ok_or_else(|| Error::Validation {
        field: "home_directory".into(),
        message: "Cannot determine home directory".into(),
    })?;
    Ok(home.join(".staybook"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DatabaseConfig::new("/tmp/test.db");
        assert_eq!(config.busy_timeout, Duration::from_secs(5));
        assert!(config.auto_create);
        assert!(!config.read_only);
    }

    #[test]
    fn test_open_flags() {
        let creating = DatabaseConfig::new("/tmp/test.db").open_flags();
        assert!(creating.contains(OpenFlags::SQLITE_OPEN_CREATE));
        assert!(creating.contains(OpenFlags::SQLITE_OPEN_READ_WRITE));

        let mut existing = DatabaseConfig::new("/tmp/test.db");
        existing.auto_create = false;
        assert!(!existing.open_flags().contains(OpenFlags::SQLITE_OPEN_CREATE));

        let read_only = DatabaseConfig::new("/tmp/test.db").read_only().open_flags();
        assert!(read_only.contains(OpenFlags::SQLITE_OPEN_READ_ONLY));
        assert!(!read_only.contains(OpenFlags::SQLITE_OPEN_READ_WRITE));
        assert!(!read_only.contains(OpenFlags::SQLITE_OPEN_CREATE));
    }

    #[test]
    fn test_parent_directory_created_only_when_auto_creating() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b").join(DATABASE_FILE_NAME);

        DatabaseConfig::new(&nested)
            .read_only()
            .prepare_parent_directory()
            .unwrap();
        assert!(!dir.path().join("a").exists());

        DatabaseConfig::new(&nested)
            .prepare_parent_directory()
            .unwrap();
        assert!(dir.path().join("a").join("b").is_dir());
    }

    #[test]
    fn test_default_data_dir_is_dot_staybook() {
        if let Ok(dir) = default_data_dir() {
            assert!(dir.ends_with(".staybook"));
        }
    }
}
