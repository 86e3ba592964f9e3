//! Shared database test utilities.

use std::path::{Path, PathBuf};

use staybook::database::{Database, DatabaseConfig};
use tempfile::TempDir;

/// Creates a database in a fresh temporary directory.
///
/// The directory is removed when the returned `TempDir` is dropped, so keep
/// it alive for as long as the database is used.
#[allow(dead_code)]
pub fn create_test_database() -> (TempDir, Database) {
    let dir = tempfile::tempdir().unwrap();
    let db = open_database(&database_path(dir.path()));
    (dir, db)
}

/// Returns the database path inside `dir`.
#[allow(dead_code)]
pub fn database_path(dir: &Path) -> PathBuf {
    dir.join("staybook.db")
}

/// Opens (and initializes if needed) the database at `path`.
#[allow(dead_code)]
pub fn open_database(path: &Path) -> Database {
    Database::open(DatabaseConfig::new(path)).unwrap()
}
