//! The booking database handle.

use rusqlite::Connection;

use crate::error::Result;

use super::config::DatabaseConfig;
use super::migrations::ensure_schema;

/// An open booking database.
///
/// Reads go through [`Database::connection`], which implements
/// [`BookingStore`](crate::BookingStore). Writes go through
/// [`Database::with_immediate_transaction`].
///
/// ```no_run
/// use staybook::database::{Database, DatabaseConfig};
///
/// let db = Database::open(DatabaseConfig::new("/tmp/staybook.db")).unwrap();
/// ```
#[derive(Debug)]
pub struct Database {
    pub(super) conn: Connection,
    pub(super) config: DatabaseConfig,
}

/// Per-connection settings. The busy timeout goes first so that a second
/// process opening the file waits on the first one's schema setup.
fn tune(conn: &Connection, config: &DatabaseConfig) -> Result<()> {
    conn.busy_timeout(config.busy_timeout)?;
    if config.read_only {
        return Ok(());
    }
    conn.pragma_update(None, "synchronous", "NORMAL")?;
    let mode: String = conn.query_row("PRAGMA journal_mode = WAL", [], |row| row.get(0))?;
    log::debug!("journal mode {mode}");
    Ok(())
}

impl Database {
    /// Opens the database, creating it and its schema when allowed.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened, the parent directory
    /// cannot be created, or the stored schema version is not supported.
    pub fn open(config: DatabaseConfig) -> Result<Self> {
        config.prepare_parent_directory()?;

        let conn = Connection::open_with_flags(&config.path, config.open_flags())?;
        tune(&conn, &config)?;
        ensure_schema(&conn)?;

        log::debug!("opened booking database {}", config.path.display());
        Ok(Self { conn, config })
    }

    /// The underlying connection, for reads outside a transaction.
    #[must_use]
    pub const fn connection(&self) -> &Connection {
        &self.conn
    }
}
