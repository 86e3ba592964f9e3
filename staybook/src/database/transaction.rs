//! Transaction management utilities.
//!
//! Every validate-then-mutate request runs inside one IMMEDIATE transaction:
//! the write lock is taken before the first read, so two requests cannot both
//! validate against the same state and then both commit.

use rusqlite::{Connection, ErrorCode, TransactionBehavior};

use crate::error::{Error, Result};

use super::connection::Database;

/// Maps lock contention that outlasted the busy timeout to [`Error::LockTimeout`].
fn lock_error(err: rusqlite::Error, seconds: u64) -> Error {
    match err {
        rusqlite::Error::SqliteFailure(ref sqlite_err, _)
            if matches!(
                sqlite_err.code,
                ErrorCode::DatabaseBusy | ErrorCode::DatabaseLocked
            ) =>
        {
            Error::LockTimeout { seconds }
        }
        other => Error::Database(other),
    }
}

impl Database {
    /// Runs `f` inside an IMMEDIATE transaction.
    ///
    /// The transaction commits if `f` returns `Ok` and rolls back on every
    /// other exit path, including early returns through `?` and panics.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LockTimeout`] if the write lock cannot be acquired
    /// within the busy timeout, the error returned by `f`, or an error if the
    /// commit fails.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use staybook::database::{Database, DatabaseConfig};
    /// use staybook::{BookingFilter, BookingStore};
    ///
    /// let mut db = Database::open(DatabaseConfig::new("/tmp/staybook.db")).unwrap();
    /// let count = db
    ///     .with_immediate_transaction(|tx| Ok(tx.find_all(&BookingFilter::All)?.len()))
    ///     .unwrap();
    /// ```
    pub fn with_immediate_transaction<T, F>(&mut self, f: F) -> Result<T>
    where
        F: FnOnce(&Connection) -> Result<T>,
    {
        let seconds = self.config.busy_timeout.as_secs();
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .map_err(|e| lock_error(e, seconds))?;

        let value = f(&tx)?;

        tx.commit().map_err(|e| lock_error(e, seconds))?;
        Ok(value)
    }
}
