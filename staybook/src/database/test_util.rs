//! Shared test utilities for database unit tests.

use chrono::NaiveDate;
use tempfile::tempdir;

use crate::database::{Database, DatabaseConfig};
use crate::Booking;

/// Creates a temporary test database that will be cleaned up automatically.
///
/// # Panics
///
/// Panics if the temporary directory or database cannot be created.
#[must_use]
pub fn create_test_database() -> Database {
    let dir = tempdir().unwrap();
    let path = dir.path().join("test.db");
    let db = Database::open(DatabaseConfig::new(path)).unwrap();

    // Keep the directory alive for the lifetime of the test process
    std::mem::forget(dir);

    db
}

/// Creates a candidate stay checking in on the given day of May 2023.
///
/// # Panics
///
/// Panics if the booking fails validation.
#[must_use]
pub fn stay(guest: &str, unit: &str, may_day: u32, nights: u32) -> Booking {
    let check_in = NaiveDate::from_ymd_opt(2023, 5, may_day).unwrap();
    Booking::new(guest, unit, check_in, nights).unwrap()
}
