//! Database layer for persistent storage of bookings.
//!
//! This module provides the `SQLite` implementation of
//! [`BookingStore`](crate::BookingStore), including connection management,
//! schema versioning, and the per-request transaction boundary.
//!
//! # Examples
//!
//! ```no_run
//! use staybook::database::{Database, DatabaseConfig};
//! use staybook::{Booking, BookingFilter, BookingStore};
//! use chrono::NaiveDate;
//!
//! let mut db = Database::open(DatabaseConfig::new("/tmp/staybook.db")).unwrap();
//!
//! let check_in = NaiveDate::from_ymd_opt(2023, 5, 21).unwrap();
//! let candidate = Booking::new("GuestA", "1", check_in, 5).unwrap();
//! db.with_immediate_transaction(|tx| tx.insert(&candidate)).unwrap();
//!
//! for booking in db.list_bookings(&BookingFilter::All).unwrap() {
//!     println!("{booking}");
//! }
//! ```

mod config;
mod connection;
pub mod migrations;
mod operations;
mod schema;
#[cfg(test)]
pub(crate) mod test_util;
mod transaction;

pub use config::{default_data_dir, DatabaseConfig, DATABASE_FILE_NAME};
pub use connection::Database;

pub use migrations::{ensure_schema, inspect_schema, SchemaState};
