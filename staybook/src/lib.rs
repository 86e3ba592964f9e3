#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # staybook
//!
//! Booking-conflict validation for short-term rental stays.
//!
//! Before a stay is created or extended, staybook checks that it does not
//! overlap another stay of the same guest in the same unit, another stay of
//! the same guest in any unit, or another guest's stay in the same unit.
//!
//! ## Core Types
//!
//! - [`Booking`] and [`BookingRequest`]: Stays and their wire payload
//! - [`BookingStore`] and [`BookingFilter`]: The datastore capability
//! - [`BookingValidator`] and [`Verdict`]: The conflict rules
//! - [`Database`]: The `SQLite` store and per-request transaction
//! - [`Error`], [`DenialReason`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use chrono::NaiveDate;
//! use staybook::operations::{create_booking, extend_booking};
//! use staybook::{Booking, Config, Database, DatabaseConfig, DenialReason};
//!
//! let dir = tempfile::tempdir().unwrap();
//! let mut db = Database::open(DatabaseConfig::new(dir.path().join("staybook.db"))).unwrap();
//! let config = Config::default();
//! let may = |d| NaiveDate::from_ymd_opt(2023, 5, d).unwrap();
//!
//! create_booking(&mut db, &config, Booking::new("GuestA", "1", may(21), 5).unwrap()).unwrap();
//!
//! let err = create_booking(&mut db, &config, Booking::new("GuestB", "1", may(22), 5).unwrap())
//!     .unwrap_err();
//! assert_eq!(err.denial_reason(), Some(DenialReason::UnitOccupied));
//!
//! let extended =
//!     extend_booking(&mut db, &config, Booking::new("GuestA", "1", may(21), 10).unwrap()).unwrap();
//! assert_eq!(extended.number_of_nights(), 10);
//! ```

pub mod booking;
pub mod config;
pub mod database;
pub mod error;
pub mod logging;
pub mod occupancy;
pub mod operations;
pub mod store;

// Re-export key types at crate root for convenience
pub use booking::{Booking, BookingId, BookingRequest, ValidationError};
pub use config::{Config, ConfigBuilder, LookupStrategy};
pub use database::{Database, DatabaseConfig};
pub use error::{DenialReason, Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use operations::{
    BookingValidator, ExecutionResult, OperationPlan, PlanAction, PlanExecutor, Verdict,
};
pub use store::{BookingFilter, BookingStore};
