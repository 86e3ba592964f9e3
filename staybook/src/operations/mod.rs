//! Booking operations using the plan-execute pattern.
//!
//! Operations are split into two phases:
//! 1. **Planning**: runs the conflict rules against the store and builds a plan
//! 2. **Execution**: takes the plan and performs the actual writes
//!
//! [`create_booking`], [`extend_booking`] and [`check_booking`] wrap both
//! phases in the per-request transaction.
//!
//! # Examples
//!
//! ```no_run
//! use chrono::NaiveDate;
//! use staybook::config::ConfigBuilder;
//! use staybook::operations::{CreatePlan, PlanExecutor};
//! use staybook::{Booking, Database, DatabaseConfig};
//!
//! let mut db = Database::open(DatabaseConfig::new("/tmp/staybook.db")).unwrap();
//! let config = ConfigBuilder::new().build().unwrap();
//! let check_in = NaiveDate::from_ymd_opt(2023, 5, 21).unwrap();
//! let candidate = Booking::new("GuestA", "1", check_in, 5).unwrap();
//!
//! let result = db
//!     .with_immediate_transaction(|tx| {
//!         let plan = CreatePlan::new(candidate, &config).build_plan(tx)?;
//!         PlanExecutor::new(tx).execute(&plan)
//!     })
//!     .unwrap();
//! ```

pub mod create;
pub mod executor;
pub mod extend;
pub mod init;
pub mod plan;
pub mod service;
pub mod validate;

pub use create::CreatePlan;
pub use executor::{ExecutionResult, PlanExecutor};
pub use extend::ExtendPlan;
pub use init::{init_database, InitOptions, InitResult, InitStep};
pub use plan::{OperationPlan, PlanAction};
pub use service::{
    check_booking, create_booking, extend_booking, run_booking_operation, BookingOperation,
};
pub use validate::{BookingValidator, ConflictRule, Verdict};
