//! Transactional entry points for booking requests.
//!
//! Each request plans and executes inside one IMMEDIATE transaction, so the
//! validation and the write it authorizes see the same state.

use crate::config::Config;
use crate::database::Database;
use crate::error::{Error, Result};
use crate::Booking;

use super::create::CreatePlan;
use super::executor::{ExecutionResult, PlanExecutor};
use super::extend::ExtendPlan;
use super::validate::{BookingValidator, Verdict};

/// The two mutating booking requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingOperation {
    /// Persist a new stay.
    Create,
    /// Lengthen an existing stay.
    Extend,
}

/// Plans and executes `operation` for `candidate` in one transaction.
///
/// With `dry_run` the plan is validated against current state and reported
/// but nothing is written.
///
/// # Errors
///
/// Returns [`Error::BookingDenied`] when the request is refused, or an
/// infrastructure error (including [`Error::LockTimeout`]).
pub fn run_booking_operation(
    db: &mut Database,
    config: &Config,
    operation: BookingOperation,
    candidate: Booking,
    dry_run: bool,
) -> Result<ExecutionResult> {
    db.with_immediate_transaction(|tx| {
        let plan = match operation {
            BookingOperation::Create => CreatePlan::new(candidate, config).build_plan(tx)?,
            BookingOperation::Extend => ExtendPlan::new(candidate, config).build_plan(tx)?,
        };

        let executor = PlanExecutor::new(tx);
        let executor = if dry_run { executor.dry_run() } else { executor };
        executor.execute(&plan)
    })
}

fn persisted(result: ExecutionResult) -> Result<Booking> {
    result.booking.ok_or_else(|| Error::NotFound {
        resource: "booking written by plan".into(),
    })
}

/// Validates and persists a new booking.
///
/// # Errors
///
/// Returns [`Error::BookingDenied`] if a conflict rule is violated, or an
/// infrastructure error.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use staybook::config::Config;
/// use staybook::database::{Database, DatabaseConfig};
/// use staybook::operations::create_booking;
/// use staybook::{Booking, DenialReason};
///
/// let dir = tempfile::tempdir().unwrap();
/// let mut db = Database::open(DatabaseConfig::new(dir.path().join("staybook.db"))).unwrap();
/// let config = Config::default();
/// let check_in = NaiveDate::from_ymd_opt(2023, 5, 21).unwrap();
/// let candidate = Booking::new("GuestA", "1", check_in, 5).unwrap();
///
/// let stored = create_booking(&mut db, &config, candidate.clone()).unwrap();
/// assert!(stored.id().is_some());
///
/// let err = create_booking(&mut db, &config, candidate).unwrap_err();
/// assert_eq!(err.denial_reason(), Some(DenialReason::SameGuestSameUnit));
/// ```
pub fn create_booking(db: &mut Database, config: &Config, candidate: Booking) -> Result<Booking> {
    persisted(run_booking_operation(
        db,
        config,
        BookingOperation::Create,
        candidate,
        false,
    )?)
}

/// Validates and applies an extension to an existing booking.
///
/// `requested` names the booking by guest, unit and check-in date and
/// carries the new total night count.
///
/// # Errors
///
/// Returns [`Error::BookingDenied`] if the booking does not exist, the night
/// count does not grow, or the added nights conflict; or an infrastructure
/// error.
pub fn extend_booking(db: &mut Database, config: &Config, requested: Booking) -> Result<Booking> {
    persisted(run_booking_operation(
        db,
        config,
        BookingOperation::Extend,
        requested,
        false,
    )?)
}

/// Returns the verdict for creating `candidate`, without writing.
///
/// # Errors
///
/// Returns an error if a lookup fails.
pub fn check_booking(db: &Database, config: &Config, candidate: &Booking) -> Result<Verdict> {
    BookingValidator::new(db.connection(), config.lookup_strategy()).is_booking_possible(candidate)
}
