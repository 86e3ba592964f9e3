//! Booking conflict validation.
//!
//! A candidate booking is checked against three rules, in order, stopping at
//! the first violation:
//!
//! 1. the guest has no overlapping stay in the same unit,
//! 2. the guest has no overlapping stay in any unit,
//! 3. the unit has no overlapping stay by any guest.

use std::fmt;

use crate::config::LookupStrategy;
use crate::error::{DenialReason, Error, Result};
use crate::occupancy::conflicts;
use crate::store::{BookingFilter, BookingStore};
use crate::Booking;

/// One of the three conflict rules, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictRule {
    /// Same guest, same unit.
    SameGuestSameUnit,
    /// Same guest, any unit.
    SameGuest,
    /// Same unit, any guest.
    SameUnit,
}

impl ConflictRule {
    /// All rules in the order they are evaluated.
    pub const ALL: [Self; 3] = [Self::SameGuestSameUnit, Self::SameGuest, Self::SameUnit];

    /// Returns the lookup that fetches bookings this rule compares against.
    #[must_use]
    pub fn filter(self, candidate: &Booking) -> BookingFilter {
        match self {
            Self::SameGuestSameUnit => BookingFilter::guest_and_unit(candidate),
            Self::SameGuest => BookingFilter::guest(candidate),
            Self::SameUnit => BookingFilter::unit(candidate),
        }
    }

    /// Returns the reason reported when this rule is violated.
    #[must_use]
    pub const fn denial(self) -> DenialReason {
        match self {
            Self::SameGuestSameUnit => DenialReason::SameGuestSameUnit,
            Self::SameGuest => DenialReason::GuestAlreadyBooked,
            Self::SameUnit => DenialReason::UnitOccupied,
        }
    }
}

/// Outcome of validating a candidate booking.
///
/// # Examples
///
/// ```
/// use staybook::{DenialReason, Verdict};
///
/// assert!(Verdict::Allowed.is_allowed());
/// assert_eq!(Verdict::Allowed.reason(), "OK");
///
/// let denied = Verdict::Denied(DenialReason::UnitOccupied);
/// assert!(!denied.is_allowed());
/// assert_eq!(denied.reason(), "For the given check-in date, the unit is already occupied");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// The booking may be persisted.
    Allowed,
    /// The booking violates a rule.
    Denied(DenialReason),
}

impl Verdict {
    /// Returns true if the booking may be persisted.
    #[must_use]
    pub const fn is_allowed(self) -> bool {
        matches!(self, Self::Allowed)
    }

    /// Returns `"OK"` when allowed, otherwise the denial message.
    #[must_use]
    pub const fn reason(self) -> &'static str {
        match self {
            Self::Allowed => "OK",
            Self::Denied(reason) => reason.message(),
        }
    }

    /// Converts a denial into [`Error::BookingDenied`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::BookingDenied`] if the verdict is a denial.
    pub fn into_result(self) -> Result<()> {
        match self {
            Self::Allowed => Ok(()),
            Self::Denied(reason) => Err(Error::BookingDenied { reason }),
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.reason())
    }
}

/// Evaluates the conflict rules against a [`BookingStore`].
///
/// The validator only reads from the store. Run it inside the same
/// transaction as the write that depends on its verdict.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use staybook::database::{Database, DatabaseConfig};
/// use staybook::{Booking, BookingStore, BookingValidator, LookupStrategy};
///
/// let dir = tempfile::tempdir().unwrap();
/// let db = Database::open(DatabaseConfig::new(dir.path().join("staybook.db"))).unwrap();
/// let may = |d| NaiveDate::from_ymd_opt(2023, 5, d).unwrap();
///
/// db.connection().insert(&Booking::new("GuestA", "1", may(21), 5).unwrap()).unwrap();
///
/// let validator = BookingValidator::new(db.connection(), LookupStrategy::FirstMatch);
/// let verdict = validator
///     .is_booking_possible(&Booking::new("GuestB", "1", may(31), 5).unwrap())
///     .unwrap();
/// assert!(verdict.is_allowed());
/// ```
pub struct BookingValidator<'a, S: BookingStore + ?Sized> {
    store: &'a S,
    lookup: LookupStrategy,
}

impl<'a, S: BookingStore + ?Sized> BookingValidator<'a, S> {
    /// Creates a validator reading from `store`.
    #[must_use]
    pub const fn new(store: &'a S, lookup: LookupStrategy) -> Self {
        Self { store, lookup }
    }

    /// Decides whether `candidate` may be persisted.
    ///
    /// Rules are evaluated in [`ConflictRule::ALL`] order; no lookup is made
    /// for a rule once an earlier one has denied.
    ///
    /// # Errors
    ///
    /// Returns an error if a store lookup fails. A denial is not an error.
    pub fn is_booking_possible(&self, candidate: &Booking) -> Result<Verdict> {
        for rule in ConflictRule::ALL {
            let filter = rule.filter(candidate);
            let existing = self.lookup_existing(&filter)?;

            if let Some(clash) = existing.iter().find(|b| conflicts(b, candidate)) {
                let reason = rule.denial();
                log::debug!("denied {candidate}: overlaps {clash} ({reason})");
                return Ok(Verdict::Denied(reason));
            }
        }

        log::debug!("allowed {candidate}");
        Ok(Verdict::Allowed)
    }

    fn lookup_existing(&self, filter: &BookingFilter) -> Result<Vec<Booking>> {
        match self.lookup {
            LookupStrategy::FirstMatch => Ok(self.store.find_one(filter)?.into_iter().collect()),
            LookupStrategy::AllMatches => self.store.find_all(filter),
        }
    }
}
