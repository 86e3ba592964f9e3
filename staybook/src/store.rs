//! Datastore capability consumed by the validator and mutator.
//!
//! The core never talks to a database directly; it asks a [`BookingStore`]
//! for bookings matching a [`BookingFilter`]. The SQLite implementation lives
//! in [`crate::database`] and is implemented for `rusqlite::Connection`, so an
//! open transaction can be passed wherever a store is expected.

use std::fmt;

use chrono::NaiveDate;

use crate::error::Result;
use crate::Booking;

/// Typed lookup filters supported by a [`BookingStore`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookingFilter {
    /// Every booking.
    All,
    /// Bookings of one guest in one unit.
    GuestAndUnit {
        /// Guest name to match.
        guest_name: String,
        /// Unit id to match.
        unit_id: String,
    },
    /// Bookings of one guest, in any unit.
    Guest {
        /// Guest name to match.
        guest_name: String,
    },
    /// Bookings of one unit, by any guest.
    Unit {
        /// Unit id to match.
        unit_id: String,
    },
    /// The booking of one guest in one unit starting on one date.
    Exact {
        /// Guest name to match.
        guest_name: String,
        /// Unit id to match.
        unit_id: String,
        /// Check-in date to match.
        check_in_date: NaiveDate,
    },
}

impl BookingFilter {
    /// Filter for the guest and unit of `booking`.
    #[must_use]
    pub fn guest_and_unit(booking: &Booking) -> Self {
        Self::GuestAndUnit {
            guest_name: booking.guest_name().to_string(),
            unit_id: booking.unit_id().to_string(),
        }
    }

    /// Filter for the guest of `booking`.
    #[must_use]
    pub fn guest(booking: &Booking) -> Self {
        Self::Guest {
            guest_name: booking.guest_name().to_string(),
        }
    }

    /// Filter for the unit of `booking`.
    #[must_use]
    pub fn unit(booking: &Booking) -> Self {
        Self::Unit {
            unit_id: booking.unit_id().to_string(),
        }
    }

    /// Filter for the guest, unit and check-in date of `booking`.
    #[must_use]
    pub fn exact(booking: &Booking) -> Self {
        Self::Exact {
            guest_name: booking.guest_name().to_string(),
            unit_id: booking.unit_id().to_string(),
            check_in_date: booking.check_in_date(),
        }
    }
}

impl fmt::Display for BookingFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "all bookings"),
            Self::GuestAndUnit {
                guest_name,
                unit_id,
            } => write!(f, "guest {guest_name} in unit {unit_id}"),
            Self::Guest { guest_name } => write!(f, "guest {guest_name}"),
            Self::Unit { unit_id } => write!(f, "unit {unit_id}"),
            Self::Exact {
                guest_name,
                unit_id,
                check_in_date,
            } => write!(
                f,
                "guest {guest_name} in unit {unit_id} checking in {check_in_date}"
            ),
        }
    }
}

/// Query and mutation interface over persisted bookings.
///
/// Results are returned in the store's default ordering (insertion order for
/// the SQLite store); `find_one` returns the first booking in that order.
#[cfg_attr(test, mockall::automock)]
pub trait BookingStore {
    /// Returns the first booking matching `filter`, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying query fails.
    fn find_one(&self, filter: &BookingFilter) -> Result<Option<Booking>>;

    /// Returns every booking matching `filter`.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying query fails.
    fn find_all(&self, filter: &BookingFilter) -> Result<Vec<Booking>>;

    /// Persists a new booking and returns it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    fn insert(&self, booking: &Booking) -> Result<Booking>;

    /// Writes the night count of an already persisted booking.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::NotFound`] if the booking has no id or no row
    /// carries it, or an error if the update fails.
    fn update(&self, booking: &Booking) -> Result<()>;
}
