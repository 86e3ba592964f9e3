//! Extend operation planning.
//!
//! An extension request names an existing stay by guest, unit and check-in
//! date, and carries the new total night count. Only the added nights are
//! validated: they form a probe stay starting on the current check-out date.

use crate::config::Config;
use crate::error::{DenialReason, Error, Result};
use crate::store::{BookingFilter, BookingStore};
use crate::Booking;

use super::plan::{OperationPlan, PlanAction};
use super::validate::BookingValidator;

/// Builds the stay covering only the nights added by an extension.
///
/// # Errors
///
/// Returns a validation error if `requested` does not add nights to
/// `current`.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use staybook::operations::extend::probe_booking;
/// use staybook::Booking;
///
/// let may = |d| NaiveDate::from_ymd_opt(2023, 5, d).unwrap();
/// let current = Booking::new("GuestA", "1", may(21), 5).unwrap();
/// let requested = Booking::new("GuestA", "1", may(21), 10).unwrap();
///
/// let probe = probe_booking(&current, &requested).unwrap();
/// assert_eq!(probe.check_in_date(), may(26));
/// assert_eq!(probe.number_of_nights(), 5);
/// ```
pub fn probe_booking(current: &Booking, requested: &Booking) -> Result<Booking> {
    let check_in = current.check_out_date();
    let added_nights = requested
        .number_of_nights()
        .checked_sub(current.number_of_nights())
        .unwrap_or_default();

    Ok(Booking::new(
        current.guest_name(),
        current.unit_id(),
        check_in,
        added_nights,
    )?)
}

/// An extend plan generator.
pub struct ExtendPlan<'a> {
    requested: Booking,
    config: &'a Config,
}

impl<'a> ExtendPlan<'a> {
    /// Creates a new extend plan for `requested`.
    #[must_use]
    pub const fn new(requested: Booking, config: &'a Config) -> Self {
        Self { requested, config }
    }

    /// Builds an operation plan for this extend request.
    ///
    /// This method does NOT modify the store.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BookingDenied`] if no booking matches, if the night
    /// count does not grow, or if the added nights violate a conflict rule.
    /// Returns an error if a store lookup fails.
    pub fn build_plan<S: BookingStore + ?Sized>(&self, store: &S) -> Result<OperationPlan> {
        let current = store
            .find_one(&BookingFilter::exact(&self.requested))?
            .ok_or(Error::BookingDenied {
                reason: DenialReason::BookingNotFound,
            })?;

        if self.requested.number_of_nights() <= current.number_of_nights() {
            return Err(DenialReason::TooFewNights.into());
        }

        let probe = probe_booking(&current, &self.requested)?;
        log::debug!("extension probe: {probe}");

        let validator = BookingValidator::new(store, self.config.lookup_strategy());
        validator.is_booking_possible(&probe)?.into_result()?;

        let previous_nights = current.number_of_nights();
        let booking = current.with_nights(self.requested.number_of_nights())?;

        Ok(OperationPlan::new(format!("Extend booking for {}", self.requested))
            .add_action(PlanAction::ExtendBooking {
                booking,
                previous_nights,
            }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::test_util::{create_test_database, stay};
    use chrono::NaiveDate;

    fn denial(result: Result<OperationPlan>) -> Option<DenialReason> {
        result.unwrap_err().denial_reason()
    }

    #[test]
    fn test_extend_plan_targets_existing_row() {
        let db = create_test_database();
        let existing = db.connection().insert(&stay("GuestA", "1", 21, 5)).unwrap();
        let config = Config::default();

        let plan = ExtendPlan::new(stay("GuestA", "1", 21, 10), &config)
            .build_plan(db.connection())
            .unwrap();

        match &plan.actions[..] {
            [PlanAction::ExtendBooking {
                booking,
                previous_nights,
            }] => {
                assert_eq!(booking.id(), existing.id());
                assert_eq!(booking.number_of_nights(), 10);
                assert_eq!(booking.check_in_date(), existing.check_in_date());
                assert_eq!(*previous_nights, 5);
            }
            other => panic!("unexpected actions: {other:?}"),
        }
    }

    #[test]
    fn test_extend_missing_booking() {
        let db = create_test_database();
        db.connection().insert(&stay("GuestA", "1", 21, 5)).unwrap();
        let config = Config::default();

        for requested in [
            stay("GuestB", "1", 21, 10),
            stay("GuestA", "2", 21, 10),
            stay("GuestA", "1", 22, 10),
        ] {
            let result = ExtendPlan::new(requested, &config).build_plan(db.connection());
            assert_eq!(denial(result), Some(DenialReason::BookingNotFound));
        }
    }

    #[test]
    fn test_extend_requires_more_nights() {
        let db = create_test_database();
        db.connection().insert(&stay("GuestA", "1", 21, 5)).unwrap();
        let config = Config::default();

        for nights in [4, 5] {
            let result = ExtendPlan::new(stay("GuestA", "1", 21, nights), &config)
                .build_plan(db.connection());
            assert_eq!(denial(result), Some(DenialReason::TooFewNights));
        }
    }

    #[test]
    fn test_extend_into_other_guest_stay_denied() {
        let db = create_test_database();
        // the unit's first booking is the one the extension runs into
        db.connection().insert(&stay("GuestB", "1", 28, 3)).unwrap();
        db.connection().insert(&stay("GuestA", "1", 21, 5)).unwrap();
        let config = Config::default();

        let result =
            ExtendPlan::new(stay("GuestA", "1", 21, 8), &config).build_plan(db.connection());
        assert_eq!(denial(result), Some(DenialReason::UnitOccupied));
    }

    #[test]
    fn test_extend_up_to_next_stay_allowed() {
        let db = create_test_database();
        db.connection().insert(&stay("GuestA", "1", 21, 5)).unwrap();
        db.connection().insert(&stay("GuestB", "1", 28, 3)).unwrap();
        let config = Config::default();

        let plan = ExtendPlan::new(stay("GuestA", "1", 21, 7), &config)
            .build_plan(db.connection())
            .unwrap();
        assert_eq!(plan.len(), 1);
    }

    #[test]
    fn test_probe_ending_on_last_calendar_day() {
        let check_in = NaiveDate::MAX - chrono::Days::new(2);
        let current = Booking::new("GuestA", "1", check_in, 1).unwrap();
        let requested = Booking::new("GuestA", "1", check_in, 2).unwrap();

        let probe = probe_booking(&current, &requested).unwrap();
        assert_eq!(probe.check_in_date(), current.check_out_date());
        assert_eq!(probe.check_out_date(), NaiveDate::MAX);
    }
}
