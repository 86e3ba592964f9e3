//! Create operation planning.

use crate::config::Config;
use crate::error::Result;
use crate::store::BookingStore;
use crate::Booking;

use super::plan::{OperationPlan, PlanAction};
use super::validate::BookingValidator;

/// A create plan generator.
///
/// Planning runs the conflict rules against the store; an allowed candidate
/// yields a single [`PlanAction::InsertBooking`].
pub struct CreatePlan<'a> {
    candidate: Booking,
    config: &'a Config,
}

impl<'a> CreatePlan<'a> {
    /// Creates a new create plan for `candidate`.
    #[must_use]
    pub const fn new(candidate: Booking, config: &'a Config) -> Self {
        Self { candidate, config }
    }

    /// Builds an operation plan for this create request.
    ///
    /// This method does NOT modify the store.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::BookingDenied`] if a conflict rule is violated,
    /// or an error if a store lookup fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use staybook::config::Config;
    /// use staybook::database::{Database, DatabaseConfig};
    /// use staybook::operations::{CreatePlan, PlanAction};
    /// use staybook::Booking;
    ///
    /// let dir = tempfile::tempdir().unwrap();
    /// let db = Database::open(DatabaseConfig::new(dir.path().join("staybook.db"))).unwrap();
    /// let check_in = NaiveDate::from_ymd_opt(2023, 5, 21).unwrap();
    /// let candidate = Booking::new("GuestA", "1", check_in, 5).unwrap();
    ///
    /// let config = Config::default();
    /// let plan = CreatePlan::new(candidate.clone(), &config)
    ///     .build_plan(db.connection())
    ///     .unwrap();
    /// assert_eq!(plan.actions, vec![PlanAction::InsertBooking(candidate)]);
    /// ```
    pub fn build_plan<S: BookingStore + ?Sized>(&self, store: &S) -> Result<OperationPlan> {
        let validator = BookingValidator::new(store, self.config.lookup_strategy());
        validator
            .is_booking_possible(&self.candidate)?
            .into_result()?;

        Ok(OperationPlan::new(format!("Create booking for {}", self.candidate))
            .add_action(PlanAction::InsertBooking(self.candidate.clone())))
    }
}
