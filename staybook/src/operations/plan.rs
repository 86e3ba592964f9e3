//! Plan types for booking operations.
//!
//! This module defines the plan structures that describe what actions
//! will be taken during an operation, without actually performing them.

use crate::Booking;

/// A single action to be taken during plan execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanAction {
    /// Insert a validated candidate booking.
    InsertBooking(Booking),

    /// Write a longer stay to an existing booking.
    ExtendBooking {
        /// The booking as it will be stored, carrying its id.
        booking: Booking,
        /// Night count before the extension.
        previous_nights: u32,
    },
}

impl PlanAction {
    /// Returns a human-readable description of this action.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use staybook::operations::PlanAction;
    /// use staybook::Booking;
    ///
    /// let date = NaiveDate::from_ymd_opt(2023, 5, 21).unwrap();
    /// let action = PlanAction::InsertBooking(Booking::new("GuestA", "1", date, 5).unwrap());
    /// assert_eq!(
    ///     action.description(),
    ///     "Create booking: GuestA in unit 1 from 2023-05-21 for 5 night(s)"
    /// );
    /// ```
    #[must_use]
    pub fn description(&self) -> String {
        match self {
            Self::InsertBooking(booking) => format!("Create booking: {booking}"),
            Self::ExtendBooking {
                booking,
                previous_nights,
            } => format!(
                "Extend booking of {} in unit {} from {} night(s) to {}",
                booking.guest_name(),
                booking.unit_id(),
                previous_nights,
                booking.number_of_nights()
            ),
        }
    }

    /// Returns the booking this action writes.
    #[must_use]
    pub fn booking(&self) -> &Booking {
        match self {
            Self::InsertBooking(booking) | Self::ExtendBooking { booking, .. } => booking,
        }
    }
}

/// A complete operation plan describing all actions to be taken.
///
/// Plans are generated during the planning phase and can be inspected,
/// logged, or executed.
#[derive(Debug, Clone)]
pub struct OperationPlan {
    /// A human-readable description of the operation.
    pub description: String,

    /// The sequence of actions to perform.
    pub actions: Vec<PlanAction>,
}

impl OperationPlan {
    /// Creates a new operation plan with the given description.
    ///
    /// # Examples
    ///
    /// ```
    /// use staybook::operations::OperationPlan;
    ///
    /// let plan = OperationPlan::new("Create booking");
    /// assert_eq!(plan.description, "Create booking");
    /// assert!(plan.is_empty());
    /// ```
    #[must_use]
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            actions: Vec::new(),
        }
    }

    /// Adds an action to the plan.
    #[must_use]
    pub fn add_action(mut self, action: PlanAction) -> Self {
        self.actions.push(action);
        self
    }

    /// Returns true if the plan has no actions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Returns the number of actions in the plan.
    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }
}
