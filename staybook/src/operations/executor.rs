//! Plan execution engine.
//!
//! This module implements the executor that takes operation plans
//! and applies them to a booking store.

use crate::error::Result;
use crate::store::BookingStore;
use crate::Booking;

use super::plan::{OperationPlan, PlanAction};

/// Result of executing a plan.
#[derive(Debug, Clone)]
pub struct ExecutionResult {
    /// Whether this was a dry-run (no actual changes made).
    pub dry_run: bool,

    /// Descriptions of actions that were taken (or would be taken in dry-run).
    pub actions_taken: Vec<String>,

    /// The booking written by the last action. In dry-run mode this is the
    /// booking as planned, without an id for new bookings.
    pub booking: Option<Booking>,
}

impl ExecutionResult {
    fn new(plan: &OperationPlan, dry_run: bool, booking: Option<Booking>) -> Self {
        Self {
            dry_run,
            actions_taken: plan.actions.iter().map(PlanAction::description).collect(),
            booking,
        }
    }
}

/// Executes operation plans against a [`BookingStore`].
///
/// The executor can run in normal mode (applying changes) or dry-run mode
/// (reporting without changes).
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use staybook::database::{Database, DatabaseConfig};
/// use staybook::operations::{OperationPlan, PlanAction, PlanExecutor};
/// use staybook::Booking;
///
/// let dir = tempfile::tempdir().unwrap();
/// let db = Database::open(DatabaseConfig::new(dir.path().join("staybook.db"))).unwrap();
/// let check_in = NaiveDate::from_ymd_opt(2023, 5, 21).unwrap();
/// let plan = OperationPlan::new("Create")
///     .add_action(PlanAction::InsertBooking(Booking::new("GuestA", "1", check_in, 5).unwrap()));
///
/// let preview = PlanExecutor::new(db.connection()).dry_run().execute(&plan).unwrap();
/// assert!(preview.dry_run);
///
/// let result = PlanExecutor::new(db.connection()).execute(&plan).unwrap();
/// assert!(result.booking.unwrap().id().is_some());
/// ```
pub struct PlanExecutor<'a, S: BookingStore + ?Sized> {
    store: &'a S,
    dry_run: bool,
}

impl<'a, S: BookingStore + ?Sized> PlanExecutor<'a, S> {
    /// Creates a new plan executor.
    #[must_use]
    pub const fn new(store: &'a S) -> Self {
        Self {
            store,
            dry_run: false,
        }
    }

    /// Sets the executor to dry-run mode.
    #[must_use]
    pub const fn dry_run(mut self) -> Self {
        self.dry_run = true;
        self
    }

    /// Executes the given plan.
    ///
    /// # Errors
    ///
    /// Returns an error if any action fails to execute.
    pub fn execute(&self, plan: &OperationPlan) -> Result<ExecutionResult> {
        if self.dry_run {
            let booking = plan.actions.last().map(|action| action.booking().clone());
            return Ok(ExecutionResult::new(plan, true, booking));
        }

        let mut booking = None;
        for action in &plan.actions {
            booking = Some(self.execute_action(action)?);
        }

        Ok(ExecutionResult::new(plan, false, booking))
    }

    fn execute_action(&self, action: &PlanAction) -> Result<Booking> {
        match action {
            PlanAction::InsertBooking(candidate) => {
                let stored = self.store.insert(candidate)?;
                log::info!("{} (id {:?})", action.description(), stored.id());
                Ok(stored)
            }
            PlanAction::ExtendBooking { booking, .. } => {
                self.store.update(booking)?;
                log::info!("{}", action.description());
                Ok(booking.clone())
            }
        }
    }
}
