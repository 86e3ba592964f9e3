//! Check command implementation.
//!
//! This module implements the `check` command, which reports whether a stay
//! could be created right now. It never writes to the database.

use super::booking_args::BookingArgs;
use crate::error::CliError;
use crate::utils::{load_configuration, open_database_read_only, GlobalOptions};
use clap::Args;
use staybook::operations::check_booking;
use staybook::Verdict;

/// Check whether a booking could be created.
#[derive(Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub booking: BookingArgs,
}

impl CheckCommand {
    /// Execute the check command.
    ///
    /// Prints `OK` or the denial reason on stdout; a denial also exits 1.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let candidate = self.booking.into_booking()?;
        let config = load_configuration(global)?;
        let verdict = match open_database_read_only(global, &config)? {
            Some(db) => check_booking(&db, &config, &candidate)?,
            // no database yet, so no booking to conflict with
            None => Verdict::Allowed,
        };
        println!("{}", verdict.reason());

        match verdict {
            Verdict::Allowed => Ok(()),
            Verdict::Denied(reason) => Err(CliError::Denied(reason)),
        }
    }
}
