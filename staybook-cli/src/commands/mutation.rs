//! Shared driver for the mutating booking commands.

use super::booking_args::BookingArgs;
use crate::error::CliError;
use crate::utils::{load_configuration, open_database, print_booking, report_dry_run, GlobalOptions};
use staybook::operations::{run_booking_operation, BookingOperation};

/// Validate and apply `operation`, printing the resulting booking.
///
/// In dry-run mode the planned actions go to stderr and the booking as it
/// would be stored goes to stdout.
pub fn run(
    global: &GlobalOptions,
    operation: BookingOperation,
    args: BookingArgs,
    dry_run: bool,
) -> Result<(), CliError> {
    let candidate = args.into_booking()?;
    let config = load_configuration(global)?;
    let mut db = open_database(global, &config)?;

    let result = run_booking_operation(&mut db, &config, operation, candidate, dry_run)?;

    if result.dry_run {
        report_dry_run(global, &result);
    }

    match result.booking {
        Some(ref booking) => print_booking(booking),
        None => Ok(()),
    }
}
