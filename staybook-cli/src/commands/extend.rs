//! Extend command implementation.
//!
//! `extend` names an existing stay by guest, unit and check-in date and asks
//! for a larger total night count. Only the added nights are checked against
//! the conflict rules.

use super::booking_args::BookingArgs;
use super::mutation;
use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use staybook::operations::BookingOperation;

/// Extend an existing booking.
#[derive(Args)]
pub struct ExtendCommand {
    // --nights is the new total
    #[command(flatten)]
    pub booking: BookingArgs,

    /// Validate and show the planned extension without writing
    #[arg(long)]
    pub dry_run: bool,
}

impl ExtendCommand {
    /// Execute the extend command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        mutation::run(global, BookingOperation::Extend, self.booking, self.dry_run)
    }
}
