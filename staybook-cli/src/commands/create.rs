//! Create command implementation.
//!
//! This module implements the `create` command, which validates a new stay
//! against the conflict rules and records it.

use super::booking_args::BookingArgs;
use super::mutation;
use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use staybook::operations::BookingOperation;

/// Create a booking.
#[derive(Args)]
pub struct CreateCommand {
    #[command(flatten)]
    pub booking: BookingArgs,

    /// Validate and show the planned insert without writing
    #[arg(long)]
    pub dry_run: bool,
}

impl CreateCommand {
    /// Execute the create command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        mutation::run(global, BookingOperation::Create, self.booking, self.dry_run)
    }
}
