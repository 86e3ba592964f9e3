//! List command implementation.
//!
//! This module implements the `list` command, which displays stored
//! bookings as a table or as JSON.

use crate::error::CliError;
use crate::utils::{load_configuration, open_database, GlobalOptions};
use clap::{Args, ValueEnum};
use staybook::{Booking, BookingFilter};
use std::io::Write;

/// Column headers for table output.
const COLUMN_HEADERS: [&str; 6] = ["id", "guest", "unit", "check_in", "check_out", "nights"];

/// List stored bookings.
#[derive(Args)]
pub struct ListCommand {
    /// Output format
    #[arg(
        long,
        value_enum,
        default_value = "table",
        env = "STAYBOOK_OUTPUT_FORMAT",
        ignore_case = true
    )]
    pub format: OutputFormat,

    /// Only bookings of this guest
    #[arg(long, value_name = "NAME")]
    pub guest: Option<String>,

    /// Only bookings of this unit
    #[arg(long, value_name = "ID")]
    pub unit: Option<String>,
}

/// Output format for list command.
#[derive(Clone, Copy, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Tab-separated table format (human-readable)
    Table,
    /// JSON format
    Json,
}

impl ListCommand {
    /// Execute the list command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let db = open_database(global, &config)?;

        let filter = build_filter(self.guest, self.unit);
        let bookings = db.list_bookings(&filter)?;

        match self.format {
            OutputFormat::Table => format_as_table(&bookings)?,
            OutputFormat::Json => format_as_json(&bookings)?,
        }

        Ok(())
    }
}

fn build_filter(guest: Option<String>, unit: Option<String>) -> BookingFilter {
    let guest = guest.map(|g| g.trim().to_string());
    let unit = unit.map(|u| u.trim().to_string());
    match (guest, unit) {
        (Some(guest_name), Some(unit_id)) => BookingFilter::GuestAndUnit {
            guest_name,
            unit_id,
        },
        (Some(guest_name), None) => BookingFilter::Guest { guest_name },
        (None, Some(unit_id)) => BookingFilter::Unit { unit_id },
        (None, None) => BookingFilter::All,
    }
}

/// Format bookings as a human-readable table.
fn format_as_table(bookings: &[Booking]) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    let header_line = COLUMN_HEADERS
        .iter()
        .map(|s| s.to_uppercase())
        .collect::<Vec<_>>()
        .join("\t");
    writeln!(handle, "{header_line}")?;

    for booking in bookings {
        writeln!(
            handle,
            "{}\t{}\t{}\t{}\t{}\t{}",
            booking.id().map_or_else(|| "-".to_string(), |id| id.to_string()),
            booking.guest_name(),
            booking.unit_id(),
            booking.check_in_date(),
            booking.check_out_date(),
            booking.number_of_nights(),
        )?;
    }

    Ok(())
}

/// Format bookings as a JSON array.
fn format_as_json(bookings: &[Booking]) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    serde_json::to_writer_pretty(&mut handle, bookings).map_err(staybook::Error::from)?;
    writeln!(handle)?;

    Ok(())
}
