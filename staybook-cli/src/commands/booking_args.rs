//! Booking arguments shared by `create`, `extend` and `check`.

use crate::error::CliError;
use chrono::NaiveDate;
use clap::Args;
use staybook::{Booking, BookingRequest};

/// A booking given either as individual flags or as a JSON payload.
#[derive(Args, Debug)]
pub struct BookingArgs {
    /// Guest name
    #[arg(long, value_name = "NAME")]
    pub guest: Option<String>,

    /// Unit identifier
    #[arg(long, value_name = "ID")]
    pub unit: Option<String>,

    /// Check-in date
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub check_in: Option<NaiveDate>,

    /// Number of nights
    #[arg(long, value_name = "N")]
    pub nights: Option<u32>,

    /// Booking as JSON: {"guest_name", "unit_id", "check_in_date", "number_of_nights"}
    #[arg(
        long,
        value_name = "JSON",
        conflicts_with_all = ["guest", "unit", "check_in", "nights"]
    )]
    pub payload: Option<String>,
}

impl BookingArgs {
    /// Build the candidate booking, validating every field.
    pub fn into_booking(self) -> Result<Booking, CliError> {
        if let Some(payload) = self.payload {
            let request: BookingRequest = serde_json::from_str(&payload)
                .map_err(|e| CliError::InvalidArguments(format!("invalid payload: {e}")))?;
            return Ok(request.into_booking()?);
        }

        let request = BookingRequest {
            guest_name: self.guest.ok_or_else(|| missing("--guest"))?,
            unit_id: self.unit.ok_or_else(|| missing("--unit"))?,
            check_in_date: self.check_in.ok_or_else(|| missing("--check-in"))?,
            number_of_nights: self.nights.ok_or_else(|| missing("--nights"))?,
        };
        Ok(request.into_booking()?)
    }
}

fn missing(flag: &str) -> CliError {
    CliError::InvalidArguments(format!("{flag} is required unless --payload is given"))
}
