//! Booking types for tracking stays.
//!
//! A [`Booking`] is both the persisted entity and, before it has an id, the
//! candidate handed to validation. [`BookingRequest`] is the wire payload
//! accepted by the transport layer.

use std::collections::BTreeSet;

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::occupancy;

/// Row identifier assigned by the datastore on insert.
pub type BookingId = i64;

/// A stay of one guest in one unit.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use staybook::Booking;
///
/// let check_in = NaiveDate::from_ymd_opt(2023, 5, 21).unwrap();
/// let booking = Booking::new("GuestA", "1", check_in, 5).unwrap();
///
/// assert!(booking.id().is_none());
/// assert_eq!(booking.check_out_date(), NaiveDate::from_ymd_opt(2023, 5, 26).unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Booking {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<BookingId>,
    guest_name: String,
    unit_id: String,
    check_in_date: NaiveDate,
    number_of_nights: u32,
    #[serde(skip)]
    check_out_date: NaiveDate,
}

/// The day after the last night. Stays must end within the calendar.
fn stay_end(check_in_date: NaiveDate, number_of_nights: u32) -> Result<NaiveDate, ValidationError> {
    if number_of_nights == 0 {
        return Err(ValidationError {
            field: "number_of_nights".into(),
            message: "number of nights must be at least 1".into(),
        });
    }
    check_in_date
        .checked_add_days(Days::new(u64::from(number_of_nights)))
        .ok_or_else(|| ValidationError {
            field: "number_of_nights".into(),
            message: format!(
                "{number_of_nights} nights from {check_in_date} run past the last supported date"
            ),
        })
}

impl Booking {
    /// Creates a candidate booking (no id).
    ///
    /// Guest name and unit id are trimmed.
    ///
    /// # Errors
    ///
    /// Returns an error if the guest name or unit id is empty after trimming,
    /// if `number_of_nights` is zero, or if the stay would check out after
    /// [`NaiveDate::MAX`].
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use staybook::Booking;
    ///
    /// let date = NaiveDate::from_ymd_opt(2023, 5, 21).unwrap();
    /// assert!(Booking::new("GuestA", "1", date, 1).is_ok());
    /// assert!(Booking::new("GuestA", "1", date, 0).is_err());
    /// assert!(Booking::new("  ", "1", date, 3).is_err());
    /// ```
    pub fn new(
        guest_name: impl AsRef<str>,
        unit_id: impl AsRef<str>,
        check_in_date: NaiveDate,
        number_of_nights: u32,
    ) -> Result<Self, ValidationError> {
        let guest_name = non_empty("guest_name", guest_name.as_ref())?;
        let unit_id = non_empty("unit_id", unit_id.as_ref())?;
        let check_out_date = stay_end(check_in_date, number_of_nights)?;

        Ok(Self {
            id: None,
            guest_name,
            unit_id,
            check_in_date,
            number_of_nights,
            check_out_date,
        })
    }

    /// Returns a copy of this booking carrying the given datastore id.
    #[must_use]
    pub fn with_id(mut self, id: BookingId) -> Self {
        self.id = Some(id);
        self
    }

    /// Returns a copy of this booking with a different night count.
    ///
    /// # Errors
    ///
    /// Returns an error under the same night-count conditions as [`Booking::new`].
    pub fn with_nights(mut self, number_of_nights: u32) -> Result<Self, ValidationError> {
        self.check_out_date = stay_end(self.check_in_date, number_of_nights)?;
        self.number_of_nights = number_of_nights;
        Ok(self)
    }

    /// Returns the datastore id, if this booking has been persisted.
    #[must_use]
    pub const fn id(&self) -> Option<BookingId> {
        self.id
    }

    /// Returns the guest name.
    #[must_use]
    pub fn guest_name(&self) -> &str {
        &self.guest_name
    }

    /// Returns the unit id.
    #[must_use]
    pub fn unit_id(&self) -> &str {
        &self.unit_id
    }

    /// Returns the check-in date.
    #[must_use]
    pub const fn check_in_date(&self) -> NaiveDate {
        self.check_in_date
    }

    /// Returns the number of nights.
    #[must_use]
    pub const fn number_of_nights(&self) -> u32 {
        self.number_of_nights
    }

    /// Returns the day after the last night.
    #[must_use]
    pub const fn check_out_date(&self) -> NaiveDate {
        self.check_out_date
    }

    /// Returns the set of dates this booking occupies.
    #[must_use]
    pub fn occupancy(&self) -> BTreeSet<NaiveDate> {
        occupancy::occupancy(self.check_in_date, self.number_of_nights)
    }
}

impl std::fmt::Display for Booking {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} in unit {} from {} for {} night(s)",
            self.guest_name, self.unit_id, self.check_in_date, self.number_of_nights
        )
    }
}

fn non_empty(field: &str, value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError {
            field: field.into(),
            message: format!("{field} must be non-empty after trimming whitespace"),
        });
    }
    Ok(trimmed.to_string())
}

/// A booking payload as received from a client.
///
/// # Examples
///
/// ```
/// use staybook::BookingRequest;
///
/// let json = r#"{"guest_name":"GuestA","unit_id":"1","check_in_date":"2023-05-21","number_of_nights":5}"#;
/// let request: BookingRequest = serde_json::from_str(json).unwrap();
/// let booking = request.into_booking().unwrap();
/// assert_eq!(booking.number_of_nights(), 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BookingRequest {
    /// Name of the guest.
    pub guest_name: String,
    /// Identifier of the unit.
    pub unit_id: String,
    /// Check-in date (`YYYY-MM-DD`).
    pub check_in_date: NaiveDate,
    /// Number of nights, at least 1.
    pub number_of_nights: u32,
}

impl BookingRequest {
    /// Validates the payload into a candidate booking.
    ///
    /// # Errors
    ///
    /// Returns an error under the same conditions as [`Booking::new`].
    pub fn into_booking(self) -> Result<Booking, ValidationError> {
        Booking::new(
            self.guest_name,
            self.unit_id,
            self.check_in_date,
            self.number_of_nights,
        )
    }
}

/// Error type for validation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The field that failed validation.
    pub field: String,
    /// A description of the validation failure.
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "validation error for '{}': {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}
