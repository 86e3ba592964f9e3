//! Common test utilities for integration tests.
//!
//! This module provides helper functions and fixture builders for testing
//! the staybook library.

pub mod database;

use chrono::NaiveDate;
use staybook::Booking;

/// Returns the given day of May 2023.
#[allow(dead_code)]
pub fn may(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 5, day).unwrap()
}

/// Builder for creating test bookings with sensible defaults.
///
/// Defaults: guest `GuestA`, unit `1`, check-in 2023-05-21, 5 nights.
#[allow(dead_code)]
pub struct BookingFixture {
    guest_name: String,
    unit_id: String,
    check_in_date: NaiveDate,
    number_of_nights: u32,
}

#[allow(dead_code)]
impl BookingFixture {
    /// Creates a new fixture builder with default values.
    pub fn new() -> Self {
        Self {
            guest_name: "GuestA".into(),
            unit_id: "1".into(),
            check_in_date: may(21),
            number_of_nights: 5,
        }
    }

    /// Sets the guest name.
    pub fn guest(mut self, guest_name: &str) -> Self {
        self.guest_name = guest_name.into();
        self
    }

    /// Sets the unit id.
    pub fn unit(mut self, unit_id: &str) -> Self {
        self.unit_id = unit_id.into();
        self
    }

    /// Sets the check-in date.
    pub fn check_in(mut self, check_in_date: NaiveDate) -> Self {
        self.check_in_date = check_in_date;
        self
    }

    /// Sets the number of nights.
    pub fn nights(mut self, number_of_nights: u32) -> Self {
        self.number_of_nights = number_of_nights;
        self
    }

    /// Builds the candidate booking.
    pub fn build(self) -> Booking {
        Booking::new(
            self.guest_name,
            self.unit_id,
            self.check_in_date,
            self.number_of_nights,
        )
        .unwrap()
    }
}

impl Default for BookingFixture {
    fn default() -> Self {
        Self::new()
    }
}
