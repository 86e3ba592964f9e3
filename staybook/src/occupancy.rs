//! Occupancy calculation.
//!
//! A stay of `n` nights starting on `D` occupies the dates `D, D+1, …, D+n-1`.
//! Two bookings conflict exactly when their occupancy sets intersect, which
//! [`conflicts`] decides from the half-open ranges `[check_in, check_out)`
//! without building either set.

use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::Booking;

#[cfg(test)]
mod proptests;

/// Returns the set of calendar dates covered by a stay.
///
/// The set contains `number_of_nights` consecutive dates starting at
/// `check_in_date`. A night count of zero yields the empty set.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use staybook::occupancy::occupancy;
///
/// let check_in = NaiveDate::from_ymd_opt(2023, 5, 21).unwrap();
/// let dates = occupancy(check_in, 3);
///
/// assert_eq!(dates.len(), 3);
/// assert!(dates.contains(&NaiveDate::from_ymd_opt(2023, 5, 23).unwrap()));
/// assert!(!dates.contains(&NaiveDate::from_ymd_opt(2023, 5, 24).unwrap()));
/// ```
#[must_use]
pub fn occupancy(check_in_date: NaiveDate, number_of_nights: u32) -> BTreeSet<NaiveDate> {
    check_in_date
        .iter_days()
        .take(usize::try_from(number_of_nights).unwrap_or(usize::MAX))
        .collect()
}

/// Returns true if the two bookings occupy at least one common date.
///
/// Constant time in the length of either stay.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use staybook::{occupancy::conflicts, Booking};
///
/// let may = |d| NaiveDate::from_ymd_opt(2023, 5, d).unwrap();
/// let first = Booking::new("GuestA", "1", may(21), 5).unwrap();
/// let overlapping = Booking::new("GuestB", "1", may(25), 2).unwrap();
/// let adjacent = Booking::new("GuestB", "1", may(26), 2).unwrap();
///
/// assert!(conflicts(&first, &overlapping));
/// assert!(!conflicts(&first, &adjacent));
/// ```
#[must_use]
pub fn conflicts(a: &Booking, b: &Booking) -> bool {
    a.check_in_date() < b.check_out_date() && b.check_in_date() < a.check_out_date()
}
