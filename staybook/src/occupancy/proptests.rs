//! Property-based tests for occupancy sets.

use super::{conflicts, occupancy};
use crate::Booking;
use chrono::{Days, NaiveDate};
use proptest::prelude::*;

/// Check-in dates are drawn as day offsets from this anchor.
fn anchor() -> NaiveDate {
    NaiveDate::from_ymd_opt(2000, 1, 1).unwrap()
}

fn date_strategy() -> impl Strategy<Value = NaiveDate> {
    (0u64..20_000).prop_map(|offset| anchor() + Days::new(offset))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // Exactly n dates for n nights
    #[test]
    fn occupancy_has_one_date_per_night(check_in in date_strategy(), nights in 1u32..400) {
        prop_assert_eq!(occupancy(check_in, nights).len(), nights as usize);
    }

    // occupancy(D, n) = {D} ∪ occupancy(D+1, n-1)
    #[test]
    fn occupancy_is_recursive(check_in in date_strategy(), nights in 2u32..400) {
        let mut expected = occupancy(check_in + Days::new(1), nights - 1);
        expected.insert(check_in);
        prop_assert_eq!(occupancy(check_in, nights), expected);
    }

    // First date is the check-in, last is the day before check-out
    #[test]
    fn occupancy_bounds(check_in in date_strategy(), nights in 1u32..400) {
        let booking = Booking::new("guest", "unit", check_in, nights).unwrap();
        let dates = booking.occupancy();
        prop_assert_eq!(dates.first().copied(), Some(check_in));
        let check_out = booking.check_out_date();
        prop_assert_eq!(dates.last().copied(), check_out.pred_opt());
        prop_assert!(!dates.contains(&check_out));
    }

    // Stays that end before the other begins never conflict, whoever holds them
    #[test]
    fn disjoint_stays_never_conflict(
        check_in in date_strategy(),
        nights in 1u32..60,
        gap in 0u64..60,
        other_nights in 1u32..60,
        same_guest in any::<bool>(),
        same_unit in any::<bool>(),
    ) {
        let first = Booking::new("GuestA", "1", check_in, nights).unwrap();
        let later_start = first.check_out_date() + Days::new(gap);
        let guest = if same_guest { "GuestA" } else { "GuestB" };
        let unit = if same_unit { "1" } else { "2" };
        let second = Booking::new(guest, unit, later_start, other_nights).unwrap();

        prop_assert!(!conflicts(&first, &second));
        prop_assert!(!conflicts(&second, &first));
    }

    // Conflict is symmetric and matches a plain interval-overlap test
    #[test]
    fn conflict_matches_interval_overlap(
        a_start in 0u64..200,
        a_nights in 1u32..30,
        b_start in 0u64..200,
        b_nights in 1u32..30,
    ) {
        let a = Booking::new("GuestA", "1", anchor() + Days::new(a_start), a_nights).unwrap();
        let b = Booking::new("GuestB", "1", anchor() + Days::new(b_start), b_nights).unwrap();
        let a_end = a_start + u64::from(a_nights);
        let b_end = b_start + u64::from(b_nights);
        let overlap = a_start < b_end && b_start < a_end;

        prop_assert_eq!(conflicts(&a, &b), overlap);
        prop_assert_eq!(conflicts(&b, &a), overlap);
    }
}
