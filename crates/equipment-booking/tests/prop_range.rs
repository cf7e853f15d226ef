//! Property-based tests for valid ranges and markings using proptest.
//!
//! These check invariants that hold for any pair of days and any reservation list,
//! not just the examples in `range_tests.rs`.

use chrono::{Datelike, NaiveDate, TimeDelta};
use equipment_booking::{
    generate_marked_dates, iso_day, valid_days, valid_range, BookingInterval, Device,
    RelativeDate, ThemeColors,
};
use proptest::prelude::*;

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

/// A day within 2020-2021, as an offset from 2020-01-01.
fn arb_day() -> impl Strategy<Value = NaiveDate> {
    (0i64..730).prop_map(|offset| base() + TimeDelta::days(offset))
}

fn arb_interval() -> impl Strategy<Value = BookingInterval> {
    (arb_day(), 0i64..10).prop_map(|(begin, len)| BookingInterval::new(begin, begin + TimeDelta::days(len)))
}

fn arb_device() -> impl Strategy<Value = Device> {
    prop::collection::vec(arb_interval(), 0..8).prop_map(|booked_at| Device {
        id: 1,
        name: "Petit barbecue".to_string(),
        caution: 100,
        booked_at,
    })
}

fn base() -> NaiveDate {
    NaiveDate::from_ymd_opt(2020, 1, 1).unwrap()
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn no_device_span_is_full_and_order_independent(a in arb_day(), b in arb_day()) {
        let forward = valid_range(a, b, None);
        let backward = valid_range(b, a, None);
        prop_assert_eq!(&forward, &backward);
        prop_assert_eq!(forward.len() as i64, (b - a).num_days().abs() + 1);
        prop_assert_eq!(forward.first().cloned(), Some(iso_day(a.min(b))));
        prop_assert_eq!(forward.last().cloned(), Some(iso_day(a.max(b))));
    }

    #[test]
    fn ranges_are_ascending_contiguous_and_contain_start(
        a in arb_day(),
        b in arb_day(),
        device in arb_device(),
    ) {
        let days = valid_days(a, b, Some(&device));
        prop_assert!(days.contains(&a));
        for pair in days.windows(2) {
            prop_assert_eq!(pair[1] - pair[0], TimeDelta::days(1));
        }
        // Never wider than the uncut span.
        prop_assert!(days.iter().all(|d| *d >= a.min(b) && *d <= a.max(b)));
    }

    #[test]
    fn single_day_range_is_that_day(a in arb_day(), device in arb_device()) {
        prop_assert_eq!(valid_range(a, a, Some(&device)), vec![iso_day(a)]);
    }

    #[test]
    fn sorted_disjoint_bookings_are_never_crossed(
        a in arb_day(),
        b in arb_day(),
        device in arb_device(),
    ) {
        // Normalize into sorted, non-overlapping reservations not touching `a`.
        let mut booked: Vec<BookingInterval> = device.booked_at.clone();
        booked.sort_by_key(|i| i.begin);
        let mut disjoint: Vec<BookingInterval> = Vec::new();
        for interval in booked {
            if interval.contains(a) {
                continue;
            }
            match disjoint.last() {
                Some(last) if interval.begin <= last.end => {}
                _ => disjoint.push(interval),
            }
        }
        let device = Device { booked_at: disjoint, ..device };

        let days = valid_days(a, b, Some(&device));
        prop_assert!(days.iter().all(|d| !device.is_booked_on(*d)));
    }

    #[test]
    fn markings_have_one_entry_per_day(a in arb_day(), b in arb_day(), selection in any::<bool>()) {
        let range = valid_range(a, b, None);
        let marked = generate_marked_dates(selection, &ThemeColors::default(), &range);
        prop_assert_eq!(marked.len(), range.len());
        prop_assert_eq!(marked.values().filter(|m| m.starting_day).count(), 1);
        prop_assert_eq!(marked.values().filter(|m| m.ending_day).count(), 1);
    }

    #[test]
    fn future_days_land_in_one_bucket(today in arb_day(), ahead in 0i64..800) {
        let date = today + TimeDelta::days(ahead);
        let bucket = RelativeDate::classify(date, today);
        if ahead == 0 {
            prop_assert_eq!(bucket, RelativeDate::Today);
        } else {
            prop_assert!(!matches!(bucket, RelativeDate::Today));
        }
        if ahead == 1 && date.month() == today.month() {
            prop_assert_eq!(bucket, RelativeDate::Tomorrow);
        }
    }
}
