//! Valid selectable ranges between two calendar taps.
//!
//! The user taps two days, in any order. The range walks from the first tap toward
//! the second and stops just before the first reservation it runs into, so a
//! selection never overlaps an existing booking.

use crate::date::iso_day;
use crate::device::Device;
use chrono::{NaiveDate, TimeDelta};
use tracing::debug;

/// Days between `start` and `end` (inclusive) that can be selected together,
/// formatted as `YYYY-MM-DD`, in ascending order.
///
/// See [`valid_days`] for the walking rules.
pub fn valid_range(start: NaiveDate, end: NaiveDate, device: Option<&Device>) -> Vec<String> {
    valid_days(start, end, device)
        .into_iter()
        .map(iso_day)
        .collect()
}

/// Days between `start` and `end` (inclusive) that can be selected together, in
/// ascending order.
///
/// The walk goes from `start` toward `end`, which may lie on either side of it.
/// With a device, the walk is cut short by the first conflicting reservation found
/// in scan order:
///
/// - walking forward, `booked_at` is scanned front to back for a `begin` strictly
///   between `start` and the day after `end`; the walk stops before that `begin`;
/// - walking backward, `booked_at` is scanned back to front for an `end` strictly
///   between the day before `end` and `start`; the walk stops after that `end`.
///
/// "First in scan order" is not "nearest": with an unsorted `booked_at`, a farther
/// reservation listed earlier wins. A reservation touching `start` exactly does not
/// cut the walk, and `start` itself is always included. Without a device the whole
/// inclusive span is returned.
pub fn valid_days(start: NaiveDate, end: NaiveDate, device: Option<&Device>) -> Vec<NaiveDate> {
    let step = TimeDelta::days(if start <= end { 1 } else { -1 });
    let forward = start <= end;
    // Exclusive bound, one day past `end` in the direction of travel. `None` when
    // that day is past the representable range, i.e. the walk is unbounded.
    let mut limit = end.checked_add_signed(step);

    if let Some(device) = device {
        let conflict = if forward {
            device
                .booked_at
                .iter()
                .map(|interval| interval.begin)
                .find(|&begin| start < begin && limit.is_none_or(|limit| limit > begin))
        } else {
            device
                .booked_at
                .iter()
                .rev()
                .map(|interval| interval.end)
                .find(|&booked_end| start > booked_end && limit.is_none_or(|limit| limit < booked_end))
        };
        if let Some(boundary) = conflict {
            debug!(device = device.id, %start, %end, %boundary, "range cut by reservation");
            limit = Some(boundary);
        }
    }

    let before_limit = |day: NaiveDate| match limit {
        Some(limit) if forward => day < limit,
        Some(limit) => day > limit,
        None => true,
    };

    let mut days = Vec::new();
    let mut cursor = Some(start);
    while let Some(day) = cursor.filter(|&day| before_limit(day)) {
        days.push(day);
        cursor = day.checked_add_signed(step);
    }
    if !forward {
        days.reverse();
    }
    days
}
