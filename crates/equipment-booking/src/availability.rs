//! Availability of a device relative to today.

use crate::clock::{current_day, Clock};
use crate::date::shift;
use crate::device::Device;
use chrono::NaiveDate;
use tracing::trace;

/// Whether no reservation of `device` covers today.
///
/// Every interval is checked; `booked_at` is not assumed to be sorted.
pub fn is_equipment_available(device: &Device, clock: &dyn Clock) -> bool {
    let today = current_day(clock);
    let available = !device.is_booked_on(today);
    trace!(device = device.id, %today, available, "checked availability");
    available
}

/// The first day, on or after today, from which `device` can be booked.
///
/// Walks `booked_at` once, in list order: whenever the current candidate is on or
/// after an interval's `begin`, the candidate moves to the day after its `end`.
/// The result is only the true first free day when reservations are listed
/// chronologically; an out-of-order list is not re-scanned.
pub fn first_equipment_availability(device: &Device, clock: &dyn Clock) -> NaiveDate {
    let mut first = current_day(clock);
    for interval in &device.booked_at {
        if first >= interval.begin {
            first = shift(interval.end, 1);
        }
    }
    trace!(device = device.id, %first, "first availability");
    first
}
