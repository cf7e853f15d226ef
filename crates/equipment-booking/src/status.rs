//! Status line of a device in the equipment list.

use crate::availability::{first_equipment_availability, is_equipment_available};
use crate::clock::Clock;
use crate::device::{Device, RentedDevice};
use crate::relative::{relative_date_string, Localizer, KEY_AVAILABLE, KEY_BAIL};
use crate::selection::booking_label;
use chrono::NaiveDate;

/// The current user's reservation dates for `device`.
///
/// When several rents refer to the device, the last one listed wins.
pub fn user_rent_dates(device: &Device, rents: &[RentedDevice]) -> Option<(NaiveDate, NaiveDate)> {
    rents
        .iter()
        .rev()
        .find(|rent| rent.device_id == device.id)
        .map(|rent| (rent.begin, rent.end))
}

/// How a device shows up in the equipment list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceStatus {
    /// The current user holds a reservation on it.
    Rented { begin: NaiveDate, end: NaiveDate },
    /// Free today.
    Available,
    /// Reserved today, free again from the given day.
    AvailableFrom(NaiveDate),
}

impl DeviceStatus {
    pub fn of(device: &Device, rents: &[RentedDevice], clock: &dyn Clock) -> Self {
        if let Some((begin, end)) = user_rent_dates(device, rents) {
            DeviceStatus::Rented { begin, end }
        } else if is_equipment_available(device, clock) {
            DeviceStatus::Available
        } else {
            DeviceStatus::AvailableFrom(first_equipment_availability(device, clock))
        }
    }

    pub fn description(
        &self,
        device: &Device,
        clock: &dyn Clock,
        localizer: &dyn Localizer,
    ) -> String {
        match *self {
            DeviceStatus::Rented { begin, end } => booking_label(begin, end, clock, localizer),
            DeviceStatus::Available => {
                localizer.translate(KEY_BAIL, &[("cost", device.caution.to_string())])
            }
            DeviceStatus::AvailableFrom(day) => localizer.translate(
                KEY_AVAILABLE,
                &[("date", relative_date_string(day, clock, localizer))],
            ),
        }
    }
}
