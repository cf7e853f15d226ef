//! Devices and their reservations.
//!
//! These mirror the JSON records served by the equipment endpoints. Day fields are
//! parsed once, at deserialization, so the engine only ever sees typed days.

use crate::date::serde_day;
use crate::error::Result;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One existing reservation, inclusive of both `begin` and `end`.
///
/// `begin <= end` is expected but not checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingInterval {
    #[serde(with = "serde_day")]
    pub begin: NaiveDate,
    #[serde(with = "serde_day")]
    pub end: NaiveDate,
}

impl BookingInterval {
    pub fn new(begin: NaiveDate, end: NaiveDate) -> Self {
        Self { begin, end }
    }

    /// Whether `day` falls within `[begin, end]`. Always false for a reversed
    /// interval.
    pub fn contains(&self, day: NaiveDate) -> bool {
        !(day < self.begin || day > self.end)
    }

    /// Whether `day` lies between the two bounds, whichever comes first. This is the
    /// span a calendar paints as locked.
    pub fn covers(&self, day: NaiveDate) -> bool {
        day >= self.begin.min(self.end) && day <= self.begin.max(self.end)
    }
}

/// A bookable piece of equipment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    pub id: u64,
    pub name: String,
    /// Deposit asked when renting, in euros.
    pub caution: u32,
    /// Existing reservations. May be empty, unsorted or overlapping.
    #[serde(default)]
    pub booked_at: Vec<BookingInterval>,
}

impl Device {
    /// Parse a single device from its JSON record.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Whether `day` is covered by any reservation.
    pub fn is_booked_on(&self, day: NaiveDate) -> bool {
        self.booked_at.iter().any(|interval| interval.contains(day))
    }

    /// Whether `day` is drawn as locked on the booking calendar.
    pub fn is_locked_on(&self, day: NaiveDate) -> bool {
        self.booked_at.iter().any(|interval| interval.covers(day))
    }
}

/// A reservation held by the current user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RentedDevice {
    pub device_id: u64,
    pub device_name: String,
    #[serde(with = "serde_day")]
    pub begin: NaiveDate,
    #[serde(with = "serde_day")]
    pub end: NaiveDate,
}

impl RentedDevice {
    pub fn list_from_json(json: &str) -> Result<Vec<Self>> {
        Ok(serde_json::from_str(json)?)
    }
}
