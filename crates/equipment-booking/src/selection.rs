//! Calendar tap handling for booking one device.
//!
//! The booking screen feeds every day the user taps into a [`BookingSelection`].
//! The first tap picks a single day, a second tap stretches it into the longest
//! valid range toward the tapped day, and any further tap starts over.

use crate::clock::Clock;
use crate::date::{iso_day, serde_day};
use crate::device::Device;
use crate::marking::{generate_marked_dates, MarkedDates, ThemeColors};
use crate::range::valid_days;
use crate::relative::{relative_date_string, Localizer, KEY_BOOKING, KEY_BOOKING_DAY, KEY_BOOKING_PERIOD};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// What a tap did to the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionChange {
    /// The day is already reserved; nothing changed.
    Ignored,
    /// Nothing was selected; the tapped day is now selected.
    Started,
    /// A single day was selected; the selection now runs toward the tapped day.
    Extended,
    /// The selection was emptied.
    Cleared,
}

/// Body of a booking request for the selected period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRequest {
    pub device: u64,
    #[serde(with = "serde_day")]
    pub begin: NaiveDate,
    #[serde(with = "serde_day")]
    pub end: NaiveDate,
}

/// The days a user has selected on a device's booking calendar.
#[derive(Debug, Clone)]
pub struct BookingSelection<'a> {
    device: &'a Device,
    days: Vec<NaiveDate>,
}

impl<'a> BookingSelection<'a> {
    pub fn new(device: &'a Device) -> Self {
        Self {
            device,
            days: Vec::new(),
        }
    }

    /// Apply a tap on `day`.
    ///
    /// Taps on days painted by [`locked_dates`](crate::marking::locked_dates) are
    /// ignored, including days of reversed reservations.
    pub fn select(&mut self, day: NaiveDate) -> SelectionChange {
        if self.device.is_locked_on(day) {
            debug!(device = self.device.id, %day, "tap on reserved day ignored");
            return SelectionChange::Ignored;
        }

        let change = match self.start() {
            None => {
                self.days = valid_days(day, day, Some(self.device));
                SelectionChange::Started
            }
            Some(start) if start == day => {
                self.days.clear();
                SelectionChange::Cleared
            }
            Some(start) if self.days.len() == 1 => {
                self.days = valid_days(start, day, Some(self.device));
                SelectionChange::Extended
            }
            Some(_) => {
                self.days.clear();
                SelectionChange::Cleared
            }
        };
        debug!(device = self.device.id, %day, ?change, selected = self.days.len(), "selection updated");
        change
    }

    /// Handle a "back" gesture. Clears a non-empty selection and reports whether the
    /// gesture was consumed.
    pub fn back(&mut self) -> bool {
        if self.days.is_empty() {
            return false;
        }
        self.days.clear();
        true
    }

    /// Selected days, ascending.
    pub fn days(&self) -> &[NaiveDate] {
        &self.days
    }

    pub fn start(&self) -> Option<NaiveDate> {
        self.days.first().copied()
    }

    pub fn end(&self) -> Option<NaiveDate> {
        self.days.last().copied()
    }

    /// Whether a booking can be submitted.
    pub fn can_book(&self) -> bool {
        !self.days.is_empty()
    }

    /// The selection as calendar markings.
    pub fn marked_dates(&self, theme: &ThemeColors) -> MarkedDates {
        let range: Vec<String> = self.days.iter().copied().map(iso_day).collect();
        generate_marked_dates(true, theme, &range)
    }

    /// The request to send for the current selection, if any.
    pub fn request(&self) -> Option<BookingRequest> {
        Some(BookingRequest {
            device: self.device.id,
            begin: self.start()?,
            end: self.end()?,
        })
    }

    /// Heading shown above the calendar.
    pub fn subheading(&self, clock: &dyn Clock, localizer: &dyn Localizer) -> String {
        match (self.start(), self.end()) {
            (Some(start), Some(end)) => booking_label(start, end, clock, localizer),
            _ => localizer.translate(KEY_BOOKING, &[]),
        }
    }
}

/// "Booked for <day>" or "Booked from <begin> to <end>", with days relative to today.
pub fn booking_label(
    start: NaiveDate,
    end: NaiveDate,
    clock: &dyn Clock,
    localizer: &dyn Localizer,
) -> String {
    if start != end {
        localizer.translate(
            KEY_BOOKING_PERIOD,
            &[
                ("begin", relative_date_string(start, clock, localizer)),
                ("end", relative_date_string(end, clock, localizer)),
            ],
        )
    } else {
        localizer.translate(
            KEY_BOOKING_DAY,
            &[("date", relative_date_string(start, clock, localizer))],
        )
    }
}
