//! Human labels for a day relative to today ("today", "tomorrow", "the 14th"...).
//!
//! Wording is delegated to a [`Localizer`], which plays the part of the
//! application's translation catalog and month-name table.

use crate::clock::{current_day, Clock};
use chrono::{Datelike, NaiveDate};

pub const KEY_TODAY: &str = "screens.equipment.today";
pub const KEY_TOMORROW: &str = "screens.equipment.tomorrow";
pub const KEY_THIS_MONTH: &str = "screens.equipment.thisMonth";
pub const KEY_OTHER_MONTH: &str = "screens.equipment.otherMonth";
pub const KEY_OTHER_YEAR: &str = "screens.equipment.otherYear";
pub const KEY_BOOKING: &str = "screens.equipment.booking";
pub const KEY_BOOKING_DAY: &str = "screens.equipment.bookingDay";
pub const KEY_BOOKING_PERIOD: &str = "screens.equipment.bookingPeriod";
pub const KEY_BAIL: &str = "screens.equipment.bail";
pub const KEY_AVAILABLE: &str = "screens.equipment.available";

/// Translation lookup used to render labels.
pub trait Localizer {
    /// Name of a month, `month` being 1-based.
    fn month_name(&self, month: u32) -> String;

    /// Translate `key`, substituting the named arguments.
    fn translate(&self, key: &str, args: &[(&str, String)]) -> String;
}

/// Built-in English catalog.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishLocalizer;

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

impl Localizer for EnglishLocalizer {
    fn month_name(&self, month: u32) -> String {
        month
            .checked_sub(1)
            .and_then(|i| MONTHS.get(i as usize))
            .map(|name| name.to_string())
            .unwrap_or_default()
    }

    fn translate(&self, key: &str, args: &[(&str, String)]) -> String {
        let template = match key {
            KEY_TODAY => "today",
            KEY_TOMORROW => "tomorrow",
            KEY_THIS_MONTH => "the %{date}",
            KEY_OTHER_MONTH => "the %{date} %{month}",
            KEY_OTHER_YEAR => "the %{date} %{month} %{year}",
            KEY_BOOKING => "Tap the calendar to pick the booking period",
            KEY_BOOKING_DAY => "Booked for %{date}",
            KEY_BOOKING_PERIOD => "Booked from %{begin} to %{end}",
            KEY_BAIL => "Deposit: %{cost}€",
            KEY_AVAILABLE => "Available from %{date}",
            other => return other.to_string(),
        };
        interpolate(template, args)
    }
}

/// Replace every `%{name}` placeholder with its argument. Unknown placeholders are
/// left as written.
pub fn interpolate(template: &str, args: &[(&str, String)]) -> String {
    let mut out = template.to_string();
    for (name, value) in args {
        out = out.replace(&format!("%{{{}}}", name), value);
    }
    out
}

/// Where a day falls relative to today.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelativeDate {
    /// A later year.
    OtherYear { day: u32, month: u32, year: i32 },
    /// A later month of the current year.
    OtherMonth { day: u32, month: u32 },
    /// Two or more days ahead, within the current month.
    ThisMonth { day: u32 },
    Tomorrow,
    /// Today, or any day that matched none of the above.
    Today,
}

impl RelativeDate {
    /// Classify `date` against `today`.
    ///
    /// The checks run in order (year, then month, then day) on the signed
    /// differences of each calendar field, so exactly one bucket applies. A day in
    /// the past falls through to [`RelativeDate::Today`].
    pub fn classify(date: NaiveDate, today: NaiveDate) -> Self {
        let year_delta = date.year() - today.year();
        let month_delta = date.month() as i64 - today.month() as i64;
        let day_delta = date.day() as i64 - today.day() as i64;

        if year_delta > 0 {
            RelativeDate::OtherYear {
                day: date.day(),
                month: date.month(),
                year: date.year(),
            }
        } else if month_delta > 0 {
            RelativeDate::OtherMonth {
                day: date.day(),
                month: date.month(),
            }
        } else if day_delta > 1 {
            RelativeDate::ThisMonth { day: date.day() }
        } else if day_delta == 1 {
            RelativeDate::Tomorrow
        } else {
            RelativeDate::Today
        }
    }

    pub fn render(&self, localizer: &dyn Localizer) -> String {
        match *self {
            RelativeDate::OtherYear { day, month, year } => localizer.translate(
                KEY_OTHER_YEAR,
                &[
                    ("date", day.to_string()),
                    ("month", localizer.month_name(month)),
                    ("year", year.to_string()),
                ],
            ),
            RelativeDate::OtherMonth { day, month } => localizer.translate(
                KEY_OTHER_MONTH,
                &[
                    ("date", day.to_string()),
                    ("month", localizer.month_name(month)),
                ],
            ),
            RelativeDate::ThisMonth { day } => {
                localizer.translate(KEY_THIS_MONTH, &[("date", day.to_string())])
            }
            RelativeDate::Tomorrow => localizer.translate(KEY_TOMORROW, &[]),
            RelativeDate::Today => localizer.translate(KEY_TODAY, &[]),
        }
    }
}

/// Label `date` relative to the clock's current day.
pub fn relative_date_string(date: NaiveDate, clock: &dyn Clock, localizer: &dyn Localizer) -> String {
    RelativeDate::classify(date, current_day(clock)).render(localizer)
}
