//! ISO day strings and day arithmetic.
//!
//! All calendar days are UTC days. A `YYYY-MM-DD` string always denotes the UTC
//! midnight instant of that day, and formatting an instant always goes through its
//! UTC representation, never the host's local calendar.

use crate::error::{BookingError, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeDelta, TimeZone, Utc};

/// `YYYY-MM-DD`.
pub const ISO_DAY_FORMAT: &str = "%Y-%m-%d";

/// The UTC calendar date of an instant, as `YYYY-MM-DD`.
///
/// The instant is converted to UTC first, so a local midnight in a zone east of
/// UTC formats as the previous day: `2020-03-05T00:00:00+01:00` is
/// `2020-03-04T23:00:00Z` and yields `"2020-03-04"`.
pub fn iso_date<Tz: TimeZone>(instant: &DateTime<Tz>) -> String {
    iso_day(instant.naive_utc().date())
}

/// Format a calendar day as `YYYY-MM-DD`.
pub fn iso_day(day: NaiveDate) -> String {
    day.format(ISO_DAY_FORMAT).to_string()
}

/// Parse a day string into a UTC calendar day.
///
/// Accepts `YYYY-MM-DD` with or without zero padding (`2020-07-8`), an RFC 3339
/// instant (its UTC date is kept), or a naive `YYYY-MM-DDTHH:MM:SS` read as UTC.
///
/// # Errors
/// Returns `BookingError::InvalidDate` if none of the forms match.
pub fn parse_day(s: &str) -> Result<NaiveDate> {
    let s = s.trim();
    if let Ok(day) = NaiveDate::parse_from_str(s, ISO_DAY_FORMAT) {
        return Ok(day);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc).date_naive());
    }
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
        .map(|ndt| ndt.date())
        .map_err(|e| BookingError::InvalidDate(format!("'{}': {}", s, e)))
}

/// Move `day` by `days` calendar days, saturating at the representable range.
pub(crate) fn shift(day: NaiveDate, days: i64) -> NaiveDate {
    day.checked_add_signed(TimeDelta::days(days))
        .unwrap_or(if days >= 0 {
            NaiveDate::MAX
        } else {
            NaiveDate::MIN
        })
}

/// Serde adapter storing a [`NaiveDate`] as a `YYYY-MM-DD` string, parsed with
/// [`parse_day`].
pub mod serde_day {
    use super::{iso_day, parse_day};
    use chrono::NaiveDate;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(day: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&iso_day(*day))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_day(&raw).map_err(de::Error::custom)
    }
}
