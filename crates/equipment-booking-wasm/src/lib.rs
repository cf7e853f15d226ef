//! WASM bindings for equipment-booking.
//!
//! Exposes availability, valid ranges and calendar markings to the JavaScript
//! booking screen via `wasm-bindgen`. Devices, themes and ranges cross the boundary
//! as JSON strings; days cross it as `YYYY-MM-DD` strings.
//!
//! Functions that depend on "today" take an optional `today` day string. When it is
//! absent the system clock is used.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p equipment-booking-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir pkg/ \
//!   target/wasm32-unknown-unknown/release/equipment_booking_wasm.wasm
//! ```

use chrono::{DateTime, NaiveDate, Utc};
use equipment_booking::{Clock, Device, EnglishLocalizer, FixedClock, SystemClock, ThemeColors};
use serde::Serialize;
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// Helpers: parse boundary values
// ---------------------------------------------------------------------------

fn js_error(context: &str, e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&format!("{}: {}", context, e))
}

fn parse_day(s: &str) -> Result<NaiveDate, JsValue> {
    equipment_booking::parse_day(s).map_err(|e| JsValue::from_str(&e.to_string()))
}

fn parse_device(json: &str) -> Result<Device, JsValue> {
    Device::from_json(json).map_err(|e| js_error("Invalid device JSON", e))
}

fn parse_theme(json: &str) -> Result<ThemeColors, JsValue> {
    serde_json::from_str(json).map_err(|e| js_error("Invalid theme JSON", e))
}

/// The clock for an optional pinned `today`.
fn clock_for(today: Option<String>) -> Result<Box<dyn Clock>, JsValue> {
    match today {
        Some(s) => Ok(Box::new(FixedClock::at_day(parse_day(&s)?))),
        None => Ok(Box::new(SystemClock)),
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value).map_err(|e| js_error("Serialization error", e))
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// The UTC calendar date of an RFC 3339 instant, as `YYYY-MM-DD`.
///
/// `"2020-03-05T00:00:00+01:00"` yields `"2020-03-04"`.
#[wasm_bindgen(js_name = "getISODate")]
pub fn get_iso_date(instant: &str) -> Result<String, JsValue> {
    let dt = DateTime::parse_from_rfc3339(instant)
        .map_err(|e| js_error(&format!("Invalid instant '{}'", instant), e))?;
    Ok(equipment_booking::iso_date(&dt.with_timezone(&Utc)))
}

/// Whether no reservation of the device covers today.
#[wasm_bindgen(js_name = "isEquipmentAvailable")]
pub fn is_equipment_available(device_json: &str, today: Option<String>) -> Result<bool, JsValue> {
    let device = parse_device(device_json)?;
    let clock = clock_for(today)?;
    Ok(equipment_booking::is_equipment_available(&device, clock.as_ref()))
}

/// The first day the device can be booked, as `YYYY-MM-DD`.
#[wasm_bindgen(js_name = "getFirstEquipmentAvailability")]
pub fn get_first_equipment_availability(
    device_json: &str,
    today: Option<String>,
) -> Result<String, JsValue> {
    let device = parse_device(device_json)?;
    let clock = clock_for(today)?;
    let day = equipment_booking::first_equipment_availability(&device, clock.as_ref());
    Ok(equipment_booking::iso_day(day))
}

/// English label of `date` relative to today ("today", "tomorrow", "the 14"...).
#[wasm_bindgen(js_name = "getRelativeDateString")]
pub fn get_relative_date_string(date: &str, today: Option<String>) -> Result<String, JsValue> {
    let date = parse_day(date)?;
    let clock = clock_for(today)?;
    Ok(equipment_booking::relative_date_string(
        date,
        clock.as_ref(),
        &EnglishLocalizer,
    ))
}

/// Valid selectable days between `start` and `end`.
///
/// Returns a JSON array of ascending `YYYY-MM-DD` strings. Without `device_json`
/// the full span is returned.
#[wasm_bindgen(js_name = "getValidRange")]
pub fn get_valid_range(
    start: &str,
    end: &str,
    device_json: Option<String>,
) -> Result<String, JsValue> {
    let start = parse_day(start)?;
    let end = parse_day(end)?;
    let device = device_json.as_deref().map(parse_device).transpose()?;
    to_json(&equipment_booking::valid_range(start, end, device.as_ref()))
}

/// Calendar markings for a JSON array of ascending day strings.
///
/// `theme_json` is `{primary, danger, textDisabled}`. Returns a JSON object keyed by
/// day, each value `{startingDay, endingDay, color}`.
#[wasm_bindgen(js_name = "generateMarkedDates")]
pub fn generate_marked_dates(
    is_selection: bool,
    theme_json: &str,
    range_json: &str,
) -> Result<String, JsValue> {
    let theme = parse_theme(theme_json)?;
    let range: Vec<String> =
        serde_json::from_str(range_json).map_err(|e| js_error("Invalid range JSON", e))?;
    to_json(&equipment_booking::generate_marked_dates(
        is_selection,
        &theme,
        &range,
    ))
}

/// Disabled markings for every reserved day of the device.
#[wasm_bindgen(js_name = "getLockedDates")]
pub fn get_locked_dates(device_json: &str, theme_json: &str) -> Result<String, JsValue> {
    let device = parse_device(device_json)?;
    let theme = parse_theme(theme_json)?;
    to_json(&equipment_booking::locked_dates(&device, &theme))
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEVICE: &str = r#"{"id":1,"name":"Petit barbecue","caution":100,
        "booked_at":[{"begin":"2020-07-07","end":"2020-07-10"},{"begin":"2020-07-13","end":"2020-07-15"}]}"#;

    #[test]
    fn iso_date_uses_utc() {
        assert_eq!(get_iso_date("2020-03-05T00:00:00+01:00").unwrap(), "2020-03-04");
    }

    #[test]
    fn availability_with_pinned_today() {
        let today = Some("2020-07-09".to_string());
        assert!(!is_equipment_available(DEVICE, today.clone()).unwrap());
        assert_eq!(
            get_first_equipment_availability(DEVICE, today).unwrap(),
            "2020-07-11"
        );
    }

    #[test]
    fn valid_range_as_json() {
        assert_eq!(
            get_valid_range("2020-07-11", "2020-07-15", Some(DEVICE.to_string())).unwrap(),
            r#"["2020-07-11","2020-07-12"]"#
        );
        assert_eq!(
            get_valid_range("2020-07-14", "2020-07-14", None).unwrap(),
            r#"["2020-07-14"]"#
        );
    }

    #[test]
    fn marked_dates_as_json() {
        let theme = r#"{"primary":"p","danger":"d","textDisabled":"t"}"#;
        let json = generate_marked_dates(true, theme, r#"["2020-07-11","2020-07-12"]"#).unwrap();
        assert_eq!(
            json,
            r#"{"2020-07-11":{"startingDay":true,"endingDay":false,"color":"p"},"2020-07-12":{"startingDay":false,"endingDay":true,"color":"p"}}"#
        );
    }

    #[test]
    fn relative_label_with_pinned_today() {
        assert_eq!(
            get_relative_date_string("2020-07-10", Some("2020-07-09".to_string())).unwrap(),
            "tomorrow"
        );
    }
}
