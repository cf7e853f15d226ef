//! # equipment-booking
//!
//! Day-granular booking engine for shared campus equipment.
//!
//! Given a [`Device`] and its existing reservations, the engine answers whether the
//! device is free today, when it is next free, and which contiguous run of days a
//! user can select between two calendar taps without crossing a reservation. It also
//! renders selections and reserved days into period markings for a calendar control.
//!
//! Every computation is pure. The only ambient input is the current time, which is
//! injected through the [`Clock`] trait so callers and tests can pin "today".
//!
//! ## Quick start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use equipment_booking::{valid_range, Device, FixedClock};
//!
//! let device: Device = serde_json::from_str(
//!     r#"{"id":1,"name":"Petit barbecue","caution":100,
//!         "booked_at":[{"begin":"2020-07-13","end":"2020-07-15"}]}"#,
//! )
//! .unwrap();
//!
//! let start = NaiveDate::from_ymd_opt(2020, 7, 11).unwrap();
//! let end = NaiveDate::from_ymd_opt(2020, 7, 15).unwrap();
//! assert_eq!(valid_range(start, end, Some(&device)), ["2020-07-11", "2020-07-12"]);
//!
//! let clock = FixedClock::at_day(NaiveDate::from_ymd_opt(2020, 7, 14).unwrap());
//! assert!(!equipment_booking::is_equipment_available(&device, &clock));
//! ```
//!
//! ## Modules
//!
//! - [`clock`] — Injected wall clock and the canonical "today"
//! - [`date`] — ISO day formatting and parsing (always UTC)
//! - [`device`] — Devices, reservations and user rents
//! - [`availability`] — Availability today and first free day
//! - [`range`] — Valid selectable ranges between two days
//! - [`marking`] — Calendar period markings
//! - [`relative`] — Labels relative to today, behind a [`Localizer`]
//! - [`selection`] — Calendar tap state machine and booking requests
//! - [`status`] — List-item status of a device
//! - [`error`] — Error types

pub mod availability;
pub mod clock;
pub mod date;
pub mod device;
pub mod error;
pub mod marking;
pub mod range;
pub mod relative;
pub mod selection;
pub mod status;

pub use availability::{first_equipment_availability, is_equipment_available};
pub use clock::{current_day, current_day_start, Clock, FixedClock, SystemClock};
pub use date::{iso_date, iso_day, parse_day};
pub use device::{BookingInterval, Device, RentedDevice};
pub use error::BookingError;
pub use marking::{generate_marked_dates, locked_dates, DateMarking, MarkedDates, ThemeColors};
pub use range::{valid_days, valid_range};
pub use relative::{relative_date_string, EnglishLocalizer, Localizer, RelativeDate};
pub use selection::{booking_label, BookingRequest, BookingSelection, SelectionChange};
pub use status::{user_rent_dates, DeviceStatus};
