//! Period markings for a calendar control.
//!
//! A marking map associates each `YYYY-MM-DD` day with whether it opens or closes a
//! period and the color to paint it with. Maps are recomputed on every interaction
//! and never stored.

use crate::device::Device;
use crate::range::valid_range;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// How one day of a period is drawn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateMarking {
    pub starting_day: bool,
    pub ending_day: bool,
    pub color: String,
}

/// Markings keyed by `YYYY-MM-DD`, in calendar order.
pub type MarkedDates = BTreeMap<String, DateMarking>;

/// The theme colors used for markings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeColors {
    /// Endpoints of the user's selection.
    pub primary: String,
    /// Interior days of the user's selection.
    pub danger: String,
    /// Days that cannot be selected.
    pub text_disabled: String,
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self {
            primary: "#be1522".to_string(),
            danger: "#dc3545".to_string(),
            text_disabled: "#a3a3a3".to_string(),
        }
    }
}

/// Mark every day of an ascending `range` as one period.
///
/// The first day is `starting_day`, the last is `ending_day`; a one-day range is
/// both. A selection paints its endpoints `primary` and its interior `danger`; a
/// non-selection paints every day `text_disabled`.
pub fn generate_marked_dates(
    is_selection: bool,
    theme: &ThemeColors,
    range: &[String],
) -> MarkedDates {
    let last = range.len().saturating_sub(1);
    range
        .iter()
        .enumerate()
        .map(|(i, day)| {
            let is_start = i == 0;
            let is_end = i == last;
            let color = if is_selection && (is_start || is_end) {
                &theme.primary
            } else if is_selection {
                &theme.danger
            } else {
                &theme.text_disabled
            };
            (
                day.clone(),
                DateMarking {
                    starting_day: is_start,
                    ending_day: is_end,
                    color: color.clone(),
                },
            )
        })
        .collect()
}

/// Mark every reserved day of `device` as disabled.
///
/// Each reservation becomes its own period. When reservations share a day, the one
/// listed later decides how that day is drawn.
pub fn locked_dates(device: &Device, theme: &ThemeColors) -> MarkedDates {
    let mut locked = MarkedDates::new();
    for interval in &device.booked_at {
        let range = valid_range(interval.begin, interval.end, None);
        locked.extend(generate_marked_dates(false, theme, &range));
    }
    locked
}
