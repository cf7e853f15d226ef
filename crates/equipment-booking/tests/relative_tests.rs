//! Tests for labels relative to today.

use chrono::NaiveDate;
use equipment_booking::relative::{
    KEY_OTHER_MONTH, KEY_OTHER_YEAR, KEY_THIS_MONTH, KEY_TODAY, KEY_TOMORROW,
};
use equipment_booking::{
    parse_day, relative_date_string, EnglishLocalizer, FixedClock, Localizer, RelativeDate,
};

// ── Helpers ─────────────────────────────────────────────────────────────────

fn day(s: &str) -> NaiveDate {
    parse_day(s).unwrap()
}

/// Answers each bucket with its index, so tests see which bucket fired.
struct BucketLocalizer;

impl Localizer for BucketLocalizer {
    fn month_name(&self, month: u32) -> String {
        format!("m{}", month)
    }

    fn translate(&self, key: &str, _args: &[(&str, String)]) -> String {
        match key {
            KEY_OTHER_YEAR => "0",
            KEY_OTHER_MONTH => "1",
            KEY_THIS_MONTH => "2",
            KEY_TOMORROW => "3",
            KEY_TODAY => "4",
            _ => "?",
        }
        .to_string()
    }
}

fn label(date: &str) -> String {
    let clock = FixedClock::at_day(day("2020-07-09"));
    relative_date_string(day(date), &clock, &BucketLocalizer)
}

// ── Buckets ─────────────────────────────────────────────────────────────────

#[test]
fn buckets_relative_to_july_9th() {
    assert_eq!(label("2020-07-09"), "4");
    assert_eq!(label("2020-07-10"), "3");
    assert_eq!(label("2020-07-11"), "2");
    assert_eq!(label("2020-07-30"), "2");
    assert_eq!(label("2020-08-30"), "1");
    assert_eq!(label("2020-11-10"), "1");
    assert_eq!(label("2021-11-10"), "0");
}

#[test]
fn year_check_wins_over_month_and_day() {
    // Same month and a later day, but next year.
    assert_eq!(label("2021-07-20"), "0");
    // Earlier month of a later year.
    assert_eq!(label("2021-01-01"), "0");
}

#[test]
fn past_days_fall_back_to_today() {
    assert_eq!(label("2020-07-01"), "4");
    assert_eq!(label("2020-07-08"), "4");
}

#[test]
fn classify_carries_the_date_fields() {
    let today = day("2020-07-09");
    assert_eq!(
        RelativeDate::classify(day("2021-11-10"), today),
        RelativeDate::OtherYear { day: 10, month: 11, year: 2021 }
    );
    assert_eq!(
        RelativeDate::classify(day("2020-08-30"), today),
        RelativeDate::OtherMonth { day: 30, month: 8 }
    );
    assert_eq!(
        RelativeDate::classify(day("2020-07-30"), today),
        RelativeDate::ThisMonth { day: 30 }
    );
}

// ── English wording ─────────────────────────────────────────────────────────

#[test]
fn english_labels() {
    let clock = FixedClock::at_day(day("2020-07-09"));
    let en = EnglishLocalizer;
    assert_eq!(relative_date_string(day("2020-07-09"), &clock, &en), "today");
    assert_eq!(relative_date_string(day("2020-07-10"), &clock, &en), "tomorrow");
    assert_eq!(relative_date_string(day("2020-07-14"), &clock, &en), "the 14");
    assert_eq!(relative_date_string(day("2020-08-02"), &clock, &en), "the 2 August");
    assert_eq!(
        relative_date_string(day("2021-01-05"), &clock, &en),
        "the 5 January 2021"
    );
}
