//! Injected wall clock.
//!
//! Availability checks and relative labels depend on "today". Rather than reading
//! the global clock, every such operation takes a [`Clock`], so a caller can pin the
//! current instant.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

/// Source of the current instant.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Reads the system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Always returns the same instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self(now)
    }

    /// A clock frozen at UTC midnight of the given day.
    pub fn at_day(day: NaiveDate) -> Self {
        Self(day.and_time(NaiveTime::MIN).and_utc())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

impl<F> Clock for F
where
    F: Fn() -> DateTime<Utc> + Send + Sync,
{
    fn now(&self) -> DateTime<Utc> {
        self()
    }
}

/// The current UTC calendar day.
///
/// Hours, minutes, seconds and sub-seconds are discarded; the time zone of the
/// caller plays no part.
pub fn current_day(clock: &dyn Clock) -> NaiveDate {
    clock.now().date_naive()
}

/// The current day as an instant at 00:00:00 UTC.
pub fn current_day_start(clock: &dyn Clock) -> DateTime<Utc> {
    current_day(clock).and_time(NaiveTime::MIN).and_utc()
}
