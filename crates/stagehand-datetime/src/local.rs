//! The local (zone-less) temporal types.

use std::cmp::Ordering;

use time::{Date, Month, PrimitiveDateTime, Time};

use crate::duration::Duration;
use crate::error::DateTimeResult;
use crate::instant::Instant;
use crate::unit::{ChronoUnit, DayOfWeek};
use crate::zoned::{ZoneId, ZonedDateTime};

/// A time of day without a date or zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LocalTime(pub(crate) Time);

impl LocalTime {
    /// Start of the day.
    pub const MIDNIGHT: LocalTime = LocalTime(Time::MIDNIGHT);

    /// The time of day `hour:minute:second`.
    pub fn of(hour: u8, minute: u8, second: u8) -> DateTimeResult<Self> {
        Ok(Self(Time::from_hms(hour, minute, second)?))
    }

    /// Order this time against another.
    pub fn compare_to(&self, other: &LocalTime) -> Ordering {
        self.cmp(other)
    }

    /// Zero out every field smaller than `unit`.
    pub fn truncated_to(&self, unit: ChronoUnit) -> Self {
        let time = self.0;
        let truncated = match unit {
            ChronoUnit::Days => Time::MIDNIGHT,
            ChronoUnit::Hours => hms(time.hour(), 0, 0),
            ChronoUnit::Minutes => hms(time.hour(), time.minute(), 0),
            ChronoUnit::Seconds => hms(time.hour(), time.minute(), time.second()),
        };
        Self(truncated)
    }

    /// This time `hours` hours later, wrapping around midnight.
    pub fn plus_hours(&self, hours: i64) -> Self {
        Self(self.0 + time::Duration::hours(hours))
    }

    /// Whether this is the same time of day as `other`.
    pub fn equals(&self, other: &LocalTime) -> bool {
        self == other
    }
}

fn hms(hour: u8, minute: u8, second: u8) -> Time {
    Time::from_hms(hour, minute, second).expect("components taken from a valid time")
}

impl From<LocalDateTime> for LocalTime {
    fn from(date_time: LocalDateTime) -> Self {
        Self(date_time.0.time())
    }
}

impl From<&LocalDateTime> for LocalTime {
    fn from(date_time: &LocalDateTime) -> Self {
        Self(date_time.0.time())
    }
}

/// A calendar date without a time or zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LocalDate(pub(crate) Date);

impl LocalDate {
    /// The date `year-month-day`, with `month` starting at 1.
    pub fn of(year: i32, month: u8, day: u8) -> DateTimeResult<Self> {
        let month = Month::try_from(month)?;
        Ok(Self(Date::from_calendar_date(year, month, day)?))
    }

    /// The date of `instant` in the zone `zone`.
    pub fn of_instant(instant: &Instant, zone: &ZoneId) -> Self {
        Self(instant.0.to_offset(zone.offset()).date())
    }

    /// The weekday this date falls on.
    pub fn day_of_week(&self) -> DayOfWeek {
        DayOfWeek::from(self.0.weekday())
    }

    /// This date `days` days later.
    pub fn plus_days(&self, days: i64) -> Self {
        Self(self.0 + time::Duration::days(days))
    }

    /// Attach a time of day.
    pub fn at_time(&self, time: LocalTime) -> LocalDateTime {
        LocalDateTime(PrimitiveDateTime::new(self.0, time.0))
    }

    /// The signed duration from this date until `other`.
    pub fn until(&self, other: &LocalDate) -> Duration {
        Duration(other.0 - self.0)
    }

    /// Whether this is the same date as `other`.
    pub fn equals(&self, other: &LocalDate) -> bool {
        self == other
    }

    /// Day of the month, starting at 1.
    pub fn day_of_month(&self) -> u8 {
        self.0.day()
    }

    /// Month of the year, starting at 1.
    pub fn month(&self) -> u8 {
        u8::from(self.0.month())
    }

    /// Calendar year.
    pub fn year(&self) -> i32 {
        self.0.year()
    }
}

/// A date with a time of day, without a zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LocalDateTime(pub(crate) PrimitiveDateTime);

impl LocalDateTime {
    /// Interpret this date-time in the zone `zone`.
    pub fn at_zone(&self, zone: &ZoneId) -> ZonedDateTime {
        ZonedDateTime(self.0.assume_offset(zone.offset()))
    }
}
