//! A span of time measured in whole units.

/// An amount of time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Duration(pub(crate) time::Duration);

impl Duration {
    /// A duration of `days` days.
    pub fn of_days(days: i64) -> Self {
        Self(time::Duration::days(days))
    }

    /// A duration of `hours` hours.
    pub fn of_hours(hours: i64) -> Self {
        Self(time::Duration::hours(hours))
    }

    /// A duration of `minutes` minutes.
    pub fn of_minutes(minutes: i64) -> Self {
        Self(time::Duration::minutes(minutes))
    }

    /// Whole minutes in this duration.
    pub fn to_minutes(&self) -> i64 {
        self.0.whole_minutes()
    }

    /// Whole hours in this duration.
    pub fn to_hours(&self) -> i64 {
        self.0.whole_hours()
    }
}
