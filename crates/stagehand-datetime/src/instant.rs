//! An instantaneous point on the epoch timeline.

use time::OffsetDateTime;

use crate::error::DateTimeResult;

/// A point on the timeline, anchored to the epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Instant(pub(crate) OffsetDateTime);

impl Instant {
    /// The instant `millis` milliseconds after the epoch.
    pub fn of_epoch_milli(millis: i64) -> DateTimeResult<Self> {
        Ok(Self(OffsetDateTime::from_unix_timestamp_nanos(
            millis as i128 * 1_000_000,
        )?))
    }

    /// The instant `seconds` seconds after the epoch.
    pub fn of_epoch_second(seconds: i64) -> DateTimeResult<Self> {
        Ok(Self(OffsetDateTime::from_unix_timestamp(seconds)?))
    }

    /// Seconds since the epoch.
    pub fn epoch_second(&self) -> i64 {
        self.0.unix_timestamp()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch_seconds_round_trip() {
        let instant = Instant::of_epoch_second(1_000_000).unwrap();
        assert_eq!(instant.epoch_second(), 1_000_000);
    }

    #[test]
    fn millis_truncate_to_seconds() {
        let instant = Instant::of_epoch_milli(1_500).unwrap();
        assert_eq!(instant.epoch_second(), 1);
    }

    #[test]
    fn second_and_milli_constructors_agree() {
        let from_seconds = Instant::of_epoch_second(42).unwrap();
        let from_millis = Instant::of_epoch_milli(42_000).unwrap();
        assert_eq!(from_seconds, from_millis);
    }
}
