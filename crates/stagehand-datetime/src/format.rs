//! Pattern based formatting.

use time::format_description;

use crate::error::DateTimeResult;
use crate::zoned::ZonedDateTime;

/// A reusable formatter built from a format description pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateTimeFormatter {
    pattern: String,
}

impl DateTimeFormatter {
    /// Build a formatter from a pattern, validating the pattern eagerly.
    pub fn of_pattern(pattern: impl Into<String>) -> DateTimeResult<Self> {
        let pattern = pattern.into();
        format_description::parse(&pattern)?;
        Ok(Self { pattern })
    }

    /// Format a zoned date-time with this pattern.
    pub fn format(&self, value: &ZonedDateTime) -> DateTimeResult<String> {
        let items = format_description::parse(&self.pattern)?;
        Ok(value.0.format(&items)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::local::{LocalDate, LocalTime};
    use crate::zoned::ZoneId;

    #[test]
    fn formats_a_zoned_date_time() {
        let zoned = LocalDate::of(2017, 3, 1)
            .unwrap()
            .at_time(LocalTime::MIDNIGHT)
            .at_zone(&ZoneId::UTC);
        let formatter = DateTimeFormatter::of_pattern("[year]-[month]-[day]").unwrap();
        assert_eq!(formatter.format(&zoned).unwrap(), "2017-03-01");
    }

    #[test]
    fn bad_patterns_are_rejected_eagerly() {
        assert!(DateTimeFormatter::of_pattern("[not-a-component]").is_err());
    }
}
