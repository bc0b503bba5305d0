//! A `java.time` shaped surface over the [`time`] crate.
//!
//! This crate declares the date and time API the front-end layer of this
//! project compiles against: instants, local dates and times, zoned date
//! times, durations, and the unit and weekday enumerations. Every operation
//! delegates directly to [`time`]; no calendar arithmetic, leap-year rule,
//! or offset handling is implemented here.
//!
//! Nothing in the stagehand binary depends on this crate. It exists for
//! consumers that type-check against this surface.

pub mod duration;
pub mod error;
pub mod format;
pub mod instant;
pub mod local;
pub mod unit;
pub mod zoned;

pub use duration::Duration;
pub use error::{DateTimeError, DateTimeResult};
pub use format::DateTimeFormatter;
pub use instant::Instant;
pub use local::{LocalDate, LocalDateTime, LocalTime};
pub use unit::{ChronoUnit, DayOfWeek};
pub use zoned::{ZoneId, ZonedDateTime};
