//! Zone-aware types.

use time::{OffsetDateTime, UtcOffset};

use crate::instant::Instant;

/// A zone identifier, carried as a fixed offset from UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ZoneId(UtcOffset);

impl ZoneId {
    /// Coordinated universal time.
    pub const UTC: ZoneId = ZoneId(UtcOffset::UTC);

    /// The offset the host system currently reports, or UTC when it cannot
    /// be determined.
    pub fn system_default() -> Self {
        Self(UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC))
    }

    /// A zone with a fixed offset.
    pub fn of_offset(offset: UtcOffset) -> Self {
        Self(offset)
    }

    pub(crate) fn offset(&self) -> UtcOffset {
        self.0
    }
}

/// A date-time anchored to a zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ZonedDateTime(pub(crate) OffsetDateTime);

impl ZonedDateTime {
    /// The instant this zoned date-time refers to.
    pub fn to_instant(&self) -> Instant {
        Instant(self.0.to_offset(UtcOffset::UTC))
    }
}
