//! Resolve message timestamps to the trip's local calendar date.
//!
//! The offset is a fixed constant (Japan does not observe DST), so no
//! timezone database is involved.

use chrono::{DateTime, FixedOffset, Utc};

/// Hours east of UTC used for the trip (JST).
pub const DEFAULT_UTC_OFFSET_HOURS: i32 = 9;

/// Date format of itinerary keys.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

const DAY_MS: i64 = 86_400_000;

/// Maps UTC millisecond timestamps to `YYYY-MM-DD` in a fixed offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeResolver {
    offset: FixedOffset,
}

impl TimeResolver {
    /// Resolver for a whole-hour offset east of UTC.
    ///
    /// Returns `None` when the offset is outside -23..=23 hours.
    pub fn with_offset_hours(hours: i32) -> Option<Self> {
        hours
            .checked_mul(3600)
            .and_then(FixedOffset::east_opt)
            .map(|offset| Self { offset })
    }

    pub fn offset(&self) -> FixedOffset {
        self.offset
    }

    /// Local calendar date for a UTC millisecond timestamp.
    ///
    /// Timestamps outside chrono's representable range saturate to the
    /// nearest instant it can represent.
    pub fn resolve_date(&self, timestamp_ms: i64) -> String {
        // Keep a day of headroom so shifting into the offset cannot overflow.
        let min = DateTime::<Utc>::MIN_UTC.timestamp_millis() + DAY_MS;
        let max = DateTime::<Utc>::MAX_UTC.timestamp_millis() - DAY_MS;
        let utc = DateTime::<Utc>::from_timestamp_millis(timestamp_ms.clamp(min, max))
            .unwrap_or_default();
        utc.with_timezone(&self.offset).format(DATE_FORMAT).to_string()
    }
}

impl Default for TimeResolver {
    fn default() -> Self {
        Self::with_offset_hours(DEFAULT_UTC_OFFSET_HOURS).expect("+09:00 is a valid offset")
    }
}

/// Resolve a UTC millisecond timestamp in the default +09:00 offset.
pub fn resolve_date(timestamp_ms: i64) -> String {
    TimeResolver::default().resolve_date(timestamp_ms)
}
