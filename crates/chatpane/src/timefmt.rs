//! Clock-time formatting with an explicit zone.
//!
//! Timestamps are stored as UTC instants; display always goes through an
//! explicit [`FixedOffset`] so the core never consults the system zone.

use chrono::{DateTime, FixedOffset, Utc};

/// Zero-padded 24-hour `HH:MM` in the given zone.
pub fn time_string(time: &DateTime<Utc>, zone: &FixedOffset) -> String {
    time.with_timezone(zone).format("%H:%M").to_string()
}

/// Zero-padded 24-hour `HH:MM:SS` in the given zone.
pub fn timestamp_string(time: &DateTime<Utc>, zone: &FixedOffset) -> String {
    time.with_timezone(zone).format("%H:%M:%S").to_string()
}
