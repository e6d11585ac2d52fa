//! Date/time utilities for the forum.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;

/// Date format used for registration and ban dates (`17.02.2026`).
pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// Check whether a timezone name can be parsed.
pub fn is_valid_timezone(timezone: &str) -> bool {
    timezone.parse::<Tz>().is_ok()
}

/// Format a DateTime<Utc> to the specified timezone.
///
/// Falls back to UTC when the timezone name is unknown.
pub fn format_utc_datetime(dt: &DateTime<Utc>, timezone: &str, format: &str) -> String {
    let tz: Tz = match timezone.parse() {
        Ok(tz) => tz,
        Err(_) => return dt.format(format).to_string(),
    };
    dt.with_timezone(&tz).format(format).to_string()
}

/// Today's date label in the given timezone.
pub fn today_label(timezone: &str) -> String {
    format_utc_datetime(&Utc::now(), timezone, DATE_FORMAT)
}

/// Generator of creation-timestamp ids.
///
/// Ids are the current Unix time in milliseconds, bumped past the previous
/// id so that two ids issued within the same millisecond never collide.
#[derive(Debug, Clone, Default)]
pub struct IdSequence {
    last: i64,
}

impl IdSequence {
    /// Create a new sequence.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a sequence whose ids are all greater than `floor`.
    pub fn starting_after(floor: i64) -> Self {
        Self { last: floor }
    }

    /// Issue the next id.
    pub fn next_id(&mut self) -> i64 {
        let now = Utc::now().timestamp_millis();
        self.last = now.max(self.last + 1);
        self.last
    }

    /// The most recently issued id (or the starting floor).
    pub fn last(&self) -> i64 {
        self.last
    }
}
