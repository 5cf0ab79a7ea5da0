//! Due-date parsing and formatting.
//!
//! Requests carry `due_at` as free-form ISO 8601 text. Values with an
//! explicit offset are converted to UTC; values without one (such as the
//! output of an HTML `datetime-local` input) are taken as UTC. Precision is
//! truncated to milliseconds so that a parsed value survives a
//! format-and-parse cycle unchanged.

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Format hint reported when `due_at` cannot be parsed.
pub const DUE_AT_FORMAT_HINT: &str = "Use ISO 8601 format like 2025-01-01T12:00:00Z";

// Offset forms RFC 3339 leaves out: minute precision and `+hhmm` offsets.
const OFFSET_DATE_TIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f%:z",
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%dT%H:%M%:z",
    "%Y-%m-%dT%H:%M%z",
];

const NAIVE_DATE_TIME_FORMATS: [&str; 5] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%MZ",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Millisecond-precision UTC timestamp at which a task falls due.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DueAt(DateTime<Utc>);

impl DueAt {
    /// Wraps an existing timestamp, truncating it to milliseconds.
    #[must_use]
    pub fn from_datetime(value: DateTime<Utc>) -> Self {
        Self(value.trunc_subsecs(3))
    }

    /// Parses a due date from request text.
    ///
    /// Returns `None` when the text is not a recognised ISO 8601 date or
    /// date-time.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        let with_offset = DateTime::parse_from_rfc3339(trimmed).ok().or_else(|| {
            OFFSET_DATE_TIME_FORMATS
                .iter()
                .find_map(|format| DateTime::parse_from_str(trimmed, format).ok())
        });
        if let Some(value) = with_offset {
            return Some(Self::from_datetime(value.with_timezone(&Utc)));
        }

        let naive = NAIVE_DATE_TIME_FORMATS
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
            .or_else(|| {
                NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
                    .ok()
                    .and_then(|date| date.and_hms_opt(0, 0, 0))
            })?;
        Some(Self::from_datetime(naive.and_utc()))
    }

    /// Returns `true` when this due date lies strictly after `now`.
    #[must_use]
    pub fn is_after(&self, now: DateTime<Utc>) -> bool {
        self.0 > now
    }

    /// Returns the wrapped timestamp.
    #[must_use]
    pub const fn as_datetime(&self) -> DateTime<Utc> {
        self.0
    }
}

impl fmt::Display for DueAt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_timestamp(self.0))
    }
}

/// Formats a timestamp as RFC 3339 UTC with millisecond precision.
#[must_use]
pub fn format_timestamp(value: DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Millis, true)
}
