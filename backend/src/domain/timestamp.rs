//! ISO-8601 timestamp rendering shared by records and envelopes.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serializer;

/// Render `at` as UTC with millisecond precision and a `Z` suffix.
///
/// # Examples
/// ```
/// use chrono::{TimeZone, Utc};
/// use shelter::domain::timestamp::format_millis;
///
/// let at = Utc.with_ymd_and_hms(2026, 3, 1, 9, 30, 0).single().expect("valid");
/// assert_eq!(format_millis(&at), "2026-03-01T09:30:00.000Z");
/// ```
#[must_use]
pub fn format_millis(at: &DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// `serde` adapter for `#[serde(serialize_with = "...")]`.
///
/// # Errors
///
/// Propagates serializer failures.
pub fn serialize<S>(at: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format_millis(at))
}
